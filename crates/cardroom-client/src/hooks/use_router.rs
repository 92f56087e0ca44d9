//! Router context: one navigator per app, shared through Yew context.

use std::rc::Rc;

use cardroom_router::{ConfigError, Navigator, Resolution, Resolver, RouterConfig};
use gloo::history::BrowserHistory;
use yew::prelude::*;

use crate::config::router_config;
use crate::routes::{route_table, Page};

pub type AppNavigator = Navigator<BrowserHistory, Page>;

/// Navigator plus the latest resolution, re-provided on every navigation.
#[derive(Clone)]
pub struct RouterContext {
    pub navigator: Rc<AppNavigator>,
    pub resolution: Option<Resolution<Page>>,
}

impl PartialEq for RouterContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigator, &other.navigator) && self.resolution == other.resolution
    }
}

fn create_navigator(config: &RouterConfig) -> Result<Rc<AppNavigator>, ConfigError> {
    let resolver = Resolver::from_config(config, route_table()?);
    tracing::info!(base = resolver.base().as_str(), "router ready");
    Ok(Rc::new(Navigator::new(Rc::new(resolver), BrowserHistory::new())))
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    /// Defaults to the build-time config.
    #[prop_or_else(router_config)]
    pub config: RouterConfig,
    pub children: Children,
}

/// Builds the navigator once per config.
#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let navigator = use_memo(props.config.clone(), create_navigator);

    match navigator.as_ref() {
        Ok(navigator) => html! {
            <NavigationProvider navigator={navigator.clone()}>
                { props.children.clone() }
            </NavigationProvider>
        },
        Err(e) => {
            tracing::error!("Invalid route table: {}", e);
            html! {
                <main class="page error-page">
                    <h1>{ "Configuration error" }</h1>
                    <p>{ e.to_string() }</p>
                </main>
            }
        }
    }
}

#[derive(Properties)]
struct NavigationProviderProps {
    navigator: Rc<AppNavigator>,
    children: Children,
}

impl PartialEq for NavigationProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.navigator, &other.navigator) && self.children == other.children
    }
}

/// Provides the router context and re-renders children on navigation.
#[function_component(NavigationProvider)]
fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let resolution = {
        let navigator = props.navigator.clone();
        use_state(move || navigator.current())
    };

    {
        let navigator = props.navigator.clone();
        let resolution = resolution.clone();

        use_effect_with((), move |_| {
            let subscription = {
                let resolution = resolution.clone();
                navigator
                    .resolver()
                    .on_navigate(move |next| resolution.set(Some(next.clone())))
            };
            // Catch navigation between first render and subscribing
            resolution.set(navigator.current());

            move || drop(subscription)
        });
    }

    let context = RouterContext {
        navigator: props.navigator.clone(),
        resolution: (*resolution).clone(),
    };

    html! {
        <ContextProvider<RouterContext> context={context}>
            { props.children.clone() }
        </ContextProvider<RouterContext>>
    }
}

/// Hook to get the router context. `None` outside a `RouterProvider`.
#[hook]
pub fn use_router() -> Option<RouterContext> {
    use_context::<RouterContext>()
}

#[hook]
pub fn use_navigator() -> Option<Rc<AppNavigator>> {
    use_router().map(|router| router.navigator)
}

/// Current resolution; `None` before the first navigation.
#[hook]
pub fn use_resolution() -> Option<Resolution<Page>> {
    use_router().and_then(|router| router.resolution)
}
