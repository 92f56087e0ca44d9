//! Main application component.

use cardroom_router::Resolution;
use yew::prelude::*;

use crate::hooks::{use_resolution, RouterProvider};
use crate::pages::NotFoundPage;

/// Mounts the component of the current route.
#[function_component(RouteView)]
fn route_view() -> Html {
    match use_resolution() {
        Some(Resolution::Matched(matched)) => {
            let render = *matched.route().component();
            render()
        }
        Some(Resolution::Unresolved(_)) => html! { <NotFoundPage /> },
        None => Html::default(),
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RouterProvider>
            <RouteView />
        </RouterProvider>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use cardroom_router::RouterConfig;
    use gloo::history::{BrowserHistory, History};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{Element, HtmlElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct TestAppProps {
        base_path: AttrValue,
    }

    #[function_component(TestApp)]
    fn test_app(props: &TestAppProps) -> Html {
        let config = RouterConfig {
            base_path: props.base_path.to_string(),
        };
        html! {
            <RouterProvider {config}>
                <RouteView />
            </RouterProvider>
        }
    }

    fn create_test_root() -> Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        root
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    #[wasm_bindgen_test]
    async fn test_route_view_switches_after_link_click() {
        BrowserHistory::new().replace("/cards/lobby");
        let root = create_test_root();
        let handle = yew::Renderer::<TestApp>::with_root_and_props(
            root.clone(),
            TestAppProps {
                base_path: "/cards".into(),
            },
        )
        .render();
        settle().await;

        assert!(root.inner_html().contains("lobby-page"));

        let link: HtmlElement = root
            .query_selector("a[href=\"/cards/room\"]")
            .unwrap()
            .expect("lobby links to the room")
            .dyn_into()
            .unwrap();
        link.click();
        settle().await;

        assert!(root.inner_html().contains("room-page"));
        assert_eq!(
            gloo::utils::window().location().pathname().unwrap(),
            "/cards/room"
        );

        BrowserHistory::new().push("/cards/login");
        settle().await;
        assert!(root.inner_html().contains("login-page"));

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_unresolved_location_renders_not_found() {
        BrowserHistory::new().replace("/cards/nowhere");
        let root = create_test_root();
        let handle = yew::Renderer::<TestApp>::with_root_and_props(
            root.clone(),
            TestAppProps {
                base_path: "/cards".into(),
            },
        )
        .render();
        settle().await;

        assert!(root.inner_html().contains("not-found-page"));
        assert!(!root.inner_html().contains("lobby-page"));

        handle.destroy();
        root.remove();
    }
}
