//! Anchor that navigates to a named route.

use cardroom_router::Params;
use yew::prelude::*;

use crate::hooks::{use_navigator, use_resolution};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    /// Route name.
    pub to: AttrValue,
    #[prop_or_default]
    pub params: Params,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// Link to a named route. Gets the `active` class while that route is current.
///
/// Renders plain text if the route cannot be built.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_navigator();
    let resolution = use_resolution();

    let Some(navigator) = navigator else {
        tracing::warn!(route = %props.to, "NavLink rendered outside RouterProvider");
        return html! { <span class={props.classes.clone()}>{ props.children.clone() }</span> };
    };

    let href = match navigator.resolver().href_for(&props.to, &props.params) {
        Ok(href) => href,
        Err(e) => {
            tracing::warn!("Failed to build link: {}", e);
            return html! { <span class={props.classes.clone()}>{ props.children.clone() }</span> };
        }
    };

    let is_active = resolution.as_ref().and_then(|r| r.name()) == Some(props.to.as_str());

    let onclick = {
        let to = props.to.clone();
        let params = props.params.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(err) = navigator.push_named(&to, &params) {
                tracing::error!("Navigation failed: {}", err);
            }
        })
    };

    let mut classes = props.classes.clone();
    if is_active {
        classes.push("active");
    }

    html! {
        <a {href} class={classes} {onclick}>
            { props.children.clone() }
        </a>
    }
}
