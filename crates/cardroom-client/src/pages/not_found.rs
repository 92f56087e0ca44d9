//! 404 Not Found page.

use yew::prelude::*;

use crate::components::NavLink;

/// Rendered for unresolved locations.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "Page not found" }</p>
            <NavLink to="lobby">{ "Go to Lobby" }</NavLink>
        </main>
    }
}
