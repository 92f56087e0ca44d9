//! Login page (placeholder).

use yew::prelude::*;

use crate::components::NavLink;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <main class="page login-page">
            <h1>{ "Login" }</h1>
            <NavLink to="lobby">{ "Continue to lobby" }</NavLink>
        </main>
    }
}
