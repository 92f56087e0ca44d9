//! Lobby page (placeholder).

use yew::prelude::*;

use crate::components::NavLink;

#[function_component(LobbyPage)]
pub fn lobby_page() -> Html {
    html! {
        <main class="page lobby-page">
            <h1>{ "Lobby" }</h1>
            <nav>
                <NavLink to="room">{ "Join room" }</NavLink>
                <NavLink to="login">{ "Log out" }</NavLink>
            </nav>
        </main>
    }
}
