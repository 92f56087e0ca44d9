//! Application routes.

use cardroom_router::{ConfigError, RouteTable};
use yew::prelude::*;

use crate::pages::{LobbyPage, LoginPage, RoomPage};

/// Renders a page; the component handle stored in the route table.
pub type Page = fn() -> Html;

fn room() -> Html {
    html! { <RoomPage /> }
}

fn login() -> Html {
    html! { <LoginPage /> }
}

fn lobby() -> Html {
    html! { <LobbyPage /> }
}

/// Application route table.
pub fn route_table() -> Result<RouteTable<Page>, ConfigError> {
    RouteTable::builder()
        .route("/room", "room", room as Page)
        .route("/login", "login", login as Page)
        .route("/lobby", "lobby", lobby as Page)
        .build()
}
