//! Room page (placeholder).

use yew::prelude::*;

use crate::components::NavLink;
use crate::hooks::use_resolution;

/// Shows the table requested via `?table=` if any.
#[function_component(RoomPage)]
pub fn room_page() -> Html {
    let resolution = use_resolution();
    let table = resolution
        .as_ref()
        .and_then(|r| r.location().query_value("table"))
        .map(str::to_string);

    html! {
        <main class="page room-page">
            <h1>{ "Room" }</h1>
            if let Some(table) = table {
                <p>{ format!("Table {table}") }</p>
            }
            <NavLink to="lobby">{ "Back to lobby" }</NavLink>
        </main>
    }
}
