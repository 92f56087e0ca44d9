//! Shared UI components.

mod nav_link;

pub use nav_link::NavLink;
