//! Cardroom Router
//!
//! Client-side route table for the cardroom front end: validated route
//! definitions, path resolution with observers, reverse lookup by name,
//! and a binding to any `gloo` history (browser or in-memory).
//!
//! The crate is framework independent. Components are opaque handles of
//! any type `C`; `cardroom-client` instantiates them with Yew pages.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod location;
pub mod navigator;
pub mod pattern;
pub mod resolver;
pub mod table;

pub use gloo_history as history;

pub use config::{BasePath, RouterConfig, BASE_URL_ENV};
pub use error::{ConfigError, NavigationError};
pub use location::Location;
pub use navigator::Navigator;
pub use pattern::{Params, RoutePattern};
pub use resolver::{Resolution, Resolver, RouteMatch, Subscription};
pub use table::{Route, RouteTable, RouteTableBuilder};
