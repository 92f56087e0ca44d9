//! Route resolution, navigation state and observers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::{BasePath, RouterConfig};
use crate::error::NavigationError;
use crate::location::Location;
use crate::pattern::Params;
use crate::table::{Route, RouteTable};

/// A location matched to a route.
pub struct RouteMatch<C> {
    route: Rc<Route<C>>,
    params: Params,
    location: Location,
}

impl<C> RouteMatch<C> {
    pub fn route(&self) -> &Rc<Route<C>> {
        &self.route
    }

    pub fn name(&self) -> &str {
        self.route.name()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl<C> Clone for RouteMatch<C> {
    fn clone(&self) -> Self {
        Self {
            route: Rc::clone(&self.route),
            params: self.params.clone(),
            location: self.location.clone(),
        }
    }
}

impl<C> PartialEq for RouteMatch<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.route, &other.route)
            && self.params == other.params
            && self.location == other.location
    }
}

impl<C> fmt::Debug for RouteMatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route.name())
            .field("params", &self.params)
            .field("location", &self.location)
            .finish()
    }
}

/// Outcome of resolving a location.
///
/// `Unresolved` is not an error: the host renders a fallback view for it.
pub enum Resolution<C> {
    Matched(RouteMatch<C>),
    Unresolved(Location),
}

impl<C> Resolution<C> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn route(&self) -> Option<&Rc<Route<C>>> {
        match self {
            Resolution::Matched(m) => Some(m.route()),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.route().map(|route| route.name())
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Resolution::Matched(m) => Some(m.params()),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Resolution::Matched(m) => m.location(),
            Resolution::Unresolved(location) => location,
        }
    }
}

impl<C> Clone for Resolution<C> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Matched(m) => Resolution::Matched(m.clone()),
            Resolution::Unresolved(location) => Resolution::Unresolved(location.clone()),
        }
    }
}

impl<C> PartialEq for Resolution<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Resolution::Matched(a), Resolution::Matched(b)) => a == b,
            (Resolution::Unresolved(a), Resolution::Unresolved(b)) => a == b,
            _ => false,
        }
    }
}

impl<C> fmt::Debug for Resolution<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Matched(m) => f.debug_tuple("Matched").field(m).finish(),
            Resolution::Unresolved(location) => {
                f.debug_tuple("Unresolved").field(location).finish()
            }
        }
    }
}

type Observer<C> = Rc<dyn Fn(&Resolution<C>)>;

struct Observers<C> {
    next_id: u64,
    entries: Vec<(u64, Observer<C>)>,
}

/// Keeps an `on_navigate` observer registered. Dropping it unregisters.
#[must_use = "the observer is removed when the subscription is dropped"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keeps the observer registered for the resolver's lifetime.
    pub fn forget(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Resolves locations against a route table and owns the navigation state.
///
/// Single-threaded: state lives in `RefCell`s and observers run
/// synchronously inside the call that changed the state. An observer that
/// resolves again supersedes the state being dispatched; observers not yet
/// called only see the newer state.
pub struct Resolver<C> {
    base: BasePath,
    table: RouteTable<C>,
    state: RefCell<Option<Resolution<C>>>,
    generation: Cell<u64>,
    observers: Rc<RefCell<Observers<C>>>,
}

impl<C: 'static> Resolver<C> {
    pub fn new(base: BasePath, table: RouteTable<C>) -> Self {
        Self {
            base,
            table,
            state: RefCell::new(None),
            generation: Cell::new(0),
            observers: Rc::new(RefCell::new(Observers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub fn from_config(config: &RouterConfig, table: RouteTable<C>) -> Self {
        Self::new(config.base(), table)
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Matches a route-relative href without touching navigation state.
    pub fn match_path(&self, href: &str) -> Resolution<C> {
        self.match_location(Location::parse(href))
    }

    fn match_location(&self, location: Location) -> Resolution<C> {
        match self.table.find(location.path()) {
            Some((route, params)) => Resolution::Matched(RouteMatch {
                route: Rc::clone(route),
                params,
                location,
            }),
            None => Resolution::Unresolved(location),
        }
    }

    /// Resolves a route-relative href and makes it the current state.
    ///
    /// Observers run before this returns if the state changed.
    pub fn resolve(&self, href: &str) -> Resolution<C> {
        let resolution = self.match_path(href);
        self.commit(&resolution);
        resolution
    }

    /// Resolves a full browser href, stripping the base path first.
    ///
    /// Paths outside the base are unresolved.
    pub fn resolve_href(&self, href: &str) -> Resolution<C> {
        let location = Location::parse(href);
        let resolution = match self.base.strip(location.path()) {
            Some(relative) => {
                let relative = relative.to_string();
                self.match_location(location.with_path(relative))
            }
            None => Resolution::Unresolved(location),
        };
        self.commit(&resolution);
        resolution
    }

    fn commit(&self, resolution: &Resolution<C>) {
        if self.state.borrow().as_ref() == Some(resolution) {
            return;
        }

        match resolution {
            Resolution::Matched(m) => {
                tracing::debug!(path = %m.location(), route = m.name(), "navigation resolved");
            }
            Resolution::Unresolved(location) => {
                tracing::warn!(path = %location, "no route matches");
            }
        }
        *self.state.borrow_mut() = Some(resolution.clone());
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let snapshot: Vec<Observer<C>> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in snapshot {
            if self.generation.get() != generation {
                break;
            }
            observer(resolution);
        }
    }

    /// Reverse lookup: the route-relative path for a named route.
    pub fn navigate_by_name(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let route = self
            .table
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        for (key, _) in params.iter() {
            if !route.pattern().param_names().any(|p| p == key) {
                tracing::warn!(route = name, param = key, "ignoring unused route parameter");
            }
        }

        route.pattern().build(name, params)
    }

    /// Like [`navigate_by_name`](Self::navigate_by_name), prefixed with the base path.
    pub fn href_for(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let path = self.navigate_by_name(name, params)?;
        Ok(self.base.join(&path))
    }

    /// Registers an observer called whenever the navigation state changes.
    pub fn on_navigate<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Resolution<C>) + 'static,
    {
        let id = {
            let mut observers = self.observers.borrow_mut();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.entries.push((id, Rc::new(observer)));
            id
        };

        let observers: Weak<RefCell<Observers<C>>> = Rc::downgrade(&self.observers);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(observers) = observers.upgrade() {
                    observers.borrow_mut().entries.retain(|(i, _)| *i != id);
                }
            })),
        }
    }

    /// Current navigation state; `None` before the first navigation.
    pub fn current(&self) -> Option<Resolution<C>> {
        self.state.borrow().clone()
    }

    /// Clears navigation state at teardown.
    ///
    /// Observers stay registered and are not notified.
    pub fn reset(&self) {
        self.state.borrow_mut().take();
        self.generation.set(self.generation.get() + 1);
    }
}

impl<C> fmt::Debug for Resolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("base", &self.base)
            .field("table", &self.table)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}
