//! Route definitions and the validated route table.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::ConfigError;
use crate::pattern::{Params, RoutePattern};

/// A binding from a path pattern to a named component.
///
/// `C` is an opaque handle to the component; the router never inspects it.
pub struct Route<C> {
    pattern: RoutePattern,
    name: String,
    component: C,
}

impl<C> Route<C> {
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }
}

impl<C> fmt::Debug for Route<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, validated set of routes. Earlier routes win on overlap.
pub struct RouteTable<C> {
    routes: Vec<Rc<Route<C>>>,
    by_name: HashMap<String, usize>,
}

impl<C> RouteTable<C> {
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Rc<Route<C>>> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// First route whose pattern matches `path`.
    pub fn find(&self, path: &str) -> Option<(&Rc<Route<C>>, Params)> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }
}

impl<C> fmt::Debug for RouteTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

/// Collects route definitions and validates them all in [`build`](Self::build).
pub struct RouteTableBuilder<C> {
    entries: Vec<(String, String, C)>,
}

impl<C> Default for RouteTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RouteTableBuilder<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a route. Registration order is match priority.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        self.entries.push((path.into(), name.into(), component));
        self
    }

    pub fn build(self) -> Result<RouteTable<C>, ConfigError> {
        let mut routes = Vec::with_capacity(self.entries.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());
        let mut by_shape: HashMap<String, String> = HashMap::new();

        for (path, name, component) in self.entries {
            if name.is_empty() {
                return Err(ConfigError::EmptyName(path));
            }
            let pattern = RoutePattern::parse(&path)?;

            if by_name.contains_key(&name) {
                return Err(ConfigError::DuplicateName(name));
            }
            if let Some(existing) = by_shape.get(&pattern.shape()) {
                return Err(ConfigError::DuplicatePath {
                    path,
                    existing: existing.clone(),
                });
            }

            by_shape.insert(pattern.shape(), path);
            by_name.insert(name.clone(), routes.len());
            routes.push(Rc::new(Route {
                pattern,
                name,
                component,
            }));
        }

        tracing::debug!(routes = routes.len(), "route table built");
        Ok(RouteTable { routes, by_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/room", "room", "Room")
            .route("/login", "login", "Login")
            .route("/lobby", "lobby", "Lobby")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_well_formed_table() {
        let table = create_test_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("lobby").unwrap().path(), "/lobby");
        assert_eq!(*table.get("room").unwrap().component(), "Room");
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RouteTable::builder()
            .route("/room", "room", ())
            .route("/room2", "room", ())
            .build();

        assert_eq!(result.unwrap_err(), ConfigError::DuplicateName("room".to_string()));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::builder()
            .route("/room", "room", ())
            .route("/room/", "other", ())
            .build();

        assert!(matches!(result, Err(ConfigError::DuplicatePath { .. })));
    }

    #[test]
    fn test_same_shape_params_rejected() {
        let result = RouteTable::builder()
            .route("/room/:id", "room", ())
            .route("/room/:table", "table", ())
            .build();

        assert!(matches!(result, Err(ConfigError::DuplicatePath { .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = RouteTable::builder().route("/room", "", ()).build();

        assert_eq!(result.unwrap_err(), ConfigError::EmptyName("/room".to_string()));
    }

    #[test]
    fn test_find_first_match_wins() {
        let table = RouteTable::builder()
            .route("/room/new", "new-room", 1)
            .route("/room/:id", "room", 2)
            .build()
            .unwrap();

        let (route, params) = table.find("/room/new").unwrap();
        assert_eq!(route.name(), "new-room");
        assert!(params.is_empty());

        let (route, params) = table.find("/room/12").unwrap();
        assert_eq!(route.name(), "room");
        assert_eq!(params.get("id"), Some("12"));
    }

    #[test]
    fn test_empty_table_builds() {
        let table = RouteTableBuilder::<()>::new().build().unwrap();

        assert!(table.is_empty());
        assert!(table.find("/").is_none());
    }
}
