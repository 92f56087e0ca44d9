//! Route path patterns.
//!
//! A pattern is a `/`-separated list of segments:
//! - `room` matches the literal segment `room`
//! - `:id` captures exactly one segment as parameter `id`
//! - `*rest` captures all remaining segments (possibly none); last only

use crate::error::{ConfigError, NavigationError};

/// Path parameters, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    CatchAll(String),
}

/// A parsed, validated route pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RoutePattern {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        if !source.starts_with('/') {
            return Err(ConfigError::invalid_pattern(source, "must start with '/'"));
        }
        if source.contains(['?', '#']) {
            return Err(ConfigError::invalid_pattern(
                source,
                "must not contain a query or fragment",
            ));
        }

        let mut segments: Vec<Segment> = Vec::new();
        for raw in split_segments(source) {
            if matches!(segments.last(), Some(Segment::CatchAll(_))) {
                return Err(ConfigError::invalid_pattern(
                    source,
                    "catch-all must be the last segment",
                ));
            }

            let segment = if let Some(name) = raw.strip_prefix(':') {
                if !is_valid_param_name(name) {
                    return Err(ConfigError::invalid_pattern(source, "invalid parameter name"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = raw.strip_prefix('*') {
                if !is_valid_param_name(name) {
                    return Err(ConfigError::invalid_pattern(source, "invalid catch-all name"));
                }
                Segment::CatchAll(name.to_string())
            } else if raw.contains([':', '*']) {
                return Err(ConfigError::invalid_pattern(
                    source,
                    "':' and '*' are only allowed at the start of a segment",
                ));
            } else {
                Segment::Literal(raw.to_string())
            };

            if let Some(name) = Self::param_name(&segment) {
                if segments
                    .iter()
                    .filter_map(Self::param_name)
                    .any(|existing| existing == name)
                {
                    return Err(ConfigError::invalid_pattern(source, "duplicate parameter name"));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    fn param_name(segment: &Segment) -> Option<&str> {
        match segment {
            Segment::Literal(_) => None,
            Segment::Param(name) | Segment::CatchAll(name) => Some(name.as_str()),
        }
    }

    /// The pattern as written at registration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Canonical form with parameter names erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Literal(lit) => shape.push_str(lit),
                Segment::Param(_) => shape.push(':'),
                Segment::CatchAll(_) => shape.push('*'),
            }
        }
        if shape.is_empty() {
            shape.push('/');
        }
        shape
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Self::param_name)
    }

    /// Matches a route-relative path (no query or fragment).
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut parts = split_segments(path);
        let mut params = Params::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if parts.next()? != lit.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.as_str(), parts.next()?);
                }
                Segment::CatchAll(name) => {
                    let rest: Vec<&str> = parts.by_ref().collect();
                    params.insert(name.as_str(), rest.join("/"));
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Builds a concrete path by substituting `params`.
    ///
    /// `route` is only used for error reporting. Params the pattern does
    /// not use are ignored.
    pub fn build(&self, route: &str, params: &Params) -> Result<String, NavigationError> {
        let mut path = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    path.push('/');
                    path.push_str(lit);
                }
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| NavigationError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return Err(NavigationError::InvalidParam {
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    path.push('/');
                    path.push_str(value);
                }
                Segment::CatchAll(name) => {
                    let value = params.get(name).unwrap_or_default();
                    if value.contains(['?', '#']) {
                        return Err(NavigationError::InvalidParam {
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    for part in split_segments(value) {
                        path.push('/');
                        path.push_str(part);
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        let pattern = RoutePattern::parse("/room").unwrap();

        assert_eq!(pattern.matches("/room"), Some(Params::new()));
        assert_eq!(pattern.matches("/room/"), Some(Params::new()));
        assert_eq!(pattern.matches("/rooms"), None);
        assert_eq!(pattern.matches("/room/1"), None);
        assert_eq!(pattern.matches("/"), None);
    }

    #[test]
    fn test_root_pattern() {
        let pattern = RoutePattern::parse("/").unwrap();

        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("").is_some());
        assert!(pattern.matches("/room").is_none());
        assert_eq!(pattern.build("home", &Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_param_capture() {
        let pattern = RoutePattern::parse("/room/:id/seat/:seat").unwrap();
        let params = pattern.matches("/room/42/seat/3").unwrap();

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("seat"), Some("3"));
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id", "seat"]);
    }

    #[test]
    fn test_catch_all() {
        let pattern = RoutePattern::parse("/docs/*rest").unwrap();

        assert_eq!(pattern.matches("/docs/a/b").unwrap().get("rest"), Some("a/b"));
        assert_eq!(pattern.matches("/docs").unwrap().get("rest"), Some(""));
        assert!(pattern.matches("/other").is_none());
    }

    #[test]
    fn test_invalid_patterns() {
        for source in ["room", "/room/:", "/a/*rest/b", "/a/:id/:id", "/a?b", "/ro:om", "/:bad-name"] {
            assert!(
                matches!(RoutePattern::parse(source), Err(ConfigError::InvalidPattern { .. })),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_shape_erases_param_names() {
        let a = RoutePattern::parse("/room/:a").unwrap();
        let b = RoutePattern::parse("/room/:b/").unwrap();

        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), RoutePattern::parse("/room").unwrap().shape());
    }

    #[test]
    fn test_build_substitutes_params() {
        let pattern = RoutePattern::parse("/room/:id").unwrap();
        let params = Params::new().with("id", "7").with("unused", "x");

        assert_eq!(pattern.build("room", &params).unwrap(), "/room/7");
    }

    #[test]
    fn test_build_missing_and_invalid_params() {
        let pattern = RoutePattern::parse("/room/:id").unwrap();

        assert_eq!(
            pattern.build("room", &Params::new()),
            Err(NavigationError::MissingParam {
                route: "room".to_string(),
                param: "id".to_string(),
            })
        );
        assert!(matches!(
            pattern.build("room", &Params::new().with("id", "a/b")),
            Err(NavigationError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_params_insert_replaces() {
        let mut params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        params.insert("a", "3");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
    }
}
