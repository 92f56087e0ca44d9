//! Navigation request parsing.

use std::fmt;

/// A requested location split into path, query and fragment.
///
/// Query pairs are percent-decoded (`+` is a space) and kept in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parses `path?query#fragment`. A missing leading `/` is added.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (href, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query,
            fragment,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value for `key` in the query string.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub(crate) fn with_path(&self, path: String) -> Self {
        Self {
            path,
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

impl From<&gloo_history::Location> for Location {
    fn from(location: &gloo_history::Location) -> Self {
        Self::parse(&format!(
            "{}{}{}",
            location.path(),
            location.query_str(),
            location.hash()
        ))
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!(query, "ignoring malformed query string: {}", e);
            Vec::new()
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = serde_urlencoded::to_string(&self.query).map_err(|_| fmt::Error)?;
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
