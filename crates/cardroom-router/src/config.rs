//! Router configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the deployment base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// URL prefix the application is served under.
///
/// Normalized to a leading `/` and no trailing `/`; the root is `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strips the base from a full path, returning the route-relative path.
    ///
    /// Returns `None` when `path` lies outside the base.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefixes a route-relative href with the base. A missing leading `/`
    /// is added, as [`Location::parse`](crate::Location::parse) does.
    pub fn join(&self, href: &str) -> String {
        let href = if href.starts_with('/') {
            href.to_string()
        } else {
            format!("/{href}")
        };
        if self.is_root() {
            return href;
        }
        if href == "/" {
            self.0.clone()
        } else {
            format!("{}{}", self.0, href)
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

/// Router settings supplied by the deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub base_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

impl RouterConfig {
    /// Reads `BASE_URL` from the process environment, defaulting to `/`.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(base_path) => Self { base_path },
            None => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }

    pub fn base(&self) -> BasePath {
        BasePath::new(&self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(BasePath::new("").as_str(), "/");
        assert_eq!(BasePath::new("/").as_str(), "/");
        assert_eq!(BasePath::new("/app/").as_str(), "/app");
        assert_eq!(BasePath::new("app").as_str(), "/app");
    }

    #[test]
    fn test_strip_and_join() {
        let base = BasePath::new("/app");

        assert_eq!(base.strip("/app/room"), Some("/room"));
        assert_eq!(base.strip("/app"), Some("/"));
        assert_eq!(base.strip("/apple"), None);
        assert_eq!(base.strip("/room"), None);
        assert_eq!(base.join("/room"), "/app/room");
        assert_eq!(base.join("/"), "/app");

        let root = BasePath::root();
        assert_eq!(root.strip("/room"), Some("/room"));
        assert_eq!(root.join("/room"), "/room");
    }

    #[test]
    fn test_join_relative_href() {
        assert_eq!(BasePath::new("/app").join("lobby"), "/app/lobby");
        assert_eq!(BasePath::new("/app").join(""), "/app");
        assert_eq!(BasePath::root().join("lobby?table=2"), "/lobby?table=2");
    }

    #[test]
    fn test_config_from_env() {
        let config = RouterConfig::from_env_with(|key| {
            (key == BASE_URL_ENV).then(|| "/cards/".to_string())
        });
        assert_eq!(config.base().as_str(), "/cards");

        let config = RouterConfig::from_env_with(|_| None);
        assert_eq!(config, RouterConfig::default());

        let expected = match std::env::var(BASE_URL_ENV) {
            Ok(base_path) => RouterConfig { base_path },
            Err(_) => RouterConfig::default(),
        };
        assert_eq!(RouterConfig::from_env(), expected);
    }

    #[test]
    fn test_config_from_json() {
        let config = RouterConfig::from_json(r#"{"base_path":"/cards/"}"#).unwrap();
        assert_eq!(config.base().as_str(), "/cards");

        let config = RouterConfig::from_json("{}").unwrap();
        assert_eq!(config, RouterConfig::default());

        assert!(matches!(
            RouterConfig::from_json("not json"),
            Err(ConfigError::InvalidConfig(_))
        ));
    }
}
