//! Router error types.

/// Route table construction and configuration errors.
///
/// These are fatal: a table that fails validation is never used to
/// resolve a navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Duplicate route path: {path} (conflicts with {existing})")]
    DuplicatePath { path: String, existing: String },

    #[error("Route name must not be empty (path {0})")]
    EmptyName(String),

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("Invalid router config: {0}")]
    InvalidConfig(String),
}

impl ConfigError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: &'static str) -> Self {
        ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }
}

/// Errors from programmatic navigation by route name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("No route named '{0}'")]
    UnknownRoute(String),

    #[error("Route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("Invalid value for parameter '{param}': {value:?}")]
    InvalidParam { param: String, value: String },
}
