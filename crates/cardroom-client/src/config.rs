//! Build-time client configuration.

use cardroom_router::RouterConfig;

/// Base path baked in at build time from `BASE_URL`, like the bundler's
/// public path. Defaults to `/`.
const BUILD_BASE_URL: Option<&str> = option_env!("BASE_URL");

pub fn router_config() -> RouterConfig {
    match BUILD_BASE_URL {
        Some(base_path) => RouterConfig {
            base_path: base_path.to_string(),
        },
        None => RouterConfig::default(),
    }
}
