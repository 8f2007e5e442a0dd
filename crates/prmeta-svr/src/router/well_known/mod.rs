pub mod oauth_protected_resource;

use axum::{routing::get, Router};
use prmeta_core::Config;

/// Serves metadata for the root resource at `/<name>` (with or without a
/// trailing slash) and for sub-resources at `/<name>/{*path}`.
pub fn router(config: &Config) -> Router<Config> {
    let root = format!("/{}", config.resource.well_known_name);
    let paths = [root.clone(), format!("{root}/"), format!("{root}/{{*path}}")];
    paths.iter().fold(Router::new(), |router, path| {
        router.route(
            path,
            get(oauth_protected_resource::handler).options(oauth_protected_resource::preflight),
        )
    })
}
