mod application;
mod resource;
mod server;

use serde::{Deserialize, Serialize};

pub use application::ApplicationConfig;
pub use resource::{ResourceConfig, DEFAULT_WELL_KNOWN_NAME};
pub use server::ServerConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub resource: ResourceConfig,
}
