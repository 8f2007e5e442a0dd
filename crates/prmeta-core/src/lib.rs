mod config;
mod errors;
mod metadata;
mod origin;
mod public_url;
mod resource;

pub use config::*;
pub use errors::*;
pub use metadata::*;
pub use origin::*;
pub use public_url::*;
pub use resource::*;
