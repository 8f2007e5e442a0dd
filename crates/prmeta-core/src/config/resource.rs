use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{formats::PreferMany, serde_as, OneOrMany};

pub const DEFAULT_WELL_KNOWN_NAME: &str = "oauth-protected-resource";

/// Settings for the protected resource metadata endpoint.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// Issuer identifiers of the authorization servers protecting this resource.
    #[serde(default)]
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    pub authorization_servers: Vec<String>,

    /// Static resource identifier. When set, forwarding headers and the
    /// request URL are never consulted.
    #[serde(default)]
    pub resource_url: Option<String>,

    /// Last segment of `/.well-known/<name>` the metadata is served under.
    #[serde(default = "default_well_known_name")]
    pub well_known_name: String,

    /// Extra metadata fields, e.g. `scopes_supported`. Wins over generated
    /// fields with the same key.
    #[serde(default)]
    pub additional_metadata: Map<String, Value>,
}

fn default_well_known_name() -> String {
    DEFAULT_WELL_KNOWN_NAME.to_string()
}
