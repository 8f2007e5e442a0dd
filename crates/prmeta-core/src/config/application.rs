use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplicationConfig {
    pub log_filter: Option<String>,
    #[serde(default)]
    pub prometheus: bool,
    #[serde(default)]
    pub health_check: bool,
}
