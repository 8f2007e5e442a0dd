//! RFC 9728 protected resource metadata documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const RESOURCE: &str = "resource";
pub const AUTHORIZATION_SERVERS: &str = "authorization_servers";

/// Protected resource metadata as a JSON object.
///
/// Kept as a map so caller supplied fields can replace generated ones key by
/// key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProtectedResourceMetadata(Map<String, Value>);

impl ProtectedResourceMetadata {
    pub fn resource(&self) -> Option<&str> {
        self.0.get(RESOURCE).and_then(Value::as_str)
    }

    pub fn authorization_servers(&self) -> Vec<&str> {
        self.0
            .get(AUTHORIZATION_SERVERS)
            .and_then(Value::as_array)
            .map(|servers| servers.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct MetadataInput<'a> {
    pub authorization_servers: &'a [String],
    pub resource: &'a str,
    pub additional_metadata: Option<&'a Map<String, Value>>,
}

pub fn generate_metadata(input: MetadataInput<'_>) -> ProtectedResourceMetadata {
    let mut metadata = Map::new();
    metadata.insert(RESOURCE.to_string(), Value::from(input.resource));
    metadata.insert(
        AUTHORIZATION_SERVERS.to_string(),
        Value::from(input.authorization_servers.to_vec()),
    );
    if let Some(additional) = input.additional_metadata {
        for (key, value) in additional {
            metadata.insert(key.clone(), value.clone());
        }
    }
    ProtectedResourceMetadata(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generates_resource_and_authorization_servers() {
        let servers = vec!["https://auth.example.com".to_string()];
        let metadata = generate_metadata(MetadataInput {
            authorization_servers: &servers,
            resource: "https://rs.example.com",
            additional_metadata: None,
        });
        assert_eq!(metadata.resource(), Some("https://rs.example.com"));
        assert_eq!(metadata.authorization_servers(), vec!["https://auth.example.com"]);
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            json!({
                "resource": "https://rs.example.com",
                "authorization_servers": ["https://auth.example.com"],
            })
        );
    }

    #[test]
    fn additional_metadata_is_merged() {
        let servers = vec!["https://auth.example.com".to_string()];
        let extra = json!({
            "scopes_supported": ["read", "write"],
            "bearer_methods_supported": ["header"],
        });
        let metadata = generate_metadata(MetadataInput {
            authorization_servers: &servers,
            resource: "https://rs.example.com",
            additional_metadata: extra.as_object(),
        });
        assert_eq!(metadata.get("scopes_supported"), Some(&json!(["read", "write"])));
        assert_eq!(metadata.get("bearer_methods_supported"), Some(&json!(["header"])));
        assert_eq!(metadata.resource(), Some("https://rs.example.com"));
    }

    #[test]
    fn additional_metadata_wins_on_collision() {
        let servers = vec!["https://auth.example.com".to_string()];
        let extra = json!({
            "resource": "https://override.example.com",
            "authorization_servers": ["https://other-auth.example.com"],
        });
        let metadata = generate_metadata(MetadataInput {
            authorization_servers: &servers,
            resource: "https://rs.example.com",
            additional_metadata: extra.as_object(),
        });
        assert_eq!(metadata.resource(), Some("https://override.example.com"));
        assert_eq!(
            metadata.authorization_servers(),
            vec!["https://other-auth.example.com"]
        );
        assert_eq!(metadata.into_inner().len(), 2);
    }
}
