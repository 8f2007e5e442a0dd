use axum::{
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
    Json,
};
use http::{header, HeaderMap, HeaderName, StatusCode, Uri};
use prmeta_core::{
    generate_metadata, map_to_resource_identifier, resolve_public_url, Config, Error,
    MetadataInput, ProtectedResourceMetadata, ResourceConfig,
};

pub const CACHE_CONTROL: &str = "max-age=3600";

const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
    (header::ACCESS_CONTROL_MAX_AGE, "86400"),
];

pub(crate) async fn handler(
    State(config): State<Config>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Response, Error> {
    let metadata = protected_resource_metadata(&config.resource, &uri, &headers)?;
    Ok((
        StatusCode::OK,
        CORS_HEADERS,
        [
            (header::CACHE_CONTROL, CACHE_CONTROL),
            (header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref()),
        ],
        Json(metadata),
    )
        .into_response())
}

pub(crate) async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, CORS_HEADERS)
}

/// Metadata document for one request. A configured `resource_url` is
/// published as-is without looking at the request.
pub fn protected_resource_metadata(
    config: &ResourceConfig,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<ProtectedResourceMetadata, Error> {
    let resource = match &config.resource_url {
        Some(resource_url) => resource_url.clone(),
        None => map_to_resource_identifier(&resolve_public_url(uri, headers)?),
    };
    tracing::debug!(%resource, "serving protected resource metadata");
    Ok(generate_metadata(MetadataInput {
        authorization_servers: &config.authorization_servers,
        resource: &resource,
        additional_metadata: Some(&config.additional_metadata),
    }))
}
