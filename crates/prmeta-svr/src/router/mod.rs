use axum::Router;
use axum_prometheus::PrometheusMetricLayer;
use prmeta_core::Config;

use crate::middlewares::trace_layer;

pub mod meta;
pub mod well_known;

pub fn router(config: Config) -> Router {
    if config.resource.authorization_servers.is_empty() {
        tracing::warn!("no authorization servers configured, clients cannot discover an issuer");
    }
    match &config.resource.resource_url {
        Some(resource_url) => tracing::info!(%resource_url, "using static resource identifier"),
        None => tracing::info!("resource identifier resolved per request"),
    }

    let (metric_layer, metric_handle) = if config.application.prometheus {
        let (layer, handle) = PrometheusMetricLayer::pair();
        (Some(layer), Some(handle))
    } else {
        (None, None)
    };

    let mut router = Router::new().nest("/.well-known", well_known::router(&config));
    if config.application.health_check || metric_handle.is_some() {
        router = router.nest("/.meta", meta::router(&config, metric_handle));
    }
    if let Some(layer) = metric_layer {
        router = router.layer(layer);
    }
    router.layer(trace_layer()).with_state(config)
}
