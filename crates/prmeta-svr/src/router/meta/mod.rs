use axum::{routing::get, Router};
use axum_health::Health;
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use prmeta_core::Config;

/// Operational endpoints. `/health` follows `application.health_check`,
/// `/metrics` is served when a recorder handle is given.
pub fn router(config: &Config, metrics: Option<PrometheusHandle>) -> Router<Config> {
    let mut router = Router::new();
    if config.application.health_check {
        tracing::info!("serving /.meta/health");
        router = router
            .route("/health", get(axum_health::health))
            .layer(Health::builder().build());
    }
    if let Some(handle) = metrics {
        tracing::info!("serving /.meta/metrics");
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }
    router
}
