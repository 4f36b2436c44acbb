use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_decision_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use loan_ai::config::AppConfig;
use loan_ai::error::AppError;
use loan_ai::scoring::ScoringService;
use loan_ai::telemetry;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Artifacts load exactly once, before the readiness flag flips; callers
    // probing /ready during startup see 503 instead of racing a partial load.
    let service = Arc::new(ScoringService::load_or_degraded(&config.artifacts)?);
    if service.is_degraded() {
        warn!(
            reason = service.degraded_reason().unwrap_or("unknown"),
            "scoring service is degraded; every decision will be tagged fallback"
        );
    }

    let app = with_decision_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan decision service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
