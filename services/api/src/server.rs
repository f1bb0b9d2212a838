use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_sliding_fee_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sliding_fee::config::AppConfig;
use sliding_fee::error::AppError;
use sliding_fee::telemetry;
use sliding_fee::workflows::sliding_fee::SlidingFeeService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(SlidingFeeService::new(config.export.file_name.clone()));

    let app = with_sliding_fee_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        export_file = %config.export.file_name,
        "sliding fee calculator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
