use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryBusinessRepository};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bizmatch::config::AppConfig;
use bizmatch::error::AppError;
use bizmatch::evaluation::{EvaluationGateway, HttpChatTransport};
use bizmatch::registry::BusinessRatingService;
use bizmatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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

    if config.evaluator.api_url.is_none() || config.evaluator.api_key.is_none() {
        warn!("EVALUATOR_API_URL or EVALUATOR_API_KEY missing; evaluations will be refused");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let transport = Arc::new(HttpChatTransport::new(config.evaluator.timeout)?);
    let gateway = Arc::new(EvaluationGateway::new(transport, config.evaluator.clone()));
    let repository = Arc::new(InMemoryBusinessRepository::seeded());
    let rating_service = Arc::new(BusinessRatingService::new(repository, gateway.clone()));

    let app = with_marketplace_routes(gateway, rating_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = %config.evaluator.model,
        timeout_secs = config.evaluator.timeout.as_secs(),
        "bizmatch evaluation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
