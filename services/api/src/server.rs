use crate::cli::ServeArgs;
use crate::infra::{load_tables, AppState, InMemoryHouseholdStore};
use crate::routes::with_household_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use household_fpl::config::AppConfig;
use household_fpl::eligibility::EligibilityThresholds;
use household_fpl::error::AppError;
use household_fpl::household::HouseholdService;
use household_fpl::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(dir) = args.guideline_dir.take() {
        config.guidelines.dir = Some(dir);
    }

    telemetry::init(&config.telemetry)?;

    let tables = Arc::new(load_tables(config.guidelines.dir.clone())?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryHouseholdStore::default());
    let service = Arc::new(HouseholdService::new(
        store,
        tables,
        EligibilityThresholds::default(),
    ));

    let app = with_household_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "household FPL service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
