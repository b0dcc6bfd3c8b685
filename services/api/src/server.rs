use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_domain_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use junta_ai::config::AppConfig;
use junta_ai::error::AppError;
use junta_ai::store::{JsonFileStore, MemoryStore};
use junta_ai::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data_file) = args.data_file.take() {
        config.storage.data_file = data_file;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let prefix = config.server.api_prefix.as_str();
    let routes: Router = if args.in_memory {
        warn!("running with the in-memory store; submissions will not survive a restart");
        with_domain_routes(Arc::new(MemoryStore::new()), prefix)
    } else {
        let store = JsonFileStore::open(&config.storage.data_file)?;
        info!(data_file = %store.path().display(), "submission store opened");
        with_domain_routes(Arc::new(store), prefix)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = ?config.environment, %addr, prefix, "junta ai api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
