use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use junta_ai::questionnaire::{questionnaire_router, QuestionBank, QuestionnaireService};
use junta_ai::statistics::{statistics_router, StatisticsState};
use junta_ai::store::SubmissionStore;
use junta_ai::support::support_router;
use serde_json::json;
use std::sync::Arc;

/// Mounts the questionnaire, statistics and support routers under `prefix`
/// (an empty prefix mounts them at the root) next to the operational routes.
pub(crate) fn with_domain_routes<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: SubmissionStore + 'static,
{
    let bank = Arc::new(QuestionBank::standard());
    let questionnaire = Arc::new(QuestionnaireService::new(bank.clone(), store.clone()));
    let statistics = Arc::new(StatisticsState::new(store.clone(), bank));

    let domain = questionnaire_router(questionnaire)
        .merge(statistics_router(statistics))
        .merge(support_router(store))
        .route("/health", axum::routing::get(healthcheck));

    let app = if prefix.is_empty() {
        domain
    } else {
        Router::new().nest(prefix, domain)
    };

    let index = index_body(prefix);
    app.route(
        "/",
        axum::routing::get(move || {
            let body = index.clone();
            async move { Json(body) }
        }),
    )
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .fallback(not_found)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Junta AÍ API está funcionando",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Project index listing the domain endpoints as mounted under `prefix`.
pub(crate) fn index_body(prefix: &str) -> serde_json::Value {
    json!({
        "projeto": "Junta AÍ",
        "descricao": "API para plataforma de conscientização sobre violência em relacionamentos",
        "versao": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "questionario": format!(
                "{prefix}/perguntas, {prefix}/questionario, {prefix}/questionario/validar"
            ),
            "estatisticas": format!("{prefix}/estatisticas"),
            "apoio": format!("{prefix}/recursos-apoio"),
            "health": format!("{prefix}/health"),
        },
    })
}

pub(crate) async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "erro": "Rota não encontrada", "status": 404 })),
    )
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use junta_ai::store::MemoryStore;
    use tower::ServiceExt;

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn domain_routes_live_under_the_prefix() {
        let router = with_domain_routes(Arc::new(MemoryStore::new()), "/api");

        let (status, body) = get(router.clone(), "/api/perguntas").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(12));

        let (status, body) = get(router, "/perguntas").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["erro"], "Rota não encontrada");
    }

    #[tokio::test]
    async fn empty_prefix_mounts_at_root() {
        let router = with_domain_routes(Arc::new(MemoryStore::new()), "");
        let (status, body) = get(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn index_lists_endpoints_under_the_prefix() {
        let router = with_domain_routes(Arc::new(MemoryStore::new()), "/api");
        let (status, body) = get(router.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projeto"], "Junta AÍ");
        assert_eq!(body["endpoints"]["health"], "/api/health");
        assert_eq!(body["endpoints"]["apoio"], "/api/recursos-apoio");

        let health = body["endpoints"]["health"].as_str().unwrap_or_default();
        let (status, _) = get(router, health).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn index_without_prefix_lists_root_paths() {
        let body = index_body("");
        assert_eq!(body["endpoints"]["estatisticas"], "/estatisticas");
        assert_eq!(body["endpoints"]["health"], "/health");
    }
}
