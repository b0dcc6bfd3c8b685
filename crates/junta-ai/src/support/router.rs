use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::catalog::{self, ResourceEntry, ResourceKind};
use super::guidance::{self, LawSummary, ResourceKindDescriptor, SafetyTips};
use crate::error::ApiError;
use crate::store::SubmissionStore;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DirectoryQuery {
    pub(crate) estado: Option<String>,
    pub(crate) tipo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: String,
}

/// Router exposing the support directory under `/recursos-apoio`.
pub fn support_router<S>(store: Arc<S>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/recursos-apoio", get(directory_handler::<S>))
        .route("/recursos-apoio/emergencia", get(emergency_handler::<S>))
        .route("/recursos-apoio/tipos", get(kinds_handler))
        .route("/recursos-apoio/buscar", get(search_handler::<S>))
        .route("/recursos-apoio/dicas-seguranca", get(safety_tips_handler))
        .route("/recursos-apoio/lei-maria-penha", get(law_handler))
        .route(
            "/recursos-apoio/por-estado/:estado",
            get(by_region_handler::<S>),
        )
        .route("/recursos-apoio/:recurso_id", get(resource_handler::<S>))
        .with_state(store)
}

pub(crate) async fn directory_handler<S>(
    State(store): State<Arc<S>>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<Vec<ResourceEntry>>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let resources = store.list_resources(query.estado.as_deref())?;
    let resources = match query.tipo.as_deref().map(str::trim) {
        None | Some("") => resources,
        Some(raw) => match ResourceKind::parse(raw) {
            Some(kind) => catalog::of_kind(resources, kind),
            None => Vec::new(),
        },
    };
    Ok(Json(resources))
}

pub(crate) async fn resource_handler<S>(
    State(store): State<Arc<S>>,
    Path(recurso_id): Path<String>,
) -> Result<Json<ResourceEntry>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let not_found = || ApiError::NotFound("Recurso não encontrado".to_string());
    let id = recurso_id.parse::<u32>().map_err(|_| not_found())?;
    let resources = store.resources()?;
    catalog::find(&resources, id).map(Json).ok_or_else(not_found)
}

pub(crate) async fn emergency_handler<S>(
    State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let recursos = catalog::of_kind(store.list_resources(None)?, ResourceKind::Emergency);
    Ok(Json(json!({
        "recursos": recursos,
        "mensagem_urgente": guidance::URGENT_MESSAGE,
        "total": recursos.len(),
    })))
}

pub(crate) async fn by_region_handler<S>(
    State(store): State<Arc<S>>,
    Path(estado): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let estado = estado.trim().to_ascii_uppercase();
    let recursos = store.list_resources(Some(&estado))?;
    Ok(Json(json!({
        "estado": estado,
        "recursos": recursos,
        "total": recursos.len(),
    })))
}

pub(crate) async fn kinds_handler() -> Json<Vec<ResourceKindDescriptor>> {
    Json(guidance::kind_descriptors())
}

pub(crate) async fn search_handler<S>(
    State(store): State<Arc<S>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let resources = store.resources()?;
    let resultados = catalog::search(&resources, &query.q)?;
    Ok(Json(json!({
        "termo": query.q.to_lowercase(),
        "total": resultados.len(),
        "resultados": resultados,
    })))
}

pub(crate) async fn safety_tips_handler() -> Json<SafetyTips> {
    Json(guidance::SAFETY_TIPS)
}

pub(crate) async fn law_handler() -> Json<LawSummary> {
    Json(guidance::MARIA_DA_PENHA)
}
