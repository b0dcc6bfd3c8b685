//! Support directory scenarios against a JSON data file with regional entries.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use junta_ai::store::JsonFileStore;
use junta_ai::support::support_router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn data_file() -> (TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.json");
    let document = json!({
        "respostas": [],
        "recursos_apoio": [
            { "id": 1, "nome": "Central de Atendimento à Mulher", "descricao": "Atendimento 24h", "tipo": "emergencia", "estado": "BR", "telefone": "180" },
            { "id": 2, "nome": "Delegacia da Mulher", "descricao": "Boletim de ocorrência", "tipo": "policial" },
            { "id": 7, "nome": "Centro de Referência Clarice Lispector", "descricao": "Acolhimento em Recife", "tipo": "apoio", "estado": "PE" },
            { "id": 8, "nome": "Casa Eliane de Grammont", "descricao": "Atendimento psicológico em São Paulo", "tipo": "apoio", "estado": "SP" }
        ]
    });
    std::fs::write(&path, document.to_string()).expect("seed data file");
    let store = JsonFileStore::open(&path).expect("store opens");
    (dir, store)
}

fn app(store: JsonFileStore) -> Router {
    support_router(Arc::new(store))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("route executes");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn ids(entries: &Value) -> Vec<u64> {
    entries
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["id"].as_u64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn region_filter_adds_state_entries_to_nationwide_ones() {
    let (_dir, store) = data_file();
    let router = app(store);

    let (status, body) = get(router.clone(), "/recursos-apoio?estado=PE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 7]);

    let (_, body) = get(router.clone(), "/recursos-apoio?estado=%20pe%20").await;
    assert_eq!(ids(&body), vec![1, 2, 7]);

    let (_, body) = get(router, "/recursos-apoio").await;
    assert_eq!(ids(&body), vec![1, 2]);
}

#[tokio::test]
async fn missing_region_defaults_to_nationwide() {
    let (_dir, store) = data_file();
    let (_, body) = get(app(store), "/recursos-apoio/2").await;
    assert_eq!(body["estado"], "BR");
    assert!(body["telefone"].is_null());
}

#[tokio::test]
async fn kind_filter_combines_with_region() {
    let (_dir, store) = data_file();
    let (_, body) = get(app(store), "/recursos-apoio?estado=SP&tipo=apoio").await;
    assert_eq!(ids(&body), vec![8]);
}

#[tokio::test]
async fn by_region_view_reports_normalized_state() {
    let (_dir, store) = data_file();
    let (status, body) = get(app(store), "/recursos-apoio/por-estado/sp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estado"], "SP");
    assert_eq!(body["total"], 3);
    assert_eq!(ids(&body["recursos"]), vec![1, 2, 8]);
}

#[tokio::test]
async fn resource_lookup_covers_regional_entries() {
    let (_dir, store) = data_file();
    let router = app(store);

    let (status, body) = get(router.clone(), "/recursos-apoio/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estado"], "PE");

    let (status, body) = get(router, "/recursos-apoio/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["erro"], "Recurso não encontrado");
}

#[tokio::test]
async fn search_requires_a_meaningful_term() {
    let (_dir, store) = data_file();
    let router = app(store);

    let (status, body) = get(router.clone(), "/recursos-apoio/buscar?q=a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["erro"], "Termo de busca muito curto (mínimo 2 caracteres)");

    let (status, body) = get(router, "/recursos-apoio/buscar?q=MULHER").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["termo"], "mulher");
    assert_eq!(ids(&body["resultados"]), vec![1, 2]);
}

#[tokio::test]
async fn static_guidance_is_served() {
    let (_dir, store) = data_file();
    let router = app(store);

    let (status, kinds) = get(router.clone(), "/recursos-apoio/tipos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kinds.as_array().map(Vec::len), Some(3));

    let (status, _) = get(router.clone(), "/recursos-apoio/dicas-seguranca").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(router, "/recursos-apoio/lei-maria-penha").await;
    assert_eq!(status, StatusCode::OK);
}
