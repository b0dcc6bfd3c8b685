use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bank::QuestionView;
use super::scoring::RiskAssessment;
use super::service::QuestionnaireService;
use super::Answers;
use crate::error::ApiError;
use crate::store::SubmissionStore;

/// Request body shared by submit and validate.
#[derive(Debug, Default, Deserialize)]
pub struct AnswerEnvelope {
    pub respostas: Option<Answers>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub sucesso: bool,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

/// Router exposing the question bank, submission and dry-run validation.
pub fn questionnaire_router<S>(service: Arc<QuestionnaireService<S>>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/perguntas", get(questions_handler::<S>))
        .route("/questionario", post(submit_handler::<S>))
        .route("/questionario/validar", post(validate_handler::<S>))
        .with_state(service)
}

fn answers_from(payload: Result<Json<AnswerEnvelope>, JsonRejection>) -> Option<Answers> {
    payload.ok().and_then(|Json(envelope)| envelope.respostas)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<QuestionnaireService<S>>>,
) -> Json<Vec<QuestionView>>
where
    S: SubmissionStore + 'static,
{
    Json(service.bank().views())
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<QuestionnaireService<S>>>,
    payload: Result<Json<AnswerEnvelope>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let answers = answers_from(payload).ok_or_else(ApiError::invalid_payload)?;
    let outcome = service.submit(answers)?;
    Ok(Json(SubmitResponse {
        sucesso: true,
        assessment: outcome.assessment,
    }))
}

pub(crate) async fn validate_handler<S>(
    State(service): State<Arc<QuestionnaireService<S>>>,
    payload: Result<Json<AnswerEnvelope>, JsonRejection>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    let Some(answers) = answers_from(payload) else {
        let body = json!({ "valido": false, "erro": "Dados inválidos" });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let body = match service.validate(&answers) {
        Ok(()) => json!({ "valido": true, "mensagem": "Todas as respostas são válidas" }),
        Err(err) => json!({ "valido": false, "erro": err.to_string() }),
    };
    (StatusCode::OK, Json(body)).into_response()
}
