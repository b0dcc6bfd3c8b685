use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, warn};

use super::aggregate::aggregate;
use super::period::ReportingPeriod;
use super::views::{
    question_breakdown, ExportReport, QuestionBreakdown, StatisticsReport, StatisticsSummary,
};
use crate::error::ApiError;
use crate::questionnaire::QuestionBank;
use crate::store::{StoreError, SubmissionStore};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PeriodQuery {
    pub(crate) periodo: Option<String>,
}

impl PeriodQuery {
    /// Unrecognized windows fall back to the whole history.
    fn period(&self) -> ReportingPeriod {
        match self.periodo.as_deref().map(str::parse::<ReportingPeriod>) {
            None => ReportingPeriod::Total,
            Some(Ok(period)) => period,
            Some(Err(err)) => {
                warn!(error = %err, "ignoring unknown reporting period");
                ReportingPeriod::Total
            }
        }
    }
}

/// Shared state: the store plus the bank used to bound question ids.
pub struct StatisticsState<S> {
    store: Arc<S>,
    bank: Arc<QuestionBank>,
}

impl<S> StatisticsState<S> {
    pub fn new(store: Arc<S>, bank: Arc<QuestionBank>) -> Self {
        Self { store, bank }
    }
}

/// Router exposing aggregate statistics under `/estatisticas`.
pub fn statistics_router<S>(state: Arc<StatisticsState<S>>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/estatisticas", get(report_handler::<S>))
        .route("/estatisticas/resumo", get(summary_handler::<S>))
        .route("/estatisticas/exportar", get(export_handler::<S>))
        .route(
            "/estatisticas/pergunta/:pergunta_id",
            get(question_handler::<S>),
        )
        .with_state(state)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Loads every submission inside `period` and folds it into a report.
pub fn build_report<S>(
    store: &S,
    period: ReportingPeriod,
    now: NaiveDateTime,
) -> Result<StatisticsReport, StoreError>
where
    S: SubmissionStore + ?Sized,
{
    let submissions = period.filter(store.list_all()?, now);
    debug!(%period, submissions = submissions.len(), "aggregating submissions");
    Ok(StatisticsReport::from_stats(aggregate(&submissions)))
}

pub(crate) async fn report_handler<S>(
    State(state): State<Arc<StatisticsState<S>>>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<StatisticsReport>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let period = query.period();
    let report = build_report(state.store.as_ref(), period, now())?;
    Ok(Json(report))
}

pub(crate) async fn summary_handler<S>(
    State(state): State<Arc<StatisticsState<S>>>,
) -> Result<Json<StatisticsSummary>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let stats = aggregate(&state.store.list_all()?);
    Ok(Json(StatisticsSummary::from_stats(&stats, now())))
}

pub(crate) async fn export_handler<S>(
    State(state): State<Arc<StatisticsState<S>>>,
) -> Result<Json<ExportReport>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let now = now();
    let report = build_report(state.store.as_ref(), ReportingPeriod::Total, now)?;
    Ok(Json(ExportReport::from_report(report, now)))
}

pub(crate) async fn question_handler<S>(
    State(state): State<Arc<StatisticsState<S>>>,
    Path(pergunta_id): Path<String>,
) -> Result<Json<QuestionBreakdown>, ApiError>
where
    S: SubmissionStore + 'static,
{
    let question = state
        .bank
        .by_key(&pergunta_id)
        .ok_or_else(|| ApiError::Validation("ID de pergunta inválido".to_string()))?;
    let stats = aggregate(&state.store.list_all()?);
    Ok(Json(question_breakdown(&stats, question.id)))
}
