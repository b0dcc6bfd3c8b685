use std::sync::Arc;

use tracing::info;

use super::bank::QuestionBank;
use super::scoring::{RiskAssessment, RiskScorer};
use super::validation::{check_complete, validate, ValidationError};
use super::Answers;
use crate::store::{StoreError, Submission, SubmissionStore};

/// Service composing the question bank, validation, the store and the scorer.
pub struct QuestionnaireService<S> {
    bank: Arc<QuestionBank>,
    scorer: RiskScorer,
    store: Arc<S>,
}

impl<S> QuestionnaireService<S>
where
    S: SubmissionStore + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, store: Arc<S>) -> Self {
        Self {
            bank,
            scorer: RiskScorer,
            store,
        }
    }

    pub fn with_standard_bank(store: Arc<S>) -> Self {
        Self::new(Arc::new(QuestionBank::standard()), store)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Checks an answer set without persisting it.
    pub fn validate(&self, answers: &Answers) -> Result<(), ValidationError> {
        validate(&self.bank, answers)
    }

    /// Persists then scores a submission once every question has an answer.
    /// Labels are not checked against the options here; `validate` does that.
    pub fn submit(&self, answers: Answers) -> Result<SubmissionOutcome, QuestionnaireError> {
        check_complete(&self.bank, &answers)?;
        let submission = self.store.append(answers)?;
        let assessment = self.scorer.score(&submission.answers);

        info!(
            submission_id = submission.id,
            tier = assessment.tier.label(),
            "questionnaire submission stored"
        );

        Ok(SubmissionOutcome {
            submission,
            assessment,
        })
    }
}

/// Stored submission together with its risk assessment.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub submission: Submission,
    pub assessment: RiskAssessment,
}

/// Error raised by the questionnaire service.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
