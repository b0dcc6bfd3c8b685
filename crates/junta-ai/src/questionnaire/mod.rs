//! Question bank, answer validation and risk scoring for a single submission.

pub mod bank;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

use std::collections::BTreeMap;

/// Raw answers keyed by the question id rendered as a string (`"1"`..`"12"`).
pub type Answers = BTreeMap<String, String>;

pub use bank::{AnswerScale, Intensity, Question, QuestionBank, QuestionView};
pub use router::questionnaire_router;
pub use scoring::{RiskAssessment, RiskScorer, RiskTier};
pub use service::{QuestionnaireError, QuestionnaireService, SubmissionOutcome};
pub use validation::{check_complete, validate, ValidationError};
