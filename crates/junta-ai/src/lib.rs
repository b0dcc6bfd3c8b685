//! Screening questionnaire, anonymous statistics and support directory
//! behind the Junta AÍ HTTP API.

pub mod config;
pub mod error;
pub mod questionnaire;
pub mod statistics;
pub mod store;
pub mod support;
pub mod telemetry;
