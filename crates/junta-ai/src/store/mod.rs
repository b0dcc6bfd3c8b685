//! Persistence contract for submissions and the support catalog.

mod file;
mod memory;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::questionnaire::Answers;
use crate::support::catalog::{self, ResourceEntry};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// One anonymized questionnaire response as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    #[serde(rename = "respostas")]
    pub answers: Answers,
    pub timestamp: NaiveDateTime,
}

/// Storage abstraction shared by the HTTP routers.
///
/// Implementations persist whatever they are given; callers validate first.
pub trait SubmissionStore: Send + Sync {
    /// Assigns the next sequential id and the current local time, then
    /// persists before returning.
    fn append(&self, answers: Answers) -> Result<Submission, StoreError>;

    fn list_all(&self) -> Result<Vec<Submission>, StoreError>;

    /// The whole support catalog, regardless of region.
    fn resources(&self) -> Result<Vec<ResourceEntry>, StoreError>;

    /// Nationwide entries, plus the given region's entries when one is supplied.
    fn list_resources(&self, region: Option<&str>) -> Result<Vec<ResourceEntry>, StoreError> {
        let resources = self.resources()?;
        Ok(catalog::for_region(&resources, region))
    }
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to persist {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is not a valid data file: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
