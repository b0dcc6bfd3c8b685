use std::sync::{Mutex, MutexGuard};

use chrono::Local;

use super::{StoreError, Submission, SubmissionStore};
use crate::questionnaire::Answers;
use crate::support::catalog::{default_catalog, ResourceEntry};

/// Volatile store for tests and throwaway runs.
#[derive(Debug)]
pub struct MemoryStore {
    submissions: Mutex<Vec<Submission>>,
    resources: Vec<ResourceEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_resources(default_catalog())
    }

    pub fn with_resources(resources: Vec<ResourceEntry>) -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            resources,
        }
    }

    /// Preloads already-timestamped submissions, e.g. to exercise period filters.
    pub fn with_submissions(mut self, submissions: Vec<Submission>) -> Self {
        self.submissions = Mutex::new(submissions);
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Submission>>, StoreError> {
        self.submissions
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore for MemoryStore {
    fn append(&self, answers: Answers) -> Result<Submission, StoreError> {
        let mut submissions = self.lock()?;
        let submission = Submission {
            id: submissions.len() as u64 + 1,
            answers,
            timestamp: Local::now().naive_local(),
        };
        submissions.push(submission.clone());
        Ok(submission)
    }

    fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn resources(&self) -> Result<Vec<ResourceEntry>, StoreError> {
        Ok(self.resources.clone())
    }
}
