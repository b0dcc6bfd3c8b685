use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{StoreError, Submission, SubmissionStore};
use crate::questionnaire::Answers;
use crate::support::catalog::{default_catalog, ResourceEntry};

/// On-disk layout: one JSON document rewritten in full on every append.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    respostas: Vec<Submission>,
    #[serde(default = "default_catalog")]
    recursos_apoio: Vec<ResourceEntry>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            respostas: Vec::new(),
            recursos_apoio: default_catalog(),
        }
    }
}

/// File-backed store loaded once at startup.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: Mutex<StoreDocument>,
}

impl JsonFileStore {
    /// Loads `path`, or starts from an empty document with the default catalog
    /// when the file does not exist yet. Nothing is written until the first append.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = match fs::read(&path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "data file not found, starting empty");
                StoreDocument::default()
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        debug!(
            path = %path.display(),
            submissions = document.respostas.len(),
            resources = document.recursos_apoio.len(),
            "store loaded"
        );

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreDocument>, StoreError> {
        self.document
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }

    fn persist(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(|err| StoreError::Persistence {
            path: self.path.clone(),
            source: err.into(),
        })?;
        fs::write(&self.path, bytes).map_err(|source| StoreError::Persistence {
            path: self.path.clone(),
            source,
        })
    }
}

impl SubmissionStore for JsonFileStore {
    fn append(&self, answers: Answers) -> Result<Submission, StoreError> {
        let mut document = self.lock()?;
        let submission = Submission {
            id: document.respostas.len() as u64 + 1,
            answers,
            timestamp: Local::now().naive_local(),
        };
        document.respostas.push(submission.clone());

        if let Err(err) = self.persist(&document) {
            document.respostas.pop();
            return Err(err);
        }

        Ok(submission)
    }

    fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.lock()?.respostas.clone())
    }

    fn resources(&self) -> Result<Vec<ResourceEntry>, StoreError> {
        Ok(self.lock()?.recursos_apoio.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Answers {
        let mut answers = Answers::new();
        answers.insert("1".to_string(), "Sempre".to_string());
        answers
    }

    #[test]
    fn missing_file_starts_with_default_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).expect("opens");

        assert!(store.list_all().expect("lists").is_empty());
        assert_eq!(store.resources().expect("resources").len(), 4);
        assert!(!path.exists(), "nothing is written before the first append");
    }

    #[test]
    fn append_assigns_sequential_ids_and_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");

        let store = JsonFileStore::open(&path).expect("opens");
        let first = store.append(answers()).expect("first append");
        let second = store.append(answers()).expect("second append");
        assert_eq!((first.id, second.id), (1, 2));

        let reopened = JsonFileStore::open(&path).expect("reopens");
        let stored = reopened.list_all().expect("lists");
        assert_eq!(stored, vec![first, second]);
        assert_eq!(reopened.resources().expect("resources").len(), 4);
    }

    #[test]
    fn file_uses_portuguese_document_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open(&path).expect("opens");
        store.append(answers()).expect("append");

        let raw = fs::read_to_string(&path).expect("file written");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value["respostas"][0]["respostas"]["1"], "Sempre");
        assert_eq!(value["recursos_apoio"][0]["tipo"], "emergencia");
    }

    #[test]
    fn failed_write_rolls_back_the_append() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("data.json");
        let store = JsonFileStore::open(&path).expect("opens");

        let err = store.append(answers()).expect_err("parent directory is missing");
        assert!(matches!(err, StoreError::Persistence { .. }));
        assert!(store.list_all().expect("lists").is_empty());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let err = JsonFileStore::open(&path).expect_err("corrupt document");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn document_without_catalog_gets_the_default_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"respostas": []}"#).expect("write fixture");

        let store = JsonFileStore::open(&path).expect("opens");
        assert_eq!(store.resources().expect("resources").len(), 4);
    }
}
