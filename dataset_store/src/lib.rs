//! Flat-file JSON dataset store.
//!
//! - One file holds the whole dataset: `users` plus the `policies` document.
//! - Every read re-opens and re-parses the file; there is no in-process
//!   cache, so edits by an external writer are visible on the next request.
//!   Acceptable only because the dataset is assumed small.
//! - Reads are not locked or transactional. A reader racing an external
//!   writer may observe a half-written file; that surfaces as
//!   [`StoreError::Corrupt`], never as a partial dataset.
//! - File path comes from `DB_PATH` (default `data/dummy_db.json`).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

pub mod errors;
pub mod models;

use errors::{Result, StoreError};
use models::Dataset;

/// Read-side seam over the backing dataset storage.
///
/// The single production implementation is [`JsonFileStore`]; tests substitute
/// in-memory fakes. Keeping the seam here means the flat file could later be
/// swapped for a real datastore without touching the resolution pipeline.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Load and parse the full dataset.
    ///
    /// No partial results: either a fully valid [`Dataset`] comes back or an
    /// error is raised.
    async fn read_dataset(&self) -> Result<Dataset>;
}

/// Dataset store backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store from the `DB_PATH` environment variable.
    pub fn from_env() -> Self {
        let path = std::env::var("DB_PATH").unwrap_or_else(|_| "data/dummy_db.json".into());
        Self::new(path)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the backing file with the given dataset, pretty-printed.
    ///
    /// Used by account-management tooling and tests; the resolution pipeline
    /// itself never writes.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub async fn write_dataset(&self, dataset: &Dataset) -> Result<()> {
        let json = serde_json::to_string_pretty(dataset)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(users = dataset.users.len(), "dataset written");
        Ok(())
    }
}

#[async_trait]
impl DatasetStore for JsonFileStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn read_dataset(&self) -> Result<Dataset> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            warn!(error = %e, "backing file unreadable");
            StoreError::Unavailable(e)
        })?;

        let dataset: Dataset = serde_json::from_str(&contents).map_err(|e| {
            warn!(error = %e, "backing file did not parse as a dataset");
            StoreError::Corrupt(e)
        })?;

        debug!(users = dataset.users.len(), "dataset loaded");
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Policy, User};
    use tempfile::NamedTempFile;

    fn sample_dataset() -> Dataset {
        Dataset {
            users: vec![User {
                user_id: 1,
                name: "Alice".into(),
                tickets: vec![10, 11],
                balance: 25.5,
            }],
            policies: Policy {
                ticket_rules: vec!["Tickets are transferable once.".into()],
                refund_policy: vec!["Refunds within 14 days.".into()],
                escrow_rules: vec![],
                account_help: vec![],
                visual_forms: serde_json::Map::new(),
            },
        }
    }

    #[tokio::test]
    async fn read_parses_a_valid_file() {
        let file = NamedTempFile::new().unwrap();
        let store = JsonFileStore::new(file.path());
        store.write_dataset(&sample_dataset()).await.unwrap();

        let dataset = store.read_dataset().await.unwrap();
        assert_eq!(dataset.users.len(), 1);
        assert_eq!(dataset.find_user(1).unwrap().name, "Alice");
        assert_eq!(dataset.policies.refund_policy.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let store = JsonFileStore::new("/nonexistent/path/db.json");
        let err = store.read_dataset().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_corrupt() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{ not json").unwrap();

        let store = JsonFileStore::new(file.path());
        let err = store.read_dataset().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn wrong_shape_is_corrupt() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"users": "oops"}"#).unwrap();

        let store = JsonFileStore::new(file.path());
        let err = store.read_dataset().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
