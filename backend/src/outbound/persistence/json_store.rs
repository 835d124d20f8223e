//! JSON-file persistence adapter.
//!
//! Stores the full posting collection as one pretty-printed JSON array.
//! Missing or unreadable files fall back to the seed collection, mirroring
//! a first run, and writes go through a temp-file-and-rename step so a
//! crash mid-write never leaves a truncated store behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{fs, io};

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::ports::JobStore;
use crate::domain::{Error, JobPosting};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Failures raised while reading or writing the data file.
#[derive(Debug, ThisError)]
pub enum StoreFileError {
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Data file location.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The data file content was not a valid posting array.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Data file location.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },
    /// The data file could not be written.
    #[error("failed to write {path}: {message}")]
    Write {
        /// Data file location.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
    /// The blocking IO task was cancelled or panicked.
    #[error("data file task failed: {0}")]
    Task(String),
}

impl From<StoreFileError> for Error {
    fn from(err: StoreFileError) -> Self {
        Error::internal(err.to_string())
    }
}

/// [`JobStore`] backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileJobStore {
    path: PathBuf,
}

impl JsonFileJobStore {
    /// Store persisting to the given file.
    ///
    /// The file need not exist yet; the first load serves the seed
    /// collection and the first save creates it.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_postings(path: &Path) -> Vec<JobPosting> {
        match load_file(path) {
            Ok(postings) => postings,
            Err(StoreFileError::Read { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                seed_postings()
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to seed postings");
                seed_postings()
            }
        }
    }
}

fn seed_postings() -> Vec<JobPosting> {
    seed_data::default_postings()
        .into_iter()
        .map(Into::into)
        .collect()
}

fn load_file(path: &Path) -> Result<Vec<JobPosting>, StoreFileError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes contents next to `path` and renames into place, so readers only
/// ever see the previous or the new complete file.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreFileError> {
    let write_err = |message: String| StoreFileError::Write {
        path: path.to_path_buf(),
        message,
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| write_err("data file path must name a file".to_owned()))?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_path = path.with_file_name(format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    ));

    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));
    if let Err(err) = result {
        // Best-effort cleanup of the temp file.
        drop(fs::remove_file(&tmp_path));
        return Err(write_err(err.to_string()));
    }
    Ok(())
}

#[async_trait]
impl JobStore for JsonFileJobStore {
    async fn load_all(&self) -> Result<Vec<JobPosting>, Error> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::read_postings(&path))
            .await
            .map_err(|err| StoreFileError::Task(err.to_string()).into())
    }

    async fn save_all(&self, postings: Vec<JobPosting>) -> Result<(), Error> {
        let path = self.path.clone();
        let contents = serde_json::to_string_pretty(&postings).map_err(|source| {
            Error::from(StoreFileError::Parse {
                path: path.clone(),
                source,
            })
        })?;
        tokio::task::spawn_blocking(move || write_atomic(&path, &contents))
            .await
            .map_err(|err| StoreFileError::Task(err.to_string()))?
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostingId;
    use crate::domain::posting::{DraftFields, JobDraft};

    fn posting(id: i64, title: &str) -> JobPosting {
        let draft = JobDraft::try_from(DraftFields {
            title: title.to_owned(),
            company: "Acme".to_owned(),
            location: "Remote".to_owned(),
            employment_type: "Full-time".to_owned(),
            category: "Software Developer".to_owned(),
            batch: "2020-2023".to_owned(),
            qualification: "Any".to_owned(),
            salary: "$1".to_owned(),
            description: "Duties.".to_owned(),
            ..DraftFields::default()
        })
        .expect("valid draft");
        JobPosting::from_draft(PostingId::new(id), draft)
    }

    #[tokio::test]
    async fn missing_file_serves_the_seed_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileJobStore::new(dir.path().join("jobs.json"));

        let all = store.load_all().await.expect("load");
        assert_eq!(all.len(), 12);
    }

    #[tokio::test]
    async fn corrupt_file_serves_the_seed_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("jobs.json");
        fs::write(&path, "{not json").expect("write corrupt file");
        let store = JsonFileJobStore::new(path);

        let all = store.load_all().await.expect("load");
        assert_eq!(all.len(), 12);
    }

    #[tokio::test]
    async fn saved_collection_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileJobStore::new(dir.path().join("jobs.json"));

        store
            .save_all(vec![posting(5, "Stored")])
            .await
            .expect("save");
        let all = store.load_all().await.expect("load");

        assert_eq!(all.len(), 1);
        assert_eq!(all.first().map(|p| p.id.value()), Some(5));
        assert_eq!(all.first().map(|p| p.title.as_str()), Some("Stored"));
    }

    #[tokio::test]
    async fn append_prepends_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileJobStore::new(dir.path().join("jobs.json"));
        store.save_all(vec![posting(1, "Old")]).await.expect("save");

        store.append(posting(2, "New")).await.expect("append");

        let reloaded = JsonFileJobStore::new(store.path().to_path_buf());
        let all = reloaded.load_all().await.expect("load");
        let ids: Vec<i64> = all.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn removing_an_absent_id_is_a_no_op() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileJobStore::new(dir.path().join("jobs.json"));
        store.save_all(vec![posting(1, "Only")]).await.expect("save");

        store.remove(PostingId::new(42)).await.expect("remove");

        let all = store.load_all().await.expect("load");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn save_replaces_a_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("jobs.json");
        fs::write(&path, "garbage").expect("write corrupt file");
        let store = JsonFileJobStore::new(path);

        store.save_all(vec![posting(9, "Fresh")]).await.expect("save");

        let all = store.load_all().await.expect("load");
        assert_eq!(all.first().map(|p| p.id.value()), Some(9));
    }
}
