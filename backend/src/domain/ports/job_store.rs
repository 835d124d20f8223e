//! Persistence port holding the full posting collection.
//!
//! The collection is an ordered array, newest posting first. Adapters only
//! need to supply wholesale load and save; the prepend and remove
//! operations are compositions of those two, so every adapter shares the
//! same read-modify-write semantics.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Error, JobPosting, PostingId};

/// Store boundary for the posting collection.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Return the current collection, newest posting first.
    ///
    /// Adapters with a seed fallback return it when nothing has been
    /// persisted yet.
    async fn load_all(&self) -> Result<Vec<JobPosting>, Error>;

    /// Replace the persisted collection wholesale.
    async fn save_all(&self, postings: Vec<JobPosting>) -> Result<(), Error>;

    /// Add a posting at the front of the collection (newest first).
    async fn append(&self, posting: JobPosting) -> Result<(), Error> {
        let mut postings = self.load_all().await?;
        postings.insert(0, posting);
        self.save_all(postings).await
    }

    /// Remove the posting with the given id; an absent id is a no-op.
    async fn remove(&self, id: PostingId) -> Result<(), Error> {
        let remaining: Vec<JobPosting> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|posting| posting.id != id)
            .collect();
        self.save_all(remaining).await
    }
}

/// In-memory store used by tests and ephemeral (no data file) runs.
#[derive(Debug)]
pub struct InMemoryJobStore {
    postings: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobStore {
    /// Store starting from the given collection.
    #[must_use]
    pub const fn new(postings: Vec<JobPosting>) -> Self {
        Self {
            postings: RwLock::new(postings),
        }
    }

    /// Store pre-populated with the fallback seed collection.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            seed_data::default_postings()
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn load_all(&self) -> Result<Vec<JobPosting>, Error> {
        self.postings
            .read()
            .map(|postings| postings.clone())
            .map_err(|_| Error::internal("job store lock poisoned"))
    }

    async fn save_all(&self, postings: Vec<JobPosting>) -> Result<(), Error> {
        let mut guard = self
            .postings
            .write()
            .map_err(|_| Error::internal("job store lock poisoned"))?;
        *guard = postings;
        Ok(())
    }
}
