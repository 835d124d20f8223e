//! Job board use-case service.
//!
//! Owns the ports and exposes the operations the HTTP adapters call. Every
//! user action recomputes its view from the store; there is no cached
//! listing state to invalidate.

use std::sync::Arc;

use listing::{QueryState, page_window, query};

use crate::domain::ports::{JobStore, PostingIdGenerator};
use crate::domain::{Error, JobDraft, JobPosting, PostingId};

/// One rendered page of the public board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPage {
    /// Postings on the requested page, in store order.
    pub postings: Vec<JobPosting>,
    /// Total number of pages for the current filter; 0 when nothing matched.
    pub total_pages: usize,
    /// The page that was requested, echoed for the pager.
    pub current_page: usize,
    /// Page-number buttons to render around the current page.
    pub page_numbers: Vec<usize>,
}

/// Dashboard counters shown on the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    /// Total number of postings in the store.
    pub total: usize,
    /// Postings flagged as remote.
    pub remote: usize,
    /// Postings with the "Full-time" employment type.
    pub full_time: usize,
}

/// Application service over the store and id generator ports.
#[derive(Clone)]
pub struct JobBoard {
    store: Arc<dyn JobStore>,
    ids: Arc<dyn PostingIdGenerator>,
}

impl JobBoard {
    /// Assemble the service from its ports.
    #[must_use]
    pub fn new(store: Arc<dyn JobStore>, ids: Arc<dyn PostingIdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Compute the public listing page for the given query state.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`Error`].
    pub async fn browse(&self, state: &QueryState) -> Result<BoardPage, Error> {
        let all = self.store.load_all().await?;
        let result = query(&all, state);
        Ok(BoardPage {
            page_numbers: page_window(state.current_page(), result.total_pages),
            postings: result.page_items,
            total_pages: result.total_pages,
            current_page: state.current_page(),
        })
    }

    /// Fetch a single posting by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::not_found`] when no posting has the id.
    pub async fn lookup(&self, id: PostingId) -> Result<JobPosting, Error> {
        self.store
            .load_all()
            .await?
            .into_iter()
            .find(|posting| posting.id == id)
            .ok_or_else(|| Error::not_found(format!("no posting with id {id}")))
    }

    /// The admin table: every posting whose title, company, or location
    /// contains the term, case-insensitively. An empty term returns all.
    ///
    /// The admin view scans location rather than the description and is not
    /// paginated, matching the console's table rendering.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`Error`].
    pub async fn admin_table(&self, search_term: &str) -> Result<Vec<JobPosting>, Error> {
        let lowered = search_term.to_lowercase();
        let matches = |field: &str| field.to_lowercase().contains(&lowered);
        Ok(self
            .store
            .load_all()
            .await?
            .into_iter()
            .filter(|posting| {
                lowered.is_empty()
                    || matches(&posting.title)
                    || matches(&posting.company)
                    || matches(&posting.location)
            })
            .collect())
    }

    /// Create a posting from a validated draft and prepend it to the store.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`Error`].
    pub async fn create(&self, draft: JobDraft) -> Result<JobPosting, Error> {
        let posting = JobPosting::from_draft(self.ids.next_id(), draft);
        self.store.append(posting.clone()).await?;
        Ok(posting)
    }

    /// Delete the posting with the given id; an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`Error`].
    pub async fn delete(&self, id: PostingId) -> Result<(), Error> {
        self.store.remove(id).await
    }

    /// Compute the dashboard counters.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`Error`].
    pub async fn stats(&self) -> Result<BoardStats, Error> {
        let all = self.store.load_all().await?;
        Ok(BoardStats {
            total: all.len(),
            remote: all.iter().filter(|posting| posting.is_remote).count(),
            full_time: all
                .iter()
                .filter(|posting| posting.employment_type == "Full-time")
                .count(),
        })
    }
}
