//! Posting identifier generation.
//!
//! The reference behaviour derived ids from wall-clock time, which admits
//! collisions under rapid successive creates. Ids here come from an
//! injected monotonic counter instead, seeded above the highest id already
//! in the store.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::{JobPosting, PostingId};

/// Source of unique posting identifiers.
pub trait PostingIdGenerator: Send + Sync {
    /// Return the next unused identifier.
    fn next_id(&self) -> PostingId;
}

/// Monotonic counter-backed generator.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    /// Generator whose first issued id is `first`.
    #[must_use]
    pub const fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    /// Generator seeded just past the highest id in `existing`.
    #[must_use]
    pub fn after_highest(existing: &[JobPosting]) -> Self {
        let highest = existing
            .iter()
            .map(|posting| posting.id.value())
            .max()
            .unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }
}

impl PostingIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> PostingId {
        PostingId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
