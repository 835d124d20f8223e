//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the domain service and stay testable with in-memory fixtures.

use std::sync::Arc;

use crate::domain::JobBoard;
use crate::domain::ports::{JobStore, PostingIdGenerator};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The job board use-case service.
    pub board: JobBoard,
}

impl HttpState {
    /// Assemble state from the two ports.
    #[must_use]
    pub fn new(store: Arc<dyn JobStore>, ids: Arc<dyn PostingIdGenerator>) -> Self {
        Self {
            board: JobBoard::new(store, ids),
        }
    }
}
