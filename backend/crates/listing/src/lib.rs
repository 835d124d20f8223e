//! Filter-and-paginate view-model primitives for listing endpoints.
//!
//! This crate is independent of backend domain types: any record that can
//! name its searchable text fields (via [`Searchable`]) can be filtered and
//! paginated. The transformation is pure; callers re-run [`query`] after
//! every state change and render the returned slice.
//!
//! # Example
//!
//! ```
//! use listing::{QueryState, Searchable, query};
//!
//! #[derive(Clone)]
//! struct Note(&'static str);
//!
//! impl Searchable for Note {
//!     fn search_fields(&self) -> Vec<&str> {
//!         vec![self.0]
//!     }
//! }
//!
//! let notes = vec![Note("alpha"), Note("beta"), Note("Alphabet")];
//! let state = QueryState::with_search_term("alpha");
//! let result = query(&notes, &state);
//!
//! assert_eq!(result.matched.len(), 2);
//! assert_eq!(result.total_pages, 1);
//! ```

mod state;
mod view;
mod window;

pub use state::{DEFAULT_PAGE_SIZE, QueryState, QueryStateError};
pub use view::{QueryResult, Searchable, query};
pub use window::{PAGE_WINDOW_LEN, page_window};
