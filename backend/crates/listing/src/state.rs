//! Transient listing query state owned by the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of postings shown per page unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validation failures raised when constructing a [`QueryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryStateError {
    /// Pages are numbered from 1; page 0 does not exist.
    #[error("current page must be at least 1")]
    ZeroPage,
    /// A page holds at least one item; a zero page size is a caller bug.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Search term plus page position driving one listing computation.
///
/// ## Invariants
/// - `current_page >= 1` and `page_size >= 1`.
/// - Replacing the search term resets `current_page` to 1, so a narrowed
///   result set is never viewed from a page beyond its end.
///
/// Serde uses the fallible constructor, so deserialised state upholds the
/// same invariants as programmatic construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "QueryStateDto", into = "QueryStateDto")]
pub struct QueryState {
    search_term: String,
    current_page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Construct a fully specified state, validating both numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`QueryStateError`] when `current_page` or `page_size` is 0.
    pub fn new(
        search_term: impl Into<String>,
        current_page: usize,
        page_size: usize,
    ) -> Result<Self, QueryStateError> {
        if current_page == 0 {
            return Err(QueryStateError::ZeroPage);
        }
        if page_size == 0 {
            return Err(QueryStateError::ZeroPageSize);
        }
        Ok(Self {
            search_term: search_term.into(),
            current_page,
            page_size,
        })
    }

    /// State on page 1 with the default page size and the given term.
    pub fn with_search_term(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    /// The free-text term matched against each item's search fields.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search_term.as_str()
    }

    /// One-based page currently requested.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search term and return to page 1.
    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
        self.current_page = 1;
    }

    /// Move to another page without touching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`QueryStateError::ZeroPage`] for page 0.
    pub const fn set_current_page(&mut self, current_page: usize) -> Result<(), QueryStateError> {
        if current_page == 0 {
            return Err(QueryStateError::ZeroPage);
        }
        self.current_page = current_page;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryStateDto {
    #[serde(default)]
    search_term: String,
    current_page: usize,
    page_size: usize,
}

impl From<QueryState> for QueryStateDto {
    fn from(value: QueryState) -> Self {
        Self {
            search_term: value.search_term,
            current_page: value.current_page,
            page_size: value.page_size,
        }
    }
}

impl TryFrom<QueryStateDto> for QueryState {
    type Error = QueryStateError;

    fn try_from(value: QueryStateDto) -> Result<Self, Self::Error> {
        Self::new(value.search_term, value.current_page, value.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_state_starts_on_page_one() {
        let state = QueryState::default();
        assert_eq!(state.search_term(), "");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[rstest]
    #[case(0, 10, QueryStateError::ZeroPage)]
    #[case(1, 0, QueryStateError::ZeroPageSize)]
    fn new_rejects_zero_fields(
        #[case] page: usize,
        #[case] size: usize,
        #[case] expected: QueryStateError,
    ) {
        assert_eq!(QueryState::new("", page, size), Err(expected));
    }

    #[test]
    fn replacing_the_term_resets_the_page() {
        let mut state = QueryState::new("rust", 4, 10).expect("valid state");
        state.set_search_term("devops");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.search_term(), "devops");
    }

    #[test]
    fn set_current_page_rejects_zero() {
        let mut state = QueryState::default();
        assert_eq!(state.set_current_page(0), Err(QueryStateError::ZeroPage));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn deserialisation_validates_fields() {
        let err = serde_json::from_str::<QueryState>(
            r#"{"searchTerm":"x","currentPage":0,"pageSize":10}"#,
        );
        assert!(err.is_err());

        let state: QueryState =
            serde_json::from_str(r#"{"currentPage":2,"pageSize":5}"#).expect("valid state");
        assert_eq!(state.search_term(), "");
        assert_eq!(state.current_page(), 2);
    }
}
