//! The pure listing transformation: stable filter plus page slicing.

use serde::Serialize;

use crate::state::QueryState;

/// A record that can be matched against a free-text search term.
pub trait Searchable {
    /// Text fields scanned by the substring match, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether this record matches an already-lowercased term.
    ///
    /// An empty term matches every record. Matching is a case-insensitive
    /// substring test over each search field; no Unicode normalisation is
    /// applied.
    fn matches_term(&self, lowered_term: &str) -> bool {
        lowered_term.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(lowered_term))
    }
}

/// Outcome of one listing computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    /// Every record matching the term, in the input's order (stable filter).
    pub matched: Vec<T>,
    /// `ceil(matched / page_size)`; 0 when nothing matched.
    pub total_pages: usize,
    /// The requested page's slice of `matched`, truncated at the end.
    pub page_items: Vec<T>,
}

/// Compute the matched subset and the requested page's slice.
///
/// The relative order of `all_items` is preserved: listing order is the
/// store's insertion order, not a relevance ranking. The requested page is
/// taken as-is rather than clamped; a page beyond the last yields empty
/// `page_items` so the caller can detect the overrun from `total_pages`.
///
/// # Examples
///
/// ```
/// use listing::{QueryState, Searchable, query};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Item(usize);
///
/// impl Searchable for Item {
///     fn search_fields(&self) -> Vec<&str> {
///         vec![]
///     }
/// }
///
/// let items: Vec<Item> = (1..=12).map(Item).collect();
/// let page_two = QueryState::new("", 2, 10).expect("valid state");
/// let result = query(&items, &page_two);
///
/// assert_eq!(result.total_pages, 2);
/// assert_eq!(result.page_items, vec![Item(11), Item(12)]);
/// ```
pub fn query<T>(all_items: &[T], state: &QueryState) -> QueryResult<T>
where
    T: Searchable + Clone,
{
    let lowered_term = state.search_term().to_lowercase();
    let matched: Vec<T> = all_items
        .iter()
        .filter(|item| item.matches_term(&lowered_term))
        .cloned()
        .collect();

    let total_pages = matched.len().div_ceil(state.page_size());
    let first_index = (state.current_page() - 1).saturating_mul(state.page_size());
    let page_items: Vec<T> = matched
        .iter()
        .skip(first_index)
        .take(state.page_size())
        .cloned()
        .collect();

    QueryResult {
        matched,
        total_pages,
        page_items,
    }
}
