//! Sliding window of page-number buttons around the current page.

/// Maximum number of page buttons rendered at once.
pub const PAGE_WINDOW_LEN: usize = 5;

/// Pages to render as buttons for the given position.
///
/// Returns at most [`PAGE_WINDOW_LEN`] contiguous page numbers that include
/// `current_page` whenever it lies within `1..=total_pages`, sliding so the
/// window itself stays within that range. Near either edge the window pins
/// to that edge rather than centring on the current page. Empty when there
/// are no pages.
///
/// # Examples
///
/// ```
/// use listing::page_window;
///
/// assert_eq!(page_window(7, 12), vec![5, 6, 7, 8, 9]);
/// assert_eq!(page_window(1, 3), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let (first, last) = if total_pages <= PAGE_WINDOW_LEN {
        (1, total_pages)
    } else if current_page <= 3 {
        (1, PAGE_WINDOW_LEN)
    } else if current_page >= total_pages - 2 {
        (total_pages - (PAGE_WINDOW_LEN - 1), total_pages)
    } else {
        (current_page - 2, current_page + 2)
    };

    (first..=last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 12, vec![1, 2, 3, 4, 5])]
    #[case(3, 12, vec![1, 2, 3, 4, 5])]
    #[case(4, 12, vec![2, 3, 4, 5, 6])]
    #[case(7, 12, vec![5, 6, 7, 8, 9])]
    #[case(10, 12, vec![8, 9, 10, 11, 12])]
    #[case(12, 12, vec![8, 9, 10, 11, 12])]
    fn window_slides_with_the_current_page(
        #[case] current: usize,
        #[case] total: usize,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(page_window(current, total), expected);
    }

    #[rstest]
    #[case(1, 3)]
    #[case(2, 3)]
    #[case(3, 3)]
    fn small_totals_show_every_page(#[case] current: usize, #[case] total: usize) {
        assert_eq!(page_window(current, total), vec![1, 2, 3]);
    }

    #[test]
    fn no_pages_means_no_buttons() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn window_always_contains_the_current_page() {
        for total in 1..=20 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(
                    window.contains(&current),
                    "page {current} missing from window for {total} pages"
                );
                assert!(window.len() <= PAGE_WINDOW_LEN);
                assert!(window.iter().all(|page| (1..=total).contains(page)));
            }
        }
    }
}
