//! Pagination range selection for the dashboard pager.

/// Maximum number of page buttons shown at once.
const WINDOW: u64 = 5;

/// Ordered page numbers to render, at most five, clamped to
/// `[1, total_pages]` and centered on the current page. When the centered
/// window would run past the last page it slides left so that
/// `min(5, total_pages)` numbers still show.
pub fn pagination_range(current_page: u64, total_pages: u64) -> Vec<u64> {
    let total_pages = total_pages.max(1);
    let current = current_page.clamp(1, total_pages);

    let mut start = current.saturating_sub(WINDOW / 2).max(1);
    let end = (start + WINDOW - 1).min(total_pages);
    if end - start < WINDOW - 1 {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }
    (start..=end).collect()
}

/// The jump-to-last control is rendered only when the current page is not
/// within two pages of the end.
pub fn show_jump_to_last(current_page: u64, total_pages: u64) -> bool {
    current_page + 2 < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_in_the_middle() {
        assert_eq!(pagination_range(5, 9), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_clamps_at_the_left_edge() {
        assert_eq!(pagination_range(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(pagination_range(2, 9), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_slides_left_at_the_right_edge() {
        assert_eq!(pagination_range(9, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(pagination_range(8, 9), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn short_collections_show_every_page() {
        assert_eq!(pagination_range(1, 1), vec![1]);
        assert_eq!(pagination_range(2, 3), vec![1, 2, 3]);
        assert_eq!(pagination_range(3, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(pagination_range(0, 3), vec![1, 2, 3]);
        assert_eq!(pagination_range(99, 3), vec![1, 2, 3]);
        assert_eq!(pagination_range(4, 0), vec![1]);
    }

    #[test]
    fn range_always_contains_current_page_and_stays_in_bounds() {
        for total in 1..=25u64 {
            for current in 1..=total {
                let range = pagination_range(current, total);
                assert!(!range.is_empty());
                assert!(range.len() as u64 <= WINDOW);
                assert_eq!(range.len() as u64, WINDOW.min(total));
                assert!(range.contains(&current));
                assert!(range.iter().all(|&p| p >= 1 && p <= total));
                // Consecutive integers.
                assert!(range.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn jump_to_last_only_far_from_the_end() {
        assert!(show_jump_to_last(1, 10));
        assert!(show_jump_to_last(7, 10));
        assert!(!show_jump_to_last(8, 10));
        assert!(!show_jump_to_last(10, 10));
        assert!(!show_jump_to_last(1, 3));
    }
}
