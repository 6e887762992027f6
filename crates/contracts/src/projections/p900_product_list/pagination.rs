//! 1-based paging over an already sorted list

/// Items of `page` (1-based). Page 0, a page past the end or a zero page size
/// yield an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(count / page_size)`; 0 when there is nothing to show
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Keep `page` inside `1..=total_pages` (1 when there are no pages)
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_pages() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 4, 1), [1u32, 2, 3, 4]);
        assert_eq!(paginate(&items, 4, 3), [9u32, 10]);
        assert!(paginate(&items, 4, 4).is_empty());
        assert!(paginate(&items, 4, 0).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<u32> = (0..24).collect();
        let pages = total_pages(items.len(), 7);
        assert_eq!(pages, 4);
        let joined: Vec<u32> = (1..=pages)
            .flat_map(|p| paginate(&items, 7, p).iter().copied())
            .collect();
        assert_eq!(joined, items);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 7), 0);
        assert_eq!(total_pages(7, 7), 1);
        assert_eq!(total_pages(8, 7), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = [1, 2, 3];
        assert!(paginate(&items, usize::MAX, 3).is_empty());
    }
}
