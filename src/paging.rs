//! Pagination
//!
//! Page math for the listing view. Pages are 1-based.

/// Number of pages needed for `count` items (0 for an empty list)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(1, total)]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Slice for `page`. Out-of-range pages (including 0) give an empty slice;
/// callers clamp first when they want the nearest valid page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
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

/// One numbered button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// Everything the pagination bar needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub current: usize,
    pub total: usize,
    /// Target of "previous", `None` when disabled
    pub prev: Option<usize>,
    /// Target of "next", `None` when disabled
    pub next: Option<usize>,
    pub pages: Vec<PageLink>,
}

impl PaginationControls {
    pub fn new(current: usize, total: usize, window: usize) -> Self {
        let total = total.max(1);
        let current = clamp_page(current, total);
        let pages = page_window(current, total, window)
            .map(|number| PageLink { number, active: number == current })
            .collect();
        Self {
            current,
            total,
            prev: (current > 1).then(|| current - 1),
            next: (current < total).then(|| current + 1),
            pages,
        }
    }

    /// A bar is only worth drawing with more than one page
    pub fn is_needed(&self) -> bool {
        self.total > 1
    }
}

/// Up to `window` consecutive page numbers around `current`, kept inside
/// `[1, total]`. With an even window the extra slot goes after `current`.
pub fn page_window(current: usize, total: usize, window: usize) -> std::ops::RangeInclusive<usize> {
    let total = total.max(1);
    let size = window.clamp(1, total);
    let current = clamp_page(current, total);

    let mut start = current.saturating_sub((size - 1) / 2).max(1);
    if start + size - 1 > total {
        start = total + 1 - size;
    }
    start..=start + size - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(4, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(9, 0), 0);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 1, 4), &[1, 2, 3, 4]);
        assert_eq!(paginate(&items, 3, 4), &[9, 10]);
        assert!(paginate(&items, 4, 4).is_empty());
        assert!(paginate(&items, 0, 4).is_empty());
        assert!(paginate(&items, usize::MAX, 4).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_window_positions() {
        assert_eq!(page_window(1, 10, 4), 1..=4);
        assert_eq!(page_window(5, 10, 4), 4..=7);
        assert_eq!(page_window(10, 10, 4), 7..=10);
        assert_eq!(page_window(2, 3, 4), 1..=3);
        assert_eq!(page_window(1, 1, 4), 1..=1);
    }

    #[test]
    fn test_controls_first_and_last_page() {
        let first = PaginationControls::new(1, 5, 4);
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(2));
        assert!(first.pages[0].active);

        let last = PaginationControls::new(5, 5, 4);
        assert_eq!(last.prev, Some(4));
        assert_eq!(last.next, None);
        assert!(last.pages.last().unwrap().active);

        let single = PaginationControls::new(1, 1, 4);
        assert!(!single.is_needed());
        assert_eq!(single.prev, None);
        assert_eq!(single.next, None);
    }

    proptest! {
        #[test]
        fn test_pages_reassemble_list(len in 0usize..100, page_size in 1usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, page_size);
            let mut joined = Vec::new();
            for page in 1..=pages {
                joined.extend_from_slice(paginate(&items, page, page_size));
            }
            prop_assert_eq!(&joined, &items);

            if pages > 0 {
                let last = paginate(&items, pages, page_size).len();
                let expected = if len % page_size == 0 { page_size } else { len % page_size };
                prop_assert_eq!(last, expected);
            }
        }

        #[test]
        fn test_window_invariants(total in 1usize..60, window in 1usize..8, seed in 0usize..1000) {
            let current = seed % total + 1;
            let controls = PaginationControls::new(current, total, window);

            prop_assert!(controls.pages.len() <= window);
            prop_assert!(controls.pages.iter().any(|p| p.number == current && p.active));
            prop_assert_eq!(controls.pages.iter().filter(|p| p.active).count(), 1);
            prop_assert!(controls.pages.iter().all(|p| (1..=total).contains(&p.number)));
            prop_assert_eq!(controls.prev.is_none(), current == 1);
            prop_assert_eq!(controls.next.is_none(), current == total);
        }
    }
}
