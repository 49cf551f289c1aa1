// src/domain/pagination.rs

use std::ops::Range;

/// One page of a listing table. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl Page {
    /// Out-of-range requests are clamped, never rejected: page 0 is page 1,
    /// page 99 of 3 is page 3.
    pub fn new(requested: usize, total_items: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let mut page = Self {
            number: 1,
            per_page,
            total_items,
        };
        page.number = requested.clamp(1, page.page_count());
        page
    }

    /// Always at least 1, so an empty sheet still has a (blank) first page.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Index range of this page's items.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.number - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_items_into_pages() {
        let p = Page::new(2, 25, 10);
        assert_eq!(p.page_count(), 3);
        assert_eq!(p.range(), 10..20);
        assert!(p.has_prev());
        assert!(p.has_next());

        let last = Page::new(3, 25, 10);
        assert_eq!(last.range(), 20..25);
        assert!(!last.has_next());
    }

    #[test]
    fn clamps_requested_page() {
        assert_eq!(Page::new(0, 25, 10).number, 1);
        assert_eq!(Page::new(99, 25, 10).number, 3);
    }

    #[test]
    fn empty_sheet_has_one_empty_page() {
        let p = Page::new(5, 0, 10);
        assert_eq!(p.number, 1);
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.range(), 0..0);
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }
}
