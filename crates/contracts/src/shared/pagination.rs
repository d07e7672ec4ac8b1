use std::ops::Range;

/// Items per page in the magazine carousel
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Current page over an ordered collection of known length.
///
/// The state can never describe an out-of-bounds slice: stepping past either
/// end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationController {
    page_index: usize,
    page_size: usize,
    total_count: usize,
}

impl PaginationController {
    /// A page size of 0 is treated as 1
    pub fn new(page_size: usize, total_count: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_count,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Index range of the current page, clipped to the collection
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size);
        if start >= self.total_count {
            return 0..0;
        }
        let end = start.saturating_add(self.page_size).min(self.total_count);
        start..end
    }

    pub fn visible_slice<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        // total_count may lag behind the collection; never index past it
        let end = range.end.min(collection.len());
        let start = range.start.min(end);
        &collection[start..end]
    }

    pub fn can_advance(&self) -> bool {
        (self.page_index + 1).saturating_mul(self.page_size) < self.total_count
    }

    pub fn can_retreat(&self) -> bool {
        self.page_index > 0
    }

    /// Returns whether the page changed
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Returns whether the page changed
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// New collection (identifier changed or data reloaded): back to the first page
    pub fn reset(&mut self, total_count: usize) {
        self.page_index = 0;
        self.total_count = total_count;
    }

    /// `"2 / 5"`, one-based
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.page_index + 1, self.page_count().max(1))
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_pages_cover_every_item_once() {
        for n in 0..=20usize {
            for p in 1..=7usize {
                let items: Vec<usize> = (0..n).collect();
                let mut pager = PaginationController::new(p, n);
                let mut seen = Vec::new();

                for _ in 0..pager.page_count() {
                    seen.extend_from_slice(pager.visible_slice(&items));
                    pager.advance();
                }
                assert_eq!(seen, items, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn test_bounds_flags() {
        let mut pager = PaginationController::new(6, 13);
        assert!(!pager.can_retreat());
        assert!(pager.can_advance());

        pager.advance();
        assert!(pager.can_retreat());
        assert!(pager.can_advance());

        pager.advance();
        assert_eq!(pager.page_index(), 2);
        assert!(!pager.can_advance());
        assert_eq!(pager.visible_range(), 12..13);
    }

    #[test]
    fn test_out_of_bounds_steps_are_noops() {
        let mut pager = PaginationController::new(6, 6);
        assert!(!pager.retreat());
        assert!(!pager.advance());
        assert_eq!(pager.page_index(), 0);

        let mut empty = PaginationController::new(6, 0);
        assert!(!empty.advance());
        assert!(empty.visible_slice::<u8>(&[]).is_empty());
        assert_eq!(empty.page_label(), "1 / 1");
    }

    #[test]
    fn test_carousel_of_thirty() {
        let items: Vec<usize> = (0..30).collect();
        let mut pager = PaginationController::new(DEFAULT_PAGE_SIZE, items.len());

        assert_eq!(pager.visible_slice(&items), &items[0..6]);
        assert!(pager.can_advance());

        pager.advance();
        assert_eq!(pager.visible_slice(&items), &items[6..12]);
        assert_eq!(pager.page_label(), "2 / 5");

        while pager.advance() {}
        assert_eq!(pager.visible_slice(&items), &items[24..30]);
        assert!(!pager.can_advance());
        assert_eq!(pager.page_index(), 4);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = PaginationController::new(2, 10);
        pager.advance();
        pager.advance();
        pager.reset(3);
        assert_eq!(pager.page_index(), 0);
        assert_eq!(pager.page_count(), 2);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let pager = PaginationController::new(0, 3);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.page_count(), 3);
    }

    #[test]
    fn test_slice_never_exceeds_collection() {
        let pager = PaginationController::new(6, 10);
        let short = [1, 2, 3];
        assert_eq!(pager.visible_slice(&short), &[1, 2, 3]);
    }
}
