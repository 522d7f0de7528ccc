//! Paging bookkeeping for server-paginated lists.

/// Page index, page size, server-reported total and search query of one
/// management table. The server does the slicing; this struct only keeps the
/// numbers consistent (page reset on query/size change, clamping after the
/// total shrinks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedState {
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    /// Server-side row count across the whole query.
    pub total_count: usize,
    pub search_query: String,
}

impl Default for PagedState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 5,
            total_count: 0,
            search_query: String::new(),
        }
    }
}

impl PagedState {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Record the server-reported total and clamp the page index so the
    /// current page never points past the end.
    pub fn set_total(&mut self, total: usize) {
        self.total_count = total;
        let pages = self.total_pages();
        if self.page >= pages {
            self.page = pages.saturating_sub(1);
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size goes back to the first page by convention.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    /// Returns true when the query actually changed; the page index is reset
    /// only in that case so unchanged input does not jump the view around.
    pub fn set_search(&mut self, query: String) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query;
        self.page = 0;
        true
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

/// "6-10 of 23" style label for pagination controls.
pub fn range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0-0 of 0".to_string();
    }
    let start = page * page_size;
    let end = ((page + 1) * page_size).min(total_count);
    format!("{}-{} of {}", start + 1, end, total_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn set_total_clamps_page() {
        let mut paging = PagedState {
            page: 4,
            page_size: 5,
            ..Default::default()
        };
        paging.set_total(6);
        assert_eq!(paging.page, 1);

        paging.set_total(0);
        assert_eq!(paging.page, 0);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut paging = PagedState {
            page: 3,
            ..Default::default()
        };
        paging.set_page_size(25);
        assert_eq!(paging.page, 0);
        assert_eq!(paging.page_size, 25);
    }

    #[test]
    fn search_change_resets_page_only_when_different() {
        let mut paging = PagedState {
            page: 2,
            ..Default::default()
        };
        assert!(paging.set_search("john".into()));
        assert_eq!(paging.page, 0);

        paging.page = 2;
        assert!(!paging.set_search("john".into()));
        assert_eq!(paging.page, 2);
    }

    #[test]
    fn range_label_matches_visible_rows() {
        assert_eq!(range_label(0, 5, 0), "0-0 of 0");
        assert_eq!(range_label(0, 5, 13), "1-5 of 13");
        assert_eq!(range_label(1, 5, 13), "6-10 of 13");
        assert_eq!(range_label(2, 5, 13), "11-13 of 13");
    }
}
