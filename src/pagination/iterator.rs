use super::config::PaginationConfig;

/// 1-indexed page cursor for one traversal
pub struct PageIterator {
    current_page: usize,
    total_pages: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            config,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.config.per_page
    }

    pub fn max_pages(&self) -> Option<usize> {
        self.config.max_pages
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_page > self.total_pages
    }

    pub fn has_reached_max(&self) -> bool {
        self.config.max_pages.is_some_and(|max| self.current_page > max)
    }

    /// Record the page count reported by the remote. Missing or zero counts clamp to 1.
    pub fn update_total(&mut self, total_pages: Option<usize>) {
        self.total_pages = total_pages.unwrap_or(1).max(1);
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}
