/// Configuration for paginated requests
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    pub per_page: usize,
    /// Circuit breaker: pages past this bound are never requested
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(80)
    }
}
