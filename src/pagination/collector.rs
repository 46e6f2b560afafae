use log::{debug, warn};
use std::future::Future;

use super::config::PaginationConfig;
use super::iterator::PageIterator;
use crate::errors::Result;

/// One page of a remote collection
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Page count reported by the remote, `None` when the field was absent
    pub total_pages: Option<usize>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: None,
        }
    }
}

/// What the caller wants done with an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Skip,
    KeepAndStop,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every page the remote reported was read
    Exhausted,
    /// The visitor asked to stop
    Matched,
    /// The page bound was hit first; the items are a partial result
    CircuitBreaker,
}

#[derive(Debug, Clone)]
pub struct Collected<T> {
    pub items: Vec<T>,
    pub stop: StopReason,
}

impl<T> Collected<T> {
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

/// Walk a paged collection from page 1, one request at a time.
///
/// `fetch_page` gets the 1-indexed page number and the page size. Every item
/// is offered to `visit` in page order. A failed fetch ends the walk with that
/// error; nothing is retried.
pub async fn collect<T, F, Fut, V>(
    label: &str,
    config: &PaginationConfig,
    mut fetch_page: F,
    mut visit: V,
) -> Result<Collected<T>>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
    V: FnMut(&T) -> Visit,
{
    let mut pages = PageIterator::new(config.clone());
    let mut items = Vec::new();

    loop {
        if pages.is_exhausted() {
            return Ok(Collected {
                items,
                stop: StopReason::Exhausted,
            });
        }

        if pages.has_reached_max() {
            warn!(
                "Stopped walking {} at the {} page bound, result may be incomplete",
                label,
                pages.max_pages().unwrap_or_default()
            );
            return Ok(Collected {
                items,
                stop: StopReason::CircuitBreaker,
            });
        }

        let page = fetch_page(pages.current_page(), pages.per_page()).await?;
        debug!(
            "Fetched {} page {} ({} items, {:?} pages reported)",
            label,
            pages.current_page(),
            page.items.len(),
            page.total_pages
        );
        pages.update_total(page.total_pages);

        for item in page.items {
            match visit(&item) {
                Visit::Keep => items.push(item),
                Visit::Skip => {}
                Visit::KeepAndStop => {
                    items.push(item);
                    return Ok(Collected {
                        items,
                        stop: StopReason::Matched,
                    });
                }
                Visit::Stop => {
                    return Ok(Collected {
                        items,
                        stop: StopReason::Matched,
                    });
                }
            }
        }

        pages.advance();
    }
}
