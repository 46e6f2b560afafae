mod collector;
mod config;
mod iterator;

pub use collector::{Collected, Page, StopReason, Visit, collect};
pub use config::PaginationConfig;
pub use iterator::PageIterator;
