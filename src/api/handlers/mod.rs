use chrono::Datelike;
use std::sync::Arc;

use crate::catalog::{FileSeasonCatalog, SeasonCatalog};
use crate::config::AppConfig;
use crate::domain::{EventHandle, PlayerTag};
use crate::errors::{Error, Result};
use crate::graphql::GraphQLTransport;
use crate::stats::{SeasonAggregator, StatsEngine};

pub mod events;
pub mod summary;

const DEFAULT_TOP: usize = 8;

pub struct AppState {
    pub aggregator: SeasonAggregator,
    pub catalog: Arc<FileSeasonCatalog>,
}

impl AppState {
    pub fn new(config: &AppConfig, transport: Arc<dyn GraphQLTransport>) -> Self {
        let catalog = Arc::new(FileSeasonCatalog::new(&config.catalog, transport.clone()));
        let engine = StatsEngine::new(transport, config.traversal.clone());
        let season_catalog: Arc<dyn SeasonCatalog> = catalog.clone();

        Self {
            aggregator: SeasonAggregator::new(engine, season_catalog),
            catalog,
        }
    }

    pub fn engine(&self) -> &StatsEngine {
        self.aggregator.engine()
    }
}

/// Season year from a query parameter, the current year when absent
pub fn parse_year(raw: Option<&str>) -> Result<i32> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(chrono::Utc::now().year()),
        Some(s) => s
            .parse::<i32>()
            .map_err(|_| Error::Input(format!("year must be an integer, got {:?}", s))),
    }
}

pub fn require_tag(raw: Option<&str>) -> Result<PlayerTag> {
    raw.and_then(PlayerTag::parse)
        .ok_or_else(|| Error::Input("Missing required parameter: playerTag".to_string()))
}

pub fn require_event(raw: Option<&str>) -> Result<EventHandle> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(EventHandle::new)
        .ok_or_else(|| Error::Input("Missing required parameter: eventSlug".to_string()))
}

pub fn parse_top(raw: Option<&str>) -> Result<usize> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_TOP),
        Some(s) => s
            .parse::<usize>()
            .map_err(|_| Error::Input(format!("top must be a non-negative integer, got {:?}", s))),
    }
}
