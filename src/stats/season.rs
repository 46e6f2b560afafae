use log::{debug, info};
use std::sync::Arc;

use super::StatsEngine;
use crate::catalog::SeasonCatalog;
use crate::domain::{PlayerTag, SeasonSummary, SeasonTally};
use crate::errors::{Error, Result};

/// Folds one player's events of a season into a [`SeasonSummary`]
#[derive(Clone)]
pub struct SeasonAggregator {
    engine: StatsEngine,
    catalog: Arc<dyn SeasonCatalog>,
}

impl SeasonAggregator {
    pub fn new(engine: StatsEngine, catalog: Arc<dyn SeasonCatalog>) -> Self {
        Self { engine, catalog }
    }

    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    /// Catalog failures fail the whole summary; a failing event only loses its own data.
    pub async fn summarize(&self, year: i32, tag: &PlayerTag) -> Result<SeasonSummary> {
        if tag.is_empty() {
            return Err(Error::Input("playerTag must not be empty".to_string()));
        }

        let events = self.catalog.event_handles(year).await?;
        info!("Summarizing {} over {} events of season {}", tag, events.len(), year);

        let mut tally = SeasonTally::new();
        for event in &events {
            let stats = self.engine.event_stats(event, tag).await;
            debug!("{} in {}: {:?}", tag, event, stats);
            tally.record_event(&stats);
        }

        let summary = tally.finish(year, tag.clone());
        info!(
            "Season {} for {}: {} attended, {} placements, {}-{} sets",
            year,
            tag,
            summary.tournaments_attended,
            summary.placements_counted,
            summary.set_wins,
            summary.set_losses
        );
        Ok(summary)
    }
}
