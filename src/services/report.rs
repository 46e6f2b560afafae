use anyhow::Result;
use log::info;
use serde::Serialize;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::config::AppConfig;
use crate::domain::PlayerTag;
use crate::graphql::StartggClient;

/// One-shot commands printing JSON to stdout
pub struct ReportService {
    state: AppState,
}

impl ReportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Arc::new(StartggClient::new(config)?);
        Ok(Self {
            state: AppState::new(config, client),
        })
    }

    pub async fn summary(&self, year: i32, tag: &str) -> Result<()> {
        let tag = PlayerTag::parse(tag)
            .ok_or_else(|| anyhow::anyhow!("player tag must not be empty"))?;
        info!("Computing {} season summary for {}", year, tag);

        let summary = self.state.aggregator.summarize(year, &tag).await?;
        print_json(&summary)
    }

    pub async fn events(&self, year: i32) -> Result<()> {
        let season = self.state.catalog.resolve_season(year).await?;
        print_json(&season)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
