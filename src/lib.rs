pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod services;
pub mod stats;

#[cfg(test)]
mod testing;

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_summary(year: i32, tag: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::new(&AppConfig::from_env())?;
        service.summary(year, tag).await
    })
}

pub fn handle_events(year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| chrono::Utc::now().year());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportService::new(&AppConfig::from_env())?;
        service.events(year).await
    })
}
