use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, parse_top, parse_year, require_event};
use crate::api::models::{
    EventStandingsResponse, LeagueEventsParams, LeagueEventsResponse, StandingsParams,
};
use crate::errors::Result;

pub async fn get_event_standings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<EventStandingsResponse>> {
    let event = require_event(params.event_slug.as_deref())?;
    let top = parse_top(params.top.as_deref())?;

    let standings = state.engine().top_standings(&event, top).await?;
    Ok(Json(EventStandingsResponse {
        event_slug: event.0,
        top,
        standings,
    }))
}

/// `resolve=0` lists the season file as is, anything else resolves every tournament
pub async fn get_league_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeagueEventsParams>,
) -> Result<Json<LeagueEventsResponse>> {
    let year = parse_year(params.year.as_deref())?;

    if params.resolve.as_deref().map(str::trim) == Some("0") {
        let season = state.catalog.load_season(year).await?;
        return Ok(Json(LeagueEventsResponse::Tournaments {
            year,
            tournaments: season.tournaments,
        }));
    }

    let season = state.catalog.resolve_season(year).await?;
    Ok(Json(LeagueEventsResponse::Resolved(season)))
}
