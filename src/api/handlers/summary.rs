use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, parse_year, require_event, require_tag};
use crate::api::models::{AttendanceRequest, SummaryParams};
use crate::domain::{Attendance, SeasonSummary};
use crate::errors::Result;

pub async fn get_player_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<SeasonSummary>> {
    let tag = require_tag(params.player_tag.as_deref())?;
    let year = parse_year(params.year.as_deref())?;

    let summary = state.aggregator.summarize(year, &tag).await?;
    Ok(Json(summary))
}

pub async fn post_attendance(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AttendanceRequest>,
) -> Result<Json<Attendance>> {
    let event = require_event(request.event_slug.as_deref())?;
    let tag = require_tag(request.player_tag.as_deref())?;

    let attendance = state.engine().lookup_attendance(&event, &tag).await?;
    Ok(Json(attendance))
}
