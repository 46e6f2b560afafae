use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    events::{get_event_standings, get_league_events},
    summary::{get_player_summary, post_attendance},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/playerSummary", get(get_player_summary))
        .route("/api/attendance", post(post_attendance))
        .route("/api/eventStandings", get(get_event_standings))
        .route("/api/leagueEvents", get(get_league_events))
        .with_state(state)
}
