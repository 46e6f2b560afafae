use serde::{Deserialize, Serialize};

use crate::catalog::{ResolvedSeason, TournamentEntry};
use crate::stats::TopStanding;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    pub year: Option<String>,
    pub player_tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    pub event_slug: Option<String>,
    pub player_tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsParams {
    pub event_slug: Option<String>,
    pub top: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeagueEventsParams {
    pub year: Option<String>,
    pub resolve: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStandingsResponse {
    pub event_slug: String,
    pub top: usize,
    pub standings: Vec<TopStanding>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum LeagueEventsResponse {
    Tournaments {
        year: i32,
        tournaments: Vec<TournamentEntry>,
    },
    Resolved(ResolvedSeason),
}
