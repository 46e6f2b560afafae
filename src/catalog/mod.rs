mod event_pick;
mod season_file;

pub use event_pick::{event_handle_for, pick_event, strip_tournament_prefix};
pub use season_file::{
    FileSeasonCatalog, ResolvedEvent, ResolvedSeason, SeasonFile, TournamentEntry,
    UnresolvedTournament,
};

use async_trait::async_trait;

use crate::domain::EventHandle;
use crate::errors::Result;

/// Source of the events that make up a season
#[async_trait]
pub trait SeasonCatalog: Send + Sync {
    /// Events of `year` in catalog order. Unknown years are [`crate::errors::Error::NotFound`].
    async fn event_handles(&self, year: i32) -> Result<Vec<EventHandle>>;
}
