//! Per-event and per-season statistics for one player, computed from start.gg.
//!
//! Every remote call made here is awaited before the next one starts.

mod attendance;
mod entrants;
mod season;
mod sets;
mod standings;

pub use season::SeasonAggregator;
pub use sets::{order_sets, tally_sets};
pub use standings::TopStanding;

use log::warn;
use std::sync::Arc;

use crate::config::TraversalSettings;
use crate::domain::{Attendance, EventHandle, EventStats, PlayerTag};
use crate::graphql::GraphQLTransport;

/// Runs the traversals for one event against a GraphQL transport
#[derive(Clone)]
pub struct StatsEngine {
    transport: Arc<dyn GraphQLTransport>,
    traversal: TraversalSettings,
}

impl StatsEngine {
    pub fn new(transport: Arc<dyn GraphQLTransport>, traversal: TraversalSettings) -> Self {
        Self {
            transport,
            traversal,
        }
    }

    fn transport(&self) -> &dyn GraphQLTransport {
        self.transport.as_ref()
    }

    /// Attendance, placement and set record for one event.
    ///
    /// Remote failures never escape: a failed attendance lookup counts as not
    /// attended, a failed set walk leaves the set fields empty.
    pub async fn event_stats(&self, event: &EventHandle, tag: &PlayerTag) -> EventStats {
        let attendance = match self.lookup_attendance(event, tag).await {
            Ok(attendance) => attendance,
            Err(e) => {
                warn!("Attendance lookup failed for {} in {}: {}", tag, event, e);
                Attendance::absent()
            }
        };

        if !attendance.attended {
            return EventStats::new(attendance, None);
        }

        let sets = match self.compute_set_stats(event, tag).await {
            Ok(sets) => sets,
            Err(e) => {
                warn!("Skipping set stats for {} in {}: {}", tag, event, e);
                None
            }
        };

        EventStats::new(attendance, sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::queries::{ENTRANT_SETS, EVENT_STANDINGS};
    use crate::testing::{FakeEvent, FakeStartgg};

    fn engine(fake: FakeStartgg) -> StatsEngine {
        StatsEngine::new(Arc::new(fake), TraversalSettings::default())
    }

    fn event() -> EventHandle {
        EventHandle::new("tournament/t/event/melee-singles")
    }

    fn sample_event() -> FakeEvent {
        FakeEvent::new()
            .entrant("1", &["Foo"])
            .entrant("2", &["Bar"])
            .standing("2", 1)
            .standing("1", 2)
            .set("s1", Some("1"), Some(10), &["1", "2"])
            .set("s2", Some("2"), Some(20), &["1", "2"])
    }

    #[tokio::test]
    async fn test_event_stats_combines_lookups() {
        let fake = FakeStartgg::new().with_event(event().as_str(), sample_event());
        let stats = engine(fake).event_stats(&event(), &PlayerTag::new("foo")).await;

        assert!(stats.attended);
        assert_eq!(stats.placement, Some(2));
        assert_eq!(stats.set_wins, Some(1));
        assert_eq!(stats.set_losses, Some(1));
        assert_eq!(stats.best_win_streak, Some(1));
    }

    #[tokio::test]
    async fn test_absent_player_has_no_set_walk() {
        let fake = Arc::new(FakeStartgg::new().with_event(event().as_str(), sample_event()));
        let engine = StatsEngine::new(fake.clone(), TraversalSettings::default());
        let stats = engine.event_stats(&event(), &PlayerTag::new("nobody")).await;

        assert_eq!(stats, EventStats::new(Attendance::absent(), None));
        assert_eq!(fake.calls_for(ENTRANT_SETS.name), 0);
        assert_eq!(fake.calls_for(EVENT_STANDINGS.name), 0);
    }

    #[tokio::test]
    async fn test_set_failure_keeps_attendance() {
        let fake = FakeStartgg::new()
            .with_event(event().as_str(), sample_event())
            .failing(event().as_str(), ENTRANT_SETS.name);
        let stats = engine(fake).event_stats(&event(), &PlayerTag::new("Foo")).await;

        assert!(stats.attended);
        assert_eq!(stats.placement, Some(2));
        assert_eq!(stats.set_wins, None);
        assert_eq!(stats.best_win_streak, None);
    }

    #[tokio::test]
    async fn test_attendance_failure_counts_as_absent() {
        let fake = FakeStartgg::new()
            .with_event(event().as_str(), sample_event())
            .failing(event().as_str(), EVENT_STANDINGS.name);
        let stats = engine(fake).event_stats(&event(), &PlayerTag::new("Foo")).await;

        assert!(!stats.attended);
        assert_eq!(stats.placement, None);
        assert_eq!(stats.set_wins, None);
    }
}
