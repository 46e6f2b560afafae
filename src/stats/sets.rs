use log::debug;
use serde_json::json;

use super::StatsEngine;
use crate::domain::{EntrantId, EventHandle, PlayerTag, SetRecord, SetStats};
use crate::errors::Result;
use crate::graphql::models::{EventData, SetNode};
use crate::graphql::queries::ENTRANT_SETS;
use crate::graphql::{self, GraphQLTransport};
use crate::pagination::{Page, Visit, collect};

/// Sets without a completion time sort before every timestamped set
const MISSING_COMPLETED_AT: i64 = -1;

impl StatsEngine {
    /// Set wins, losses and longest win streak of `tag` in `event`.
    ///
    /// `None` when the player cannot be resolved to an entrant.
    pub async fn compute_set_stats(
        &self,
        event: &EventHandle,
        tag: &PlayerTag,
    ) -> Result<Option<SetStats>> {
        let Some(entrant_id) = self.resolve_entrant(event, tag).await? else {
            return Ok(None);
        };

        let transport = self.transport();
        let entrant = &entrant_id;
        let label = format!("sets of entrant {} in {}", entrant_id, event);
        let collected = collect(
            &label,
            &self.traversal.sets,
            |page, per_page| fetch_sets_page(transport, event, entrant, page, per_page),
            |_| Visit::Keep,
        )
        .await?;

        let mut sets = collected.items;
        order_sets(&mut sets);
        let stats = tally_sets(&entrant_id, &sets);
        debug!("Set stats for {} in {}: {:?}", tag, event, stats);
        Ok(Some(stats))
    }
}

/// Sort by completion time, then by set id, so streaks do not depend on delivery order
pub fn order_sets(sets: &mut [SetRecord]) {
    sets.sort_by(|a, b| {
        let a_key = a.completed_at.unwrap_or(MISSING_COMPLETED_AT);
        let b_key = b.completed_at.unwrap_or(MISSING_COMPLETED_AT);
        a_key.cmp(&b_key).then_with(|| a.id.cmp(&b.id))
    });
}

/// Count wins, losses and the longest run of wins over already ordered sets.
///
/// Sets without a winner are skipped and leave the current streak intact.
pub fn tally_sets(entrant_id: &EntrantId, sets: &[SetRecord]) -> SetStats {
    let mut stats = SetStats::default();
    let mut current_streak = 0;

    for winner in sets.iter().filter_map(|set| set.winner_id.as_ref()) {
        if winner == entrant_id {
            stats.set_wins += 1;
            current_streak += 1;
            stats.best_win_streak = stats.best_win_streak.max(current_streak);
        } else {
            stats.set_losses += 1;
            current_streak = 0;
        }
    }

    stats
}

async fn fetch_sets_page(
    transport: &dyn GraphQLTransport,
    event: &EventHandle,
    entrant_id: &EntrantId,
    page: usize,
    per_page: usize,
) -> Result<Page<SetRecord>> {
    let variables = json!({
        "slug": event.as_str(),
        "entrantId": entrant_id,
        "page": page,
        "perPage": per_page,
    });
    let data: EventData = graphql::query(transport, &ENTRANT_SETS, variables).await?;

    Ok(data
        .event
        .and_then(|event| event.sets)
        .map(|sets| sets.into_page(|node: SetNode| Some(node.into_record())))
        .unwrap_or_else(Page::empty))
}
