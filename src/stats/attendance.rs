use serde_json::json;

use super::StatsEngine;
use crate::domain::{Attendance, EventHandle, PlayerTag, StandingRecord};
use crate::errors::{Error, Result};
use crate::graphql::models::{EventData, StandingNode};
use crate::graphql::queries::EVENT_STANDINGS;
use crate::graphql::{self, GraphQLTransport};
use crate::pagination::{Page, Visit, collect};

impl StatsEngine {
    /// Did `tag` enter `event`, and where did they place?
    ///
    /// Placement stays `None` when the event has no published standing for the
    /// entrant, e.g. while it is still running.
    pub async fn lookup_attendance(
        &self,
        event: &EventHandle,
        tag: &PlayerTag,
    ) -> Result<Attendance> {
        let Some(entrant_id) = self.resolve_entrant(event, tag).await? else {
            return Ok(Attendance::absent());
        };

        let transport = self.transport();
        let label = format!("standings of {}", event);
        let collected = collect(
            &label,
            &self.traversal.standings,
            |page, per_page| async move {
                let page = fetch_standings_page(transport, event, page, per_page).await?;
                Ok::<_, Error>(page.unwrap_or_else(Page::empty))
            },
            |standing: &StandingRecord| {
                if standing.entrant_id.as_ref() == Some(&entrant_id) {
                    Visit::KeepAndStop
                } else {
                    Visit::Skip
                }
            },
        )
        .await?;

        Ok(Attendance {
            attended: true,
            placement: collected.into_first().and_then(|standing| standing.placement),
        })
    }
}

/// One standings page, `None` when start.gg returned no standings object
pub(super) async fn fetch_standings_page(
    transport: &dyn GraphQLTransport,
    event: &EventHandle,
    page: usize,
    per_page: usize,
) -> Result<Option<Page<StandingRecord>>> {
    let variables = json!({ "slug": event.as_str(), "page": page, "perPage": per_page });
    let data: EventData = graphql::query(transport, &EVENT_STANDINGS, variables).await?;

    Ok(data
        .event
        .and_then(|event| event.standings)
        .map(|standings| standings.into_page(|node: StandingNode| Some(node.into_record()))))
}
