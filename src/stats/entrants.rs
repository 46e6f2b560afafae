use log::debug;
use serde_json::json;

use super::StatsEngine;
use crate::domain::{EntrantId, EntrantRecord, EventHandle, PlayerTag};
use crate::errors::Result;
use crate::graphql::models::{EntrantNode, EventData};
use crate::graphql::queries::EVENT_ENTRANTS;
use crate::graphql::{self, GraphQLTransport};
use crate::pagination::{Page, Visit, collect};

impl StatsEngine {
    /// Find the entrant `tag` plays for in `event`.
    ///
    /// The first entrant in page order with a matching participant tag wins.
    /// `None` when no entrant matches within the page bound.
    pub async fn resolve_entrant(
        &self,
        event: &EventHandle,
        tag: &PlayerTag,
    ) -> Result<Option<EntrantId>> {
        if tag.is_empty() {
            return Ok(None);
        }

        let transport = self.transport();
        let label = format!("entrants of {}", event);
        let collected = collect(
            &label,
            &self.traversal.entrants,
            |page, per_page| fetch_entrants_page(transport, event, page, per_page),
            |entrant: &EntrantRecord| {
                if entrant.is_played_by(tag) {
                    Visit::KeepAndStop
                } else {
                    Visit::Skip
                }
            },
        )
        .await?;

        let entrant_id = collected.into_first().map(|entrant| entrant.id);
        debug!("Resolved {} in {} to {:?}", tag, event, entrant_id);
        Ok(entrant_id)
    }
}

async fn fetch_entrants_page(
    transport: &dyn GraphQLTransport,
    event: &EventHandle,
    page: usize,
    per_page: usize,
) -> Result<Page<EntrantRecord>> {
    let variables = json!({ "slug": event.as_str(), "page": page, "perPage": per_page });
    let data: EventData = graphql::query(transport, &EVENT_ENTRANTS, variables).await?;

    Ok(data
        .event
        .and_then(|event| event.entrants)
        .map(|entrants| entrants.into_page(EntrantNode::into_record))
        .unwrap_or_else(Page::empty))
}
