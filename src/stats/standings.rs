use serde::Serialize;

use super::StatsEngine;
use super::attendance::fetch_standings_page;
use crate::domain::{EventHandle, StandingRecord};
use crate::errors::{Error, Result};
use crate::pagination::{Visit, collect};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStanding {
    pub placement: Option<u32>,
    pub gamer_tag: String,
}

impl StatsEngine {
    /// The first `top` published standings of `event` that name a player
    pub async fn top_standings(&self, event: &EventHandle, top: usize) -> Result<Vec<TopStanding>> {
        if top == 0 {
            return Ok(Vec::new());
        }

        let transport = self.transport();
        let label = format!("top standings of {}", event);
        let mut kept = 0;
        let collected = collect(
            &label,
            &self.traversal.top_standings,
            |page, per_page| async move {
                fetch_standings_page(transport, event, page, per_page)
                    .await?
                    .ok_or_else(|| Error::NotFound(format!("standings for {}", event)))
            },
            |standing: &StandingRecord| {
                if standing.gamer_tag.is_none() {
                    return Visit::Skip;
                }
                kept += 1;
                if kept >= top { Visit::KeepAndStop } else { Visit::Keep }
            },
        )
        .await?;

        Ok(collected
            .items
            .into_iter()
            .filter_map(|standing| {
                Some(TopStanding {
                    placement: standing.placement,
                    gamer_tag: standing.gamer_tag?,
                })
            })
            .collect())
    }
}
