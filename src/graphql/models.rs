//! Raw start.gg response shapes.
//!
//! Every field is optional: start.gg returns `null` for events it cannot see,
//! for standings that are not published yet and for sets that never finished.

use serde::Deserialize;

use crate::domain::{EntrantRecord, Id, SetRecord, StandingRecord};
use crate::pagination::Page;

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub event: Option<EventNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventNode {
    pub entrants: Option<Connection<EntrantNode>>,
    pub standings: Option<Connection<StandingNode>>,
    pub sets: Option<Connection<SetNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub page_info: Option<PageInfo>,
    pub nodes: Option<Vec<Option<T>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_pages: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantNode {
    pub gamer_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntrantNode {
    pub id: Option<Id>,
    pub participants: Option<Vec<Option<ParticipantNode>>>,
}

#[derive(Debug, Deserialize)]
pub struct StandingNode {
    pub placement: Option<i64>,
    pub entrant: Option<EntrantNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNode {
    pub id: Option<Id>,
    pub winner_id: Option<Id>,
    pub completed_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TournamentData {
    pub tournament: Option<TournamentNode>,
}

#[derive(Debug, Deserialize)]
pub struct TournamentNode {
    pub id: Option<Id>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub events: Option<Vec<Option<TournamentEventNode>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentEventNode {
    pub id: Option<Id>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub videogame: Option<VideogameNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideogameNode {
    pub id: Option<Id>,
    pub name: Option<String>,
}

impl<T> Connection<T> {
    /// Convert into a page, dropping nodes `convert` rejects
    pub fn into_page<R>(self, convert: impl FnMut(T) -> Option<R>) -> Page<R> {
        let total_pages = self
            .page_info
            .and_then(|info| info.total_pages)
            .map(|n| usize::try_from(n).unwrap_or(0));
        let items = self
            .nodes
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(convert)
            .collect();
        Page { items, total_pages }
    }
}

impl EntrantNode {
    pub fn tags(&self) -> Vec<String> {
        self.participants
            .iter()
            .flatten()
            .flatten()
            .filter_map(|p| p.gamer_tag.clone())
            .collect()
    }

    /// Tag of the first listed participant, `None` when that participant has no usable tag
    pub fn first_tag(&self) -> Option<String> {
        self.participants
            .as_ref()?
            .first()?
            .as_ref()?
            .gamer_tag
            .clone()
            .filter(|tag| !tag.is_empty())
    }

    pub fn into_record(self) -> Option<EntrantRecord> {
        let participant_tags = self.tags();
        Some(EntrantRecord {
            id: self.id?,
            participant_tags,
        })
    }
}

impl StandingNode {
    pub fn into_record(self) -> StandingRecord {
        let placement = self
            .placement
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok());
        let gamer_tag = self.entrant.as_ref().and_then(EntrantNode::first_tag);
        StandingRecord {
            entrant_id: self.entrant.and_then(|e| e.id),
            placement,
            gamer_tag,
        }
    }
}

impl SetNode {
    pub fn into_record(self) -> SetRecord {
        SetRecord {
            id: self.id.unwrap_or_else(|| Id::new("")),
            winner_id: self.winner_id,
            completed_at: self.completed_at,
        }
    }
}

impl TournamentNode {
    pub fn into_events(self) -> Vec<TournamentEventNode> {
        self.events.unwrap_or_default().into_iter().flatten().collect()
    }
}
