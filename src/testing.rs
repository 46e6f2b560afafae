//! In-memory start.gg used by the unit tests.

use async_trait::async_trait;
use graphql_client::QueryBody;
use serde_json::{Map, Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::catalog::SeasonCatalog;
use crate::domain::EventHandle;
use crate::errors::{Error, Result};
use crate::graphql::GraphQLTransport;
use crate::graphql::queries::{ENTRANT_SETS, EVENT_ENTRANTS, EVENT_STANDINGS, TOURNAMENT_EVENTS};

struct FakeSet {
    id: String,
    winner_id: Option<String>,
    completed_at: Option<i64>,
    entrant_ids: Vec<String>,
}

/// Entrants, standings and sets of one event, served in insertion order
#[derive(Default)]
pub struct FakeEvent {
    entrants: Vec<(String, Vec<String>)>,
    standings: Vec<(String, u32)>,
    sets: Vec<FakeSet>,
}

impl FakeEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entrant(mut self, id: &str, tags: &[&str]) -> Self {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        self.entrants.push((id.to_string(), tags));
        self
    }

    pub fn standing(mut self, entrant_id: &str, placement: u32) -> Self {
        self.standings.push((entrant_id.to_string(), placement));
        self
    }

    pub fn set(
        mut self,
        id: &str,
        winner_id: Option<&str>,
        completed_at: Option<i64>,
        entrant_ids: &[&str],
    ) -> Self {
        self.sets.push(FakeSet {
            id: id.to_string(),
            winner_id: winner_id.map(str::to_string),
            completed_at,
            entrant_ids: entrant_ids.iter().map(|e| e.to_string()).collect(),
        });
        self
    }

    fn entrant_json(&self, id: &str) -> Value {
        let participants: Vec<Value> = self
            .entrants
            .iter()
            .find(|(entrant_id, _)| entrant_id == id)
            .map(|(_, tags)| tags.iter().map(|tag| json!({ "gamerTag": tag })).collect())
            .unwrap_or_default();
        json!({ "id": id, "participants": participants })
    }
}

/// Fake GraphQL transport serving [`FakeEvent`]s with real page slicing
#[derive(Default)]
pub struct FakeStartgg {
    events: HashMap<String, FakeEvent>,
    tournaments: HashMap<String, Value>,
    failures: HashSet<(String, &'static str)>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeStartgg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, slug: &str, event: FakeEvent) -> Self {
        self.events.insert(slug.to_string(), event);
        self
    }

    pub fn with_tournament(mut self, slug: &str, tournament: Value) -> Self {
        self.tournaments.insert(slug.to_string(), tournament);
        self
    }

    /// Make every `operation` call for `slug` fail with an HTTP 500
    pub fn failing(mut self, slug: &str, operation: &'static str) -> Self {
        self.failures.insert((slug.to_string(), operation));
        self
    }

    pub fn calls_for(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| **name == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn operation_name(name: &str) -> Option<&'static str> {
        [EVENT_ENTRANTS, EVENT_STANDINGS, ENTRANT_SETS, TOURNAMENT_EVENTS]
            .into_iter()
            .find(|op| op.name == name)
            .map(|op| op.name)
    }

    fn respond(&self, operation: &'static str, variables: &Value) -> Value {
        let slug = variables["slug"].as_str().unwrap_or_default();

        if operation == TOURNAMENT_EVENTS.name {
            let tournament = self.tournaments.get(slug).cloned().unwrap_or(Value::Null);
            return json!({ "tournament": tournament });
        }

        let Some(event) = self.events.get(slug) else {
            return json!({ "event": null });
        };
        let page = variables["page"].as_u64().unwrap_or(1) as usize;
        let per_page = variables["perPage"].as_u64().unwrap_or(1) as usize;

        let (field, nodes): (&str, Vec<Value>) = if operation == EVENT_ENTRANTS.name {
            let nodes = event.entrants.iter().map(|(id, _)| event.entrant_json(id)).collect();
            ("entrants", nodes)
        } else if operation == EVENT_STANDINGS.name {
            if event.standings.is_empty() {
                return json!({ "event": { "standings": null } });
            }
            let nodes = event
                .standings
                .iter()
                .map(|(id, placement)| {
                    json!({ "placement": placement, "entrant": event.entrant_json(id) })
                })
                .collect();
            ("standings", nodes)
        } else {
            let entrant_id = variables["entrantId"].as_str().unwrap_or_default();
            let nodes = event
                .sets
                .iter()
                .filter(|set| set.entrant_ids.iter().any(|id| id == entrant_id))
                .map(|set| {
                    json!({
                        "id": set.id,
                        "winnerId": set.winner_id,
                        "completedAt": set.completed_at,
                    })
                })
                .collect();
            ("sets", nodes)
        };

        let (total_pages, page_nodes) = paginate(nodes, page, per_page);
        let mut connection = Map::new();
        connection.insert(
            field.to_string(),
            json!({
                "pageInfo": { "totalPages": total_pages },
                "nodes": page_nodes,
            }),
        );
        json!({ "event": Value::Object(connection) })
    }
}

fn paginate(nodes: Vec<Value>, page: usize, per_page: usize) -> (usize, Vec<Value>) {
    let per_page = per_page.max(1);
    let total_pages = nodes.len().div_ceil(per_page);
    let page_nodes = nodes
        .into_iter()
        .skip((page.max(1) - 1) * per_page)
        .take(per_page)
        .collect();
    (total_pages, page_nodes)
}

#[async_trait]
impl GraphQLTransport for FakeStartgg {
    async fn execute(&self, body: &QueryBody<Value>) -> Result<Value> {
        let operation = Self::operation_name(body.operation_name)
            .ok_or_else(|| Error::GraphQL {
                messages: vec![format!("unknown operation {}", body.operation_name)],
            })?;
        self.calls.lock().unwrap().push(operation);

        let slug = body.variables["slug"].as_str().unwrap_or_default().to_string();
        if self.failures.contains(&(slug, operation)) {
            return Err(Error::Transport {
                status: Some(500),
                message: "injected failure".to_string(),
            });
        }

        Ok(self.respond(operation, &body.variables))
    }
}

/// Season catalog with fixed event lists
#[derive(Default)]
pub struct StaticCatalog {
    seasons: HashMap<i32, Vec<EventHandle>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, year: i32, events: &[&str]) -> Self {
        self.seasons
            .insert(year, events.iter().map(|slug| EventHandle::new(*slug)).collect());
        self
    }
}

#[async_trait]
impl SeasonCatalog for StaticCatalog {
    async fn event_handles(&self, year: i32) -> Result<Vec<EventHandle>> {
        self.seasons
            .get(&year)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("season {}", year)))
    }
}
