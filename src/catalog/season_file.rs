use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::SeasonCatalog;
use super::event_pick::{event_handle_for, pick_event, strip_tournament_prefix};
use crate::config::CatalogSettings;
use crate::domain::EventHandle;
use crate::errors::{Error, Result};
use crate::graphql::models::TournamentData;
use crate::graphql::queries::TOURNAMENT_EVENTS;
use crate::graphql::{self, GraphQLTransport};

/// Contents of `<seasons_dir>/<year>.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonFile {
    #[serde(default)]
    pub tournaments: Vec<TournamentEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tournament_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Skips tournament resolution when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEvent {
    pub name: Option<String>,
    pub tournament_slug: Option<String>,
    pub source_url: Option<String>,
    pub event_slug: EventHandle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnresolvedTournament {
    #[serde(flatten)]
    pub entry: TournamentEntry,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSeason {
    pub year: i32,
    pub count: usize,
    pub events: Vec<ResolvedEvent>,
    pub unresolved: Vec<UnresolvedTournament>,
}

struct Unresolved {
    reason: &'static str,
    detail: Option<String>,
}

impl Unresolved {
    fn new(reason: &'static str) -> Self {
        Self {
            reason,
            detail: None,
        }
    }
}

/// Season catalog backed by one JSON file per year.
///
/// Entries naming only a tournament are resolved to that tournament's
/// singles event for the configured videogame, one request at a time.
pub struct FileSeasonCatalog {
    seasons_dir: PathBuf,
    videogame_id: i64,
    transport: Arc<dyn GraphQLTransport>,
}

impl FileSeasonCatalog {
    pub fn new(settings: &CatalogSettings, transport: Arc<dyn GraphQLTransport>) -> Self {
        Self {
            seasons_dir: PathBuf::from(&settings.seasons_dir),
            videogame_id: settings.videogame_id,
            transport,
        }
    }

    pub fn seasons_dir(&self) -> &Path {
        &self.seasons_dir
    }

    pub async fn load_season(&self, year: i32) -> Result<SeasonFile> {
        let path = self.seasons_dir.join(format!("{}.json", year));
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(format!("season {}", year)));
            }
            Err(e) => {
                return Err(Error::Catalog(format!("failed to read {}: {}", path.display(), e)));
            }
        };

        serde_json::from_str(&text)
            .map_err(|e| Error::Catalog(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Resolve every catalog entry of `year` to an event
    pub async fn resolve_season(&self, year: i32) -> Result<ResolvedSeason> {
        let season = self.load_season(year).await?;
        let mut events = Vec::new();
        let mut unresolved = Vec::new();

        for entry in season.tournaments {
            match self.resolve_entry(&entry).await {
                Ok(event) => events.push(event),
                Err(Unresolved { reason, detail }) => {
                    warn!(
                        "Could not resolve {:?} for season {}: {} {}",
                        entry.tournament_slug,
                        year,
                        reason,
                        detail.as_deref().unwrap_or_default()
                    );
                    unresolved.push(UnresolvedTournament {
                        entry,
                        reason: reason.to_string(),
                        detail,
                    });
                }
            }
        }

        info!(
            "Season {}: {} events resolved, {} unresolved",
            year,
            events.len(),
            unresolved.len()
        );
        Ok(ResolvedSeason {
            year,
            count: events.len(),
            events,
            unresolved,
        })
    }

    async fn resolve_entry(&self, entry: &TournamentEntry) -> Result<ResolvedEvent, Unresolved> {
        let tournament_slug = entry
            .tournament_slug
            .as_deref()
            .map(strip_tournament_prefix)
            .filter(|slug| !slug.is_empty());

        let resolved = |event_slug: EventHandle| ResolvedEvent {
            name: entry.name.clone(),
            tournament_slug: tournament_slug.map(|slug| format!("tournament/{}", slug)),
            source_url: entry.source_url.clone(),
            event_slug,
        };

        if let Some(event_slug) = entry.event_slug.as_deref().map(str::trim) {
            if !event_slug.is_empty() {
                return Ok(resolved(EventHandle::new(event_slug)));
            }
        }

        let Some(slug) = tournament_slug else {
            return Err(Unresolved::new("Missing tournamentSlug"));
        };

        let data: TournamentData =
            graphql::query(self.transport.as_ref(), &TOURNAMENT_EVENTS, json!({ "slug": slug }))
                .await
                .map_err(|e| Unresolved {
                    reason: "Remote error resolving tournament events",
                    detail: Some(e.to_string()),
                })?;

        let Some(tournament) = data.tournament else {
            return Err(Unresolved::new("Tournament not found"));
        };
        let events = tournament.into_events();
        let event_slug = pick_event(&events, self.videogame_id)
            .and_then(|event| event.slug.as_deref())
            .map(str::trim)
            .filter(|event_slug| !event_slug.is_empty())
            .ok_or_else(|| Unresolved::new("No event for the configured videogame"))?;

        Ok(resolved(event_handle_for(slug, event_slug)))
    }
}

#[async_trait]
impl SeasonCatalog for FileSeasonCatalog {
    async fn event_handles(&self, year: i32) -> Result<Vec<EventHandle>> {
        let season = self.resolve_season(year).await?;
        Ok(season.events.into_iter().map(|event| event.event_slug).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::queries::TOURNAMENT_EVENTS;
    use crate::testing::FakeStartgg;

    struct SeasonDir(PathBuf);

    impl SeasonDir {
        fn new(name: &str, year: i32, contents: &str) -> Self {
            let dir_name = format!("melee_season_stats_{}_{}", name, std::process::id());
            let dir = std::env::temp_dir().join(dir_name);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join(format!("{}.json", year)), contents).unwrap();
            Self(dir)
        }

        fn catalog(&self, fake: Arc<FakeStartgg>) -> FileSeasonCatalog {
            let settings = CatalogSettings {
                seasons_dir: self.0.display().to_string(),
                videogame_id: 1,
            };
            FileSeasonCatalog::new(&settings, fake)
        }
    }

    impl Drop for SeasonDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn fake_with_tournaments() -> FakeStartgg {
        FakeStartgg::new()
            .with_tournament(
                "genesis",
                json!({
                    "id": 1,
                    "name": "Genesis",
                    "slug": "tournament/genesis",
                    "events": [
                        { "id": 10, "name": "Melee Doubles", "slug": "tournament/genesis/event/melee-doubles", "videogame": { "id": 1 } },
                        { "id": 11, "name": "Melee Singles", "slug": "tournament/genesis/event/melee-singles", "videogame": { "id": 1 } }
                    ]
                }),
            )
            .with_tournament(
                "ult-only",
                json!({
                    "id": 2,
                    "name": "Ult Only",
                    "events": [{ "id": 20, "name": "Singles", "slug": "singles", "videogame": { "id": 1386 } }]
                }),
            )
            .with_tournament(
                "local",
                json!({
                    "id": 3,
                    "events": [{ "id": 30, "name": "Bracket", "slug": "bracket", "videogame": { "id": "1" } }]
                }),
            )
    }

    #[tokio::test]
    async fn test_resolves_entries_in_file_order() {
        let dir = SeasonDir::new(
            "resolve",
            2025,
            r#"{
                "tournaments": [
                    { "name": "Genesis", "tournamentSlug": "tournament/genesis" },
                    { "name": "Ult", "tournamentSlug": "ult-only" },
                    { "name": "Local", "tournamentSlug": "local", "sourceUrl": "https://example.org" },
                    { "name": "Direct", "eventSlug": "tournament/direct/event/singles" },
                    { "name": "Broken" }
                ]
            }"#,
        );
        let fake = Arc::new(fake_with_tournaments());
        let season = dir.catalog(fake.clone()).resolve_season(2025).await.unwrap();

        let handles: Vec<&str> = season.events.iter().map(|e| e.event_slug.as_str()).collect();
        assert_eq!(
            handles,
            vec![
                "tournament/genesis/event/melee-singles",
                "tournament/local/event/bracket",
                "tournament/direct/event/singles",
            ]
        );
        assert_eq!(season.count, 3);
        assert_eq!(season.events[1].source_url.as_deref(), Some("https://example.org"));

        let reasons: Vec<&str> = season.unresolved.iter().map(|u| u.reason.as_str()).collect();
        assert_eq!(
            reasons,
            vec!["No event for the configured videogame", "Missing tournamentSlug"]
        );
        assert_eq!(fake.calls_for(TOURNAMENT_EVENTS.name), 3);
    }

    #[tokio::test]
    async fn test_remote_failure_only_affects_one_tournament() {
        let dir = SeasonDir::new(
            "failure",
            2024,
            r#"{ "tournaments": [
                { "tournamentSlug": "genesis" },
                { "tournamentSlug": "local" }
            ] }"#,
        );
        let fake = Arc::new(fake_with_tournaments().failing("genesis", TOURNAMENT_EVENTS.name));
        let handles = dir.catalog(fake).event_handles(2024).await.unwrap();

        assert_eq!(handles, vec![EventHandle::new("tournament/local/event/bracket")]);
    }

    #[test]
    fn test_season_dirs_are_unique_per_process() {
        let dir = SeasonDir::new("per_process", 2021, r#"{ "tournaments": [] }"#);
        let name = dir.0.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(&format!("_{}", std::process::id())));
        assert!(dir.0.join("2021.json").exists());
    }

    #[tokio::test]
    async fn test_unknown_year_is_not_found() {
        let dir = SeasonDir::new("missing", 2023, r#"{ "tournaments": [] }"#);
        let result = dir.catalog(Arc::new(FakeStartgg::new())).event_handles(1999).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_catalog_error() {
        let dir = SeasonDir::new("malformed", 2022, "{ not json");
        let result = dir.catalog(Arc::new(FakeStartgg::new())).event_handles(2022).await;
        assert!(matches!(result, Err(Error::Catalog(_))));
    }
}
