use serde::{Deserialize, Serialize};
use std::fmt;

/// A competitor's tag as typed by the caller.
///
/// Comparisons use the trimmed, lower-cased form; the trimmed form is kept for display.
#[derive(Debug, Clone)]
pub struct PlayerTag {
    display: String,
    normalized: String,
}

impl PlayerTag {
    pub fn new(raw: &str) -> Self {
        let display = raw.trim().to_string();
        let normalized = display.to_lowercase();
        Self { display, normalized }
    }

    /// `None` for tags that are empty after trimming
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = Self::new(raw);
        (!tag.is_empty()).then_some(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn matches(&self, other: &str) -> bool {
        !self.is_empty() && other.trim().to_lowercase() == self.normalized
    }
}

impl PartialEq for PlayerTag {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for PlayerTag {}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for PlayerTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

/// Event slug in start.gg, e.g. `tournament/some-major/event/melee-singles`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventHandle(pub String);

impl EventHandle {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInner {
    Number(serde_json::Number),
    String(String),
}

impl From<IdInner> for Id {
    fn from(inner: IdInner) -> Self {
        Self(match inner {
            IdInner::Number(n) => n.to_string(),
            IdInner::String(s) => s,
        })
    }
}

/// start.gg identifier. The API sends these as numbers or as strings
/// (preview sets use strings), so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "IdInner", into = "String")]
pub struct Id(pub String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Id> for String {
    fn from(Id(s): Id) -> Self {
        s
    }
}

pub type EntrantId = Id;
pub type SetId = Id;

/// One registration in an event. Team entrants list every member's tag.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrantRecord {
    pub id: EntrantId,
    pub participant_tags: Vec<String>,
}

impl EntrantRecord {
    pub fn is_played_by(&self, tag: &PlayerTag) -> bool {
        self.participant_tags.iter().any(|t| tag.matches(t))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingRecord {
    pub entrant_id: Option<EntrantId>,
    pub placement: Option<u32>,
    /// First participant's tag
    pub gamer_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub id: SetId,
    /// `None` for unfinished or invalid sets
    pub winner_id: Option<EntrantId>,
    /// Epoch seconds
    pub completed_at: Option<i64>,
}

/// Attendance and placement for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub attended: bool,
    pub placement: Option<u32>,
}

impl Attendance {
    pub fn absent() -> Self {
        Self {
            attended: false,
            placement: None,
        }
    }
}

/// Set record for one entrant in one event. Zeros here are facts, not defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStats {
    pub set_wins: u32,
    pub set_losses: u32,
    pub best_win_streak: u32,
}

/// Everything known about one player in one event. `None` means undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub attended: bool,
    pub placement: Option<u32>,
    pub set_wins: Option<u32>,
    pub set_losses: Option<u32>,
    pub best_win_streak: Option<u32>,
}

impl EventStats {
    pub fn new(attendance: Attendance, sets: Option<SetStats>) -> Self {
        Self {
            attended: attendance.attended,
            placement: attendance.placement,
            set_wins: sets.map(|s| s.set_wins),
            set_losses: sets.map(|s| s.set_losses),
            best_win_streak: sets.map(|s| s.best_win_streak),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub year: i32,
    pub player_tag: PlayerTag,
    pub tournaments_attended: u32,
    pub top8s: u32,
    pub avg_placement: Option<f64>,
    pub placements_counted: u32,
    pub winrate: Option<f64>,
    pub set_wins: u32,
    pub set_losses: u32,
    pub best_win_streak: u32,
}
