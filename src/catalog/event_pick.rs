use crate::domain::EventHandle;
use crate::graphql::models::TournamentEventNode;

const TOURNAMENT_PREFIX: &str = "tournament/";

/// Choose the singles event for `videogame_id` among a tournament's events.
///
/// Events of other games are ignored. Singles and the game name score up,
/// doubles and teams score down; the first event with the best score wins.
pub fn pick_event(events: &[TournamentEventNode], videogame_id: i64) -> Option<&TournamentEventNode> {
    events
        .iter()
        .filter(|event| is_videogame(event, videogame_id))
        .fold(None::<(i32, &TournamentEventNode)>, |best, event| {
            let score = score_event(event);
            match best {
                Some((best_score, _)) if best_score >= score => best,
                _ => Some((score, event)),
            }
        })
        .map(|(_, event)| event)
}

/// `tournament/<slug>` and `<slug>` both name the same tournament
pub fn strip_tournament_prefix(slug: &str) -> &str {
    let slug = slug.trim();
    slug.strip_prefix(TOURNAMENT_PREFIX).unwrap_or(slug)
}

/// Full event slug for an event picked from `tournament_slug`
pub fn event_handle_for(tournament_slug: &str, event_slug: &str) -> EventHandle {
    if event_slug.starts_with(TOURNAMENT_PREFIX) {
        EventHandle::new(event_slug)
    } else {
        EventHandle::new(format!(
            "{}{}/event/{}",
            TOURNAMENT_PREFIX,
            strip_tournament_prefix(tournament_slug),
            event_slug
        ))
    }
}

fn is_videogame(event: &TournamentEventNode, videogame_id: i64) -> bool {
    event
        .videogame
        .as_ref()
        .and_then(|game| game.id.as_ref())
        .and_then(|id| id.0.parse::<i64>().ok())
        == Some(videogame_id)
}

fn score_event(event: &TournamentEventNode) -> i32 {
    let name = event.name.as_deref().unwrap_or_default().to_lowercase();
    let slug = event.slug.as_deref().unwrap_or_default().to_lowercase();
    let mentions = |word: &str| name.contains(word) || slug.contains(word);

    let mut score = 0;
    if mentions("singles") {
        score += 5;
    }
    if mentions("melee") {
        score += 2;
    }
    if mentions("doubles") || mentions("teams") {
        score -= 5;
    }
    score
}
