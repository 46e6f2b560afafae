/// A named GraphQL document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const EVENT_ENTRANTS: Operation = Operation {
    name: "EventEntrants",
    document: r#"
    query EventEntrants($slug: String!, $page: Int!, $perPage: Int!) {
      event(slug: $slug) {
        entrants(query: { page: $page, perPage: $perPage }) {
          pageInfo { totalPages }
          nodes {
            id
            participants { gamerTag }
          }
        }
      }
    }
    "#,
};

pub const EVENT_STANDINGS: Operation = Operation {
    name: "EventStandings",
    document: r#"
    query EventStandings($slug: String!, $page: Int!, $perPage: Int!) {
      event(slug: $slug) {
        standings(query: { page: $page, perPage: $perPage }) {
          pageInfo { totalPages }
          nodes {
            placement
            entrant {
              id
              participants { gamerTag }
            }
          }
        }
      }
    }
    "#,
};

pub const ENTRANT_SETS: Operation = Operation {
    name: "EntrantSets",
    document: r#"
    query EntrantSets($slug: String!, $entrantId: ID!, $page: Int!, $perPage: Int!) {
      event(slug: $slug) {
        sets(
          page: $page
          perPage: $perPage
          sortType: STANDARD
          filters: { entrantIds: [$entrantId] }
        ) {
          pageInfo { totalPages }
          nodes {
            id
            winnerId
            completedAt
          }
        }
      }
    }
    "#,
};

pub const TOURNAMENT_EVENTS: Operation = Operation {
    name: "TournamentEvents",
    document: r#"
    query TournamentEvents($slug: String!) {
      tournament(slug: $slug) {
        id
        name
        slug
        events {
          id
          name
          slug
          videogame { id name }
        }
      }
    }
    "#,
};
