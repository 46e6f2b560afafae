use crate::pagination::PaginationConfig;

const API_TOKEN_ENV: &str = "STARTGG_API_KEY";
const SEASONS_DIR_ENV: &str = "SEASONS_DIR";

#[derive(Debug, Clone)]
pub struct StartggSettings {
    pub api_url: String,
    pub api_token: Option<String>,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for StartggSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.start.gg/gql/alpha".to_string(),
            api_token: None,
            rate_limit_ms: 750, // 80 req/60 sec
            user_agent: "MeleeSeasonStats/1.0",
            timeout_secs: 30,
        }
    }
}

/// Page size and page bound for every remote collection we walk
#[derive(Debug, Clone)]
pub struct TraversalSettings {
    pub entrants: PaginationConfig,
    pub standings: PaginationConfig,
    pub sets: PaginationConfig,
    pub top_standings: PaginationConfig,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            entrants: PaginationConfig::new(80).with_max_pages(10),
            standings: PaginationConfig::new(80).with_max_pages(10),
            sets: PaginationConfig::new(80).with_max_pages(20),
            top_standings: PaginationConfig::new(128).with_max_pages(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub seasons_dir: String,
    /// start.gg videogame id, 1 is Super Smash Bros. Melee
    pub videogame_id: i64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seasons_dir: "data/seasons".to_string(),
            videogame_id: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub startgg: StartggSettings,
    pub traversal: TraversalSettings,
    pub catalog: CatalogSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the token and the seasons directory taken from the environment
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.startgg.api_token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if let Ok(dir) = std::env::var(SEASONS_DIR_ENV) {
            config.catalog.seasons_dir = dir;
        }
        config
    }

    pub fn api_token(&self) -> anyhow::Result<&str> {
        self.startgg
            .api_token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Missing {} env var", API_TOKEN_ENV))
    }
}
