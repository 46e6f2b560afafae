use serde::Serialize;
use std::fmt;

/// Errors raised while talking to start.gg or validating a request.
///
/// "Entrant not found" and "standing not found" are not errors: they are
/// `None` in the lookup results. A traversal that hits its page bound is not
/// an error either, see [`crate::pagination::StopReason`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("start.gg request failed{}: {message}", status.map(|s| format!(" with HTTP {s}")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },
    #[error("start.gg returned {} GraphQL error(s): {}", messages.len(), messages.join("; "))]
    GraphQL { messages: Vec<String> },
    #[error("invalid input: {0}")]
    Input(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("season catalog error: {0}")]
    Catalog(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Machine readable error category reported to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    #[serde(rename = "graphql")]
    GraphQL,
    Input,
    NotFound,
    Catalog,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::GraphQL => "graphql",
            Self::Input => "input",
            Self::NotFound => "not_found",
            Self::Catalog => "catalog",
        };
        f.write_str(name)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::GraphQL { .. } => ErrorKind::GraphQL,
            Self::Input(_) => ErrorKind::Input,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Catalog(_) => ErrorKind::Catalog,
        }
    }

    /// Transport and GraphQL failures are the ones a season run may swallow per event.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::GraphQL { .. })
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}
