use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /start`. Values are forwarded exactly as the user entered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub mode: String,
    pub keyword: String,
}

/// `{msg}` reply shared by every command endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandReply {
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub mined_today: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(default, deserialize_with = "lenient_string")]
    pub keyword: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub page_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ad_library_link: String,
}

/// The backend stores favorites as posted, so fields may be null or not
/// strings. Null becomes `""`, other scalars keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

/// `GET /favoritos` body. The list is kept as raw JSON so a missing or
/// non-array field degrades to an empty list instead of a decode error.
/// `favorites` is read only when `favoritos` is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FavoritesEnvelope {
    #[serde(default)]
    favoritos: Option<serde_json::Value>,
    #[serde(default)]
    favorites: Option<serde_json::Value>,
}

impl FavoritesEnvelope {
    pub(crate) fn into_favorites(self) -> Vec<Favorite> {
        match self.favoritos.or(self.favorites) {
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Favorite>(item) {
                    Ok(favorite) => Some(favorite),
                    Err(err) => {
                        dashboard_logging::dash_debug!("Skipping malformed favorite: {}", err);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Which command a [`ClientEvent::CommandReplied`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    SaveFavorite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    CommandReplied {
        action: Action,
        result: Result<CommandReply, ApiError>,
    },
    StatusLoaded(Result<StatusSnapshot, ApiError>),
    FavoritesLoaded(Result<Vec<Favorite>, ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Encode,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Encode => write!(f, "request encoding failed"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
