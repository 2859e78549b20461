use crate::FavoriteEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendStart { mode: String, keyword: String },
    SendStop,
    SaveFavorite(FavoriteEntry),
    FetchStatus,
    FetchFavorites,
    /// Show a message to the user. Hosts must not block on it.
    Notify(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}
