/// Backend commands issued from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandKind {
    Start,
    Stop,
    SaveFavorite,
}

impl CommandKind {
    /// Fixed text shown when the command fails for any reason.
    pub fn fallback_message(self) -> &'static str {
        match self {
            CommandKind::Start => "failed to start mining",
            CommandKind::Stop => "failed to stop process",
            CommandKind::SaveFavorite => "failed to save favorite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Backend answered with a well-formed `{msg}` body.
    Replied(String),
    /// Transport error, non-2xx status or malformed body. Details are logged
    /// by the effect runner, never shown.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub status: Option<String>,
    pub mined_today: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteEntry {
    pub keyword: String,
    pub page_name: String,
    pub ad_library_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished loading the panel, or the user asked for a reload.
    RefreshRequested,
    /// User picked a value in the mode selector.
    ModeSelected(String),
    /// User edited the keyword input.
    KeywordChanged(String),
    /// User clicked Start.
    StartClicked,
    /// User clicked Stop.
    StopClicked,
    /// User submitted a favorite to be saved on the backend.
    FavoriteSubmitted(FavoriteEntry),
    /// A start/stop/save request finished.
    CommandFinished {
        command: CommandKind,
        outcome: CommandOutcome,
    },
    /// Fresh status snapshot from the backend.
    StatusFetched(StatusReport),
    /// Fresh favorites list from the backend, in arrival order.
    FavoritesFetched(Vec<FavoriteEntry>),
}
