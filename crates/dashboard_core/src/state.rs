use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, FavoriteCard, FavoritesView};
use crate::{CommandKind, FavoriteEntry, StatusReport};

/// Mode identifiers offered by the selector. The controller forwards whatever
/// the host reports, so this list is presentation only.
pub const MODE_OPTIONS: [&str; 2] = ["manual", "txt"];
pub const DEFAULT_MODE: &str = MODE_OPTIONS[0];

/// What to re-fetch after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshScope {
    /// Status snapshot only.
    Status,
    /// Status snapshot and favorites, same as reloading the panel.
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSettings {
    pub refresh_after_command: RefreshScope,
    /// Ignore a command while another of the same kind is still pending.
    pub single_flight: bool,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            refresh_after_command: RefreshScope::All,
            single_flight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: ControlSettings,
    mode: String,
    keyword: String,
    status: StatusReport,
    favorites: Vec<FavoriteEntry>,
    in_flight: BTreeSet<CommandKind>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(ControlSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ControlSettings) -> Self {
        Self {
            settings,
            mode: DEFAULT_MODE.to_string(),
            keyword: String::new(),
            status: StatusReport::default(),
            favorites: Vec::new(),
            in_flight: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn settings(&self) -> ControlSettings {
        self.settings
    }

    pub fn view(&self) -> AppViewModel {
        let favorites = if self.favorites.is_empty() {
            FavoritesView::Placeholder(crate::NO_FAVORITES_PLACEHOLDER.to_string())
        } else {
            FavoritesView::Cards(self.favorites.iter().map(FavoriteCard::from_entry).collect())
        };

        AppViewModel {
            mode: self.mode.clone(),
            keyword: self.keyword.clone(),
            status_text: status_text(&self.status),
            count_text: self.status.mined_today.unwrap_or(0).to_string(),
            favorites,
            start_enabled: self.accepts(CommandKind::Start),
            stop_enabled: self.accepts(CommandKind::Stop),
            save_enabled: self.accepts(CommandKind::SaveFavorite),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_pending(&self, command: CommandKind) -> bool {
        self.in_flight.contains(&command)
    }

    pub(crate) fn mode(&self) -> &str {
        &self.mode
    }

    pub(crate) fn keyword(&self) -> &str {
        &self.keyword
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: String) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    pub(crate) fn set_keyword(&mut self, keyword: String) {
        if self.keyword != keyword {
            self.keyword = keyword;
            self.dirty = true;
        }
    }

    /// Whether a new command of this kind may be issued right now.
    pub(crate) fn accepts(&self, command: CommandKind) -> bool {
        !(self.settings.single_flight && self.in_flight.contains(&command))
    }

    pub(crate) fn begin(&mut self, command: CommandKind) {
        self.in_flight.insert(command);
        self.dirty = true;
    }

    pub(crate) fn finish(&mut self, command: CommandKind) {
        if self.in_flight.remove(&command) {
            self.dirty = true;
        }
    }

    pub(crate) fn replace_status(&mut self, report: StatusReport) {
        self.status = report;
        self.dirty = true;
    }

    pub(crate) fn replace_favorites(&mut self, favorites: Vec<FavoriteEntry>) {
        self.favorites = favorites;
        self.dirty = true;
    }
}

fn status_text(report: &StatusReport) -> String {
    match report.status.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => crate::STATUS_PLACEHOLDER.to_string(),
    }
}
