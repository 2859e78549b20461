//! Dashboard core: pure control/status state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notification, NotificationLevel};
pub use msg::{CommandKind, CommandOutcome, FavoriteEntry, Msg, StatusReport};
pub use state::{AppState, ControlSettings, RefreshScope, DEFAULT_MODE, MODE_OPTIONS};
pub use update::update;
pub use view_model::{
    AppViewModel, FavoriteCard, FavoritesView, AD_LINK_LABEL, NO_FAVORITES_PLACEHOLDER,
    STATUS_PLACEHOLDER,
};
