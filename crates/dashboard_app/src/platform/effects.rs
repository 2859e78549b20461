use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use dashboard_client::{
    Action, ApiError, BackendSettings, ClientEvent, Command, EngineHandle, Favorite,
    StatusSnapshot,
};
use dashboard_core::{CommandKind, CommandOutcome, Effect, FavoriteEntry, Msg, StatusReport};
use dashboard_logging::{dash_debug, dash_info, dash_warn};

use super::app::{EffectSink, HostEvent};

/// Executes network effects on the client engine and feeds completions back
/// to the host loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: BackendSettings,
        event_tx: mpsc::Sender<HostEvent>,
    ) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<HostEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            if let Some(msg) = map_event(event) {
                if event_tx.send(HostEvent::Dispatch(msg)).is_err() {
                    break;
                }
            }
        });
    }
}

impl EffectSink for EffectRunner {
    fn submit(&self, effect: Effect) {
        match effect {
            Effect::SendStart { mode, keyword } => {
                dash_info!("Start requested mode={} keyword_len={}", mode, keyword.len());
                self.engine.start(Command { mode, keyword });
            }
            Effect::SendStop => {
                dash_info!("Stop requested");
                self.engine.stop();
            }
            Effect::SaveFavorite(entry) => {
                dash_info!("Save favorite requested keyword={}", entry.keyword);
                self.engine.save_favorite(to_favorite(entry));
            }
            Effect::FetchStatus => self.engine.fetch_status(),
            Effect::FetchFavorites => self.engine.fetch_favorites(),
            Effect::Notify(notification) => {
                // Notifications belong to the host; nothing to send.
                dash_debug!("Ignoring notification effect: {}", notification.text);
            }
        }
    }
}

/// Translate an engine completion into a core message.
///
/// Display failures become `None`: the panel keeps its last values and the
/// error only reaches the log.
pub(crate) fn map_event(event: ClientEvent) -> Option<Msg> {
    match event {
        ClientEvent::CommandReplied { action, result } => {
            let command = map_action(action);
            let outcome = match result {
                Ok(reply) => CommandOutcome::Replied(reply.msg),
                Err(err) => {
                    dash_warn!("{:?} command failed: {}", command, err);
                    CommandOutcome::Failed
                }
            };
            Some(Msg::CommandFinished { command, outcome })
        }
        ClientEvent::StatusLoaded(Ok(snapshot)) => Some(Msg::StatusFetched(to_report(snapshot))),
        ClientEvent::StatusLoaded(Err(err)) => {
            dash_warn!("Failed to fetch status: {}", err);
            None
        }
        ClientEvent::FavoritesLoaded(Ok(favorites)) => Some(Msg::FavoritesFetched(
            favorites.into_iter().map(to_entry).collect(),
        )),
        ClientEvent::FavoritesLoaded(Err(err)) => {
            dash_warn!("Failed to fetch favorites: {}", err);
            None
        }
    }
}

fn map_action(action: Action) -> CommandKind {
    match action {
        Action::Start => CommandKind::Start,
        Action::Stop => CommandKind::Stop,
        Action::SaveFavorite => CommandKind::SaveFavorite,
    }
}

fn to_report(snapshot: StatusSnapshot) -> StatusReport {
    StatusReport {
        status: snapshot.status,
        mined_today: snapshot.mined_today,
    }
}

fn to_entry(favorite: Favorite) -> FavoriteEntry {
    FavoriteEntry {
        keyword: favorite.keyword,
        page_name: favorite.page_name,
        ad_library_link: favorite.ad_library_link,
    }
}

fn to_favorite(entry: FavoriteEntry) -> Favorite {
    Favorite {
        keyword: entry.keyword,
        page_name: entry.page_name,
        ad_library_link: entry.ad_library_link,
    }
}
