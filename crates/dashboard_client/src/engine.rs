use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use dashboard_logging::dash_debug;

use crate::backend::{Backend, BackendSettings, ReqwestBackend};
use crate::{Action, ApiError, ClientEvent, Command, Favorite};

enum EngineCommand {
    Start(Command),
    Stop,
    SaveFavorite(Favorite),
    FetchStatus,
    FetchFavorites,
}

/// Runs backend requests on a background tokio runtime.
///
/// Every submitted request becomes an independent task; completions arrive
/// through [`EngineHandle::try_recv`] in whatever order they finish.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
            .map_err(|err| ApiError::new(crate::FailureKind::Network, err.to_string()))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("dashboard-client")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("dashboard-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = handle_command(backend.as_ref(), command).await;
                        let _ = event_tx.send(event);
                    });
                }
                dash_debug!("Engine command channel closed; shutting down runtime");
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn start(&self, command: Command) {
        self.submit(EngineCommand::Start(command));
    }

    pub fn stop(&self) {
        self.submit(EngineCommand::Stop);
    }

    pub fn save_favorite(&self, favorite: Favorite) {
        self.submit(EngineCommand::SaveFavorite(favorite));
    }

    pub fn fetch_status(&self) {
        self.submit(EngineCommand::FetchStatus);
    }

    pub fn fetch_favorites(&self) {
        self.submit(EngineCommand::FetchFavorites);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn submit(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand) -> ClientEvent {
    match command {
        EngineCommand::Start(command) => ClientEvent::CommandReplied {
            action: Action::Start,
            result: backend.start(&command).await,
        },
        EngineCommand::Stop => ClientEvent::CommandReplied {
            action: Action::Stop,
            result: backend.stop().await,
        },
        EngineCommand::SaveFavorite(favorite) => ClientEvent::CommandReplied {
            action: Action::SaveFavorite,
            result: backend.save_favorite(&favorite).await,
        },
        EngineCommand::FetchStatus => ClientEvent::StatusLoaded(backend.status().await),
        EngineCommand::FetchFavorites => ClientEvent::FavoritesLoaded(backend.favorites().await),
    }
}
