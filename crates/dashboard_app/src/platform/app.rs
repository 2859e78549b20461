use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dashboard_core::{update, AppState, ControlSettings, Effect, Msg, NotificationLevel};
use dashboard_logging::{dash_info, dash_warn};

use super::cli::Cli;
use super::config::DashboardConfig;
use super::effects::EffectRunner;
use super::ui::host::PanelHost;
use super::ui::render::render;
use super::ui::terminal::{self, Input, TerminalHost};

/// Receives the side effects the controller cannot perform itself.
pub trait EffectSink {
    fn submit(&self, effect: Effect);
}

#[derive(Debug)]
pub enum HostEvent {
    Dispatch(Msg),
    Help,
    Invalid(String),
    Quit,
}

impl From<Input> for HostEvent {
    fn from(input: Input) -> Self {
        match input {
            Input::Dispatch(msg) => HostEvent::Dispatch(msg),
            Input::Help => HostEvent::Help,
            Input::Invalid(text) => HostEvent::Invalid(text),
            Input::Quit => HostEvent::Quit,
        }
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = dashboard_logging::log_file_or_default(cli.log_file.as_deref());
    dashboard_logging::initialize(cli.log.into(), cli.log_level(), &log_file);

    let config = DashboardConfig::load(cli.config.as_deref())
        .context("loading dashboard configuration")?
        .with_overrides(&cli);
    dash_info!("Dashboard starting against {}", config.base_url());

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    let runner = EffectRunner::new(config.backend_settings(), event_tx.clone())
        .context("starting backend client")?;

    let mut host = TerminalHost::new(io::stdout());
    host.print_line(&format!("backend: {}", config.base_url()));
    host.print_line("type 'help' for commands");
    let mut dashboard = Dashboard::new(config.control_settings(), host, runner);

    spawn_input_reader(event_tx.clone());
    if let Some(interval) = config.refresh_interval() {
        spawn_refresh_timer(interval, event_tx);
    }

    dashboard.dispatch(Msg::RefreshRequested);
    while let Ok(event) = event_rx.recv() {
        match event {
            HostEvent::Dispatch(msg) => dashboard.dispatch(msg),
            HostEvent::Help => dashboard.host_mut().print_line(terminal::HELP),
            HostEvent::Invalid(text) => dashboard.host_mut().print_line(&text),
            HostEvent::Quit => break,
        }
    }

    dash_info!("Dashboard stopped");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    dash_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let Some(input) = terminal::parse_input(&line) else {
                continue;
            };
            if event_tx.send(input.into()).is_err() {
                return;
            }
        }
        // End of input closes the dashboard.
        let _ = event_tx.send(HostEvent::Quit);
    });
}

fn spawn_refresh_timer(interval: Duration, event_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if event_tx
            .send(HostEvent::Dispatch(Msg::RefreshRequested))
            .is_err()
        {
            break;
        }
    });
}

/// The dashboard controller.
///
/// Owns the core state; the surface (`host`) and the network side (`sink`)
/// are handed in at construction.
pub struct Dashboard<H: PanelHost, S: EffectSink> {
    state: AppState,
    host: H,
    sink: S,
}

impl<H: PanelHost, S: EffectSink> Dashboard<H, S> {
    pub fn new(settings: ControlSettings, host: H, sink: S) -> Self {
        Self {
            state: AppState::with_settings(settings),
            host,
            sink,
        }
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;

        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    match notification.level {
                        NotificationLevel::Info => dash_info!("Notify: {}", notification.text),
                        NotificationLevel::Error => dash_warn!("Notify: {}", notification.text),
                    }
                    self.host.notify(&notification);
                }
                other => self.sink.submit(other),
            }
        }

        if let Some(view) = view {
            for command in render(&view) {
                self.host.execute(command);
            }
            self.host.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::platform::ui::constants::{
        BUTTON_START, CONTAINER_FAVORITES, LABEL_COUNT, LABEL_STATUS,
    };
    use crate::platform::ui::host::{PanelNode, RegionStore};
    use dashboard_core::{CommandKind, CommandOutcome, FavoriteEntry, Notification, StatusReport};

    #[derive(Default)]
    struct RecordingSink {
        effects: RefCell<Vec<Effect>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<Effect> {
            self.effects.borrow_mut().drain(..).collect()
        }
    }

    impl EffectSink for &RecordingSink {
        fn submit(&self, effect: Effect) {
            self.effects.borrow_mut().push(effect);
        }
    }

    fn dashboard(sink: &RecordingSink) -> Dashboard<RegionStore, &RecordingSink> {
        Dashboard::new(ControlSettings::default(), RegionStore::new(), sink)
    }

    fn favorite(keyword: &str) -> FavoriteEntry {
        FavoriteEntry {
            keyword: keyword.to_string(),
            page_name: "Loja".to_string(),
            ad_library_link: format!("https://example.com/{keyword}"),
        }
    }

    #[test]
    fn load_fetches_both_panels_and_draws_placeholders() {
        let sink = RecordingSink::default();
        let mut dashboard = dashboard(&sink);

        dashboard.dispatch(Msg::RefreshRequested);

        assert_eq!(sink.take(), vec![Effect::FetchStatus, Effect::FetchFavorites]);
        let host = dashboard.host();
        assert_eq!(host.text(LABEL_STATUS), "-");
        assert_eq!(host.text(LABEL_COUNT), "0");
        assert_eq!(host.children(CONTAINER_FAVORITES).len(), 1);
    }

    #[test]
    fn start_round_trip_notifies_once_with_backend_text() {
        let sink = RecordingSink::default();
        let mut dashboard = dashboard(&sink);

        dashboard.dispatch(Msg::KeywordChanged("tênis".to_string()));
        dashboard.dispatch(Msg::StartClicked);
        assert_eq!(
            sink.take(),
            vec![Effect::SendStart {
                mode: "manual".to_string(),
                keyword: "tênis".to_string(),
            }]
        );
        assert!(!dashboard.host().is_enabled(BUTTON_START));

        dashboard.dispatch(Msg::CommandFinished {
            command: CommandKind::Start,
            outcome: CommandOutcome::Replied("Mineração iniciada em modo manual!".to_string()),
        });

        assert_eq!(
            dashboard.host().notifications(),
            &[Notification::info("Mineração iniciada em modo manual!")]
        );
        assert_eq!(sink.take(), vec![Effect::FetchStatus, Effect::FetchFavorites]);
        assert!(dashboard.host().is_enabled(BUTTON_START));
    }

    #[test]
    fn failed_stop_shows_fallback_and_does_not_refresh() {
        let sink = RecordingSink::default();
        let mut dashboard = dashboard(&sink);

        dashboard.dispatch(Msg::StopClicked);
        sink.take();
        dashboard.dispatch(Msg::CommandFinished {
            command: CommandKind::Stop,
            outcome: CommandOutcome::Failed,
        });

        assert_eq!(
            dashboard.host().notifications(),
            &[Notification::error("failed to stop process")]
        );
        assert!(sink.take().is_empty());
    }

    #[test]
    fn repeated_favorites_refresh_leaves_latest_cards_only() {
        let sink = RecordingSink::default();
        let mut dashboard = dashboard(&sink);

        let batch = vec![favorite("a"), favorite("b")];
        dashboard.dispatch(Msg::FavoritesFetched(batch.clone()));
        dashboard.dispatch(Msg::FavoritesFetched(batch));

        let nodes = dashboard.host().children(CONTAINER_FAVORITES);
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|node| matches!(node, PanelNode::Card { .. })));
    }

    #[test]
    fn status_snapshot_updates_labels() {
        let sink = RecordingSink::default();
        let mut dashboard = dashboard(&sink);

        dashboard.dispatch(Msg::StatusFetched(StatusReport {
            status: Some("ativo".to_string()),
            mined_today: Some(7),
        }));

        assert_eq!(dashboard.host().text(LABEL_STATUS), "ativo");
        assert_eq!(dashboard.host().text(LABEL_COUNT), "7");
    }
}
