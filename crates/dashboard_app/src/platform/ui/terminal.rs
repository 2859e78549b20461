//! Line-oriented terminal surface.
//!
//! The panel is redrawn after every render batch. Notifications are printed
//! as timestamped toasts and never wait for acknowledgement.

use std::io::Write;

use chrono::Local;
use dashboard_core::{FavoriteEntry, Msg, Notification, NotificationLevel, MODE_OPTIONS};
use dashboard_logging::dash_warn;

use super::constants::*;
use super::host::{PanelCommand, PanelHost, PanelNode, RegionStore};

pub const HELP: &str = "\
commands:
  mode <value>                       select the operating mode
  keyword <text>                     set the keyword (rest of the line, verbatim)
  start                              start mining with the current mode and keyword
  stop                               stop the running process
  save <keyword> | <page> | <link>   save a favorite
  refresh                            reload status and favorites
  help                               show this text
  quit                               leave the dashboard";

/// What a line typed by the user asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let input = match word {
        "" => return None,
        "start" => Input::Dispatch(Msg::StartClicked),
        "stop" => Input::Dispatch(Msg::StopClicked),
        "refresh" | "reload" => Input::Dispatch(Msg::RefreshRequested),
        "mode" => Input::Dispatch(Msg::ModeSelected(rest.trim().to_string())),
        // Keyword is kept exactly as typed after the first blank.
        "keyword" => Input::Dispatch(Msg::KeywordChanged(rest.to_string())),
        "save" => match parse_favorite(rest) {
            Some(entry) => Input::Dispatch(Msg::FavoriteSubmitted(entry)),
            None => Input::Invalid("usage: save <keyword> | <page> | <link>".to_string()),
        },
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command '{other}', try 'help'")),
    };
    Some(input)
}

fn parse_favorite(rest: &str) -> Option<FavoriteEntry> {
    let mut parts = rest.split('|').map(str::trim);
    let keyword = parts.next()?;
    let page_name = parts.next()?;
    let ad_library_link = parts.next()?;
    if parts.next().is_some() || [keyword, page_name, ad_library_link].contains(&"") {
        return None;
    }
    Some(FavoriteEntry {
        keyword: keyword.to_string(),
        page_name: page_name.to_string(),
        ad_library_link: ad_library_link.to_string(),
    })
}

pub struct TerminalHost<W: Write> {
    out: W,
    store: RegionStore,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            store: RegionStore::new(),
        }
    }

    pub fn print_line(&mut self, text: &str) {
        self.write_or_warn(|out| writeln!(out, "{text}"));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&self) -> String {
        let mut text = String::new();
        text.push_str("── dashboard ──\n");
        text.push_str(&format!(
            "mode: {} ({})   keyword: \"{}\"\n",
            self.store.text(SELECT_MODE),
            MODE_OPTIONS.join("/"),
            self.store.text(INPUT_KEYWORD),
        ));
        text.push_str(&format!(
            "status: {}   mined today: {}\n",
            self.store.text(LABEL_STATUS),
            self.store.text(LABEL_COUNT),
        ));
        text.push_str(&format!(
            "[{}] [{}] [{}]\n",
            button_label("start", self.store.is_enabled(BUTTON_START)),
            button_label("stop", self.store.is_enabled(BUTTON_STOP)),
            button_label("save", self.store.is_enabled(BUTTON_SAVE_FAVORITE)),
        ));
        text.push_str("favorites:\n");
        for node in self.store.children(CONTAINER_FAVORITES) {
            match node {
                PanelNode::Placeholder { text: placeholder } => {
                    text.push_str(&format!("  {placeholder}\n"));
                }
                PanelNode::Card { title, link } => {
                    text.push_str(&format!("  • {title}\n    {}: {}\n", link.label, link.href));
                }
            }
        }
        text
    }

    fn write_or_warn(&mut self, write: impl FnOnce(&mut W) -> std::io::Result<()>) {
        let result = write(&mut self.out).and_then(|()| self.out.flush());
        if let Err(err) = result {
            dash_warn!("Failed to write to terminal: {}", err);
        }
    }
}

fn button_label(name: &str, enabled: bool) -> String {
    if enabled {
        name.to_string()
    } else {
        format!("{name}…")
    }
}

impl<W: Write> PanelHost for TerminalHost<W> {
    fn execute(&mut self, command: PanelCommand) {
        self.store.execute(command);
    }

    fn flush(&mut self) {
        let panel = self.draw();
        self.write_or_warn(|out| write!(out, "{panel}"));
    }

    fn notify(&mut self, notification: &Notification) {
        let marker = match notification.level {
            NotificationLevel::Info => "»",
            NotificationLevel::Error => "!",
        };
        let stamp = Local::now().format("%H:%M:%S");
        let text = notification.text.clone();
        self.write_or_warn(|out| writeln!(out, "[{stamp}] {marker} {text}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::render::render;
    use dashboard_core::{update, AppState, StatusReport};

    #[test]
    fn parses_control_commands() {
        assert_eq!(parse_input("start"), Some(Input::Dispatch(Msg::StartClicked)));
        assert_eq!(parse_input("stop\n"), Some(Input::Dispatch(Msg::StopClicked)));
        assert_eq!(
            parse_input("refresh"),
            Some(Input::Dispatch(Msg::RefreshRequested))
        );
        assert_eq!(parse_input("quit"), Some(Input::Quit));
        assert_eq!(parse_input("   "), None);
    }

    #[test]
    fn keyword_keeps_spacing_and_may_be_empty() {
        assert_eq!(
            parse_input("keyword  bolsa de crochê "),
            Some(Input::Dispatch(Msg::KeywordChanged(
                " bolsa de crochê ".to_string()
            )))
        );
        assert_eq!(
            parse_input("keyword"),
            Some(Input::Dispatch(Msg::KeywordChanged(String::new())))
        );
    }

    #[test]
    fn tab_separates_command_from_argument() {
        assert_eq!(
            parse_input("keyword\tfoo"),
            Some(Input::Dispatch(Msg::KeywordChanged("foo".to_string())))
        );
        assert_eq!(
            parse_input("mode\ttxt"),
            Some(Input::Dispatch(Msg::ModeSelected("txt".to_string())))
        );
    }

    #[test]
    fn mode_is_forwarded_without_validation() {
        assert_eq!(
            parse_input("mode turbo"),
            Some(Input::Dispatch(Msg::ModeSelected("turbo".to_string())))
        );
    }

    #[test]
    fn save_needs_three_fields() {
        assert_eq!(
            parse_input("save tênis | Loja X | https://example.com/ad/1"),
            Some(Input::Dispatch(Msg::FavoriteSubmitted(FavoriteEntry {
                keyword: "tênis".to_string(),
                page_name: "Loja X".to_string(),
                ad_library_link: "https://example.com/ad/1".to_string(),
            })))
        );
        assert!(matches!(parse_input("save tênis | Loja X"), Some(Input::Invalid(_))));
        assert!(matches!(parse_input("dance"), Some(Input::Invalid(_))));
    }

    #[test]
    fn draws_panel_and_toasts() {
        let mut host = TerminalHost::new(Vec::new());
        let (state, _) = update(
            AppState::new(),
            Msg::StatusFetched(StatusReport {
                status: Some("ativo".to_string()),
                mined_today: Some(3),
            }),
        );
        for cmd in render(&state.view()) {
            host.execute(cmd);
        }
        host.flush();
        host.notify(&Notification::error("failed to stop process"));

        let out = String::from_utf8(host.into_inner()).unwrap();
        assert!(out.contains("status: ativo   mined today: 3"));
        assert!(out.contains("no favorites yet"));
        assert!(out.contains("! failed to stop process"));
    }

    #[test]
    fn toasts_are_printed_but_not_kept() {
        let mut host = TerminalHost::new(Vec::new());
        for _ in 0..3 {
            host.notify(&Notification::info("mining started"));
        }
        assert!(host.store.notifications().is_empty());

        let out = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(out.matches("» mining started").count(), 3);
    }
}
