use crate::{AppState, CommandKind, CommandOutcome, Effect, Msg, Notification, RefreshScope};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => {
            // Render at least once even if both fetches fail.
            state.mark_dirty();
            vec![Effect::FetchStatus, Effect::FetchFavorites]
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::KeywordChanged(keyword) => {
            state.set_keyword(keyword);
            Vec::new()
        }
        Msg::StartClicked => {
            if state.accepts(CommandKind::Start) {
                state.begin(CommandKind::Start);
                vec![Effect::SendStart {
                    mode: state.mode().to_string(),
                    keyword: state.keyword().to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::StopClicked => {
            if state.accepts(CommandKind::Stop) {
                state.begin(CommandKind::Stop);
                vec![Effect::SendStop]
            } else {
                Vec::new()
            }
        }
        Msg::FavoriteSubmitted(entry) => {
            if state.accepts(CommandKind::SaveFavorite) {
                state.begin(CommandKind::SaveFavorite);
                vec![Effect::SaveFavorite(entry)]
            } else {
                Vec::new()
            }
        }
        Msg::CommandFinished { command, outcome } => {
            state.finish(command);
            match outcome {
                CommandOutcome::Replied(text) => {
                    let mut effects = vec![Effect::Notify(Notification::info(text))];
                    effects.extend(refresh_after(command, state.settings().refresh_after_command));
                    effects
                }
                CommandOutcome::Failed => {
                    vec![Effect::Notify(Notification::error(command.fallback_message()))]
                }
            }
        }
        Msg::StatusFetched(report) => {
            state.replace_status(report);
            Vec::new()
        }
        Msg::FavoritesFetched(favorites) => {
            state.replace_favorites(favorites);
            Vec::new()
        }
    };

    (state, effects)
}

fn refresh_after(command: CommandKind, scope: RefreshScope) -> Vec<Effect> {
    match (command, scope) {
        (CommandKind::SaveFavorite, _) => vec![Effect::FetchFavorites],
        (_, RefreshScope::Status) => vec![Effect::FetchStatus],
        (_, RefreshScope::All) => vec![Effect::FetchStatus, Effect::FetchFavorites],
    }
}
