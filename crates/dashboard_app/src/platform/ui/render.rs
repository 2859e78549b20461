use dashboard_core::{AppViewModel, FavoriteCard, FavoritesView};

use super::constants::*;
use super::host::{Link, PanelCommand, PanelNode};

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<PanelCommand> {
    let mut cmds = Vec::new();

    cmds.push(PanelCommand::SetControlText {
        control_id: SELECT_MODE,
        text: view.mode.clone(),
    });
    cmds.push(PanelCommand::SetControlText {
        control_id: INPUT_KEYWORD,
        text: view.keyword.clone(),
    });
    cmds.push(PanelCommand::SetControlText {
        control_id: LABEL_STATUS,
        text: view.status_text.clone(),
    });
    cmds.push(PanelCommand::SetControlText {
        control_id: LABEL_COUNT,
        text: view.count_text.clone(),
    });

    cmds.push(PanelCommand::SetControlEnabled {
        control_id: BUTTON_START,
        enabled: view.start_enabled,
    });
    cmds.push(PanelCommand::SetControlEnabled {
        control_id: BUTTON_STOP,
        enabled: view.stop_enabled,
    });
    cmds.push(PanelCommand::SetControlEnabled {
        control_id: BUTTON_SAVE_FAVORITE,
        enabled: view.save_enabled,
    });

    cmds.push(PanelCommand::ReplaceChildren {
        control_id: CONTAINER_FAVORITES,
        nodes: build_favorite_nodes(&view.favorites),
    });

    cmds
}

fn build_favorite_nodes(favorites: &FavoritesView) -> Vec<PanelNode> {
    match favorites {
        FavoritesView::Placeholder(text) => vec![PanelNode::Placeholder { text: text.clone() }],
        FavoritesView::Cards(cards) => cards.iter().map(card_node).collect(),
    }
}

fn card_node(card: &FavoriteCard) -> PanelNode {
    PanelNode::Card {
        title: card.headline.clone(),
        link: Link {
            href: card.link.clone(),
            label: card.link_label.clone(),
            new_context: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::host::{PanelHost, RegionStore};
    use dashboard_core::{update, AppState, FavoriteEntry, Msg, StatusReport};

    fn apply(store: &mut RegionStore, state: &AppState) {
        for cmd in render(&state.view()) {
            store.execute(cmd);
        }
    }

    fn favorites(n: usize) -> Vec<FavoriteEntry> {
        (0..n)
            .map(|i| FavoriteEntry {
                keyword: format!("kw{i}"),
                page_name: format!("Page {i}"),
                ad_library_link: format!("https://example.com/ad/{i}"),
            })
            .collect()
    }

    fn card_titles(store: &RegionStore) -> Vec<String> {
        store
            .children(CONTAINER_FAVORITES)
            .iter()
            .filter_map(|node| match node {
                PanelNode::Card { title, .. } => Some(title.clone()),
                PanelNode::Placeholder { .. } => None,
            })
            .collect()
    }

    #[test]
    fn empty_favorites_leave_one_placeholder_and_no_cards() {
        let mut store = RegionStore::new();
        let (state, _) = update(AppState::new(), Msg::FavoritesFetched(favorites(2)));
        apply(&mut store, &state);
        let (state, _) = update(state, Msg::FavoritesFetched(Vec::new()));
        apply(&mut store, &state);

        assert_eq!(
            store.children(CONTAINER_FAVORITES),
            &[PanelNode::Placeholder {
                text: "no favorites yet".to_string()
            }]
        );
    }

    #[test]
    fn cards_follow_input_order_and_link_out() {
        let mut store = RegionStore::new();
        let (state, _) = update(AppState::new(), Msg::FavoritesFetched(favorites(3)));
        apply(&mut store, &state);

        let nodes = store.children(CONTAINER_FAVORITES);
        assert_eq!(nodes.len(), 3);
        for (i, node) in nodes.iter().enumerate() {
            match node {
                PanelNode::Card { title, link } => {
                    assert_eq!(title, &format!("kw{i} — Page {i}"));
                    assert_eq!(link.href, format!("https://example.com/ad/{i}"));
                    assert_eq!(link.label, "view ad");
                    assert!(link.new_context);
                }
                other => panic!("unexpected node {other:?}"),
            }
        }
    }

    #[test]
    fn rerender_does_not_duplicate_cards() {
        let mut store = RegionStore::new();
        let (state, _) = update(AppState::new(), Msg::FavoritesFetched(favorites(4)));
        apply(&mut store, &state);
        let (state, _) = update(state, Msg::FavoritesFetched(favorites(2)));
        apply(&mut store, &state);

        assert_eq!(card_titles(&store), vec!["kw0 — Page 0", "kw1 — Page 1"]);
    }

    #[test]
    fn example_favorite_renders_as_single_card() {
        let mut store = RegionStore::new();
        let (state, _) = update(
            AppState::new(),
            Msg::FavoritesFetched(vec![FavoriteEntry {
                keyword: "tênis".to_string(),
                page_name: "Loja X".to_string(),
                ad_library_link: "https://example.com/ad/1".to_string(),
            }]),
        );
        apply(&mut store, &state);

        match store.children(CONTAINER_FAVORITES) {
            [PanelNode::Card { title, link }] => {
                assert!(title.contains("tênis — Loja X"));
                assert_eq!(link.href, "https://example.com/ad/1");
            }
            other => panic!("expected one card, got {other:?}"),
        }
    }

    #[test]
    fn status_labels_follow_snapshot() {
        let mut store = RegionStore::new();
        apply(&mut store, &AppState::new());
        assert_eq!(store.text(LABEL_STATUS), "-");
        assert_eq!(store.text(LABEL_COUNT), "0");

        let (state, _) = update(
            AppState::new(),
            Msg::StatusFetched(StatusReport {
                status: Some("ativo".to_string()),
                mined_today: Some(7),
            }),
        );
        apply(&mut store, &state);
        assert_eq!(store.text(LABEL_STATUS), "ativo");
        assert_eq!(store.text(LABEL_COUNT), "7");
    }

    #[test]
    fn pending_command_disables_its_button() {
        let mut store = RegionStore::new();
        let (state, _) = update(AppState::new(), Msg::StartClicked);
        apply(&mut store, &state);

        assert!(!store.is_enabled(BUTTON_START));
        assert!(store.is_enabled(BUTTON_STOP));
    }
}
