use crate::FavoriteEntry;

pub const STATUS_PLACEHOLDER: &str = "-";
pub const NO_FAVORITES_PLACEHOLDER: &str = "no favorites yet";
pub const AD_LINK_LABEL: &str = "view ad";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub mode: String,
    pub keyword: String,
    pub status_text: String,
    pub count_text: String,
    pub favorites: FavoritesView,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub save_enabled: bool,
    pub dirty: bool,
}

/// Content of the favorites container: one placeholder, or one card per
/// favorite in arrival order. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesView {
    Placeholder(String),
    Cards(Vec<FavoriteCard>),
}

impl FavoritesView {
    pub fn cards(&self) -> &[FavoriteCard] {
        match self {
            FavoritesView::Placeholder(_) => &[],
            FavoritesView::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteCard {
    pub keyword: String,
    pub page_name: String,
    /// `keyword — page_name`
    pub headline: String,
    pub link: String,
    pub link_label: String,
}

impl FavoriteCard {
    pub(crate) fn from_entry(entry: &FavoriteEntry) -> Self {
        Self {
            keyword: entry.keyword.clone(),
            page_name: entry.page_name.clone(),
            headline: format!("{} — {}", entry.keyword, entry.page_name),
            link: entry.ad_library_link.clone(),
            link_label: AD_LINK_LABEL.to_string(),
        }
    }
}
