use std::time::Duration;

use crate::error::StoreError;
use crate::favorites::{FavoritesStore, SnapshotStore};
use crate::model::{FavoriteEntry, RecipeSummary, ViewMode};

/// How long a transient message stays up before the presentation layer
/// fades and removes it.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter ingredients or apply filters.";
pub const NO_RESULTS_MESSAGE: &str = "No recipes found for your input.";
pub const NO_FAVORITES_MESSAGE: &str = "No favorites saved yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Recoverable user mistake, e.g. an empty query
    Warning,
    /// A failed action; not retried automatically
    Error,
    /// Successful action with nothing to show
    NoData,
}

/// A transient message shown in the result area, removed after `ttl`.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub ttl: Duration,
}

impl Notice {
    pub fn warning(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            kind: NoticeKind::Warning,
            ttl: NOTICE_TTL,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            kind: NoticeKind::Error,
            ttl: NOTICE_TTL,
        }
    }

    pub fn no_data(text: impl Into<String>) -> Self {
        Notice {
            text: text.into(),
            kind: NoticeKind::NoData,
            ttl: NOTICE_TTL,
        }
    }
}

/// One recipe card in the result area.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub image: String,
    /// Whether the recipe is currently saved; drives the toggle label.
    pub favorite: bool,
    /// Shown in the Search view only; favorites never carry it.
    pub missing_ingredients: Option<u32>,
}

impl Card {
    pub fn favorite_label(&self) -> &'static str {
        if self.favorite {
            "Remove"
        } else {
            "Save"
        }
    }
}

/// What the presentation layer should put in the result area.
#[derive(Debug, Clone)]
pub enum Render {
    Cards(Vec<Card>),
    Notice(Notice),
    /// Empty result area, e.g. after resetting to the search view.
    Cleared,
}

/// Instruction to re-render whichever view was active when a favorite was
/// toggled. Refreshing the search view means re-running the last search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ViewEffect {
    RefreshSearch,
    RefreshFavorites,
}

/// Owns the active view mode and translates search results and the
/// favorites list into renderable output. Never performs I/O itself.
pub struct ViewController<S: SnapshotStore> {
    mode: ViewMode,
    favorites: FavoritesStore<S>,
}

impl<S: SnapshotStore> ViewController<S> {
    pub fn new(favorites: FavoritesStore<S>) -> Self {
        ViewController {
            mode: ViewMode::Search,
            favorites,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// Render a search result list, switching to the Search view.
    pub fn show_results(&mut self, summaries: &[RecipeSummary]) -> Render {
        self.mode = ViewMode::Search;
        if summaries.is_empty() {
            return Render::Notice(Notice::no_data(NO_RESULTS_MESSAGE));
        }
        Render::Cards(
            summaries
                .iter()
                .map(|summary| Card {
                    id: summary.id,
                    title: summary.title.clone(),
                    image: summary.image.clone(),
                    favorite: self.favorites.contains(summary.id),
                    missing_ingredients: summary.missed_ingredient_count,
                })
                .collect(),
        )
    }

    /// Switch to the Favorites view and render the saved list.
    pub fn show_favorites(&mut self) -> Render {
        self.mode = ViewMode::Favorites;
        if self.favorites.is_empty() {
            return Render::Notice(Notice::no_data(NO_FAVORITES_MESSAGE));
        }
        Render::Cards(
            self.favorites
                .list()
                .iter()
                .map(|entry| Card {
                    id: entry.id,
                    title: entry.title.clone(),
                    image: entry.image.clone(),
                    favorite: true,
                    missing_ingredients: None,
                })
                .collect(),
        )
    }

    /// Switch back to the Search view with an empty result area. The last
    /// search is not re-run.
    pub fn reset_to_search(&mut self) -> Render {
        self.mode = ViewMode::Search;
        Render::Cleared
    }

    /// Toggle a favorite and say which view the caller must refresh.
    pub fn toggle_favorite(&mut self, entry: FavoriteEntry) -> Result<ViewEffect, StoreError> {
        let _change = self.favorites.toggle(entry)?;
        Ok(match self.mode {
            ViewMode::Search => ViewEffect::RefreshSearch,
            ViewMode::Favorites => ViewEffect::RefreshFavorites,
        })
    }
}
