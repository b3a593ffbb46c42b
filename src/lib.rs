pub mod api;
pub mod config;
pub mod cooking;
pub mod error;
pub mod favorites;
pub mod model;
pub mod view;
pub mod voice;

pub use api::{RecipeClient, NO_INSTRUCTIONS};
pub use config::FinderConfig;
pub use cooking::{CookingSession, CookingState, COMPLETION_MESSAGE, NO_STEPS_MESSAGE};
pub use error::{DetailError, SearchError, SetupError, StoreError, VoiceError};
pub use favorites::{FavoritesStore, JsonFileStore, MemoryStore, SnapshotStore, Toggle};
pub use model::{FavoriteEntry, QueryFilters, RecipeDetail, RecipeSummary, Step, ViewMode};
pub use view::{
    Card, Notice, NoticeKind, Render, ViewController, ViewEffect, EMPTY_QUERY_MESSAGE,
    NO_FAVORITES_MESSAGE, NO_RESULTS_MESSAGE, NOTICE_TTL,
};
pub use voice::{ConsoleSpeaker, MuteSpeaker, Speak, StdinTranscriber, Transcriber};

/// Search for recipes using configuration from file and environment.
///
/// Convenience wrapper over [`RecipeClient`] for one-shot callers; build a
/// client directly to reuse a connection pool across searches.
pub async fn search_recipes(
    filters: &QueryFilters,
) -> Result<Vec<RecipeSummary>, Box<dyn std::error::Error>> {
    let config = FinderConfig::load()?;
    let client = RecipeClient::from_config(&config)?;
    Ok(client.search(filters).await?)
}

/// Fetch full detail for one recipe using configuration from file and
/// environment.
pub async fn recipe_detail(id: u64) -> Result<RecipeDetail, Box<dyn std::error::Error>> {
    let config = FinderConfig::load()?;
    let client = RecipeClient::from_config(&config)?;
    Ok(client.detail(id).await?)
}
