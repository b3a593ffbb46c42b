use thiserror::Error;

/// Errors that can occur while running a search
#[derive(Error, Debug)]
pub enum SearchError {
    /// Every filter field was empty; nothing to search on
    #[error("no search criteria: enter ingredients or apply filters")]
    NoCriteria,

    /// Transport failure or non-success response from the recipe API
    #[error("failed to load recipes: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors that can occur while fetching recipe detail
#[derive(Error, Debug)]
pub enum DetailError {
    /// The API has no recipe under this id
    #[error("recipe {0} not found")]
    NotFound(u64),

    /// Transport failure or non-success response from the recipe API
    #[error("failed to load recipe details: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors that can occur in the favorites store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the snapshot file
    #[error("favorites storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted snapshot is not valid JSON
    #[error("corrupt favorites snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors that can occur during voice capture
#[derive(Error, Debug)]
pub enum VoiceError {
    /// No speech-to-text capability on this platform
    #[error("voice search is not supported on this platform")]
    Unsupported,

    /// The speech engine reported a recognition failure
    #[error("voice recognition error: {0}")]
    Recognition(String),
}

/// Configuration loading error, re-exported for callers of the
/// convenience functions.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key in config or environment
    #[error("no API key: set RECIPE__API_KEY or SPOONACULAR_API_KEY")]
    MissingApiKey,
}
