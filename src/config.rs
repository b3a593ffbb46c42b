use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Finder configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// API key for the recipe provider (can also be set via the
    /// SPOONACULAR_API_KEY environment variable)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How many results to request per search
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Path of the persisted favorites snapshot
    #[serde(default = "default_favorites_path")]
    pub favorites_path: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            result_limit: default_result_limit(),
            timeout: default_timeout(),
            favorites_path: default_favorites_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_result_limit() -> u32 {
    8
}

fn default_timeout() -> u64 {
    30
}

fn default_favorites_path() -> String {
    "favorites.json".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__API_KEY, RECIPE__RESULT_LIMIT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the API key: config first, then the provider's conventional
    /// environment variable.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
    }
}
