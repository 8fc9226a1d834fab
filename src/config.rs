use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration for the recipe browser
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Base URL of the recipe API; requests go to `{base_url}/recipe/read`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Quiet period after the last keystroke before a search fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            debounce_ms: default_debounce_ms(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "https://dinner-time-test.fly.dev".to_string()
}

fn default_debounce_ms() -> u64 {
    800
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load configuration from `recipe-browser.toml` and `RECIPE_BROWSER__*`
/// environment variables
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-browser").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
