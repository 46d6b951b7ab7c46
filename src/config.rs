use std::path::Path;

use serde::Deserialize;

/// Relative path checked for file-based configuration.
const CONFIG_FILE: &str = "config.json";

/// Placeholder values shipped in sample configs are treated as "no key".
const PLACEHOLDER_PREFIX: &str = "your_";
const PLACEHOLDER_LITERAL: &str = "your_omdb_api_key";

/// Application configuration loaded from environment variables,
/// with a `config.json` fallback for the OMDb credential
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key; absent when neither source provides a usable value
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Per-request timeout for OMDb lookups, in seconds
    #[serde(default = "default_omdb_timeout_secs")]
    pub omdb_timeout_secs: u64,

    /// Path to the movie catalog file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Shape of the optional `config.json` file. Unknown keys are ignored;
/// a missing or unparseable file behaves like an empty one.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(rename = "OMDB_API_KEY")]
    omdb_api_key: Option<String>,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_omdb_timeout_secs() -> u64 {
    5
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables, resolving the OMDb
    /// credential against `config.json` when the environment does not
    /// provide a usable value
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        let file = FileConfig::load(Path::new(CONFIG_FILE));
        config.omdb_api_key = resolve_api_key(config.omdb_api_key.take(), file.omdb_api_key);

        Ok(config)
    }
}

impl FileConfig {
    /// Reads the config file, treating a missing, unreadable, or malformed
    /// file as empty configuration
    fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    fn parse(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring malformed config file");
            Self::default()
        })
    }
}

/// Resolves the OMDb credential with environment-over-file precedence.
/// A placeholder value in either source falls through to the next one.
pub fn resolve_api_key(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    normalize_api_key(env_value).or_else(|| normalize_api_key(file_value))
}

/// Trims the value and rejects empty or placeholder-looking keys
fn normalize_api_key(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    if value.is_empty() {
        return None;
    }

    let lowered = value.to_lowercase();
    if lowered.starts_with(PLACEHOLDER_PREFIX) || lowered == PLACEHOLDER_LITERAL {
        return None;
    }

    Some(value)
}
