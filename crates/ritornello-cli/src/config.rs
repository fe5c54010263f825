use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use ritornello_enrich::SpotifyCredentials;

/// Configuration for ritornello.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (RITO_* prefix)
/// 3. Config file (~/.config/ritornello/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spotify client ID for the client-credentials flow.
    ///
    /// Can be set via:
    /// - ENV: RITO_SPOTIFY_CLIENT_ID
    /// - Config: spotify_client_id = "..."
    pub spotify_client_id: Option<String>,

    /// Spotify client secret for the client-credentials flow.
    ///
    /// Can be set via:
    /// - ENV: RITO_SPOTIFY_CLIENT_SECRET
    /// - Config: spotify_client_secret = "..."
    pub spotify_client_secret: Option<String>,

    /// Path to the catalog JSON blob.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.json
    /// - ENV: RITO_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.json"
    /// - Default: ~/.local/share/ritornello/catalog.json
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Path to the similarity matrix JSON blob.
    ///
    /// Can be set via:
    /// - CLI: --similarity /path/to/similarity.json
    /// - ENV: RITO_SIMILARITY_PATH
    /// - Config: similarity_path = "/path/to/similarity.json"
    /// - Default: ~/.local/share/ritornello/similarity.json
    #[serde(default = "default_similarity_path")]
    pub similarity_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spotify_client_id: None,
            spotify_client_secret: None,
            catalog_path: default_catalog_path(),
            similarity_path: default_similarity_path(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/ritornello/config.toml
    /// Reads environment variables with RITO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("rito");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Both Spotify credentials, when configured.
    pub fn spotify_credentials(&self) -> Option<SpotifyCredentials> {
        match (&self.spotify_client_id, &self.spotify_client_secret) {
            (Some(id), Some(secret)) => Some(SpotifyCredentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => None,
        }
    }
}

/// Default data-file location under the platform data directory.
fn data_file(name: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ritornello")
        .join(name)
}

fn default_catalog_path() -> PathBuf {
    data_file("catalog.json")
}

fn default_similarity_path() -> PathBuf {
    data_file("similarity.json")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/ritornello/config.toml
/// - macOS: ~/Library/Application Support/ritornello/config.toml
/// - Windows: %APPDATA%\ritornello\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ritornello")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Ritornello Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (RITO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Spotify client credentials for cover art, preview, and listen links
#
# Register an application at: https://developer.spotify.com/dashboard
# Without credentials, recommendations still work but show a
# placeholder cover and no links.
#
# Can also be set via:
# - Environment: RITO_SPOTIFY_CLIENT_ID / RITO_SPOTIFY_CLIENT_SECRET
#spotify_client_id = "your-client-id-here"
#spotify_client_secret = "your-client-secret-here"

# Paths to the precomputed catalog and similarity matrix
#
# Both files are produced by the offline dataset build and are loaded
# read-only at startup.
#
# Can also be set via:
# - CLI: ritornello --catalog /data/catalog.json --similarity /data/similarity.json ...
# - Environment: RITO_CATALOG_PATH / RITO_SIMILARITY_PATH
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/catalog.json"
#similarity_path = "/path/to/similarity.json"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
