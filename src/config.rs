use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub localhost: Option<bool>,
    #[serde(default)]
    pub jellyfin: JellyfinSection,
}

/// `[jellyfin]` table of the config file.
#[derive(Deserialize, Default, Debug)]
pub struct JellyfinSection {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub localhost: bool,
    pub jellyfin_url: String,
    pub api_key: String,
    pub username: String,
}

impl Config {
    /// Merge CLI (and its env fallbacks) over the file over defaults.
    /// The three Jellyfin values have no default and must come from somewhere.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        Ok(Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            localhost: args.localhost || file.localhost.unwrap_or(false),
            jellyfin_url: required(args.jellyfin_url.clone(), file.jellyfin.url, "Jellyfin URL (--jellyfin-url / JELLYFIN_URL)")?,
            api_key: required(args.api_key.clone(), file.jellyfin.api_key, "Jellyfin API key (--api-key / JELLYFIN_API_KEY)")?,
            username: required(args.username.clone(), file.jellyfin.username, "Jellyfin username (--username / JELLYFIN_USERNAME)")?,
        })
    }
}

fn required(cli: Option<String>, file: Option<String>, what: &'static str) -> Result<String, ConfigError> {
    cli.or(file)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(what))
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("jellycard.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("jellycard").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
