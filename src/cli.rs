use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jellycard",
    about = "Serve Jellyfin \"now playing\" cards for movies, music, and TV as SVG",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Base URL of the Jellyfin server, e.g. https://jellyfin.example.com
    #[arg(long, env = "JELLYFIN_URL", value_name = "URL")]
    pub jellyfin_url: Option<String>,

    /// Jellyfin API key
    #[arg(long, env = "JELLYFIN_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Jellyfin user whose playback the cards show (case-insensitive)
    #[arg(short, long, env = "JELLYFIN_USERNAME")]
    pub username: Option<String>,

    /// HTTP port to listen on [default: 3000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./jellycard.toml, ~/.config/jellycard/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,
}
