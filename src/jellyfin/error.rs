use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures talking to the Jellyfin server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to Jellyfin failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jellyfin answered {status} for {path}")]
    Status { status: StatusCode, path: String },

    #[error("unexpected Jellyfin response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no Jellyfin user named {0:?}")]
    UserNotFound(String),
}
