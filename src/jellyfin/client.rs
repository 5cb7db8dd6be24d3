//! Thin async client over the four read-only Jellyfin calls the cards need.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::jellyfin::error::{Error, Result};
use crate::jellyfin::models::{ItemsResponse, Session, User};
use crate::media::kind::MediaKind;

/// Jellyfin HTTP client authenticated with a static API key.
///
/// The key travels as the `api_key` query parameter on every request. No
/// timeout or retry policy is configured; a hung upstream stalls the caller.
#[derive(Debug, Clone)]
pub struct JellyfinClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl JellyfinClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Build on top of an existing `reqwest::Client` to share its connection pool.
    pub fn with_client(http: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        tracing::debug!("GET {}{}", self.base_url, path);
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, path: path.to_string() });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let bytes = self.get(path, query).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `GET /Users`
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("/Users", &[]).await
    }

    /// `GET /Sessions`, unfiltered.
    pub async fn sessions(&self) -> Result<Vec<Session>> {
        self.get_json("/Sessions", &[]).await
    }

    /// Active sessions owned by `user_id`, in server order.
    ///
    /// The list is filtered on raw JSON first, so a session of another user
    /// that does not fit `Session` never fails this user's request.
    pub async fn sessions_for_user(&self, user_id: &str) -> Result<Vec<Session>> {
        let sessions: Vec<serde_json::Value> = self.get_json("/Sessions", &[]).await?;
        sessions
            .into_iter()
            .filter(|s| s.get("UserId").and_then(|v| v.as_str()) == Some(user_id))
            .map(|s| Ok(serde_json::from_value::<Session>(s)?))
            .collect()
    }

    /// The single most recently played item of `kind` for `user_id`.
    ///
    /// Credits (`Fields=People`) are only requested for movies; the other
    /// cards never read them.
    pub async fn recent_items(&self, user_id: &str, kind: MediaKind) -> Result<ItemsResponse> {
        let mut query = vec![
            ("IncludeItemTypes", kind.item_type()),
            ("Limit", "1"),
            ("SortBy", "DatePlayed"),
            ("SortOrder", "Descending"),
            ("Recursive", "true"),
        ];
        if kind.wants_people() {
            query.push(("Fields", "People"));
        }
        self.get_json(&format!("/Users/{user_id}/Items"), &query).await
    }

    /// Raw bytes of the item's primary image.
    pub async fn primary_image(&self, item_id: &str) -> Result<Vec<u8>> {
        let response = self.get(&format!("/Items/{item_id}/Images/Primary"), &[]).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Primary image encoded as standard padded base64, ready for a `data:` URI.
    pub async fn primary_image_base64(&self, item_id: &str) -> Result<String> {
        let bytes = self.primary_image(item_id).await?;
        Ok(STANDARD.encode(bytes))
    }
}
