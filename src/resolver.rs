use std::sync::OnceLock;

use crate::jellyfin::{Error, JellyfinClient, Result};

/// Resolves the configured username to its Jellyfin user id, once per process.
///
/// The id is never invalidated: a user renamed or deleted upstream keeps the
/// old id until restart. Two requests resolving at the same time both hit
/// `/Users` and compute the same id; whichever stores it first wins. Nothing
/// is locked across the upstream call.
#[derive(Debug)]
pub struct UserResolver {
    username: String,
    user_id: OnceLock<String>,
}

impl UserResolver {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), user_id: OnceLock::new() }
    }

    /// The memoized id, if a resolution has already succeeded.
    pub fn cached(&self) -> Option<&str> {
        self.user_id.get().map(String::as_str)
    }

    /// Return the user id, querying `/Users` only if it is not known yet.
    ///
    /// Usernames are matched case-insensitively. A miss is an error and is not
    /// cached, so the next call looks again.
    pub async fn resolve(&self, client: &JellyfinClient) -> Result<String> {
        if let Some(id) = self.user_id.get() {
            return Ok(id.clone());
        }

        let wanted = self.username.to_lowercase();
        let user = client
            .users()
            .await?
            .into_iter()
            .find(|u| u.name.to_lowercase() == wanted)
            .ok_or_else(|| Error::UserNotFound(self.username.clone()))?;

        tracing::info!("Resolved Jellyfin user {:?} to {}", user.name, user.id);
        Ok(self.user_id.get_or_init(|| user.id).clone())
    }
}
