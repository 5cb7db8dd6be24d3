use std::sync::Arc;

use crate::jellyfin::JellyfinClient;
use crate::resolver::UserResolver;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Arc provides cheap clone; the resolver's memoized user id is the only
/// value written after startup.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<JellyfinClient>,
    pub user: Arc<UserResolver>,
}

impl AppState {
    pub fn new(client: JellyfinClient, user: UserResolver) -> Self {
        Self { client: Arc::new(client), user: Arc::new(user) }
    }
}
