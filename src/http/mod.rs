pub mod cards;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/movie", get(cards::serve_movie_card))
        .route("/api/music", get(cards::serve_music_card))
        .route("/api/tv", get(cards::serve_tv_card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
