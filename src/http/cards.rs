use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::card;
use crate::http::state::AppState;
use crate::jellyfin;
use crate::media::kind::MediaKind;
use crate::media::select::{image_item_id, select_item};

/// Why a card could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("{}", .0.not_found_message())]
    NotFound(MediaKind),
    #[error(transparent)]
    Upstream(#[from] jellyfin::Error),
}

impl IntoResponse for CardError {
    /// 404 carries the kind-specific message; every other failure is logged
    /// and answered with a bare "Error" so nothing upstream leaks out.
    fn into_response(self) -> Response {
        match self {
            CardError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                kind.not_found_message(),
            )
                .into_response(),
            CardError::Upstream(e) => {
                tracing::error!("Card rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Error",
                )
                    .into_response()
            }
        }
    }
}

/// Resolve the user, pick the item of `kind`, fetch its cover, and render.
pub async fn build_card(state: &AppState, kind: MediaKind) -> Result<String, CardError> {
    let user_id = state.user.resolve(&state.client).await?;

    // Sessions and recent items are independent; fetch them together.
    let (sessions, recent) = tokio::try_join!(
        state.client.sessions_for_user(&user_id),
        state.client.recent_items(&user_id, kind),
    )?;

    let item = select_item(kind, sessions, recent).ok_or(CardError::NotFound(kind))?;
    tracing::debug!("{} card for {:?} ({})", kind.item_type(), item.name, item.id);

    let image_b64 = state.client.primary_image_base64(image_item_id(kind, &item)).await?;
    Ok(card::render(kind, &item, &image_b64))
}

async fn serve_card(state: AppState, kind: MediaKind) -> Response {
    match build_card(&state, kind).await {
        Ok(svg) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, kind.cache_control()),
            ],
            svg,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/movie
pub async fn serve_movie_card(State(state): State<AppState>) -> Response {
    serve_card(state, MediaKind::Movie).await
}

/// GET /api/music
pub async fn serve_music_card(State(state): State<AppState>) -> Response {
    serve_card(state, MediaKind::Audio).await
}

/// GET /api/tv
pub async fn serve_tv_card(State(state): State<AppState>) -> Response {
    serve_card(state, MediaKind::Episode).await
}
