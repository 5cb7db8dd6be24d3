use crate::jellyfin::models::{Item, ItemsResponse, Session};
use crate::media::kind::MediaKind;

/// Pick the item a card should show.
///
/// A matching now-playing item in any session wins over the recent-items
/// result, regardless of when either was last played. Sessions are scanned in
/// the order the server returned them; the first match is used.
pub fn select_item(kind: MediaKind, sessions: Vec<Session>, recent: ItemsResponse) -> Option<Item> {
    sessions
        .into_iter()
        .filter_map(|s| s.now_playing_item)
        .find(|item| item.item_type.as_deref() == Some(kind.item_type()))
        .or_else(|| recent.items.and_then(|items| items.into_iter().next()))
}

/// Id whose primary image represents the item on its card.
///
/// Episodes use their series poster when the series is known; everything
/// else uses its own image.
pub fn image_item_id(kind: MediaKind, item: &Item) -> &str {
    match (kind, item.series_id.as_deref()) {
        (MediaKind::Episode, Some(series_id)) if !series_id.is_empty() => series_id,
        _ => &item.id,
    }
}
