use std::ops::Range;

use rand::Rng;

use crate::card::{frame, line, Cover};
use crate::jellyfin::models::Item;

/// Number of bars in the waveform under the track title.
pub const BAR_COUNT: usize = 84;

/// Animation duration range of a single bar, in milliseconds.
pub const BAR_DURATION_MS: Range<u32> = 1000..1350;

const WAVEFORM_STYLE: &str = r#"
        #bars { width: 40px; height: 30px; bottom: 23px; position: absolute; margin: -20px 0 0 0px; }
        .bar { width: 3px; bottom: 1px; height: 3px; position: absolute; background: #1DB954cc; animation: sound 0ms -800ms linear infinite alternate; }
        @keyframes sound { 0% { height: 3px; opacity: .35; } 100% { height: 15px; opacity: 0.95; } }"#;

/// Text of a music card: track title and the best available artist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicCard {
    pub title: String,
    pub subtitle: String,
}

impl MusicCard {
    /// Subtitle preference: album artist, first track artist, album name.
    /// Empty strings are skipped like missing ones.
    pub fn from_item(item: &Item) -> Self {
        let first_artist = item.artists.as_ref().and_then(|a| a.first());
        let subtitle = [item.album_artist.as_ref(), first_artist, item.album.as_ref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default();

        Self { title: item.name.clone(), subtitle }
    }

    /// Render with freshly randomized bar timings.
    pub fn render(&self, image_b64: &str) -> String {
        self.render_with_bars(image_b64, &waveform_durations())
    }

    /// Render with the given per-bar animation durations (ms).
    pub fn render_with_bars(&self, image_b64: &str, durations: &[u32]) -> String {
        let bars: String = durations
            .iter()
            .enumerate()
            .map(|(i, ms)| {
                format!(
                    r#"<div class="bar" style="left: {}px; animation-duration: {ms}ms;"></div>"#,
                    1 + i * 4
                )
            })
            .collect();

        let lines = [
            line("title", &self.title),
            line("subtitle", &self.subtitle),
            format!("          <div id=\"bars\">{bars}</div>"),
        ]
        .join("\n");
        frame(Cover::Album, image_b64, &lines, WAVEFORM_STYLE)
    }
}

/// `BAR_COUNT` independent draws from `BAR_DURATION_MS`. Purely cosmetic.
pub fn waveform_durations() -> Vec<u32> {
    let mut rng = rand::rng();
    (0..BAR_COUNT).map(|_| rng.random_range(BAR_DURATION_MS)).collect()
}
