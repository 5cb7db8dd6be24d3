use crate::card::{frame, line, Cover};
use crate::jellyfin::models::Item;

/// Text of an episode card: series, season, episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TvCard {
    pub series_name: String,
    pub season: String,
    pub episode: String,
}

impl TvCard {
    /// Index 0 is treated like a missing index: specials and unnumbered
    /// episodes fall back to the bare episode name.
    pub fn from_item(item: &Item) -> Self {
        let season = match item.parent_index_number {
            Some(n) if n != 0 => format!("Season {n}"),
            _ => String::new(),
        };
        let episode = match item.index_number {
            Some(n) if n != 0 => format!("Episode {n} - {}", item.name),
            _ => item.name.clone(),
        };

        Self {
            series_name: item.series_name.clone().unwrap_or_default(),
            season,
            episode,
        }
    }

    pub fn render(&self, image_b64: &str) -> String {
        let lines = [
            line("title", &self.series_name),
            line("subtitle", &self.season),
            line("subtitle", &self.episode),
        ]
        .join("\n");
        frame(Cover::Poster, image_b64, &lines, "")
    }
}
