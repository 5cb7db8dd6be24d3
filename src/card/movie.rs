use crate::card::{frame, line, Cover};
use crate::jellyfin::models::Item;

/// Text of a movie card: title, release year, director credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub release_year: String,
    pub director: String,
}

impl MovieCard {
    pub fn from_item(item: &Item) -> Self {
        // Only the first credited director counts, even when its name is blank.
        let director = item
            .people
            .iter()
            .flatten()
            .find(|p| p.role.as_deref() == Some("Director"))
            .filter(|p| !p.name.is_empty())
            .map(|p| format!("Directed by {}", p.name))
            .unwrap_or_default();

        Self {
            title: item.name.clone(),
            release_year: item
                .production_year
                .filter(|&y| y != 0)
                .map(|y| y.to_string())
                .unwrap_or_default(),
            director,
        }
    }

    pub fn render(&self, image_b64: &str) -> String {
        let lines = [
            line("title", &self.title),
            line("subtitle", &self.release_year),
            line("subtitle", &self.director),
        ]
        .join("\n");
        frame(Cover::Poster, image_b64, &lines, "")
    }
}
