/// The three card flavours, keyed by the Jellyfin item type each one reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Audio,
    Episode,
}

impl MediaKind {
    /// Value of the upstream `Type` field and of the `IncludeItemTypes` filter.
    pub fn item_type(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Audio => "Audio",
            MediaKind::Episode => "Episode",
        }
    }

    /// Only the movie card shows a director.
    pub fn wants_people(self) -> bool {
        matches!(self, MediaKind::Movie)
    }

    /// Plain-text body of the 404 returned when nothing of this kind was played.
    pub fn not_found_message(self) -> &'static str {
        match self {
            MediaKind::Movie => "No movie found",
            MediaKind::Audio => "No music found",
            MediaKind::Episode => "No TV show found",
        }
    }

    /// `Cache-Control` of a successful card. Music changes faster, so its
    /// stale window is shorter.
    pub fn cache_control(self) -> &'static str {
        match self {
            MediaKind::Audio => "s-maxage=60, stale-while-revalidate=300",
            MediaKind::Movie | MediaKind::Episode => "s-maxage=60, stale-while-revalidate=86400",
        }
    }
}
