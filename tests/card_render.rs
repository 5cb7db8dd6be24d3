use jellycard::card::music::{waveform_durations, BAR_COUNT, BAR_DURATION_MS};
use jellycard::card::{self, escape, MovieCard, MusicCard, TvCard};
use jellycard::jellyfin::models::{Item, Person};
use jellycard::media::MediaKind;

fn episode(parent: Option<u32>, index: Option<u32>, name: &str) -> Item {
    Item {
        id: "E1".to_string(),
        name: name.to_string(),
        item_type: Some("Episode".to_string()),
        series_name: Some("Show".to_string()),
        series_id: Some("S1".to_string()),
        parent_index_number: parent,
        index_number: index,
        ..Default::default()
    }
}

fn track(album_artist: Option<&str>, artists: Option<Vec<&str>>, album: Option<&str>) -> Item {
    Item {
        id: "T1".to_string(),
        name: "Song".to_string(),
        item_type: Some("Audio".to_string()),
        album_artist: album_artist.map(str::to_string),
        artists: artists.map(|a| a.into_iter().map(str::to_string).collect()),
        album: album.map(str::to_string),
        ..Default::default()
    }
}

fn person(name: &str, role: &str) -> Person {
    Person { name: name.to_string(), role: Some(role.to_string()) }
}

// ── Movie ─────────────────────────────────────────────────────────────────────

#[test]
fn movie_card_uses_year_and_director() {
    let item = Item {
        id: "M1".to_string(),
        name: "Heat".to_string(),
        production_year: Some(1995),
        people: Some(vec![person("Al Pacino", "Actor"), person("Michael Mann", "Director")]),
        ..Default::default()
    };
    let card = MovieCard::from_item(&item);
    assert_eq!(card.title, "Heat");
    assert_eq!(card.release_year, "1995");
    assert_eq!(card.director, "Directed by Michael Mann");
}

#[test]
fn movie_card_without_year_or_director_is_blank() {
    let item = Item {
        id: "M1".to_string(),
        name: "Untitled".to_string(),
        people: Some(vec![person("Someone", "Actor")]),
        ..Default::default()
    };
    let card = MovieCard::from_item(&item);
    assert_eq!(card.release_year, "");
    assert_eq!(card.director, "");
}

#[test]
fn movie_card_takes_first_director() {
    let item = Item {
        id: "M1".to_string(),
        name: "Fargo".to_string(),
        people: Some(vec![person("Joel Coen", "Director"), person("Ethan Coen", "Director")]),
        ..Default::default()
    };
    assert_eq!(MovieCard::from_item(&item).director, "Directed by Joel Coen");
}

#[test]
fn movie_card_zero_year_is_blank() {
    let item = Item {
        id: "M1".to_string(),
        name: "Unknown".to_string(),
        production_year: Some(0),
        ..Default::default()
    };
    assert_eq!(MovieCard::from_item(&item).release_year, "");
}

#[test]
fn movie_card_blank_first_director_is_blank() {
    let item = Item {
        id: "M1".to_string(),
        name: "Anthology".to_string(),
        people: Some(vec![person("", "Director"), person("Second Hand", "Director")]),
        ..Default::default()
    };
    assert_eq!(MovieCard::from_item(&item).director, "");
}

// ── TV ────────────────────────────────────────────────────────────────────────

#[test]
fn tv_card_season_and_episode() {
    let card = TvCard::from_item(&episode(Some(2), Some(5), "Title"));
    assert_eq!(card.series_name, "Show");
    assert_eq!(card.season, "Season 2");
    assert_eq!(card.episode, "Episode 5 - Title");
}

#[test]
fn tv_card_without_indices_uses_bare_name() {
    let card = TvCard::from_item(&episode(None, None, "Pilot"));
    assert_eq!(card.season, "");
    assert_eq!(card.episode, "Pilot");
}

#[test]
fn tv_card_zero_index_treated_as_missing() {
    let card = TvCard::from_item(&episode(Some(0), Some(0), "Special"));
    assert_eq!(card.season, "");
    assert_eq!(card.episode, "Special");
}

#[test]
fn tv_card_without_series_name_has_empty_title() {
    let mut item = episode(Some(1), Some(1), "Ep");
    item.series_name = None;
    assert_eq!(TvCard::from_item(&item).series_name, "");
}

// ── Music ─────────────────────────────────────────────────────────────────────

#[test]
fn music_prefers_album_artist() {
    let card = MusicCard::from_item(&track(Some("AA"), Some(vec!["A", "B"]), Some("X")));
    assert_eq!(card.title, "Song");
    assert_eq!(card.subtitle, "AA");
}

#[test]
fn music_falls_back_to_first_artist() {
    let card = MusicCard::from_item(&track(None, Some(vec!["A", "B"]), Some("X")));
    assert_eq!(card.subtitle, "A");
}

#[test]
fn music_falls_back_to_album() {
    let card = MusicCard::from_item(&track(None, None, Some("X")));
    assert_eq!(card.subtitle, "X");
}

#[test]
fn music_empty_values_are_skipped() {
    let card = MusicCard::from_item(&track(Some(""), Some(vec![]), Some("X")));
    assert_eq!(card.subtitle, "X");
    let card = MusicCard::from_item(&track(None, None, None));
    assert_eq!(card.subtitle, "");
}

#[test]
fn waveform_has_84_bars_in_range() {
    let durations = waveform_durations();
    assert_eq!(durations.len(), BAR_COUNT);
    assert!(durations.iter().all(|d| BAR_DURATION_MS.contains(d)), "{durations:?}");
}

#[test]
fn music_render_positions_bars() {
    let card = MusicCard { title: "Song".to_string(), subtitle: "Artist".to_string() };
    let svg = card.render_with_bars("aW1n", &[1200; BAR_COUNT]);
    assert_eq!(svg.matches(r#"class="bar""#).count(), BAR_COUNT);
    assert!(svg.contains("left: 1px; animation-duration: 1200ms;"));
    assert!(svg.contains("left: 333px;"), "last bar should sit at 1 + 83 * 4");
    assert!(svg.contains("height: 100px"), "album covers are square");
}

// ── Frame ─────────────────────────────────────────────────────────────────────

#[test]
fn rendered_card_is_svg_with_inline_cover() {
    let svg = card::render(MediaKind::Episode, &episode(Some(2), Some(5), "Title"), "aW1n");
    assert!(svg.starts_with("<svg width=\"480\" height=\"133\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("data:image/jpeg;base64,aW1n"));
    assert!(svg.contains(">Show</div>"));
    assert!(svg.contains(">Season 2</div>"));
    assert!(svg.contains(">Episode 5 - Title</div>"));
    assert!(svg.contains("height: 150px"), "posters are portrait");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
    let item = Item { id: "M1".to_string(), name: "Fast & Furious".to_string(), ..Default::default() };
    let svg = card::render(MediaKind::Movie, &item, "");
    assert!(svg.contains("Fast &amp; Furious"));
    assert!(!svg.contains("Fast & Furious"));
}
