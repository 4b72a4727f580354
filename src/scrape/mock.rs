// src/scrape/mock.rs
// Canned answers for offline mode. Shapes match what live pages produce.

use std::collections::BTreeMap;

use crate::model::{PlaylistImportResult, PlaylistInfo, PlaylistItem, SongRow, TabContentResult, TabType};

const PLAYLIST_NAME: &str = "Request List";
const PLAYLIST_DESCRIPTION: &str = "Find one on this list, and request it!";

/// (id, title, artist, tab URL)
const SONGS: &[(&str, &str, &str, &str)] = &[
    ("14322", "Take It Easy", "Eagles",
        "https://tabs.ultimate-guitar.com/tab/eagles/take-it-easy-chords-14322"),
    ("1738371", "Free Fallin", "Tom Petty",
        "https://tabs.ultimate-guitar.com/tab/tom-petty/free-fallin-chords-1738371"),
    ("1171108", "Simple Man", "Lynyrd Skynyrd",
        "https://tabs.ultimate-guitar.com/tab/lynyrd-skynyrd/simple-man-chords-1171108"),
    ("459333", "Three Little Birds", "Bob Marley",
        "https://tabs.ultimate-guitar.com/tab/bob-marley/three-little-birds-chords-459333"),
    ("135023", "Drift Away", "Uncle Kracker",
        "https://tabs.ultimate-guitar.com/tab/uncle-kracker/drift-away-chords-135023"),
    ("2166139", "Turn The Page", "Bob Seger & The Silver Bullet Band",
        "https://tabs.ultimate-guitar.com/tab/bob-seger-the-silver-bullet-band/turn-the-page-chords-2166139"),
    ("983702", "Otherside", "Red Hot Chili Peppers",
        "https://tabs.ultimate-guitar.com/tab/red-hot-chili-peppers/otherside-chords-983702"),
];

const TAB_CONTENT: &str = concat!(
    "[Intro]\n",
    "[tab][ch]G[/ch]       [ch]C[/ch]       [ch]G[/ch][/tab]\n\n",
    "[Verse]\n",
    "[tab][ch]G[/ch]       [ch]C[/ch]       [ch]G[/ch][/tab]\n",
    "Mock tab content loaded in mock mode.",
);

pub fn playlist(source_playlist_id: &str) -> PlaylistImportResult {
    let songs: Vec<SongRow> = SONGS
        .iter()
        .map(|&(id, title, artist, url)| SongRow {
            id: s!(id),
            title: s!(title),
            artist: s!(artist),
            tab_url: s!(url),
            tab_type: TabType::Chords,
        })
        .collect();

    let playlist_items = songs
        .iter()
        .enumerate()
        .map(|(i, song)| PlaylistItem { position: i as u32 + 1, song_id: song.id.clone() })
        .collect();

    PlaylistImportResult {
        playlist: PlaylistInfo {
            source_playlist_id: s!(source_playlist_id),
            name: s!(PLAYLIST_NAME),
            description: Some(s!(PLAYLIST_DESCRIPTION)),
        },
        songs,
        playlist_items,
    }
}

/// The mock tab echoes the requested URL back as its own.
pub fn tab(url: &str) -> TabContentResult {
    TabContentResult {
        title: s!("Mock Song"),
        artist: s!("Mock Artist"),
        tab_url: s!(url),
        tab_type: TabType::Chords,
        content: s!(TAB_CONTENT),
        tuning_name: Some(s!("Standard")),
        tuning_value: Some(s!("E A D G B E")),
        chord_shapes: BTreeMap::new(),
    }
}
