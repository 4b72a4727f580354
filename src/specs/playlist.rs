// src/specs/playlist.rs
//! Reads a *songbook* (shared playlist) page's store into a `PlaylistImportResult`.
//!
//! Anchor: `store.page.data.songbook.tabs` must be a sequence, otherwise the page
//! is not a songbook and we fail with `UnexpectedShape`. Below the anchor every
//! field is optional:
//! - entries whose `tab.tab_url` is missing, empty or not a scalar are dropped
//!   (partial songbooks are normal, not an error);
//! - `title`/`artist` default to `""`; the type label falls back from
//!   `type_name` to the legacy `type`;
//! - positions are `1..=N` over the *kept* rows, never read from the source;
//! - song ids are kept as given, duplicates included.

use serde_json::Value;

use crate::config::consts::DEFAULT_PLAYLIST_NAME;
use crate::core::json;
use crate::error::NormalizationError;
use crate::model::{PlaylistImportResult, PlaylistInfo, PlaylistItem, SongRow, TabType};

pub fn normalize_playlist(
    store: &Value,
    fallback_id: &str,
) -> Result<PlaylistImportResult, NormalizationError> {
    let songbook = json::path(store, &["store", "page", "data", "songbook"])
        .filter(|v| json::truthy(Some(*v)))
        .ok_or(NormalizationError::UnexpectedShape)?;

    let Some(entries) = songbook.get("tabs").and_then(Value::as_array) else {
        loge!("Songbook present but `tabs` is not a sequence");
        return Err(NormalizationError::UnexpectedShape);
    };

    let songs: Vec<SongRow> = entries
        .iter()
        .filter_map(|entry| entry.get("tab"))
        .filter_map(song_row)
        .collect();

    let dropped = entries.len() - songs.len();
    if dropped > 0 {
        logd!("Songbook: dropped {dropped} of {} entries without a tab URL", entries.len());
    }

    let playlist_items = songs
        .iter()
        .enumerate()
        .map(|(i, song)| PlaylistItem {
            position: i as u32 + 1,
            song_id: song.id.clone(),
        })
        .collect();

    let description = songbook
        .get("description")
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .map(String::from);

    let playlist = PlaylistInfo {
        source_playlist_id: s!(fallback_id),
        name: json::string_or(songbook.get("name"), DEFAULT_PLAYLIST_NAME),
        description,
    };

    logf!("Songbook '{}': {} songs", playlist.name, songs.len());
    Ok(PlaylistImportResult { playlist, songs, playlist_items })
}

/// The site's type label: `type_name`, or the legacy `type` when that is empty.
pub(crate) fn type_label(tab: Option<&Value>) -> Option<&str> {
    json::non_empty_str(json::get(tab, &["type_name"]))
        .or_else(|| json::non_empty_str(json::get(tab, &["type"])))
}

/// `None` unless the entry carries a non-empty scalar `tab_url`.
fn song_row(tab: &Value) -> Option<SongRow> {
    let tab_url = json::non_empty_string(tab.get("tab_url"))?;
    let id = json::string_or(tab.get("id"), "");
    if id.is_empty() {
        logd!("Songbook entry {tab_url} has no id; its songId is empty");
    }
    Some(SongRow {
        id,
        title: json::string_or(tab.get("song_name"), ""),
        artist: json::string_or(tab.get("artist_name"), ""),
        tab_url,
        tab_type: TabType::classify(type_label(Some(tab))),
    })
}
