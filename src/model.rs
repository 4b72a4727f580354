// src/model.rs
//! Stable shapes handed to the UI and cache layers.
//!
//! Built fresh on every extraction and never mutated afterwards. Field names
//! serialize in camelCase (`ugTabUrl`, `sourcePlaylistId`, ...) because that is
//! the shape the frontend already consumes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::GUITAR_STRINGS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabType {
    Chords,
    Tab,
    Pro,
    Other,
}

impl TabType {
    /// Keyword classification of the site's free-text type label.
    /// Checked in order chord → pro → tab; first hit wins.
    pub fn classify(label: Option<&str>) -> Self {
        let t = label.unwrap_or("").to_lowercase();
        if t.contains("chord") {
            TabType::Chords
        } else if t.contains("pro") {
            TabType::Pro
        } else if t.contains("tab") {
            TabType::Tab
        } else {
            TabType::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabType::Chords => "chords",
            TabType::Tab => "tab",
            TabType::Pro => "pro",
            TabType::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistInfo {
    pub source_playlist_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(rename = "ugTabUrl")]
    pub tab_url: String,
    #[serde(rename = "ugTabType")]
    pub tab_type: TabType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    /// 1-based, derived from final list order.
    pub position: u32,
    pub song_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistImportResult {
    pub playlist: PlaylistInfo,
    pub songs: Vec<SongRow>,
    pub playlist_items: Vec<PlaylistItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: i32,
    pub start_string: i32,
    pub last_string: i32,
    pub finger: i32,
}

/// One fingering, always in 6-string guitar order (index 0 = low E).
///
/// `frets[i]`: `-1` muted, `0` open, otherwise the fret pressed.
/// `fingers[i]`: `0` when unspecified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    pub name: String,
    pub base_fret: i32,
    pub frets: [i32; GUITAR_STRINGS],
    pub fingers: [i32; GUITAR_STRINGS],
    pub barres: Vec<Barre>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContentResult {
    pub title: String,
    pub artist: String,
    #[serde(rename = "ugTabUrl")]
    pub tab_url: String,
    #[serde(rename = "ugTabType")]
    pub tab_type: TabType,
    /// Raw markup with `[tab]`/`[ch]` markers. Never empty.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_value: Option<String>,
    #[serde(default)]
    pub chord_shapes: BTreeMap<String, ChordShape>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedTabEntry {
    pub song_id: String,
    #[serde(rename = "ugTabUrl")]
    pub tab_url: String,
    pub cached_at: DateTime<Utc>,
    pub tab: TabContentResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_precedence() {
        assert_eq!(TabType::classify(Some("Chords")), TabType::Chords);
        assert_eq!(TabType::classify(Some("Bass Tabs")), TabType::Tab);
        assert_eq!(TabType::classify(Some("Guitar Pro")), TabType::Pro);
        assert_eq!(TabType::classify(Some("Chord Pro")), TabType::Chords);
        assert_eq!(TabType::classify(Some("Pro Tab")), TabType::Pro);
        assert_eq!(TabType::classify(Some("Ukulele")), TabType::Other);
        assert_eq!(TabType::classify(Some("")), TabType::Other);
        assert_eq!(TabType::classify(None), TabType::Other);
    }

    #[test]
    fn tab_result_serializes_camel_case() {
        let tab = TabContentResult {
            title: s!("T"),
            artist: s!("A"),
            tab_url: s!("http://x/y"),
            tab_type: TabType::Chords,
            content: s!("[ch]G[/ch]"),
            tuning_name: None,
            tuning_value: Some(s!("E A D G B E")),
            chord_shapes: BTreeMap::new(),
        };
        let v = serde_json::to_value(&tab).unwrap();
        assert_eq!(v["ugTabUrl"], "http://x/y");
        assert_eq!(v["ugTabType"], "chords");
        assert_eq!(v["tuningValue"], "E A D G B E");
        assert!(v.get("tuningName").is_none());
        assert!(v["chordShapes"].as_object().unwrap().is_empty());
    }

    #[test]
    fn playlist_item_field_names() {
        let item = PlaylistItem { position: 1, song_id: s!("9") };
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["songId"], "9");
        assert_eq!(v["position"], 1);
    }
}
