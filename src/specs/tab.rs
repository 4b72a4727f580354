// src/specs/tab.rs
//! Reads a single tab page's store into a `TabContentResult`.
//!
//! Anchor: `store.page.data.tab_view.wiki_tab.content` must be a non-empty
//! string (`MissingContent` otherwise). Sibling metadata comes from
//! `store.page.data.tab`, tuning from `tab_view.meta.tuning`, and chord
//! fingerings from `tab_view.applicature`.
//!
//! Applicature policy:
//! - each chord name maps to a list of alternative fingerings; **only the first
//!   one is used** and the rest are discarded;
//! - `frets`/`fingers` are forced to exactly six entries: short lists are padded
//!   with `-1` (muted) / `0` (no finger), long lists are cut after the sixth
//!   string, non-numeric entries read as the padding value;
//! - `fret` (the diagram's top fret) defaults to `1` and is never below `1`;
//! - barres come from `listCapos`, each sub-field defaulted on its own.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::consts::{
    DEFAULT_BARRE_FINGER, DEFAULT_BASE_FRET, GUITAR_STRINGS, MUTED_FRET, NO_FINGER,
};
use crate::core::json;
use crate::error::NormalizationError;
use crate::model::{Barre, ChordShape, TabContentResult, TabType};
use crate::specs::playlist::type_label;

pub fn normalize_tab(store: &Value, request_url: &str) -> Result<TabContentResult, NormalizationError> {
    let page_data = json::path(store, &["store", "page", "data"]);
    let tab_view = json::get(page_data, &["tab_view"]);

    let Some(content) = json::non_empty_str(json::get(tab_view, &["wiki_tab", "content"])) else {
        loge!("Tab page for {request_url} has no wiki_tab content");
        return Err(NormalizationError::MissingContent);
    };

    let meta = json::get(page_data, &["tab"]);
    let tuning = json::get(tab_view, &["meta", "tuning"]);

    let chord_shapes = chord_shapes(json::get(tab_view, &["applicature"]));
    logd!("Tab {request_url}: {} chord shapes, {} bytes of markup", chord_shapes.len(), content.len());

    Ok(TabContentResult {
        title: json::string_or(json::get(meta, &["song_name"]), ""),
        artist: json::string_or(json::get(meta, &["artist_name"]), ""),
        tab_url: json::string_or(json::get(meta, &["tab_url"]), request_url),
        tab_type: TabType::classify(type_label(meta)),
        content: s!(content),
        tuning_name: json::non_empty_string(json::get(tuning, &["name"])),
        tuning_value: json::non_empty_string(json::get(tuning, &["value"])),
        chord_shapes,
    })
}

/// One `ChordShape` per chord name with at least one fingering.
/// Later duplicates of a name overwrite earlier ones.
pub fn chord_shapes(applicature: Option<&Value>) -> BTreeMap<String, ChordShape> {
    let mut out = BTreeMap::new();
    let Some(map) = json::object(applicature) else {
        return out;
    };

    for (name, variants) in map {
        // first fingering only
        let Some(first) = json::array(Some(variants)).first() else {
            continue;
        };
        out.insert(name.clone(), shape_from_variant(name, first));
    }
    out
}

/// Build a shape from one applicature variant object.
pub fn shape_from_variant(name: &str, variant: &Value) -> ChordShape {
    let base_fret = json::int_or(variant.get("fret"), DEFAULT_BASE_FRET).max(DEFAULT_BASE_FRET);

    let barres = json::array(variant.get("listCapos"))
        .iter()
        .map(|b| Barre {
            fret: json::int_or(b.get("fret"), base_fret),
            start_string: json::int_or(b.get("startString"), 0),
            last_string: json::int_or(b.get("lastString"), 0),
            finger: json::int_or(b.get("finger"), DEFAULT_BARRE_FINGER),
        })
        .collect();

    ChordShape {
        name: s!(name),
        base_fret,
        // anything below muted is noise from the site, read it as muted
        frets: six(variant.get("frets"), MUTED_FRET).map(|f| f.max(MUTED_FRET)),
        fingers: six(variant.get("fingers"), NO_FINGER),
        barres,
    }
}

/// Exactly six numbers: padded with `fill`, cut after six.
fn six(list: Option<&Value>, fill: i32) -> [i32; GUITAR_STRINGS] {
    let mut out = [fill; GUITAR_STRINGS];
    for (slot, v) in out.iter_mut().zip(json::array(list)) {
        *slot = json::int_or(Some(v), fill);
    }
    out
}
