// src/chords/mod.rs
//! Chord diagrams for more than one instrument.
//!
//! The site only ever sends guitar fingerings. `projector` re-reads those
//! six strings for ukulele and banjo, `piano` derives keys from the chord
//! name instead, and `diagram` turns either into drawable geometry.

pub mod diagram;
pub mod piano;
pub mod projector;

use serde::{Deserialize, Serialize};

use crate::config::consts::{SCALE_MAX, SCALE_MIN};
use crate::model::ChordShape;

pub use diagram::InstrumentDiagramModel;
pub use piano::{Note, chord_notes};
pub use projector::{Voicing, voice};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Guitar,
    Ukulele,
    Banjo,
    Piano,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Guitar,
        Instrument::Ukulele,
        Instrument::Banjo,
        Instrument::Piano,
    ];

    pub fn parse(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "guitar" | "guitar6" => Some(Instrument::Guitar),
            "ukulele" | "ukulele4" | "uke" => Some(Instrument::Ukulele),
            "banjo" | "banjo5" => Some(Instrument::Banjo),
            "piano" | "keys" => Some(Instrument::Piano),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Ukulele => "ukulele",
            Instrument::Banjo => "banjo",
            Instrument::Piano => "piano",
        }
    }

    /// Strings drawn on the diagram; `0` for piano.
    pub fn string_count(self) -> usize {
        projector::source_strings(self).len()
    }
}

/// Diagram for `shape` on `instrument` at the default size.
pub fn project(shape: &ChordShape, instrument: Instrument) -> InstrumentDiagramModel {
    project_scaled(shape, instrument, 1.0)
}

/// Like `project`, with every length multiplied by `scale` (clamped to the
/// supported zoom range).
pub fn project_scaled(shape: &ChordShape, instrument: Instrument, scale: f32) -> InstrumentDiagramModel {
    let scale = clamp_scale(scale);
    match voice(shape, instrument) {
        Some(voicing) => InstrumentDiagramModel::Fretted(diagram::fretted(&voicing, scale)),
        None => {
            let notes = chord_notes(&shape.name);
            InstrumentDiagramModel::Keyboard(diagram::keyboard(&shape.name, &notes, scale))
        }
    }
}

pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(SCALE_MIN, SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Instrument::parse("Ukulele"), Some(Instrument::Ukulele));
        assert_eq!(Instrument::parse("uke"), Some(Instrument::Ukulele));
        assert_eq!(Instrument::parse("banjo5"), Some(Instrument::Banjo));
        assert_eq!(Instrument::parse("KEYS"), Some(Instrument::Piano));
        assert_eq!(Instrument::parse("mandolin"), None);
        for i in Instrument::ALL {
            assert_eq!(Instrument::parse(i.as_str()), Some(i));
        }
    }

    #[test]
    fn string_counts() {
        assert_eq!(Instrument::Guitar.string_count(), 6);
        assert_eq!(Instrument::Ukulele.string_count(), 4);
        assert_eq!(Instrument::Banjo.string_count(), 5);
        assert_eq!(Instrument::Piano.string_count(), 0);
    }

    #[test]
    fn scale_is_clamped() {
        assert_eq!(clamp_scale(0.1), 0.7);
        assert_eq!(clamp_scale(9.0), 1.5);
        assert_eq!(clamp_scale(1.15), 1.15);
        assert_eq!(clamp_scale(f32::NAN), 1.0);
    }

    #[test]
    fn piano_goes_to_keyboard() {
        let shape = ChordShape {
            name: s!("Am"),
            base_fret: 1,
            frets: [-1, 0, 2, 2, 1, 0],
            fingers: [0, 0, 2, 3, 1, 0],
            barres: vec![],
        };
        assert!(matches!(project(&shape, Instrument::Piano), InstrumentDiagramModel::Keyboard(_)));
        assert!(matches!(project(&shape, Instrument::Banjo), InstrumentDiagramModel::Fretted(_)));
    }
}
