// src/chords/piano.rs
// Piano notes from a chord *name*. Fret data is ignored entirely.
//
// Root is `[A-G][#b]?` at the start of the name (C when absent); the rest of
// the name picks an interval pattern. Only the qualities in PATTERNS are
// known. Anything else, 9ths and add-chords included, plays as the major
// triad of the root.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::consts::KEYBOARD_BASE_OCTAVE;

static ROOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-G][#b]?").unwrap());

const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

const MAJOR: &[u8] = &[0, 4, 7];

/// Suffix → semitone offsets from the root.
const PATTERNS: &[(&str, &[u8])] = &[
    ("", MAJOR),
    ("m", &[0, 3, 7]),
    ("7", &[0, 4, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
];

/// A pitch class in a given octave. Shown and serialized as `C#4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    /// 0 = C ... 11 = B
    pub pitch: u8,
    pub octave: i32,
}

impl Note {
    /// Key number on the diagram keyboard: 0 = C4, 12 = C5.
    pub fn key_index(self) -> i32 {
        (self.octave - KEYBOARD_BASE_OCTAVE) * 12 + i32::from(self.pitch)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SHARP_NAMES[usize::from(self.pitch % 12)], self.octave)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pitch class of a note name. Spellings outside the usual twelve sharps and
/// flats (`Cb`, `E#`, ...) read as C.
pub fn pitch_class(name: &str) -> u8 {
    match name {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        _ => 0,
    }
}

/// Split a chord name into root and quality suffix.
fn split_name(name: &str) -> (&str, &str) {
    match ROOT.find(name) {
        Some(m) => (m.as_str(), &name[m.end()..]),
        // no root letter: C, and the first character is skipped
        None => {
            let skip = name.chars().next().map_or(0, char::len_utf8);
            ("C", &name[skip..])
        }
    }
}

/// Notes of the chord, all in octave 4, root first.
pub fn chord_notes(name: &str) -> Vec<Note> {
    let (root, suffix) = split_name(name);
    let root = pitch_class(root);
    let intervals = PATTERNS
        .iter()
        .find(|(s, _)| *s == suffix)
        .map_or(MAJOR, |(_, iv)| *iv);

    intervals
        .iter()
        .map(|iv| Note {
            pitch: (root + iv) % 12,
            octave: KEYBOARD_BASE_OCTAVE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chord: &str) -> Vec<String> {
        chord_notes(chord).iter().map(Note::to_string).collect()
    }

    #[test]
    fn qualities() {
        assert_eq!(names("C"), ["C4", "E4", "G4"]);
        assert_eq!(names("Am"), ["A4", "C4", "E4"]);
        assert_eq!(names("G7"), ["G4", "B4", "D4", "F4"]);
        assert_eq!(names("Fmaj7"), ["F4", "A4", "C4", "E4"]);
        assert_eq!(names("Dm7"), ["D4", "F4", "A4", "C4"]);
        assert_eq!(names("Bdim"), ["B4", "D4", "F4"]);
        assert_eq!(names("Caug"), ["C4", "E4", "G#4"]);
        assert_eq!(names("Dsus2"), ["D4", "E4", "A4"]);
        assert_eq!(names("Asus4"), ["A4", "D4", "E4"]);
        assert_eq!(names("C6"), ["C4", "E4", "G4", "A4"]);
        assert_eq!(names("Em6"), ["E4", "G4", "B4", "C#4"]);
    }

    #[test]
    fn flats_read_and_sharps_written() {
        assert_eq!(names("Bb"), ["A#4", "D4", "F4"]);
        assert_eq!(names("Ebm"), ["D#4", "F#4", "A#4"]);
        assert_eq!(names("B"), ["B4", "D#4", "F#4"]);
    }

    #[test]
    fn unknown_suffix_is_major() {
        assert_eq!(names("G9"), names("G"));
        assert_eq!(names("Cadd9"), names("C"));
        assert_eq!(names("D/F#"), names("D"));
    }

    #[test]
    fn missing_root_defaults_to_c() {
        assert_eq!(names(""), ["C4", "E4", "G4"]);
        assert_eq!(names("xm"), ["C4", "D#4", "G4"]);
        assert_eq!(names("N.C."), names("C"));
    }

    #[test]
    fn odd_spellings_read_as_c() {
        assert_eq!(pitch_class("Cb"), 0);
        assert_eq!(names("E#"), names("C"));
    }

    #[test]
    fn key_index_and_serialization() {
        let n = Note { pitch: 1, octave: 5 };
        assert_eq!(n.key_index(), 13);
        assert_eq!(serde_json::to_value(n).unwrap(), "C#5");
    }
}
