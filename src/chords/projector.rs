// src/chords/projector.rs
//! Re-reads a guitar fingering on other string instruments.
//!
//! Each target instrument has a fixed table naming, for every one of its
//! strings, the guitar string whose fret and finger it borrows. The numbers are
//! copied verbatim against different open-string pitches.
//!
//! **This is a lossy approximation.** A projected ukulele or banjo diagram has
//! roughly the right hand shape, but it is not retuned and will often not sound
//! the named chord on the target instrument. Do not "fix" the tables into real
//! transpositions: users already know the diagrams by how they look today.

use serde::Serialize;

use crate::config::consts::{GUITAR_STRINGS, MUTED_FRET, NO_FINGER};
use crate::model::{Barre, ChordShape};

use super::Instrument;

/// Guitar string index (0 = low E) per target string.
pub const GUITAR_MAP: [usize; GUITAR_STRINGS] = [0, 1, 2, 3, 4, 5];
/// Approximates re-entrant G C E A from guitar D, B, high E, G.
pub const UKULELE_MAP: [usize; 4] = [2, 4, 5, 3];
/// Approximates open-G banjo; the short 5th string repeats guitar D.
pub const BANJO_MAP: [usize; 5] = [3, 2, 3, 4, 2];

/// Source-string table for `instrument`. Empty for piano.
pub fn source_strings(instrument: Instrument) -> &'static [usize] {
    match instrument {
        Instrument::Guitar => &GUITAR_MAP,
        Instrument::Ukulele => &UKULELE_MAP,
        Instrument::Banjo => &BANJO_MAP,
        Instrument::Piano => &[],
    }
}

/// A chord shape laid onto one string instrument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub instrument: Instrument,
    pub name: String,
    pub base_fret: i32,
    /// One per target string, in the instrument's own string order.
    pub frets: Vec<i32>,
    pub fingers: Vec<i32>,
    /// Barre string ranges clamped into `0..strings`.
    pub barres: Vec<Barre>,
}

impl Voicing {
    pub fn string_count(&self) -> usize {
        self.frets.len()
    }
}

/// Project `shape` onto a string instrument. `None` for piano, which is
/// derived from the chord name instead (see `piano`).
pub fn voice(shape: &ChordShape, instrument: Instrument) -> Option<Voicing> {
    let map = source_strings(instrument);
    if map.is_empty() {
        return None;
    }

    let last = map.len() as i32 - 1;
    let frets = map.iter().map(|&i| shape.frets.get(i).copied().unwrap_or(MUTED_FRET)).collect();
    let fingers = map.iter().map(|&i| shape.fingers.get(i).copied().unwrap_or(NO_FINGER)).collect();
    let barres = shape
        .barres
        .iter()
        .map(|b| Barre {
            start_string: b.start_string.clamp(0, last),
            last_string: b.last_string.clamp(0, last),
            ..*b
        })
        .collect();

    Some(Voicing {
        instrument,
        name: shape.name.clone(),
        base_fret: shape.base_fret,
        frets,
        fingers,
        barres,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(frets: [i32; 6], fingers: [i32; 6]) -> ChordShape {
        ChordShape { name: s!("X"), base_fret: 1, frets, fingers, barres: vec![] }
    }

    #[test]
    fn guitar_is_identity() {
        let s = shape([3, 2, 0, 0, 0, 3], [2, 1, 0, 0, 0, 3]);
        let v = voice(&s, Instrument::Guitar).unwrap();
        assert_eq!(v.frets, s.frets);
        assert_eq!(v.fingers, s.fingers);
    }

    #[test]
    fn ukulele_borrows_strings_2_4_5_3() {
        let v = voice(&shape([10, 11, 12, 13, 14, 15], [0, 1, 2, 3, 4, 0]), Instrument::Ukulele).unwrap();
        assert_eq!(v.frets, [12, 14, 15, 13]);
        assert_eq!(v.fingers, [2, 4, 0, 3]);
        assert_eq!(v.string_count(), 4);
    }

    #[test]
    fn banjo_repeats_guitar_strings() {
        let v = voice(&shape([10, 11, 12, 13, 14, 15], [0; 6]), Instrument::Banjo).unwrap();
        assert_eq!(v.frets, [13, 12, 13, 14, 12]);
        assert_eq!(v.string_count(), 5);
    }

    #[test]
    fn barres_clamp_to_target_strings() {
        let mut s = shape([1, 3, 3, 2, 1, 1], [1, 3, 4, 2, 1, 1]);
        s.base_fret = 2;
        s.barres = vec![Barre { fret: 1, start_string: 0, last_string: 5, finger: 1 }];
        let v = voice(&s, Instrument::Ukulele).unwrap();
        assert_eq!(v.barres, [Barre { fret: 1, start_string: 0, last_string: 3, finger: 1 }]);
        assert_eq!(v.base_fret, 2);

        s.barres = vec![Barre { fret: 1, start_string: -2, last_string: 2, finger: 1 }];
        let v = voice(&s, Instrument::Guitar).unwrap();
        assert_eq!(v.barres[0].start_string, 0);
    }

    #[test]
    fn piano_has_no_voicing() {
        assert!(voice(&shape([0; 6], [0; 6]), Instrument::Piano).is_none());
    }
}
