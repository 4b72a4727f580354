// src/chords/diagram.rs
//! Drawable geometry for chord diagrams.
//!
//! Output is a list of positioned primitives (lines, labels, markers, keys),
//! not pixels. A renderer draws them as-is; every length is already
//! multiplied by the zoom factor.
//!
//! Fretted layout:
//! - strings run vertically; the *last* source string is drawn leftmost
//!   (highest pitch on the left, as players read them);
//! - fret rows run downward from the nut, five visible;
//! - a marker above the nut shows muted (cross) or open (ring) strings;
//!   fretted strings get a dot, labelled with the finger when known;
//! - dots and barres whose row falls outside the visible frets are dropped.

use serde::Serialize;

use crate::config::consts::*;

use super::Instrument;
use super::piano::Note;
use super::projector::Voicing;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke_width: f32,
}

/// What sits on one string. `string` indexes the voicing, not the drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Marker {
    /// Cross centred on `(x, y)`, each arm reaching `arm` in both axes.
    Muted { string: usize, x: f32, y: f32, arm: f32 },
    Open { string: usize, x: f32, y: f32, r: f32 },
    Dot { string: usize, x: f32, y: f32, r: f32, finger: Option<i32> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrettedDiagram {
    pub instrument: Instrument,
    pub width: f32,
    pub height: f32,
    pub name: Label,
    /// `"{n}fr"` beside the first row when the shape starts above fret 1.
    pub base_fret_label: Option<Label>,
    pub fret_lines: Vec<Line>,
    pub string_lines: Vec<Line>,
    pub barres: Vec<Line>,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Key {
    /// 0 = C4, 12 = C5.
    pub index: i32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardDiagram {
    pub width: f32,
    pub height: f32,
    pub name: Label,
    pub notes: Vec<Note>,
    pub white_keys: Vec<Key>,
    pub black_keys: Vec<Key>,
}

/// One chord drawn for one instrument.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InstrumentDiagramModel {
    Fretted(FrettedDiagram),
    Keyboard(KeyboardDiagram),
}

/// Fretted-instrument layout for a projected voicing.
pub fn fretted(voicing: &Voicing, scale: f32) -> FrettedDiagram {
    let n = voicing.string_count();
    let last = n.saturating_sub(1) as f32;

    let spacing = STRING_SPACING * scale;
    let fret_h = FRET_HEIGHT * scale;
    let left = LEFT_MARGIN * scale;
    let name_y = NAME_BAND * scale;
    let top = TOP_MARGIN * scale + name_y;
    let right = left + spacing * last;
    let bottom = top + fret_h * DIAGRAM_FRETS as f32;

    let width = right + RIGHT_PAD * scale;
    let height = bottom + RIGHT_PAD * scale;

    let display_base = voicing.base_fret.max(DEFAULT_BASE_FRET);
    // row 0 is the nut line; dots sit half a row above their row line
    // widened so extreme frets or base frets cannot overflow
    let row = |fret: i32| {
        let r = i64::from(fret) - i64::from(display_base) + 1;
        (0..=i64::from(DIAGRAM_FRETS)).contains(&r).then(|| top + (r as f32 - 0.5) * fret_h)
    };
    let string_x = |i: usize| left + (last - i as f32) * spacing;

    let base_fret_label = (display_base > DEFAULT_BASE_FRET).then(|| Label {
        text: format!("{display_base}fr"),
        x: left - BASE_LABEL_INSET * scale,
        y: top + fret_h / 2.0,
    });

    let fret_lines = (0..=DIAGRAM_FRETS)
        .map(|i| {
            let y = top + i as f32 * fret_h;
            let nut = i == 0 && voicing.base_fret == DEFAULT_BASE_FRET;
            Line {
                x1: left,
                y1: y,
                x2: right,
                y2: y,
                stroke_width: (if nut { NUT_WIDTH } else { LINE_WIDTH }) * scale,
            }
        })
        .collect();

    let string_lines = (0..n)
        .map(|i| {
            let x = left + i as f32 * spacing;
            Line { x1: x, y1: top, x2: x, y2: bottom, stroke_width: LINE_WIDTH * scale }
        })
        .collect();

    let barres = voicing
        .barres
        .iter()
        .filter_map(|b| {
            let y = row(b.fret)?;
            Some(Line {
                x1: string_x(b.last_string.max(0) as usize),
                y1: y,
                x2: string_x(b.start_string.max(0) as usize),
                y2: y,
                stroke_width: BARRE_THICKNESS * scale,
            })
        })
        .collect();

    let above_nut = top - INDICATOR_LIFT * scale;
    let markers = voicing
        .frets
        .iter()
        .enumerate()
        .filter_map(|(string, &fret)| {
            let x = string_x(string);
            match fret {
                MUTED_FRET => Some(Marker::Muted { string, x, y: above_nut, arm: MUTED_ARM * scale }),
                0 => Some(Marker::Open { string, x, y: above_nut, r: OPEN_RADIUS * scale }),
                _ => {
                    let y = row(fret)?;
                    let finger = voicing.fingers.get(string).copied().filter(|&f| f > NO_FINGER);
                    Some(Marker::Dot { string, x, y, r: DOT_RADIUS * scale, finger })
                }
            }
        })
        .collect();

    FrettedDiagram {
        instrument: voicing.instrument,
        width,
        height,
        name: Label { text: voicing.name.clone(), x: width / 2.0, y: name_y },
        base_fret_label,
        fret_lines,
        string_lines,
        barres,
        markers,
    }
}

/// White-key pitch classes within one octave.
const WHITE_PITCHES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
/// Black-key pitch class → x offset in white-key widths from the octave's C.
const BLACK_OFFSETS: [(i32, f32); 5] = [(1, 0.7), (3, 1.7), (6, 3.7), (8, 4.7), (10, 5.7)];

/// Two-octave keyboard from C4 to C6 with `notes` highlighted.
pub fn keyboard(name: &str, notes: &[Note], scale: f32) -> KeyboardDiagram {
    let white_w = WHITE_KEY_W * scale;
    let white_h = WHITE_KEY_H * scale;
    let left = KEYBOARD_LEFT * scale;
    let top = KEYBOARD_TOP * scale;
    let white_count = 7 * KEYBOARD_OCTAVES + 1;

    let width = left + white_count as f32 * white_w + KEYBOARD_RIGHT_PAD * scale;
    let height = top + white_h + KEYBOARD_BOTTOM_PAD * scale;

    let lit: Vec<i32> = notes.iter().map(|n| n.key_index()).collect();

    let white_keys = (0..white_count)
        .map(|i| {
            let index = (i / 7) * 12 + WHITE_PITCHES[(i % 7) as usize];
            Key {
                index,
                x: left + i as f32 * white_w,
                y: top,
                width: white_w,
                height: white_h,
                highlighted: lit.contains(&index),
            }
        })
        .collect();

    let black_keys = (0..KEYBOARD_OCTAVES)
        .flat_map(|octave| BLACK_OFFSETS.iter().map(move |&(pitch, offset)| (octave, pitch, offset)))
        .map(|(octave, pitch, offset)| {
            let index = octave * 12 + pitch;
            Key {
                index,
                x: left + (octave as f32 * 7.0 + offset) * white_w,
                y: top,
                width: BLACK_KEY_W * scale,
                height: BLACK_KEY_H * scale,
                highlighted: lit.contains(&index),
            }
        })
        .collect();

    KeyboardDiagram {
        width,
        height,
        name: Label { text: s!(name), x: width / 2.0, y: KEYBOARD_NAME_Y * scale },
        notes: notes.to_vec(),
        white_keys,
        black_keys,
    }
}
