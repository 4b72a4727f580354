// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "UltimateGig/1.0 (+ultimate-gig-local)";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const TAB_CACHE_SUBDIR: &str = "tabs";
pub const LOG_FILE: &str = "debug.log";

// Page data
pub const STORE_BLOCK_PATTERN: &str = r#"<div class="js-store" data-content="([^"]+)">"#;
pub const DEFAULT_PLAYLIST_NAME: &str = "Ultimate Guitar playlist";

// Chord shapes
pub const GUITAR_STRINGS: usize = 6;
pub const MUTED_FRET: i32 = -1;
pub const NO_FINGER: i32 = 0;
pub const DEFAULT_BASE_FRET: i32 = 1;
pub const DEFAULT_BARRE_FINGER: i32 = 1;

// Fretted diagrams (unscaled px)
pub const DIAGRAM_FRETS: i32 = 5;
pub const STRING_SPACING: f32 = 24.0;
pub const FRET_HEIGHT: f32 = 28.0;
pub const LEFT_MARGIN: f32 = 30.0;
pub const NAME_BAND: f32 = 22.0;
pub const TOP_MARGIN: f32 = 30.0;
pub const RIGHT_PAD: f32 = 20.0;
pub const DOT_RADIUS: f32 = 7.0;
pub const OPEN_RADIUS: f32 = 5.0;
pub const BARRE_THICKNESS: f32 = 16.0;
pub const NUT_WIDTH: f32 = 3.0;
pub const LINE_WIDTH: f32 = 1.0;
pub const BASE_LABEL_INSET: f32 = 12.0;
pub const INDICATOR_LIFT: f32 = 12.0;
pub const MUTED_ARM: f32 = 4.0;

// Diagram zoom
pub const SCALE_MIN: f32 = 0.7;
pub const SCALE_MAX: f32 = 1.5;

// Keyboard diagrams (unscaled px)
pub const KEYBOARD_OCTAVES: i32 = 2;
pub const KEYBOARD_BASE_OCTAVE: i32 = 4;
pub const WHITE_KEY_W: f32 = 28.0;
pub const WHITE_KEY_H: f32 = 100.0;
pub const BLACK_KEY_W: f32 = 18.0;
pub const BLACK_KEY_H: f32 = 65.0;
pub const KEYBOARD_LEFT: f32 = 10.0;
pub const KEYBOARD_TOP: f32 = 30.0;
pub const KEYBOARD_RIGHT_PAD: f32 = 10.0;
pub const KEYBOARD_BOTTOM_PAD: f32 = 20.0;
pub const KEYBOARD_NAME_Y: f32 = 15.0;
