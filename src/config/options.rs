// src/config/options.rs
use crate::chords::Instrument;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub output: OutputOptions,
}

/// Where page data comes from.
/// `Mock` answers with canned results and never touches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Mock,
    Live,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FetchOptions {
    pub mode: FetchMode,
    /// Song id to cache the fetched tab under (tab command only).
    pub cache_as: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Plain,
}

impl OutputFormat {
    pub fn parse(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "plain" | "text" | "txt" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub instrument: Instrument,
    pub scale: f32,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            instrument: Instrument::Ukulele,
            scale: 1.0,
        }
    }
}
