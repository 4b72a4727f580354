// src/error.rs
//! Error taxonomy for the scrape pipeline.
//!
//! Each stage fails with its own enum so callers can tell a page we could not
//! read apart from a page we could read but did not understand, and both apart
//! from a fetch that never produced a page. `user_message()` gives the generic
//! text a frontend should show for each kind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no js-store data block found in page")]
    NoStoreBlock,
    #[error("js-store data block is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl ExtractionError {
    pub fn user_message(&self) -> &'static str {
        "Source page format not recognized"
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("page data has no songbook.tabs sequence")]
    UnexpectedShape,
    #[error("page data has no tab_view.wiki_tab.content text")]
    MissingContent,
}

impl NormalizationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NormalizationError::UnexpectedShape => "Unexpected page data shape",
            NormalizationError::MissingContent => "Missing tab content",
        }
    }
}

/// Upstream failures. Never produced by extraction or normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("upstream answered HTTP {0}")]
    Status(u16),
    #[error("network failure: {0}")]
    Network(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch source page"
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("missing URL")]
    MissingUrl,
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

impl ScrapeError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ScrapeError::MissingUrl => "Missing URL",
            ScrapeError::InvalidUrl(_) => "Invalid URL",
            ScrapeError::Fetch(e) => e.user_message(),
            ScrapeError::Extraction(e) => e.user_message(),
            ScrapeError::Normalization(e) => e.user_message(),
        }
    }
}
