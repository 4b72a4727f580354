// src/specs/store.rs
//! Finds the page's `js-store` data island and parses it.
//!
//! Every page on the site ships its full client state as entity-encoded JSON in
//! `<div class="js-store" data-content="...">`. This layer only digs it out;
//! it does not look inside. Shape checks belong to the page readers
//! (`specs::playlist`, `specs::tab`).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::config::consts::STORE_BLOCK_PATTERN;
use crate::core::entities::decode_basic;
use crate::error::ExtractionError;

/// The untyped store tree, exactly as the site sent it.
pub type RawStorePayload = Value;

static STORE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(STORE_BLOCK_PATTERN).unwrap());

/// Entity-encoded attribute value of the first `js-store` div, if any.
pub fn find_store_block(html: &str) -> Option<&str> {
    STORE_BLOCK
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn extract_store(html: &str) -> Result<RawStorePayload, ExtractionError> {
    let Some(encoded) = find_store_block(html) else {
        loge!("js-store block not found ({} bytes of HTML)", html.len());
        return Err(ExtractionError::NoStoreBlock);
    };

    let t = std::time::Instant::now();
    // typographic entities stay encoded: a decoded &rdquo; would end a JSON string
    let json_text = decode_basic(encoded);
    let store: Value = serde_json::from_str(&json_text).inspect_err(|e| {
        loge!("js-store block ({} bytes) failed to parse: {e}", json_text.len());
    })?;
    logd!("Store: decode + parse {} bytes in {:?}", encoded.len(), t.elapsed());

    Ok(store)
}
