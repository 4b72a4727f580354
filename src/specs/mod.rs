// src/specs/mod.rs
//! # Page readers
//!
//! Each reader knows where the ground truth lives in one kind of page and how to
//! lift it into a stable `model` shape.
//!
//! ## What lives here
//! - **Store extraction** (`store`): find the `js-store` data island, decode its
//!   HTML entities, parse it as JSON. No schema checks.
//! - **Songbook reading** (`playlist`): shared playlist pages.
//! - **Tab reading** (`tab`): single tab pages, including chord fingerings.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and mode selection (`scrape`).
//! - **Caching** (`store.rs` at the crate root).
//! - **Rendering** of markup or chord diagrams (`markup`, `chords`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::fetch_tab / import_playlist → HtmlSource::fetch
//!                                         ↘  specs::store::extract_store
//!                                         ↘  specs::tab / specs::playlist
//! ```
//!
//! ## Conventions
//! - Readers assert only their anchor path; below it every field is optional and
//!   falls back to a default (see `core::json`).
//! - Readers are pure: same store in, same result out. They log, never panic.
pub mod playlist;
pub mod store;
pub mod tab;

pub use playlist::normalize_playlist;
pub use store::{RawStorePayload, extract_store};
pub use tab::normalize_tab;
