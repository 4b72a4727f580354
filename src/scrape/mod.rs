// src/scrape/mod.rs
mod mock;
mod scrape;

pub use scrape::fetch_tab;
pub use scrape::import_playlist;
pub use scrape::source_playlist_id;
