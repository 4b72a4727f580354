// src/store.rs
// On-disk tab cache: one pretty-printed JSON file per song under
// `.store/tabs/<song id>.json`. Entries never expire; a new save overwrites.

use std::{fs, io, path::PathBuf};

use chrono::Utc;

use crate::config::consts::{STORE_DIR, TAB_CACHE_SUBDIR};
use crate::core::sanitize::file_stem;
use crate::model::{CachedTabEntry, TabContentResult};

pub struct TabCache {
    dir: PathBuf,
}

impl TabCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `.store/tabs` relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(PathBuf::from(STORE_DIR).join(TAB_CACHE_SUBDIR))
    }

    /// Song ids are sanitized into file stems, so ids differing only in
    /// punctuation share one file.
    pub fn path_for(&self, song_id: &str) -> PathBuf {
        self.dir.join(join!(&file_stem(song_id), ".json"))
    }

    /// Stamp `tab` with the current time and write it.
    pub fn save(&self, song_id: &str, tab: &TabContentResult) -> io::Result<CachedTabEntry> {
        let entry = CachedTabEntry {
            song_id: s!(song_id),
            tab_url: tab.tab_url.clone(),
            cached_at: Utc::now(),
            tab: tab.clone(),
        };
        self.put(&entry)?;
        Ok(entry)
    }

    /// Write an entry as-is, keeping its timestamp.
    pub fn put(&self, entry: &CachedTabEntry) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&entry.song_id);
        let json = serde_json::to_string_pretty(entry)?;
        fs::write(&path, json)?;
        logd!("Cached tab for song {} at {}", entry.song_id, path.display());
        Ok(())
    }

    /// `Ok(None)` when nothing is cached for `song_id`. A file that no longer
    /// parses is an `InvalidData` error, not a miss.
    pub fn load(&self, song_id: &str) -> io::Result<Option<CachedTabEntry>> {
        let path = self.path_for(song_id);
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let entry = serde_json::from_str(&text).map_err(|e| {
            loge!("Cache file {} is unreadable: {e}", path.display());
            io::Error::new(io::ErrorKind::InvalidData, e)
        })?;
        Ok(Some(entry))
    }

    /// True when a cached entry was deleted.
    pub fn remove(&self, song_id: &str) -> io::Result<bool> {
        match fs::remove_file(self.path_for(song_id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Delete every cached entry; returns how many went.
    pub fn clear(&self) -> io::Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            fs::remove_file(&path)?;
            removed += 1;
        }
        logf!("Cleared {removed} cached tabs");
        Ok(removed)
    }
}
