// src/scrape/scrape.rs
use url::Url;

use crate::{
    config::options::FetchMode,
    core::net::HtmlSource,
    error::ScrapeError,
    model::{PlaylistImportResult, TabContentResult},
    specs::{normalize_playlist, normalize_tab, store::extract_store},
};

use super::mock;

fn required(url: &str) -> Result<&str, ScrapeError> {
    let url = url.trim();
    if url.is_empty() {
        loge!("Request without URL");
        return Err(ScrapeError::MissingUrl);
    }
    Ok(url)
}

/// Id a playlist is known by: query `h`, else query `id`, else the path,
/// else the URL as given. Empty values fall through to the next choice.
pub fn source_playlist_id(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| {
        loge!("Playlist URL {url:?} does not parse: {e}");
        ScrapeError::InvalidUrl(s!(url))
    })?;

    let query = |key: &str| {
        parsed
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    };

    Ok(query("h")
        .or_else(|| query("id"))
        .or_else(|| Some(parsed.path().to_owned()).filter(|p| !p.is_empty()))
        .unwrap_or_else(|| s!(url)))
}

/// Fetch one tab page and read it. `Mock` never calls `source`.
pub fn fetch_tab(
    source: &dyn HtmlSource,
    url: &str,
    mode: FetchMode,
) -> Result<TabContentResult, ScrapeError> {
    let url = required(url)?;

    if mode == FetchMode::Mock {
        logd!("Mock tab for {url}");
        return Ok(mock::tab(url));
    }

    let html = source.fetch(url)?;
    let store = extract_store(&html)?;
    let tab = normalize_tab(&store, url)?;

    logf!("Tab '{}' by '{}' ({})", tab.title, tab.artist, tab.tab_type.as_str());
    Ok(tab)
}

/// Fetch one songbook page and read it. `Mock` never calls `source`, but the
/// URL must still parse.
pub fn import_playlist(
    source: &dyn HtmlSource,
    url: &str,
    mode: FetchMode,
) -> Result<PlaylistImportResult, ScrapeError> {
    let url = required(url)?;
    let id = source_playlist_id(url)?;

    if mode == FetchMode::Mock {
        logd!("Mock playlist for {url}");
        return Ok(mock::playlist(&id));
    }

    let html = source.fetch(url)?;
    let store = extract_store(&html)?;
    Ok(normalize_playlist(&store, &id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    fn offline(_: &str) -> Result<String, FetchError> {
        panic!("mock mode must not fetch")
    }

    #[test]
    fn playlist_id_precedence() {
        let id = |u| source_playlist_id(u).unwrap();
        assert_eq!(id("https://www.ultimate-guitar.com/user/playlist/shared?h=abc&id=9"), "abc");
        assert_eq!(id("https://www.ultimate-guitar.com/user/playlist/shared?h=&id=9"), "9");
        assert_eq!(id("https://www.ultimate-guitar.com/user/playlist/view/123"), "/user/playlist/view/123");
        assert_eq!(id("https://example.com"), "/");
    }

    #[test]
    fn bad_playlist_url() {
        assert!(matches!(source_playlist_id("not a url"), Err(ScrapeError::InvalidUrl(_))));
        assert!(matches!(
            import_playlist(&offline, "playlist?h=1", FetchMode::Mock),
            Err(ScrapeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn blank_url_is_missing() {
        assert!(matches!(fetch_tab(&offline, "   ", FetchMode::Mock), Err(ScrapeError::MissingUrl)));
        assert!(matches!(import_playlist(&offline, "", FetchMode::Live), Err(ScrapeError::MissingUrl)));
    }

    #[test]
    fn mock_mode_stays_offline() {
        let tab = fetch_tab(&offline, " http://x/y ", FetchMode::Mock).unwrap();
        assert_eq!(tab.tab_url, "http://x/y");
        assert_eq!(tab.title, "Mock Song");

        let pl = import_playlist(&offline, "https://x.com/p?h=zz", FetchMode::Mock).unwrap();
        assert_eq!(pl.playlist.source_playlist_id, "zz");
        assert_eq!(pl.playlist.name, "Request List");
    }

    #[test]
    fn live_fetch_errors_pass_through() {
        let down = |_: &str| -> Result<String, FetchError> { Err(FetchError::Status(503)) };
        let err = fetch_tab(&down, "http://x/y", FetchMode::Live).unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(FetchError::Status(503))));
        assert_eq!(err.user_message(), "Failed to fetch source page");
    }
}
