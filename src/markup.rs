// src/markup.rs
// Flattens the site's tab markup to plain text for display.
//
// `[tab]...[/tab]` wraps a chord line plus its lyric line; `[ch]X[/ch]` wraps
// one chord name. Neither carries anything once the text is monospaced, so
// both are dropped (the chord name itself stays).

use std::sync::LazyLock;

use regex::Regex;

use crate::core::entities::decode;

static TAB_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/?tab\]").unwrap());
static CHORD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[ch\](.+?)\[/ch\]").unwrap());

/// Decode entities, strip `[tab]` markers, unwrap `[ch]` spans, CRLF → LF.
///
/// Total: text without markers only goes through the entity and line-ending
/// passes. A `[ch]` span never crosses a line break.
pub fn format_as_plain_text(markup: &str) -> String {
    let text = decode(markup);
    let text = TAB_MARKER.replace_all(&text, "");
    let text = CHORD_SPAN.replace_all(&text, "$1");
    text.replace("\r\n", "\n")
}
