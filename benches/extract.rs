// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::json;

use tabscrape::{
    markup::format_as_plain_text,
    specs::{extract_store, normalize_playlist, normalize_tab},
};

fn encode(data: serde_json::Value) -> String {
    let json = json!({"store": {"page": {"data": data}}}).to_string();
    let encoded = json.replace('&', "&amp;").replace('"', "&quot;");
    format!("<html><body><div class=\"js-store\" data-content=\"{encoded}\"></div></body></html>")
}

/// A long chord sheet with a dozen fingerings.
fn tab_page() -> String {
    let line = "[tab][ch]G[/ch]       [ch]C[/ch]       [ch]D7[/ch][/tab]\r\nSome lyric line &amp; more words\r\n";
    let applicature: serde_json::Map<String, serde_json::Value> = ["G", "C", "D7", "Em", "Am", "F", "Bm", "E", "A", "D", "Cmaj7", "G7"]
        .iter()
        .map(|name| (name.to_string(), json!([
            {"frets": [3, 2, 0, 0, 0, 3], "fingers": [2, 1, 0, 0, 0, 3], "fret": 1, "listCapos": []},
            {"frets": [3, 5, 5, 4, 3, 3], "fingers": [1, 3, 4, 2, 1, 1], "fret": 3,
             "listCapos": [{"fret": 3, "startString": 0, "lastString": 5, "finger": 1}]}
        ])))
        .collect();
    encode(json!({
        "tab": {"song_name": "Bench", "artist_name": "Mark", "tab_url": "http://x/y", "type_name": "Chords"},
        "tab_view": {"wiki_tab": {"content": line.repeat(200)}, "applicature": applicature}
    }))
}

fn playlist_page() -> String {
    let tabs: Vec<_> = (0..300)
        .map(|i| json!({"tab": {"id": i, "song_name": format!("Song {i}"), "artist_name": "Band",
            "tab_url": format!("https://tabs.example/tab/{i}"), "type_name": "Chords"}}))
        .collect();
    encode(json!({"songbook": {"name": "Long list", "tabs": tabs}}))
}

fn bench_extract(c: &mut Criterion) {
    let tab_doc = tab_page();
    let list_doc = playlist_page();

    c.bench_function("tab_extract_normalize", |b| {
        b.iter(|| {
            let store = extract_store(black_box(&tab_doc)).unwrap();
            let tab = normalize_tab(&store, "http://x/y").unwrap();
            black_box(tab.chord_shapes.len())
        })
    });

    c.bench_function("tab_plain_text", |b| {
        let store = extract_store(&tab_doc).unwrap();
        let tab = normalize_tab(&store, "http://x/y").unwrap();
        b.iter(|| black_box(format_as_plain_text(black_box(&tab.content)).len()))
    });

    c.bench_function("playlist_extract_normalize", |b| {
        b.iter(|| {
            let store = extract_store(black_box(&list_doc)).unwrap();
            let out = normalize_playlist(&store, "h").unwrap();
            black_box(out.songs.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
