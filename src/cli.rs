// src/cli.rs
use std::collections::BTreeMap;
use std::error::Error;

use crate::chords::{self, Instrument, InstrumentDiagramModel};
use crate::config::options::{AppOptions, FetchMode, OutputFormat};
use crate::core::{decode, sanitize::normalize_ws, HtmlSource, HttpSource};
use crate::error::FetchError;
use crate::markup::format_as_plain_text;
use crate::model::{ChordShape, PlaylistImportResult, TabContentResult};
use crate::scrape;
use crate::store::TabCache;

#[derive(Debug, PartialEq)]
pub enum Command {
    Tab(String),
    Playlist(String),
    Chords(String),
    Decode(String),
    /// Print a cached tab by song id.
    Cached(String),
    /// Drop one cached tab, or all of them with `None`.
    Uncache(Option<String>),
    Help,
}

pub fn run<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let (cmd, opts) = parse_args(args)?;
    let cache = TabCache::default_location();

    match cmd {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
        }
        Command::Decode(text) => println!("{}", decode(&text)),
        Command::Tab(url) => {
            let tab = with_source(opts.fetch.mode, |src| scrape::fetch_tab(src, &url, opts.fetch.mode))?;
            if let Some(id) = &opts.fetch.cache_as {
                let entry = cache.save(id, &tab)?;
                eprintln!("Cached as {} ({})", cache.path_for(id).display(), entry.cached_at.to_rfc3339());
            }
            println!("{}", render_tab(&tab, opts.output.format)?);
        }
        Command::Playlist(url) => {
            let list = with_source(opts.fetch.mode, |src| scrape::import_playlist(src, &url, opts.fetch.mode))?;
            println!("{}", render_playlist(&list, opts.output.format)?);
        }
        Command::Chords(url) => {
            let tab = with_source(opts.fetch.mode, |src| scrape::fetch_tab(src, &url, opts.fetch.mode))?;
            if tab.chord_shapes.is_empty() {
                eprintln!("No chord diagrams in '{}'", tab.title);
                return Ok(());
            }
            println!("{}", render_chords(&tab.chord_shapes, &opts)?);
        }
        Command::Cached(id) => match cache.load(&id)? {
            Some(entry) => println!("{}", render_tab(&entry.tab, opts.output.format)?),
            None => return Err(format!("Nothing cached for song {id}").into()),
        },
        Command::Uncache(Some(id)) => {
            let gone = cache.remove(&id)?;
            eprintln!("{}", if gone { "Removed" } else { "Not cached" });
        }
        Command::Uncache(None) => {
            let n = cache.clear()?;
            eprintln!("Removed {n} cached tabs");
        }
    }
    Ok(())
}

/// Hand `f` a live HTTP source, or one that refuses to fetch in mock mode.
fn with_source<T, E>(
    mode: FetchMode,
    f: impl FnOnce(&dyn HtmlSource) -> Result<T, E>,
) -> Result<T, Box<dyn Error>>
where
    E: Error + 'static,
{
    let result = match mode {
        FetchMode::Live => f(&HttpSource::new()?),
        FetchMode::Mock => f(&|_: &str| -> Result<String, FetchError> {
            Err(FetchError::Network(s!("offline mode")))
        }),
    };
    result.map_err(|e| {
        loge!("{e}");
        e.into()
    })
}

pub fn parse_args<I>(args: I) -> Result<(Command, AppOptions), Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();
    let mut cmd: Option<&'static str> = None;
    let mut target: Option<String> = None;
    let mut all = false;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-h" | "--help" => return Ok((Command::Help, opts)),
            "--live" => opts.fetch.mode = FetchMode::Live,
            "--mock" => opts.fetch.mode = FetchMode::Mock,
            "--plain" => opts.output.format = OutputFormat::Plain,
            "--json" => opts.output.format = OutputFormat::Json,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.output.format = OutputFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--cache" => opts.fetch.cache_as = Some(args.next().ok_or("Missing song id for --cache")?),
            "-i" | "--instrument" => {
                let v = args.next().ok_or("Missing value for --instrument")?;
                opts.output.instrument = Instrument::parse(&v)
                    .ok_or_else(|| format!("Unknown instrument: {v}"))?;
            }
            "--scale" => {
                let v = args.next().ok_or("Missing value for --scale")?;
                opts.output.scale = v.parse().map_err(|_| format!("Invalid scale: {v}"))?;
            }
            "--all" | "-a" => all = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("Unknown arg: {other}").into());
            }
            word if cmd.is_none() => {
                cmd = Some(match word {
                    "tab" => "tab",
                    "playlist" => "playlist",
                    "chords" => "chords",
                    "decode" => "decode",
                    "cached" => "cached",
                    "uncache" => "uncache",
                    _ => return Err(format!("Unknown command: {word}").into()),
                });
            }
            other if target.is_none() => target = Some(s!(other)),
            _ => return Err(format!("Unexpected argument: {a}").into()),
        }
    }

    let Some(cmd) = cmd else {
        return Ok((Command::Help, opts));
    };
    let need = |what: &str| target.clone().ok_or_else(|| format!("Missing {what} for '{cmd}'"));

    let command = match cmd {
        "tab" => Command::Tab(need("URL")?),
        "playlist" => Command::Playlist(need("URL")?),
        "chords" => Command::Chords(need("URL")?),
        "decode" => Command::Decode(need("text")?),
        "cached" => Command::Cached(need("song id")?),
        _ if all => Command::Uncache(None),
        _ => Command::Uncache(Some(need("song id (or --all)")?)),
    };
    Ok((command, opts))
}

pub fn render_tab(tab: &TabContentResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(tab);
    }

    let mut out = normalize_ws(&decode(&join!(&tab.title, " - ", &tab.artist)));
    if let Some(tuning) = tab.tuning_value.as_deref().or(tab.tuning_name.as_deref()) {
        out.push_str(&format!("\nTuning: {tuning}"));
    }
    out.push_str("\n\n");
    out.push_str(&format_as_plain_text(&tab.content));
    Ok(out)
}

pub fn render_playlist(list: &PlaylistImportResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(list);
    }

    let mut lines = vec![decode(&list.playlist.name)];
    if let Some(d) = &list.playlist.description {
        lines.push(normalize_ws(&decode(d)));
    }
    for (item, song) in list.playlist_items.iter().zip(&list.songs) {
        lines.push(format!(
            "{:>3}. {} - {} [{}]",
            item.position,
            decode(&song.artist),
            decode(&song.title),
            song.tab_type.as_str()
        ));
    }
    Ok(lines.join("\n"))
}

pub fn render_chords(shapes: &BTreeMap<String, ChordShape>, opts: &AppOptions) -> Result<String, serde_json::Error> {
    let instrument = opts.output.instrument;

    if opts.output.format == OutputFormat::Json {
        let diagrams: BTreeMap<&str, InstrumentDiagramModel> = shapes
            .iter()
            .map(|(name, shape)| (name.as_str(), chords::project_scaled(shape, instrument, opts.output.scale)))
            .collect();
        return serde_json::to_string_pretty(&diagrams);
    }

    let lines: Vec<String> = shapes.values().map(|shape| chord_line(shape, instrument)).collect();
    Ok(lines.join("\n"))
}

/// One-line summary: frets/fingers per string, or the piano notes.
pub fn chord_line(shape: &ChordShape, instrument: Instrument) -> String {
    let Some(v) = chords::voice(shape, instrument) else {
        let notes: Vec<String> = chords::chord_notes(&shape.name).iter().map(ToString::to_string).collect();
        return format!("{:<8}{}", shape.name, notes.join(" "));
    };

    let frets: Vec<String> = v
        .frets
        .iter()
        .map(|&f| if f < 0 { s!("x") } else { f.to_string() })
        .collect();
    let fingers: Vec<String> = v.fingers.iter().map(i32::to_string).collect();
    let mut line = format!("{:<8}{}  fingers {}", shape.name, frets.join(" "), fingers.join(" "));
    if v.base_fret > 1 {
        line.push_str(&format!("  @{}fr", v.base_fret));
    }
    line
}
