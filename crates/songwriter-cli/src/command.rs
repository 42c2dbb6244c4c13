//! Command-line parsing

use std::path::PathBuf;

use songwriter_core::{ChordId, ChordQuality, VariationId, notes};
use songwriter_services::EditAction;

pub const USAGE: &str = "\
Usage: songwriter [--dir DIR] list
       songwriter [--dir DIR] <song> show
       songwriter [--dir DIR] <song> new
       songwriter [--dir DIR] <song> add <variation> <key> <quality> <start> <end>
       songwriter [--dir DIR] <song> remove <variation> <chord>
       songwriter [--dir DIR] <song> pull-left <variation> <chord> <bar>
       songwriter [--dir DIR] <song> pull-right <variation> <chord> <bar>
       songwriter [--dir DIR] <song> bars <variation> <bars>
       songwriter [--dir DIR] <song> add-variation
       songwriter [--dir DIR] <song> time-signature <n/d>";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    New,
    AddVariation,
    Edit(EditAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    List,
    Song { id: String, command: Command },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub dir: Option<PathBuf>,
    pub target: Target,
}

pub fn parse(args: &[String]) -> Result<Invocation, String> {
    let mut args = args.iter().map(String::as_str).peekable();
    let mut dir = None;

    if args.peek() == Some(&"--dir") {
        args.next();
        dir = Some(PathBuf::from(args.next().ok_or("--dir needs a path")?));
    }

    let first = args.next().ok_or(USAGE)?;
    if first == "list" {
        return Ok(Invocation { dir, target: Target::List });
    }

    let song = first.to_string();
    let name = args.next().ok_or(USAGE)?;
    let rest: Vec<&str> = args.collect();

    let command = match (name, rest.as_slice()) {
        ("show", []) => Command::Show,
        ("new", []) => Command::New,
        ("add-variation", []) => Command::AddVariation,
        ("add", [variation, key, quality, start, end]) => Command::Edit(EditAction::AddChord {
            variation: parse_variation(variation)?,
            key: parse_key(key)?,
            quality: quality.parse::<ChordQuality>().map_err(|e| e.to_string())?,
            start: parse_bar(start)?,
            end: parse_bar(end)?,
        }),
        ("remove", [variation, chord]) => Command::Edit(EditAction::RemoveChord {
            variation: parse_variation(variation)?,
            chord: parse_chord(chord)?,
        }),
        ("pull-left", [variation, chord, bar]) => Command::Edit(EditAction::PullLeft {
            variation: parse_variation(variation)?,
            chord: parse_chord(chord)?,
            start: parse_bar(bar)?,
        }),
        ("pull-right", [variation, chord, bar]) => Command::Edit(EditAction::PullRight {
            variation: parse_variation(variation)?,
            chord: parse_chord(chord)?,
            end: parse_bar(bar)?,
        }),
        ("bars", [variation, bars]) => Command::Edit(EditAction::SetBars {
            variation: parse_variation(variation)?,
            bars: bars.parse().map_err(|_| format!("Invalid bar count: {}", bars))?,
        }),
        ("time-signature", [signature]) => Command::Edit(EditAction::SetTimeSignature(signature.to_string())),
        _ => return Err(USAGE.to_string()),
    };

    Ok(Invocation { dir, target: Target::Song { id: song, command } })
}

fn parse_variation(s: &str) -> Result<VariationId, String> {
    s.parse().map(VariationId).map_err(|_| format!("Invalid variation id: {}", s))
}

fn parse_chord(s: &str) -> Result<ChordId, String> {
    s.parse().map(ChordId).map_err(|_| format!("Invalid chord id: {}", s))
}

fn parse_bar(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|bar| bar.is_finite())
        .ok_or_else(|| format!("Invalid bar position: {}", s))
}

/// A pitch class number or a note spelling
fn parse_key(s: &str) -> Result<u8, String> {
    if let Ok(key) = s.parse::<u8>() {
        return Ok(key % 12);
    }
    notes::parse_note(s).map_err(|e| e.to_string())
}
