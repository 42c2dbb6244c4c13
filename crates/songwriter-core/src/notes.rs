//! Note spellings, pitch classes and song modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SongwriterError};

/// Every accepted note spelling and its half steps from C
pub const NOTE_MAP: &[(&str, u8)] = &[
    ("B#", 0),
    ("B♯", 0),
    ("C", 0),
    ("C#", 1),
    ("C♯", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("D♯", 3),
    ("Eb", 3),
    ("E", 4),
    ("Fb", 4),
    ("E#", 5),
    ("E♯", 5),
    ("F", 5),
    ("F#", 6),
    ("F♯", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("G♯", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("A♯", 10),
    ("Bb", 10),
    ("B", 11),
    ("Cb", 11),
];

/// Sharp spellings indexed by pitch class
pub const NOTES: [&str; 12] = ["C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B"];

/// Flat spellings indexed by pitch class
pub const FLAT_NOTES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Resolve a note spelling to its pitch class (0-11)
pub fn pitch_class(name: &str) -> Option<u8> {
    NOTE_MAP
        .iter()
        .find(|(spelling, _)| *spelling == name)
        .map(|&(_, pc)| pc)
}

/// Like [`pitch_class`], failing with [`SongwriterError::UnknownNote`]
pub fn parse_note(name: &str) -> Result<u8> {
    pitch_class(name).ok_or_else(|| SongwriterError::UnknownNote(name.to_string()))
}

/// Display name for a pitch class
pub fn note_name(pitch_class: u8, flats: bool) -> &'static str {
    let idx = (pitch_class % 12) as usize;
    if flats { FLAT_NOTES[idx] } else { NOTES[idx] }
}

/// Song mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
}

impl Mode {
    /// Membership flag for each semitone above the root
    pub fn mode_notes(&self) -> [bool; 12] {
        let bits: [u8; 12] = match self {
            Self::Major => [1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1],
            Self::Minor => [1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0],
        };
        bits.map(|b| b == 1)
    }

    /// Semitone offsets of the seven scale degrees
    pub fn scale_degrees(&self) -> Vec<u8> {
        self.mode_notes()
            .iter()
            .enumerate()
            .filter(|(_, in_mode)| **in_mode)
            .map(|(i, _)| i as u8)
            .collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Major => "maj",
            Self::Minor => "min",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mode {
    type Err = SongwriterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maj" => Ok(Self::Major),
            "min" => Ok(Self::Minor),
            other => Err(SongwriterError::UnknownMode(other.to_string())),
        }
    }
}
