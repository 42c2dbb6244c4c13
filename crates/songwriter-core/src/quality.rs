//! Chord qualities: intervals, display suffixes and menus

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SongwriterError};

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChordQuality {
    #[default]
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "dim7")]
    Diminished7,
    #[serde(rename = "m7b5")]
    HalfDiminished7,
    #[serde(rename = "min7")]
    Minor7,
    #[serde(rename = "mmaj7")]
    MinorMajor7,
    #[serde(rename = "dom7")]
    Dominant7,
    #[serde(rename = "maj7")]
    Major7,
    #[serde(rename = "aug7")]
    Augmented7,
    #[serde(rename = "augmaj7")]
    AugmentedMajor7,
    #[serde(rename = "9")]
    Dominant9,
    #[serde(rename = "11")]
    Dominant11,
    #[serde(rename = "13")]
    Dominant13,
    #[serde(rename = "7b9")]
    SeventhFlat9,
    #[serde(rename = "7#9")]
    SeventhSharp9,
    #[serde(rename = "7#11")]
    SeventhSharp11,
    #[serde(rename = "7b13")]
    SeventhFlat13,
    #[serde(rename = "add9")]
    Add9,
    #[serde(rename = "add4")]
    Add4,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "min6")]
    Minor6,
    #[serde(rename = "6/9")]
    SixNine,
    #[serde(rename = "7/6")]
    SevenSix,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "9sus4")]
    NineSus4,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 28] = [
        Self::Major,
        Self::Minor,
        Self::Augmented,
        Self::Diminished,
        Self::Diminished7,
        Self::HalfDiminished7,
        Self::Minor7,
        Self::MinorMajor7,
        Self::Dominant7,
        Self::Major7,
        Self::Augmented7,
        Self::AugmentedMajor7,
        Self::Dominant9,
        Self::Dominant11,
        Self::Dominant13,
        Self::SeventhFlat9,
        Self::SeventhSharp9,
        Self::SeventhSharp11,
        Self::SeventhFlat13,
        Self::Add9,
        Self::Add4,
        Self::Sixth,
        Self::Minor6,
        Self::SixNine,
        Self::SevenSix,
        Self::Sus2,
        Self::Sus4,
        Self::NineSus4,
    ];

    /// Identifier used in saved songs and menus
    pub fn id(&self) -> &'static str {
        match self {
            Self::Major => "maj",
            Self::Minor => "min",
            Self::Augmented => "aug",
            Self::Diminished => "dim",
            Self::Diminished7 => "dim7",
            Self::HalfDiminished7 => "m7b5",
            Self::Minor7 => "min7",
            Self::MinorMajor7 => "mmaj7",
            Self::Dominant7 => "dom7",
            Self::Major7 => "maj7",
            Self::Augmented7 => "aug7",
            Self::AugmentedMajor7 => "augmaj7",
            Self::Dominant9 => "9",
            Self::Dominant11 => "11",
            Self::Dominant13 => "13",
            Self::SeventhFlat9 => "7b9",
            Self::SeventhSharp9 => "7#9",
            Self::SeventhSharp11 => "7#11",
            Self::SeventhFlat13 => "7b13",
            Self::Add9 => "add9",
            Self::Add4 => "add4",
            Self::Sixth => "6",
            Self::Minor6 => "min6",
            Self::SixNine => "6/9",
            Self::SevenSix => "7/6",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
            Self::NineSus4 => "9sus4",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Augmented => "Augmented",
            Self::Diminished => "Diminished",
            Self::Diminished7 => "Diminished 7th",
            Self::HalfDiminished7 => "Half-diminished 7th",
            Self::Minor7 => "Minor 7th",
            Self::MinorMajor7 => "Minor major 7th",
            Self::Dominant7 => "Dominant 7th",
            Self::Major7 => "Major 7th",
            Self::Augmented7 => "Augmented 7th",
            Self::AugmentedMajor7 => "Augmented major 7th",
            Self::Dominant9 => "Dominant 9th",
            Self::Dominant11 => "Dominant 11th",
            Self::Dominant13 => "Dominant 13th",
            Self::SeventhFlat9 => "7th minor 9th",
            Self::SeventhSharp9 => "7th sharp 9th",
            Self::SeventhSharp11 => "7th augmented 11th",
            Self::SeventhFlat13 => "7th diminished 13th",
            Self::Add9 => "Added 9th",
            Self::Add4 => "Added 4th",
            Self::Sixth => "Added 6th",
            Self::Minor6 => "Minor 6th",
            Self::SixNine => "Six-nine",
            Self::SevenSix => "Seven-six",
            Self::Sus2 => "Suspended 2nd",
            Self::Sus4 => "Suspended 4th",
            Self::NineSus4 => "Jazz sus",
        }
    }

    /// Pitch classes in the chord, in half steps from its root
    pub fn pitch_class(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Augmented => &[0, 4, 8],
            Self::Diminished => &[0, 3, 6],
            Self::Diminished7 => &[0, 3, 6, 9],
            Self::HalfDiminished7 => &[0, 3, 6, 10],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::MinorMajor7 => &[0, 3, 7, 11],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Augmented7 => &[0, 4, 8, 10],
            Self::AugmentedMajor7 => &[0, 4, 8, 11],
            Self::Dominant9 => &[0, 4, 7, 10, 2],
            Self::Dominant11 => &[0, 4, 7, 10, 2, 5],
            Self::Dominant13 => &[0, 4, 7, 10, 2, 5, 9],
            Self::SeventhFlat9 => &[0, 1, 4, 7, 10],
            Self::SeventhSharp9 => &[0, 4, 7, 10, 3],
            Self::SeventhSharp11 => &[0, 4, 7, 10, 2, 6],
            Self::SeventhFlat13 => &[0, 4, 7, 10, 2, 5, 8],
            Self::Add9 => &[0, 4, 7, 2],
            Self::Add4 => &[0, 4, 7, 5],
            Self::Sixth => &[0, 4, 7, 9],
            Self::Minor6 => &[0, 3, 7, 9],
            Self::SixNine => &[0, 4, 7, 9, 2],
            Self::SevenSix => &[0, 4, 7, 9, 10],
            Self::Sus2 => &[0, 2, 7],
            Self::Sus4 => &[0, 5, 7],
            Self::NineSus4 => &[0, 5, 7, 10, 2],
        }
    }

    /// Text shown after the note letter, split into a base and a superscript part
    pub fn suffix(&self) -> &'static [&'static str] {
        match self {
            Self::Major => &[""],
            Self::Minor => &["m"],
            Self::Augmented => &["aug"],
            Self::Diminished => &["dim"],
            Self::Diminished7 => &["", "o7"],
            Self::HalfDiminished7 => &["m", "7♭5"],
            Self::Minor7 => &["m", "7"],
            Self::MinorMajor7 => &["m", "M7"],
            Self::Dominant7 => &["", "7"],
            Self::Major7 => &["maj", "7"],
            Self::Augmented7 => &["aug", "7"],
            Self::AugmentedMajor7 => &["aug", "M7"],
            Self::Dominant9 => &["", "9"],
            Self::Dominant11 => &["", "11"],
            Self::Dominant13 => &["", "13"],
            Self::SeventhFlat9 => &["", "7♭9"],
            Self::SeventhSharp9 => &["", "7♯9"],
            Self::SeventhSharp11 => &["", "7♯11"],
            Self::SeventhFlat13 => &["", "7♭13"],
            Self::Add9 => &["", "add9"],
            Self::Add4 => &["", "add4"],
            Self::Sixth => &["", "6"],
            Self::Minor6 => &["m", "6"],
            Self::SixNine => &["", "6/9"],
            Self::SevenSix => &["", "7/6"],
            Self::Sus2 => &["", "sus2"],
            Self::Sus4 => &["", "sus4"],
            Self::NineSus4 => &["", "9sus4"],
        }
    }

    /// Reference page for the chord, empty when there is none
    pub fn href(&self) -> &'static str {
        match self {
            Self::Major => "https://en.wikipedia.org/wiki/Major_triad",
            Self::Minor => "https://en.wikipedia.org/wiki/Minor_chord",
            Self::Augmented => "https://en.wikipedia.org/wiki/Augmented_triad",
            Self::Diminished => "https://en.wikipedia.org/wiki/Diminished_triad",
            Self::Diminished7 => "https://en.wikipedia.org/wiki/Diminished_seventh_chord",
            Self::HalfDiminished7 => "https://en.wikipedia.org/wiki/Half-diminished_seventh_chord",
            Self::Minor7 => "https://en.wikipedia.org/wiki/Minor_seventh_chord",
            Self::MinorMajor7 => "https://en.wikipedia.org/wiki/Minor_major_seventh_chord",
            Self::Dominant7 => "https://en.wikipedia.org/wiki/Dominant_seventh_chord",
            Self::Major7 => "https://en.wikipedia.org/wiki/Major_seventh_chord",
            Self::Augmented7 => "https://en.wikipedia.org/wiki/Augmented_seventh_chord",
            Self::AugmentedMajor7 => "https://en.wikipedia.org/wiki/Augmented_major_seventh_chord",
            Self::Dominant9 => "https://en.wikipedia.org/wiki/Ninth_chord#Dominant_ninth",
            Self::Dominant11 => "https://en.wikipedia.org/wiki/Eleventh_chord",
            Self::Dominant13 => "https://en.wikipedia.org/wiki/Thirteenth#Dominant_thirteenth",
            Self::SeventhSharp9 => "https://en.wikipedia.org/wiki/Dominant_seventh_sharp_ninth_chord",
            Self::Add9 => "https://en.wikipedia.org/wiki/Added_tone_chord",
            Self::Sixth | Self::Minor6 => "https://en.wikipedia.org/wiki/Sixth_chord",
            Self::SixNine => "https://en.wikipedia.org/wiki/Ninth_chord#6/9_chord",
            Self::SevenSix => "https://en.wikipedia.org/wiki/Seven_six_chord",
            Self::SeventhFlat9
            | Self::SeventhSharp11
            | Self::SeventhFlat13
            | Self::Add4
            | Self::Sus2
            | Self::Sus4
            | Self::NineSus4 => "",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChordQuality {
    type Err = SongwriterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.id() == s)
            .ok_or_else(|| SongwriterError::UnknownQuality(s.to_string()))
    }
}

// ============================================================================
// Menus
// ============================================================================

/// A titled group of qualities offered together in a picker
#[derive(Debug, Clone, Copy)]
pub struct ChordMenu {
    pub title: &'static str,
    pub chords: &'static [ChordQuality],
}

const COMMON: &[ChordQuality] = &[
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Sixth,
    ChordQuality::Dominant7,
    ChordQuality::Major7,
    ChordQuality::Augmented,
    ChordQuality::Augmented7,
    ChordQuality::Minor6,
    ChordQuality::Minor7,
    ChordQuality::MinorMajor7,
    ChordQuality::Diminished,
    ChordQuality::Diminished7,
    ChordQuality::HalfDiminished7,
];

pub const BASIC_CHORD_MENU: ChordMenu = ChordMenu { title: "Common", chords: COMMON };

pub const ADVANCED_CHORD_MENU: [ChordMenu; 7] = [
    ChordMenu { title: "Common", chords: COMMON },
    ChordMenu {
        title: "Triads",
        chords: &[
            ChordQuality::Major,
            ChordQuality::Minor,
            ChordQuality::Augmented,
            ChordQuality::Diminished,
        ],
    },
    ChordMenu {
        title: "Sevenths",
        chords: &[
            ChordQuality::Diminished7,
            ChordQuality::HalfDiminished7,
            ChordQuality::Minor7,
            ChordQuality::MinorMajor7,
            ChordQuality::Dominant7,
            ChordQuality::Major7,
            ChordQuality::Augmented7,
            ChordQuality::AugmentedMajor7,
        ],
    },
    ChordMenu {
        title: "Extended",
        chords: &[
            ChordQuality::Dominant9,
            ChordQuality::Dominant11,
            ChordQuality::Dominant13,
        ],
    },
    ChordMenu {
        title: "Altered",
        chords: &[
            ChordQuality::SeventhFlat9,
            ChordQuality::SeventhSharp9,
            ChordQuality::SeventhSharp11,
            ChordQuality::SeventhFlat13,
        ],
    },
    ChordMenu {
        title: "Added",
        chords: &[
            ChordQuality::Add9,
            ChordQuality::Add4,
            ChordQuality::Sixth,
            ChordQuality::Minor6,
            ChordQuality::SixNine,
            ChordQuality::SevenSix,
        ],
    },
    ChordMenu {
        title: "Suspended",
        chords: &[ChordQuality::Sus2, ChordQuality::Sus4, ChordQuality::NineSus4],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for quality in ChordQuality::ALL {
            assert_eq!(quality.id().parse::<ChordQuality>(), Ok(quality));
        }
        assert!("sus3".parse::<ChordQuality>().is_err());
    }

    #[test]
    fn test_suffixes_are_distinct() {
        for (i, a) in ChordQuality::ALL.iter().enumerate() {
            for b in &ChordQuality::ALL[i + 1..] {
                assert_ne!(a.suffix(), b.suffix(), "{} and {} share a suffix", a, b);
            }
        }
    }

    #[test]
    fn test_every_chord_contains_root() {
        for quality in ChordQuality::ALL {
            assert_eq!(quality.pitch_class()[0], 0, "{}", quality);
        }
    }
}
