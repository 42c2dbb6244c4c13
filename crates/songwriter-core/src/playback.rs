//! Playback styles: which chord tones to play and when

use serde::{Deserialize, Serialize};

/// One note of a playback style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayedNote {
    /// When to play the note (in quarter notes)
    pub time: f64,
    /// Index into the chord's pitch classes
    pub note: u8,
    /// How long to hold the note (in quarter notes)
    pub duration: f64,
    /// Play the note even when the chord has no tone at that index
    pub required: bool,
}

impl PlayedNote {
    pub fn new(time: f64, note: u8, duration: f64, required: bool) -> Self {
        Self {
            time,
            note,
            duration,
            required,
        }
    }
}

/// A named pattern of played notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStyle {
    pub id: String,
    pub name: String,
    pub playback: Vec<PlayedNote>,
}

impl PlaybackStyle {
    pub fn new(id: impl Into<String>, name: impl Into<String>, playback: Vec<PlayedNote>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            playback,
        }
    }

    /// Every chord tone struck together on the downbeat
    pub fn simple_chords() -> Self {
        Self::new(
            "simple-chords",
            "Simple Chords",
            vec![
                PlayedNote::new(0.0, 0, 1.0, true),
                PlayedNote::new(0.0, 1, -1.0, true),
                PlayedNote::new(0.0, 2, -1.0, true),
                PlayedNote::new(0.0, 3, -1.0, false),
                PlayedNote::new(0.0, 4, -1.0, false),
                PlayedNote::new(0.0, 5, -1.0, false),
            ],
        )
    }

    /// Notes this style plays for a chord with `chord_size` tones
    pub fn notes_for(&self, chord_size: usize) -> impl Iterator<Item = &PlayedNote> {
        self.playback
            .iter()
            .filter(move |n| n.required || (n.note as usize) < chord_size)
    }
}

impl Default for PlaybackStyle {
    fn default() -> Self {
        Self::simple_chords()
    }
}
