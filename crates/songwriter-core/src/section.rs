//! A section of the song: which variation to play and how

use serde::{Deserialize, Serialize};

use crate::playback::PlaybackStyle;
use crate::variation::VariationId;

/// A section in the song timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSection {
    /// Variation whose chords this section plays
    pub variation: VariationId,
    /// Instrument keys
    pub instruments: Vec<String>,
    /// Ways to play the section
    pub styles: Vec<PlaybackStyle>,
    /// Number of times to play this section
    repetitions: u32,
}

impl Default for SongSection {
    fn default() -> Self {
        Self {
            variation: VariationId(0),
            instruments: vec!["piano".to_string()],
            styles: vec![PlaybackStyle::simple_chords()],
            repetitions: 1,
        }
    }
}

impl SongSection {
    pub fn new(variation: VariationId) -> Self {
        Self {
            variation,
            ..Default::default()
        }
    }

    pub fn variation(&self) -> VariationId {
        self.variation
    }

    pub fn set_variation(&mut self, variation: VariationId) {
        self.variation = variation;
    }

    pub fn instruments(&self) -> &[String] {
        &self.instruments
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Set repeat count (at least 1)
    pub fn set_repetitions(&mut self, repetitions: u32) {
        self.repetitions = repetitions.max(1);
    }
}
