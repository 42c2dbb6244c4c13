//! A chord placed on a section timeline

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::keyed::Keyed;
use crate::notes;
use crate::quality::ChordQuality;

/// Identifier of a chord, unique within its variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ChordId(pub u32);

/// A chord occupying the half-open bar interval `[start, end)`.
///
/// `key` is stored relative to the song root. Bar positions are real numbers
/// where the fractional part is the position inside the bar. No ordering or
/// range checks happen here; the owning variation keeps chords consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    id: ChordId,
    key: u8,
    quality: ChordQuality,
    start: f64,
    end: f64,
}

impl Chord {
    pub fn new(key: u8, quality: ChordQuality, start: f64, end: f64) -> Self {
        Self {
            id: ChordId::default(),
            key: key % 12,
            quality,
            start,
            end,
        }
    }

    pub fn id(&self) -> ChordId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ChordId) {
        self.id = id;
    }

    /// Pitch class of the chord root once the song root is applied
    pub fn key(&self, root: u8) -> u8 {
        (self.key % 12 + root % 12) % 12
    }

    pub fn set_key(&mut self, key: u8) {
        self.key = key % 12;
    }

    /// Set the key from a note spelling such as `"F#"` or `"Bb"`
    pub fn set_key_name(&mut self, name: &str) -> Result<()> {
        match notes::parse_note(name) {
            Ok(key) => {
                self.key = key;
                Ok(())
            }
            Err(err) => {
                warn!("Chord {} keeps key {}: {}", self.id.0, self.key, err);
                Err(err)
            }
        }
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: ChordQuality) {
        self.quality = quality;
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn set_start(&mut self, start: f64) {
        self.start = start;
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn set_end(&mut self, end: f64) {
        self.end = end;
    }

    /// Length in bars
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Intervals of the chord quality, in half steps from the chord root
    pub fn pitch_class(&self) -> &'static [u8] {
        self.quality.pitch_class()
    }

    /// Absolute pitch classes sounded by the chord under the given song root
    pub fn notes(&self, root: u8) -> Vec<u8> {
        let base = self.key(root);
        self.pitch_class()
            .iter()
            .map(|&interval| (base + interval) % 12)
            .collect()
    }

    /// Display label, e.g. `"F♯m"` or `"Gmaj7"`
    pub fn label(&self, root: u8, flats: bool) -> String {
        let mut label = notes::note_name(self.key(root), flats).to_string();
        for part in self.quality.suffix() {
            label.push_str(part);
        }
        label
    }
}

impl Keyed for Chord {
    type Key = ChordId;

    fn map_key(&self) -> ChordId {
        self.id
    }
}
