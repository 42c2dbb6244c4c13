//! A song: root, mode, tempo, time signature and its sections

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chord::ChordId;
use crate::error::Result;
use crate::keyed;
use crate::name::random_name;
use crate::notes::{self, Mode};
use crate::section::SongSection;
use crate::time_signature::TimeSignature;
use crate::variation::{SectionVariation, VariationId};

/// A song being written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    id: String,
    pub name: String,
    /// Root note spelling, e.g. "C" or "F#"
    root: String,
    pub mode: Mode,
    bpm: u32,
    time_signature: TimeSignature,
    #[serde(with = "keyed")]
    variations: BTreeMap<VariationId, SectionVariation>,
    /// Sections in playback order
    sections: Vec<SongSection>,
}

impl Song {
    pub const DEFAULT_BPM: u32 = 70;

    /// New song in C major, 4/4 at 70 bpm, with one section playing the
    /// default progression
    pub fn new(id: impl Into<String>) -> Self {
        let name = random_name(&mut fastrand::Rng::new());
        Self::with_name(id, name)
    }

    pub fn with_name(id: impl Into<String>, name: impl Into<String>) -> Self {
        let first = SectionVariation::with_default_progression(VariationId(0));
        Self {
            id: id.into(),
            name: name.into(),
            root: "C".to_string(),
            mode: Mode::Major,
            bpm: Self::DEFAULT_BPM,
            time_signature: TimeSignature::default(),
            variations: BTreeMap::from([(first.id(), first)]),
            sections: vec![SongSection::new(VariationId(0))],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Pitch class of the root
    pub fn root_key(&self) -> u8 {
        notes::pitch_class(&self.root).unwrap_or(0)
    }

    /// Set the root from a note spelling; unknown spellings leave it unchanged
    pub fn set_root(&mut self, root: &str) -> Result<()> {
        if let Err(err) = notes::parse_note(root) {
            warn!("Song '{}' keeps root {}: {}", self.id, self.root, err);
            return Err(err);
        }
        self.root = root.to_string();
        Ok(())
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Set the tempo; zero is ignored
    pub fn set_bpm(&mut self, bpm: u32) {
        if bpm == 0 {
            return;
        }
        self.bpm = bpm;
    }

    /// Set the tempo from text such as a form field; malformed text is ignored
    pub fn set_bpm_str(&mut self, bpm: &str) {
        match bpm.trim().parse::<u32>() {
            Ok(bpm) => self.set_bpm(bpm),
            Err(_) => warn!("Ignoring tempo {:?}", bpm),
        }
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    /// Number of grid segments in one bar
    pub fn bar_split(&self) -> u8 {
        self.time_signature.segments()
    }

    /// Change the time signature and requantize every variation onto the new
    /// grid. Malformed input leaves the song unchanged and returns false.
    pub fn set_time_signature(&mut self, signature: &str) -> bool {
        let time_signature = match signature.parse::<TimeSignature>() {
            Ok(ts) => ts,
            Err(e) => {
                warn!("{}", e);
                return false;
            }
        };

        self.time_signature = time_signature;
        let segments = self.bar_split();
        let removed: Vec<(VariationId, ChordId)> = self
            .variations
            .values_mut()
            .flat_map(|v| {
                let id = v.id();
                v.update_time_signature(segments).into_iter().map(move |c| (id, c))
            })
            .collect();

        info!(
            "Song '{}' time signature {}, {} chords removed",
            self.id,
            time_signature,
            removed.len()
        );
        true
    }

    // ------------------------------------------------------------------------
    // Variations
    // ------------------------------------------------------------------------

    pub fn variations(&self) -> impl Iterator<Item = &SectionVariation> {
        self.variations.values()
    }

    pub fn variation(&self, id: VariationId) -> Option<&SectionVariation> {
        self.variations.get(&id)
    }

    pub fn variation_mut(&mut self, id: VariationId) -> Option<&mut SectionVariation> {
        self.variations.get_mut(&id)
    }

    /// Add an empty variation under the smallest unused id
    pub fn add_variation(&mut self, bars: u32) -> VariationId {
        let mut id = 0;
        while self.variations.contains_key(&VariationId(id)) {
            id += 1;
        }
        let id = VariationId(id);
        self.variations.insert(id, SectionVariation::new(id, bars));
        id
    }

    /// Remove a variation no section plays
    pub fn remove_variation(&mut self, id: VariationId) -> Option<SectionVariation> {
        if self.sections.iter().any(|s| s.variation == id) {
            return None;
        }
        self.variations.remove(&id)
    }

    // ------------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------------

    pub fn sections(&self) -> &[SongSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&SongSection> {
        self.sections.get(index)
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut SongSection> {
        self.sections.get_mut(index)
    }

    pub fn add_section(&mut self, section: SongSection) {
        self.sections.push(section);
    }

    /// Insert section at index
    pub fn insert_section(&mut self, index: usize, section: SongSection) {
        let idx = index.min(self.sections.len());
        self.sections.insert(idx, section);
    }

    /// Remove section at index; the last remaining section stays
    pub fn remove_section(&mut self, index: usize) -> Option<SongSection> {
        if index >= self.sections.len() || self.sections.len() <= 1 {
            return None;
        }
        Some(self.sections.remove(index))
    }

    /// Total length in bars, counting repeats
    pub fn total_bars(&self) -> u32 {
        self.sections
            .iter()
            .filter_map(|s| self.variation(s.variation).map(|v| v.bars() * s.repetitions()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::error::SongwriterError;
    use crate::quality::ChordQuality;

    #[test]
    fn test_new_song_defaults() {
        let song = Song::new("abc");
        assert_eq!(song.id(), "abc");
        assert!(!song.name.is_empty());
        assert_eq!(song.root_key(), 0);
        assert_eq!(song.mode, Mode::Major);
        assert_eq!(song.bpm(), 70);
        assert_eq!(song.time_signature().to_string(), "4/4");
        assert_eq!(song.variations().count(), 1);
        assert_eq!(song.sections().len(), 1);
        assert_eq!(song.total_bars(), 4);
    }

    #[test]
    fn test_set_time_signature_rejects_malformed() {
        let mut song = Song::with_name("s", "Test");
        for bad in ["0/4", "17/4", "three/4", "3-4", ""] {
            assert!(!song.set_time_signature(bad));
            assert_eq!(song.time_signature().to_string(), "4/4");
        }
    }

    #[test]
    fn test_set_time_signature_requantizes_all_variations() {
        let mut song = Song::with_name("s", "Test");
        let second = song.add_variation(2);
        let v = song.variation_mut(second).unwrap();
        v.add(Chord::new(0, ChordQuality::Major, 0.3, 0.7));

        assert!(song.set_time_signature("4/4"));
        let spans: Vec<(f64, f64)> = song
            .variation(second)
            .unwrap()
            .ordered()
            .iter()
            .map(|c| (c.start(), c.end()))
            .collect();
        assert_eq!(spans, vec![(0.25, 0.75)]);

        assert!(song.set_time_signature("3/4"));
        assert_eq!(song.bar_split(), 3);
        // Whole-bar default progression is untouched
        assert_eq!(song.variation(VariationId(0)).unwrap().len(), 4);
    }

    #[test]
    fn test_root_and_tempo_setters() {
        let mut song = Song::with_name("s", "Test");
        song.set_root("F#").unwrap();
        assert_eq!(song.root_key(), 6);
        assert_eq!(song.set_root("Z"), Err(SongwriterError::UnknownNote("Z".into())));
        assert_eq!(song.root(), "F#");
        assert_eq!(song.root_key(), 6);

        song.set_bpm(0);
        assert_eq!(song.bpm(), 70);
        song.set_bpm_str("128");
        assert_eq!(song.bpm(), 128);
        song.set_bpm_str("fast");
        assert_eq!(song.bpm(), 128);
    }

    #[test]
    fn test_variations_and_sections() {
        let mut song = Song::with_name("s", "Test");
        let chorus = song.add_variation(8);
        assert_eq!(chorus, VariationId(1));

        let mut section = SongSection::new(chorus);
        section.set_repetitions(2);
        song.add_section(section);
        assert_eq!(song.total_bars(), 4 + 16);

        assert!(song.remove_variation(chorus).is_none());
        assert!(song.remove_section(1).is_some());
        assert!(song.remove_section(0).is_none());
        assert!(song.remove_variation(chorus).is_some());
        assert_eq!(song.add_variation(4), VariationId(1));
    }
}
