//! Edit session: applies editor actions to songs and reports what changed

use songwriter_core::{
    Chord, ChordId, ChordQuality, Resolution, SectionVariation, Song, SongWriter, VariationId,
};
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::project::ProjectStore;

/// An edit coming from the editor UI
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    AddChord {
        variation: VariationId,
        key: u8,
        quality: ChordQuality,
        start: f64,
        end: f64,
    },
    RemoveChord { variation: VariationId, chord: ChordId },
    PreviewPullLeft { variation: VariationId, chord: ChordId, start: f64 },
    PreviewPullRight { variation: VariationId, chord: ChordId, end: f64 },
    PullLeft { variation: VariationId, chord: ChordId, start: f64 },
    PullRight { variation: VariationId, chord: ChordId, end: f64 },
    SetBars { variation: VariationId, bars: u32 },
    SetTimeSignature(String),
    SetRoot(String),
    SetBpm(u32),
}

/// What an edit did, so the UI can react (e.g. animate a removal)
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// `chord` is `None` when the interval was empty once clamped to the bars
    Added { chord: Option<ChordId>, resolution: Resolution },
    Removed(bool),
    Previewed(Option<f64>),
    Resolved(Resolution),
    Resized { removed: Vec<ChordId> },
    Requantized { applied: bool },
    Updated,
}

/// Songs open for editing, with an optional store to load from and save to
#[derive(Debug, Default)]
pub struct EditSession {
    writer: SongWriter,
    store: Option<ProjectStore>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: ProjectStore) -> Self {
        Self {
            writer: SongWriter::new(),
            store: Some(store),
        }
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.writer.get(id)
    }

    /// Start a new song, replacing any open song with the same id
    pub fn new_song(&mut self, id: &str) -> &mut Song {
        self.writer.remove(id);
        self.writer.create(id)
    }

    /// Start a new song under a fresh random id and return that id
    pub fn new_untitled_song(&mut self) -> String {
        self.writer.create_untitled().id().to_string()
    }

    /// Open a song: already open, then the store, then a fresh song
    pub fn open(&mut self, id: &str) -> Result<&mut Song> {
        if !self.writer.contains(id) {
            if let Some(store) = self.store.as_ref().filter(|s| s.exists(id)) {
                let song = store.load(id)?;
                self.writer.insert(song);
            }
        }
        Ok(self.writer.create(id))
    }

    pub fn save(&self, id: &str) -> Result<()> {
        let song = self
            .writer
            .get(id)
            .ok_or_else(|| ServiceError::SongNotFound(id.to_string()))?;
        if let Some(store) = &self.store {
            store.save(song)?;
        }
        Ok(())
    }

    pub fn close(&mut self, id: &str) -> Option<Song> {
        self.writer.remove(id)
    }

    pub fn apply(&mut self, id: &str, action: EditAction) -> Result<EditOutcome> {
        debug!("Song '{}': {:?}", id, action);
        let song = self
            .writer
            .get_mut(id)
            .ok_or_else(|| ServiceError::SongNotFound(id.to_string()))?;

        let outcome = match action {
            EditAction::AddChord { variation, key, quality, start, end } => {
                let chord = Chord::new(key, quality, start, end);
                match variation_mut(song, variation)?.place(chord) {
                    Some((chord, resolution)) => EditOutcome::Added { chord: Some(chord), resolution },
                    None => EditOutcome::Added { chord: None, resolution: Resolution::default() },
                }
            }
            EditAction::RemoveChord { variation, chord } => {
                EditOutcome::Removed(variation_mut(song, variation)?.remove(chord).is_some())
            }
            EditAction::PreviewPullLeft { variation, chord, start } => {
                let v = variation_with_chord(song, variation, chord)?;
                EditOutcome::Previewed(v.preview_pull_left(chord, start))
            }
            EditAction::PreviewPullRight { variation, chord, end } => {
                let v = variation_with_chord(song, variation, chord)?;
                EditOutcome::Previewed(v.preview_pull_right(chord, end))
            }
            EditAction::PullLeft { variation, chord, start } => {
                let v = variation_with_chord(song, variation, chord)?;
                EditOutcome::Resolved(v.pull_left(chord, start))
            }
            EditAction::PullRight { variation, chord, end } => {
                let v = variation_with_chord(song, variation, chord)?;
                EditOutcome::Resolved(v.pull_right(chord, end))
            }
            EditAction::SetBars { variation, bars } => EditOutcome::Resized {
                removed: variation_mut(song, variation)?.set_bars(bars),
            },
            EditAction::SetTimeSignature(signature) => EditOutcome::Requantized {
                applied: song.set_time_signature(&signature),
            },
            EditAction::SetRoot(root) => {
                song.set_root(&root)?;
                EditOutcome::Updated
            }
            EditAction::SetBpm(bpm) => {
                song.set_bpm(bpm);
                EditOutcome::Updated
            }
        };
        Ok(outcome)
    }
}

fn variation_mut(song: &mut Song, id: VariationId) -> Result<&mut SectionVariation> {
    song.variation_mut(id).ok_or(ServiceError::VariationNotFound(id.0))
}

fn variation_with_chord(
    song: &mut Song,
    id: VariationId,
    chord: ChordId,
) -> Result<&mut SectionVariation> {
    let variation = variation_mut(song, id)?;
    if !variation.contains(chord) {
        return Err(ServiceError::ChordNotFound(chord.0));
    }
    Ok(variation)
}
