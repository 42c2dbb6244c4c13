//! songwriter-core: chord timelines and song structure for the songwriter editor

mod chord;
mod error;
mod keyed;
pub mod name;
pub mod notes;
pub mod playback;
pub mod quality;
mod section;
mod song;
mod time_signature;
pub mod variation;
mod writer;

pub use chord::{Chord, ChordId};
pub use error::{Result, SongwriterError};
pub use notes::Mode;
pub use playback::{PlaybackStyle, PlayedNote};
pub use quality::{ChordMenu, ChordQuality, ADVANCED_CHORD_MENU, BASIC_CHORD_MENU};
pub use section::SongSection;
pub use song::Song;
pub use time_signature::TimeSignature;
pub use variation::{realign_time, Boundary, Resolution, SectionVariation, VariationId};
pub use writer::SongWriter;
