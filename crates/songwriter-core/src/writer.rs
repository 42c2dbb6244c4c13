//! Registry of the songs open in one editing session

use std::collections::HashMap;

use crate::name::random_id;
use crate::song::Song;

/// Songs being written, by id
#[derive(Debug, Default)]
pub struct SongWriter {
    songs: HashMap<String, Song>,
}

impl SongWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the song with this id, creating it first if needed
    pub fn create(&mut self, id: &str) -> &mut Song {
        self.songs
            .entry(id.to_string())
            .or_insert_with(|| Song::new(id))
    }

    /// Create a song under a random id no open song uses
    pub fn create_untitled(&mut self) -> &mut Song {
        let mut rng = fastrand::Rng::new();
        let mut id = random_id(&mut rng);
        while self.songs.contains_key(&id) {
            id = random_id(&mut rng);
        }
        self.create(&id)
    }

    /// Add a song, replacing any song with the same id
    pub fn insert(&mut self, song: Song) -> Option<Song> {
        self.songs.insert(song.id().to_string(), song)
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Song> {
        self.songs.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.songs.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Song> {
        self.songs.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.songs.keys().map(String::as_str)
    }
}
