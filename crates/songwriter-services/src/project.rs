//! Songs saved as JSON files in a project directory

use std::fs;
use std::path::{Path, PathBuf};

use songwriter_core::Song;
use tracing::{debug, info};

use crate::error::{Result, ServiceError};

/// Directory of `<song id>.json` files
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).is_file()
    }

    pub fn save(&self, song: &Song) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(song.id());
        let json = serde_json::to_string_pretty(song)?;
        fs::write(&path, json)?;
        info!("Saved song '{}' to {}", song.id(), path.display());
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<Song> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(ServiceError::SongNotFound(id.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        let song: Song = serde_json::from_str(&json)?;
        debug!("Loaded song '{}' from {}", id, path.display());
        Ok(song)
    }

    /// Ids of stored songs, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Ok(Vec::new());
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}
