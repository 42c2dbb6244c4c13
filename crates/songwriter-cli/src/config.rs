use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Where song files are kept
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub bars: u32,
    pub time_signature: String,
    pub bpm: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bars: 4,
            time_signature: "4/4".to_string(),
            bpm: 70,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("songwriter")
        .join("config.toml")
}

pub fn parse_config(s: &str) -> CliConfig {
    toml::from_str(s).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config: {}", e);
        CliConfig::default()
    })
}

pub fn load_config() -> CliConfig {
    let path = config_path();
    std::fs::read_to_string(&path)
        .map(|s| parse_config(&s))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config("[defaults]\nbpm = 120\n");
        assert_eq!(config.defaults.bpm, 120);
        assert_eq!(config.defaults.bars, 4);
        assert_eq!(config.defaults.time_signature, "4/4");
        assert_eq!(config.project.directory, PathBuf::from("."));
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let config = parse_config("this is = = not toml");
        assert_eq!(config.defaults.bpm, 70);
    }
}
