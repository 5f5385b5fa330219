use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the converted Arabic→English model and tokenizer.
    pub ar_en_model_dir: PathBuf,
    /// Directory holding the converted English→Arabic model and tokenizer.
    pub en_ar_model_dir: PathBuf,
    /// Decoder beam size.
    pub beam_size: usize,
    /// Persisted theme preference.
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ar_en_model_dir: models_dir().join("ar-en"),
            en_ar_model_dir: models_dir().join("en-ar"),
            beam_size: 4,
            dark_mode: false,
        }
    }
}

/// Directory: ~/.local/share/translingo/models/
fn models_dir() -> PathBuf {
    let mut p = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    p.push("translingo");
    p.push("models");
    p
}

impl Config {
    /// Directory: ~/.config/translingo/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("translingo");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert!(cfg.beam_size > 0);
        assert_ne!(cfg.ar_en_model_dir, cfg.en_ar_model_dir);
        assert!(!cfg.dark_mode);
    }

    #[test]
    fn json_round_trip() {
        let mut cfg = Config::default();
        cfg.beam_size = 12;
        cfg.dark_mode = true;
        let data = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&data).unwrap();
        assert_eq!(back.beam_size, 12);
        assert!(back.dark_mode);
        assert_eq!(back.ar_en_model_dir, cfg.ar_en_model_dir);
    }

    #[test]
    fn unknown_or_partial_json_falls_back_to_defaults() {
        let back: Config = serde_json::from_str(r#"{"beam_size": 8}"#).unwrap();
        assert_eq!(back.beam_size, 8);
        assert_eq!(back.en_ar_model_dir, Config::default().en_ar_model_dir);
    }
}
