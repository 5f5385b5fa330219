use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ct2rs::tokenizers::auto::Tokenizer as AutoTokenizer;
use ct2rs::{TranslationOptions, Translator};

use crate::config::Config;

/// Translation direction. A closed set shared by the UI and the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ArToEn,
    EnToAr,
}

impl Direction {
    /// The opposite direction. Applying this twice is a no-op.
    pub fn swapped(self) -> Self {
        match self {
            Direction::ArToEn => Direction::EnToAr,
            Direction::EnToAr => Direction::ArToEn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::ArToEn => "Arabic → English",
            Direction::EnToAr => "English → Arabic",
        }
    }

    /// Whether the target language renders right-to-left.
    pub fn target_is_rtl(self) -> bool {
        matches!(self, Direction::EnToAr)
    }
}

/// Both directional capabilities, loaded once at startup and read-only after.
/// Safe for concurrent use; the app only ever runs one translation at a time.
pub struct TranslatorPair {
    ar_en: Translator<AutoTokenizer>,
    en_ar: Translator<AutoTokenizer>,
    beam_size: usize,
}

impl TranslatorPair {
    /// Load both models from their on-disk directories. Either directory
    /// missing or unreadable fails the whole pair. CPU-heavy; call from
    /// `spawn_blocking`.
    pub fn load(config: &Config) -> Result<Self> {
        let ar_en = load_one(&config.ar_en_model_dir)?;
        let en_ar = load_one(&config.en_ar_model_dir)?;
        log::info!(
            "Translation models loaded from {} and {}",
            config.ar_en_model_dir.display(),
            config.en_ar_model_dir.display()
        );
        Ok(Self {
            ar_en,
            en_ar,
            beam_size: config.beam_size,
        })
    }

    /// Tokenize, generate and decode a single input. Blocking; call from
    /// `spawn_blocking`.
    pub fn translate(&self, direction: Direction, text: &str) -> Result<String> {
        let translator = match direction {
            Direction::ArToEn => &self.ar_en,
            Direction::EnToAr => &self.en_ar,
        };
        let options = TranslationOptions {
            beam_size: self.beam_size,
            ..Default::default()
        };
        let results = translator
            .translate_batch(&[text.to_string()], &options, None)
            .with_context(|| format!("translation failed ({})", direction.label()))?;
        // An empty string is a valid translation; only a missing batch entry
        // is an engine failure.
        results
            .into_iter()
            .next()
            .map(|(out, _)| out)
            .ok_or_else(|| anyhow!("translator returned no output"))
    }
}

fn load_one(dir: &Path) -> Result<Translator<AutoTokenizer>> {
    Translator::new(dir, &Default::default())
        .with_context(|| format!("failed to load translation model from {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn swap_is_an_involution() {
        for dir in [Direction::ArToEn, Direction::EnToAr] {
            assert_ne!(dir.swapped(), dir);
            assert_eq!(dir.swapped().swapped(), dir);
        }
    }

    #[test]
    fn only_arabic_target_is_rtl() {
        assert!(Direction::EnToAr.target_is_rtl());
        assert!(!Direction::ArToEn.target_is_rtl());
    }
}
