use std::path::Path;

use anyhow::{Context, Result};

/// Write text to a UTF-8 file, ensuring a single trailing newline.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    let mut data = text.to_string();
    if !data.ends_with('\n') {
        data.push('\n');
    }
    std::fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Saved text to {}", path.display());
    Ok(())
}

/// Read a UTF-8 file, stripping a single trailing newline.
pub fn load_text(path: &Path) -> Result<String> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::info!("Loaded text from {}", path.display());
    Ok(data.strip_suffix('\n').unwrap_or(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::{load_text, save_text};
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("translingo-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn save_then_load_round_trip() {
        let path = temp_file("round-trip.txt");
        save_text(&path, "Hello مرحبا").unwrap();
        assert_eq!(load_text(&path).unwrap(), "Hello مرحبا");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn trailing_newline_is_normalized() {
        let path = temp_file("newline.txt");
        save_text(&path, "one line\n").unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "one line\n");
        assert_eq!(load_text(&path).unwrap(), "one line");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn interior_newlines_survive() {
        let path = temp_file("multiline.txt");
        save_text(&path, "a\nb\n\nc").unwrap();
        assert_eq!(load_text(&path).unwrap(), "a\nb\n\nc");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_text(&temp_file("does-not-exist.txt")).is_err());
    }
}
