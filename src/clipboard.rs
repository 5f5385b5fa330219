use std::io::Write;
use std::process::{Command, Stdio};

/// Copy text to the system clipboard.
/// Uses pbcopy on macOS, wl-copy on Wayland, xclip on X11.
pub fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "macos")]
    let (cmd, args): (&str, Vec<&str>) = ("pbcopy", vec![]);

    #[cfg(target_os = "linux")]
    let (cmd, args): (&str, Vec<&str>) = {
        if session_is_wayland() {
            ("wl-copy", vec![])
        } else {
            ("xclip", vec!["-selection", "clipboard"])
        }
    };

    let mut child = Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))?;

    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(format!("{cmd} exited with status {status}").into());
    }

    Ok(())
}

/// Read text from the system clipboard.
/// Uses pbpaste on macOS, wl-paste on Wayland, xclip -o on X11.
/// An empty clipboard is an error so callers can show a warning.
pub fn read_from_clipboard() -> Result<String, Box<dyn std::error::Error>> {
    #[cfg(target_os = "macos")]
    let (cmd, args): (&str, Vec<&str>) = ("pbpaste", vec![]);

    #[cfg(target_os = "linux")]
    let (cmd, args): (&str, Vec<&str>) = {
        if session_is_wayland() {
            ("wl-paste", vec!["--no-newline"])
        } else {
            ("xclip", vec!["-selection", "clipboard", "-o"])
        }
    };

    let output = Command::new(cmd)
        .args(&args)
        .stderr(Stdio::null())
        .output()
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))?;

    if !output.status.success() {
        return Err(format!("{cmd} exited with status {}", output.status).into());
    }

    let text = String::from_utf8(output.stdout)?;
    if text.is_empty() {
        return Err("clipboard is empty".into());
    }
    Ok(text)
}

#[cfg(target_os = "linux")]
fn session_is_wayland() -> bool {
    std::env::var("XDG_SESSION_TYPE").unwrap_or_default() == "wayland"
}

#[cfg(test)]
mod tests {
    use super::{copy_to_clipboard, read_from_clipboard};

    // Needs a real session clipboard; run with `cargo test -- --ignored`.
    #[test]
    #[ignore]
    fn copy_then_read_round_trip() {
        let text = "clipboard round trip مرحبا";
        copy_to_clipboard(text).unwrap();
        assert_eq!(read_from_clipboard().unwrap(), text);
    }
}
