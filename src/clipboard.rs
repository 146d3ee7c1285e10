use std::io::Write;
use std::process::{Child, Command, Stdio};

use crate::error::{DocketError, Result};

/// Copies text to the system clipboard through the platform utility:
/// pbcopy on macOS, xclip or xsel on Linux, clip on Windows.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let child = spawn_clipboard_tool()?;
    pipe_text(child, text)
}

#[cfg(target_os = "macos")]
fn spawn_clipboard_tool() -> Result<Child> {
    Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DocketError::Api(format!("Failed to spawn pbcopy: {}", e)))
}

#[cfg(target_os = "linux")]
fn spawn_clipboard_tool() -> Result<Child> {
    // xclip first, xsel as the fallback
    let attempt = Command::new("xclip")
        .args(["-selection", "clipboard"])
        .stdin(Stdio::piped())
        .spawn();
    match attempt {
        Ok(child) => Ok(child),
        Err(_) => Command::new("xsel")
            .args(["--clipboard", "--input"])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DocketError::Api(format!(
                    "Failed to spawn xclip or xsel: {}. Install xclip or xsel.",
                    e
                ))
            }),
    }
}

#[cfg(target_os = "windows")]
fn spawn_clipboard_tool() -> Result<Child> {
    Command::new("clip")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| DocketError::Api(format!("Failed to spawn clip: {}", e)))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn spawn_clipboard_tool() -> Result<Child> {
    Err(DocketError::Api(
        "Clipboard not supported on this platform".to_string(),
    ))
}

fn pipe_text(mut child: Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DocketError::Api(format!("Failed to write to clipboard: {}", e)))?;
    }
    let status = child
        .wait()
        .map_err(|e| DocketError::Api(format!("Failed to wait for clipboard command: {}", e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(DocketError::Api(
            "Clipboard command exited with error".to_string(),
        ))
    }
}
