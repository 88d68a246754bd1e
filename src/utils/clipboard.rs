use crate::utils::error::{AppError, AppResult};
use std::io::Write;
use std::process::{Command, Stdio};

/// Pipe `text` into a clipboard helper program
fn pipe_to(program: &str, args: &[&str], text: &str) -> AppResult<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Clipboard(format!("{} exited with {}", program, status)))
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    #[cfg(target_os = "macos")]
    let candidates: &[(&str, &[&str])] = &[("pbcopy", &[])];

    #[cfg(target_os = "windows")]
    let candidates: &[(&str, &[&str])] = &[("clip", &[])];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let candidates: &[(&str, &[&str])] = &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    let mut last_error = AppError::Clipboard("No clipboard utility available".to_string());
    for (program, args) in candidates {
        match pipe_to(program, args, text) {
            Ok(()) => {
                tracing::debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard helper failed");
                last_error = e;
            }
        }
    }

    Err(last_error)
}
