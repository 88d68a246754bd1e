use crate::core::data::PromptRecord;
use crate::utils::error::{AppError, AppResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// File name for an exported record: lower-cased title, whitespace runs as `-`
///
/// Path separators and other characters not allowed in file names become `-`,
/// and leading dots are dropped, so the name is always a single plain component.
pub fn export_file_name(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = whitespace_runs().replace_all(&lowered, "-");
    let cleaned: String = dashed
        .chars()
        .map(|c| if is_reserved(c) { '-' } else { c })
        .collect();

    let stem = cleaned.trim_start_matches('.');
    if stem.is_empty() {
        "prompt.json".to_string()
    } else {
        format!("{}.json", stem)
    }
}

/// Pretty JSON of every record field with `content` replaced by the given text
pub fn export_json(record: &PromptRecord, content: &str) -> AppResult<String> {
    let mut exported = record.clone();
    exported.content = content.to_string();

    serde_json::to_string_pretty(&exported)
        .map_err(|e| AppError::System(format!("Failed to serialize prompt to JSON: {}", e)))
}

/// Write the export into `dir`, returning the file path
pub fn export_to_dir(record: &PromptRecord, content: &str, dir: &Path) -> AppResult<PathBuf> {
    let json = export_json(record, content)?;

    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::Io(format!("Failed to create export directory {}: {}", dir.display(), e)))?;

    let path = dir.join(export_file_name(&record.title));
    if path.parent() != Some(dir) {
        return Err(AppError::Io(format!(
            "Refusing to export '{}' outside {}",
            record.title,
            dir.display()
        )));
    }
    std::fs::write(&path, json)
        .map_err(|e| AppError::Io(format!("Failed to write export file {}: {}", path.display(), e)))?;

    tracing::info!(id = %record.id, path = %path.display(), "exported prompt");
    Ok(path)
}

/// Link that opens `id` directly: `<origin>?id=<id>`
pub fn share_url(origin: &str, id: &str) -> String {
    format!("{}?id={}", origin.trim_end_matches('/'), id)
}
