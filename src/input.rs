//! Keyword input files.
//!
//! A file ending in `.json` holds a JSON array of strings. Any other file
//! holds one keyword per line; lines are trimmed, and blank lines and lines
//! starting with `#` are skipped.

use std::path::Path;

use crate::error::TrieHashResult;

/// Reads keywords from `path`, choosing the format by extension.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, or a serialization error
/// if a JSON file is not an array of strings.
pub fn load_keywords<P: AsRef<Path>>(path: P) -> TrieHashResult<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;

    let keywords = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<Vec<String>>(&text)?,
        _ => parse_keyword_lines(&text),
    };

    tracing::debug!(path = %path.display(), count = keywords.len(), "Loaded keywords");
    Ok(keywords)
}

/// Splits line-oriented keyword text.
pub fn parse_keyword_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
