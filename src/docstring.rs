//! Leading docstring extraction for Python sources
//!
//! A best-effort scan: the file must open with a triple-quoted literal
//! (`"""` or `'''`), preceded by nothing but spaces or tabs. No attempt is
//! made to parse the language, so escaped quotes inside the literal, a
//! leading comment or a shebang all defeat the match.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Suffix of files eligible for docstring extraction.
pub const SOURCE_SUFFIX: &str = ".py";

static DOCSTRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\A[ \t]*(?:"""(.*?)"""|'''(.*?)''')"#)
        .expect("DOCSTRING_PATTERN regex is invalid")
});

/// Whether a file name carries the source suffix.
pub fn is_docstring_candidate(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX)
}

/// Extract the leading docstring from a file.
///
/// Read failures (missing file, permissions, invalid UTF-8) are logged
/// and reported as `None`.
pub fn extract_docstring(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_docstring_from_str(&content),
        Err(e) => {
            warn!("error reading file {}: {}", path.display(), e);
            None
        }
    }
}

/// Extract the trimmed body of a leading triple-quoted literal.
///
/// Returns `None` when there is no such literal or its body is blank.
pub fn extract_docstring_from_str(content: &str) -> Option<String> {
    let caps = DOCSTRING_PATTERN.captures(content)?;
    let body = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();

    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
