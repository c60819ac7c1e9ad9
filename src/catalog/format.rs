//! Skill Document Parser
//!
//! Parses `.md` skill documents that use a delimited front block for
//! metadata and a Markdown body for documentation.
//!
//! Expected format:
//! ```text
//! ---
//! name: obsidian
//! description: Work with an Obsidian vault
//! homepage: https://obsidian.md
//! metadata: {"version": 1}
//! ---
//!
//! Documentation with inline `obsidian-cli ...` command spans...
//! ```

use crate::error::DocumentError;
use crate::types::SkillMetadata;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a raw skill document into its metadata record and body text.
///
/// The front block must be present and terminated; otherwise the document
/// is rejected with [`DocumentError::MalformedDocument`] and no partial
/// metadata escapes.
pub fn parse_document(raw: &str) -> Result<(SkillMetadata, String), DocumentError> {
    let trimmed = raw.trim_start();

    if !trimmed.starts_with("---") {
        return Err(DocumentError::MalformedDocument(
            "missing opening front block delimiter".to_string(),
        ));
    }

    // Everything between the opening `---` and the next `\n---` line is
    // the front block.
    let after_open = &trimmed[3..];
    let close_idx = after_open.find("\n---").ok_or_else(|| {
        DocumentError::MalformedDocument("unterminated front block".to_string())
    })?;

    let block = after_open[..close_idx].trim();
    let metadata = parse_front_block(block);

    // The body is everything after the closing delimiter, verbatim apart
    // from the delimiter's own line break.
    let after_close = &after_open[close_idx + 4..];
    let body = after_close.trim_start_matches('\n').to_string();

    Ok((metadata, body))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Parse the `key: value` lines of a front block into a metadata record.
///
/// Blank lines and lines without a colon are skipped. Unrecognized keys
/// are ignored so documents can carry extra fields without breaking older
/// readers. A failed parse of the `metadata` literal leaves that mapping
/// empty rather than failing the document.
fn parse_front_block(block: &str) -> SkillMetadata {
    let mut meta = SkillMetadata::empty();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Split on the first colon.
        let colon = match line.find(':') {
            Some(i) => i,
            None => continue,
        };
        let key = line[..colon].trim();
        let value = line[colon + 1..].trim();

        match key {
            "name" => meta.name = strip_quotes(value).to_string(),
            "description" => meta.description = strip_quotes(value).to_string(),
            "homepage" => meta.homepage = strip_quotes(value).to_string(),
            "metadata" => meta.metadata = parse_metadata_literal(value),
            _ => {}
        }
    }

    meta
}

/// Parse the embedded JSON literal of a `metadata` key. Anything that is
/// not a well-formed JSON object yields an empty mapping.
fn parse_metadata_literal(value: &str) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}

/// Strip a single pair of matching leading/trailing quote characters
/// (`"` or `'`). Unmatched or absent quotes are left alone.
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &s[1..s.len() - 1];
        }
    }
    s
}
