//! Command Extractor
//!
//! Scans a skill document body for inline backtick code spans and keeps
//! only the ones that belong to a recognized command namespace.

use regex::Regex;

/// Inline span pattern: a single backtick pair, shortest match, no
/// escaping support (a backtick inside a span is not representable).
const SPAN_PATTERN: &str = "`([^`]+)`";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Extract the allow-listed commands from a document body.
///
/// Each inline backtick span is trimmed and kept only if it starts with
/// one of `prefixes`. Order of first appearance is preserved and
/// duplicates are kept; an empty result is legal (a skill may be pure
/// documentation).
pub fn extract_commands(body: &str, prefixes: &[String]) -> Vec<String> {
    let re = match Regex::new(SPAN_PATTERN) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    re.captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|span| is_recognized(span, prefixes))
        .collect()
}

/// The namespace predicate: a span is a command only if it starts with
/// one of the recognized prefixes.
pub fn is_recognized(span: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| span.starts_with(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        vec!["obsidian-cli".to_string(), "obsidian://".to_string()]
    }

    #[test]
    fn test_filters_unrecognized_spans() {
        let body = "Run `obsidian-cli search \"query\"` or `echo hi` to test.";
        let commands = extract_commands(body, &prefixes());
        assert_eq!(commands, vec!["obsidian-cli search \"query\""]);
    }

    #[test]
    fn test_uri_scheme_prefix_recognized() {
        let body = "Open `obsidian://open?vault=main` directly.";
        let commands = extract_commands(body, &prefixes());
        assert_eq!(commands, vec!["obsidian://open?vault=main"]);
    }

    #[test]
    fn test_order_preserved_and_duplicates_kept() {
        let body = "`obsidian-cli open` then `obsidian-cli search x` then `obsidian-cli open`";
        let commands = extract_commands(body, &prefixes());
        assert_eq!(
            commands,
            vec![
                "obsidian-cli open",
                "obsidian-cli search x",
                "obsidian-cli open"
            ]
        );
    }

    #[test]
    fn test_spans_are_trimmed() {
        let body = "Use ` obsidian-cli open ` here.";
        let commands = extract_commands(body, &prefixes());
        assert_eq!(commands, vec!["obsidian-cli open"]);
    }

    #[test]
    fn test_empty_body_and_no_matches() {
        assert!(extract_commands("", &prefixes()).is_empty());
        assert!(extract_commands("no spans at all", &prefixes()).is_empty());
        assert!(extract_commands("`ls -la` only", &prefixes()).is_empty());
    }

    #[test]
    fn test_prefix_must_anchor_at_start() {
        let body = "`run obsidian-cli open`";
        assert!(extract_commands(body, &prefixes()).is_empty());
    }
}
