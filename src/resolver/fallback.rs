//! Rule-Based Fallback Matcher
//!
//! Deterministic resolver used when the reasoning service is unavailable
//! or returns an unusable reply. Matching is a pure function of
//! (prompt, catalog): keyword triggers pick the skill, sub-keywords pick
//! the command template, and a quoted or bare term from the prompt is
//! spliced into the template's argument position.

use regex::Regex;

use crate::types::{Resolution, Skill};

/// Command handed out when the catalog has nothing to offer. A genuine
/// shell no-op, safe to pass to the executor unconditionally.
pub const NOOP_COMMAND: &str = "true";

/// Rationale attached to the documented default resolution.
pub const NO_MATCH_RATIONALE: &str = "no specific skill matched";

// ---------------------------------------------------------------------------
// Domain dispatch table
// ---------------------------------------------------------------------------

/// One supported domain: the catalog skill it targets, the prompt
/// keywords that activate it, and the command synthesizer for it.
///
/// Adding a domain means adding a row here, not another string compare.
struct DomainRule {
    skill: &'static str,
    triggers: &'static [&'static str],
    synthesize: fn(prompt: &str, lowered: &str, skill: &Skill) -> (String, String),
}

const DOMAIN_RULES: &[DomainRule] = &[
    // Note-taking vault domain.
    DomainRule {
        skill: "obsidian",
        triggers: &["obsidian", "vault", "note", "notes"],
        synthesize: note_vault_command,
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve `prompt` against `catalog` using the domain rule table.
///
/// The catalog is walked in order and the first skill that (a) is the
/// target of some rule and (b) has one of that rule's triggers present in
/// the lower-cased prompt wins; no scoring. When nothing matches, the
/// documented default is returned: first skill and first command, or the
/// no-op sentinel for an empty catalog.
pub fn fallback_match(prompt: &str, catalog: &[Skill]) -> Resolution {
    // Lower-cased for matching only; extracted terms keep their original
    // casing.
    let lowered = prompt.to_lowercase();

    for skill in catalog {
        for rule in DOMAIN_RULES {
            if skill.metadata.name == rule.skill
                && rule.triggers.iter().any(|t| lowered.contains(t))
            {
                let (command, rationale) = (rule.synthesize)(prompt, &lowered, skill);
                return Resolution {
                    skill_name: skill.metadata.name.clone(),
                    command,
                    rationale,
                };
            }
        }
    }

    default_resolution(catalog)
}

// ---------------------------------------------------------------------------
// Note-vault domain
// ---------------------------------------------------------------------------

/// Pick a command for the note-vault skill. Intent priority is fixed:
/// create beats search beats default. A search request without any
/// extractable term degrades to the default intent.
fn note_vault_command(prompt: &str, lowered: &str, skill: &Skill) -> (String, String) {
    let term = extract_term(prompt);

    if lowered.contains("create") || lowered.contains("new") {
        let name = term.unwrap_or_else(|| "Untitled".to_string());
        return (
            format!("obsidian-cli create \"{}\"", name),
            format!("create intent in the note vault, note name \"{}\"", name),
        );
    }

    let wants_search =
        lowered.contains("search") || lowered.contains("find") || lowered.contains("look");
    if wants_search {
        if let Some(term) = term {
            return (
                format!("obsidian-cli search \"{}\"", term),
                format!("search intent in the note vault, term \"{}\"", term),
            );
        }
    }

    let command = skill
        .commands
        .first()
        .cloned()
        .unwrap_or_else(|| "obsidian-cli print-default".to_string());
    (
        command,
        "note vault matched without a more specific intent".to_string(),
    )
}

/// Extract the argument term from a prompt, original casing preserved.
///
/// A double- or single-quoted span wins; otherwise the bare word
/// following `for` / `about` / `called` / `named`.
fn extract_term(prompt: &str) -> Option<String> {
    for pattern in [r#""([^"]+)""#, r"'([^']+)'"] {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(cap) = re.captures(prompt) {
                return Some(cap[1].to_string());
            }
        }
    }

    let words: Vec<&str> = prompt.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        let lowered = word.to_lowercase();
        if matches!(lowered.as_str(), "for" | "about" | "called" | "named") {
            if let Some(next) = words.get(i + 1) {
                let bare = next.trim_matches(|c: char| c.is_ascii_punctuation());
                if !bare.is_empty() {
                    return Some(bare.to_string());
                }
            }
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Default
// ---------------------------------------------------------------------------

/// The no-match resolution: first skill and first command, degrading to
/// the no-op sentinel when the catalog (or its command list) is empty.
fn default_resolution(catalog: &[Skill]) -> Resolution {
    match catalog.first() {
        Some(skill) => Resolution {
            skill_name: skill.metadata.name.clone(),
            command: skill
                .commands
                .first()
                .cloned()
                .unwrap_or_else(|| NOOP_COMMAND.to_string()),
            rationale: NO_MATCH_RATIONALE.to_string(),
        },
        None => Resolution {
            skill_name: String::new(),
            command: NOOP_COMMAND.to_string(),
            rationale: NO_MATCH_RATIONALE.to_string(),
        },
    }
}
