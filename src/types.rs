//! Skillrouter - Type Definitions
//!
//! All shared types for the skill routing runtime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ─── Skills ──────────────────────────────────────────────────────

/// Typed metadata extracted from a skill document's front block.
///
/// Immutable once parsed. `name` is the resolution key and must be unique
/// within a catalog; when the front block omits it, the loader substitutes
/// the document's file stem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
    pub homepage: String,
    /// Open key-value mapping parsed from the embedded `metadata` JSON
    /// literal. Absent or malformed literal => empty mapping.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl SkillMetadata {
    /// An all-empty record, the starting point for the front-block parser.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            homepage: String::new(),
            metadata: serde_json::Map::new(),
        }
    }
}

/// A fully resolved catalog entry: metadata, documentation body, and the
/// allow-listed commands found in that body.
///
/// Constructed only by the catalog loader; a `Skill` either parses
/// completely or is not created at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Origin path of the source document, unique within a catalog.
    pub path: String,
    pub metadata: SkillMetadata,
    /// Document body with the front block stripped.
    pub content: String,
    /// Allow-listed command strings in order of first appearance.
    /// Every entry passed the namespace prefix filter at construction.
    pub commands: Vec<String>,
}

// ─── Resolution ──────────────────────────────────────────────────

/// The outcome of intent resolution: a chosen skill, a concrete command,
/// and a free-text rationale.
///
/// `skill_name` is expected to match a catalog entry but is not enforced
/// to when it comes from the reasoning service (the reply is trusted
/// verbatim). Produced fresh per request, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub skill_name: String,
    pub command: String,
    pub rationale: String,
}

// ─── Configuration ───────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Root of the skill catalog tree (category dirs -> .md documents).
    pub skills_dir: String,
    pub reasoning_api_url: String,
    pub reasoning_api_key: String,
    pub reasoning_model: String,
    /// Hard timeout for the reasoning HTTP call, in seconds. Expiry is
    /// treated like any other reasoning failure and routes to the
    /// fallback matcher.
    pub request_timeout_secs: u64,
    /// Namespace prefixes a backtick span must start with to be kept as
    /// a command.
    pub command_prefixes: Vec<String>,
}

/// Returns the default `RouterConfig`. Fields with no sensible default
/// (the API key) are left empty so callers can override them.
pub fn default_config() -> RouterConfig {
    RouterConfig {
        skills_dir: "~/.skillrouter/skills".to_string(),
        reasoning_api_url: "https://api.openai.com".to_string(),
        reasoning_api_key: String::new(),
        reasoning_model: "gpt-4o".to_string(),
        request_timeout_secs: 30,
        command_prefixes: vec!["obsidian-cli".to_string(), "obsidian://".to_string()],
    }
}

// ─── Execution ───────────────────────────────────────────────────

/// Captured output of a single executed command.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

// ─── Reasoning Client Interface ──────────────────────────────────

/// External reasoning capability: given a user prompt and a rendered
/// catalog digest, pick a skill and a command.
///
/// Implementations may fail for any reason (network, status, unusable
/// reply shape); the intent resolver treats every failure the same way
/// and falls back to the rule-based matcher.
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    async fn reason(&self, prompt: &str, catalog_digest: &str) -> anyhow::Result<Resolution>;
}
