//! Reasoning Service Client
//!
//! Wraps an OpenAI-compatible /v1/chat/completions endpoint. The service
//! receives the catalog digest as system instructions and the user prompt,
//! and is expected to reply with a single JSON `Resolution` object.
//! Every failure mode here surfaces as an error; the intent resolver maps
//! all of them to the rule-based fallback.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::resolver::render::build_system_instructions;
use crate::types::{ReasoningClient, Resolution, Skill};

/// Reasoning client for OpenAI-compatible chat completions.
pub struct HttpReasoningClient {
    api_url: String,
    api_key: String,
    model: String,
    http: Client,
}

impl HttpReasoningClient {
    /// Create a new reasoning client.
    ///
    /// * `api_url` - Base URL for the service (e.g. `https://api.openai.com`).
    /// * `api_key` - Bearer token.
    /// * `model` - Model identifier (e.g. `gpt-4o`).
    /// * `timeout_secs` - Hard per-request timeout; expiry counts as any
    ///   other failure.
    pub fn new(api_url: String, api_key: String, model: String, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build reasoning HTTP client")?;

        Ok(Self {
            api_url,
            api_key,
            model,
            http,
        })
    }
}

#[async_trait]
impl ReasoningClient for HttpReasoningClient {
    /// Ask the service to pick a skill and command for `prompt`.
    async fn reason(&self, prompt: &str, catalog_digest: &str) -> Result<Resolution> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": catalog_digest },
                { "role": "user", "content": prompt },
            ],
            "stream": false,
        });

        let url = format!("{}/v1/chat/completions", self.api_url);
        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Reasoning request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!("reasoning service returned {}: {}", status.as_u16(), text);
            anyhow::bail!("Reasoning error: {}", status.as_u16());
        }

        let data: Value = resp
            .json()
            .await
            .context("Failed to parse reasoning response")?;

        let content = data["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| anyhow::anyhow!("No completion content in reasoning response"))?;

        parse_resolution_reply(content)
    }
}

/// Render the system instructions for a catalog. Thin convenience over
/// the digest builder so callers hand the resolver a ready-made string.
pub fn catalog_digest(catalog: &[Skill]) -> String {
    build_system_instructions(catalog)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Parse the reply content as a `Resolution`. Tolerates a Markdown code
/// fence around the JSON; anything else that does not deserialize into
/// the expected shape, or carries an empty command, is unusable.
fn parse_resolution_reply(content: &str) -> Result<Resolution> {
    let stripped = strip_code_fence(content.trim());

    let resolution: Resolution = serde_json::from_str(stripped)
        .context("Reasoning reply is not a valid resolution object")?;

    if resolution.command.is_empty() {
        anyhow::bail!("Reasoning reply carried an empty command");
    }

    Ok(resolution)
}

/// Strip a surrounding triple-backtick fence (with optional language tag).
fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return s;
    };

    // Drop the language tag line, if any.
    match rest.find('\n') {
        Some(idx) => rest[idx + 1..].trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json_reply() {
        let reply = r#"{"skillName": "obsidian", "command": "obsidian-cli open", "rationale": "vault request"}"#;
        let resolution = parse_resolution_reply(reply).unwrap();
        assert_eq!(resolution.skill_name, "obsidian");
        assert_eq!(resolution.command, "obsidian-cli open");
        assert_eq!(resolution.rationale, "vault request");
    }

    #[test]
    fn test_parse_fenced_json_reply() {
        let reply = "```json\n{\"skillName\": \"obsidian\", \"command\": \"obsidian-cli open\", \"rationale\": \"r\"}\n```";
        let resolution = parse_resolution_reply(reply).unwrap();
        assert_eq!(resolution.skill_name, "obsidian");
    }

    #[test]
    fn test_garbage_reply_is_unusable() {
        assert!(parse_resolution_reply("I think you should open your vault.").is_err());
    }

    #[test]
    fn test_wrong_shape_is_unusable() {
        assert!(parse_resolution_reply(r#"{"skill": "obsidian"}"#).is_err());
    }

    #[test]
    fn test_empty_command_is_unusable() {
        let reply = r#"{"skillName": "obsidian", "command": "", "rationale": "r"}"#;
        assert!(parse_resolution_reply(reply).is_err());
    }
}
