//! Intent Resolver
//!
//! Turns a free-text prompt plus the loaded catalog into a single
//! `Resolution`. The external reasoning capability is consulted first;
//! any failure there routes to the rule-based fallback matcher. This
//! operation never fails: a low-confidence default beats an error.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::resolver::fallback::fallback_match;
use crate::resolver::reasoning::catalog_digest;
use crate::types::{ReasoningClient, Resolution, Skill};

/// Resolve `prompt` to a skill and command.
///
/// With no reasoning client configured this is exactly `fallback_match`.
/// With one configured, a single attempt is made (no retry within one
/// call); the reply's `skillName` is trusted as-is, with no catalog
/// cross-check.
pub async fn resolve(
    prompt: &str,
    catalog: &[Skill],
    reasoning: Option<&dyn ReasoningClient>,
) -> Resolution {
    let request_id = Uuid::new_v4();
    debug!(%request_id, prompt, "resolving intent");

    if let Some(client) = reasoning {
        let digest = catalog_digest(catalog);
        match client.reason(prompt, &digest).await {
            Ok(resolution) => {
                info!(
                    %request_id,
                    skill = %resolution.skill_name,
                    command = %resolution.command,
                    "reasoning service resolved intent"
                );
                return resolution;
            }
            Err(e) => {
                warn!(
                    %request_id,
                    "reasoning service unavailable ({}); using rule-based fallback",
                    e
                );
            }
        }
    }

    let resolution = fallback_match(prompt, catalog);
    info!(
        %request_id,
        skill = %resolution.skill_name,
        command = %resolution.command,
        "fallback matcher resolved intent"
    );
    resolution
}
