//! Catalog Digest Rendering
//!
//! Builds the compact textual view of the catalog that rides along with
//! every reasoning request, and the system instructions around it.

use crate::types::Skill;

/// Commands shown per skill in the digest. Keeps the request small for
/// large catalogs.
const MAX_EXAMPLE_COMMANDS: usize = 3;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render one line per skill: name, description, and up to three example
/// commands.
pub fn render_catalog(catalog: &[Skill]) -> String {
    let mut sections: Vec<String> = Vec::new();

    for skill in catalog {
        let mut entry = format!("- {}: {}", skill.metadata.name, skill.metadata.description);

        if !skill.commands.is_empty() {
            let examples: Vec<&str> = skill
                .commands
                .iter()
                .take(MAX_EXAMPLE_COMMANDS)
                .map(|c| c.as_str())
                .collect();
            entry.push_str(&format!("\n  commands: {}", examples.join(" | ")));
        }

        sections.push(entry);
    }

    sections.join("\n")
}

/// The full system instruction block for the reasoning service: task
/// description, the rendered catalog, and the required reply shape.
pub fn build_system_instructions(catalog: &[Skill]) -> String {
    format!(
        "You route user requests to skills. Available skills:\n\n{}\n\n\
         Reply with a single JSON object and nothing else:\n\
         {{\"skillName\": \"<skill>\", \"command\": \"<command to run>\", \"rationale\": \"<why>\"}}",
        render_catalog(catalog)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Skill, SkillMetadata};

    fn skill(name: &str, description: &str, commands: &[&str]) -> Skill {
        Skill {
            path: format!("/skills/notes/{}.md", name),
            metadata: SkillMetadata {
                name: name.to_string(),
                description: description.to_string(),
                homepage: String::new(),
                metadata: serde_json::Map::new(),
            },
            content: String::new(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_lists_name_and_description() {
        let catalog = vec![skill("obsidian", "Notes", &["obsidian-cli open"])];
        let digest = render_catalog(&catalog);
        assert!(digest.contains("- obsidian: Notes"));
        assert!(digest.contains("commands: obsidian-cli open"));
    }

    #[test]
    fn test_render_caps_examples_at_three() {
        let catalog = vec![skill(
            "obsidian",
            "Notes",
            &["a", "b", "c", "obsidian-cli never-shown"],
        )];
        let digest = render_catalog(&catalog);
        assert!(digest.contains("a | b | c"));
        assert!(!digest.contains("never-shown"));
    }

    #[test]
    fn test_render_skips_commands_line_when_empty() {
        let catalog = vec![skill("obsidian", "Notes", &[])];
        assert_eq!(render_catalog(&catalog), "- obsidian: Notes");
    }

    #[test]
    fn test_system_instructions_embed_digest_and_shape() {
        let catalog = vec![skill("obsidian", "Notes", &[])];
        let instructions = build_system_instructions(&catalog);
        assert!(instructions.contains("- obsidian: Notes"));
        assert!(instructions.contains("skillName"));
        assert!(instructions.contains("rationale"));
    }
}
