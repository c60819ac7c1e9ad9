//! Skill Catalog Loader
//!
//! Walks a catalog root of `category/document.md` files and builds the
//! in-memory skill list. One bad document never aborts the load; it is
//! logged and skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::commands::extract_commands;
use crate::catalog::format::parse_document;
use crate::types::Skill;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load every parseable skill document under `root`.
///
/// The tree is one level deep: immediate subdirectories are categories and
/// each `.md` file inside them is a candidate document. A missing root is
/// a valid (empty) catalog, not an error.
///
/// Resulting order is category order then filename order, exactly as
/// `fs::read_dir` yields them (platform directory order, not sorted).
pub fn load_catalog(root: &Path, prefixes: &[String]) -> Vec<Skill> {
    if !root.is_dir() {
        warn!(
            "skill catalog directory {} does not exist; starting with an empty catalog",
            root.display()
        );
        return Vec::new();
    }

    let mut skills: Vec<Skill> = Vec::new();

    let categories = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to enumerate catalog root {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    for category in categories.flatten() {
        let category_path = category.path();
        if !category_path.is_dir() {
            continue;
        }

        let documents = match fs::read_dir(&category_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "failed to enumerate category {}: {}",
                    category_path.display(),
                    e
                );
                continue;
            }
        };

        for document in documents.flatten() {
            let path = document.path();

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" {
                continue;
            }

            match load_skill_document(&path, prefixes) {
                Ok(skill) => {
                    debug!(
                        "loaded skill '{}' with {} command(s) from {}",
                        skill.metadata.name,
                        skill.commands.len(),
                        path.display()
                    );
                    skills.push(skill);
                }
                Err(e) => {
                    warn!("skipping skill document {}: {}", path.display(), e);
                }
            }
        }
    }

    skills
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Read, parse, and command-scan a single document into a `Skill`.
fn load_skill_document(
    path: &Path,
    prefixes: &[String],
) -> Result<Skill, crate::error::DocumentError> {
    let content = fs::read_to_string(path)?;
    let (mut metadata, body) = parse_document(&content)?;

    // A nameless skill cannot be resolved against; fall back to the file
    // stem like `vault/obsidian.md` -> `obsidian`.
    if metadata.name.is_empty() {
        metadata.name = name_from_path(path);
    }

    let commands = extract_commands(&body, prefixes);

    Ok(Skill {
        path: path.to_string_lossy().to_string(),
        metadata,
        content: body,
        commands,
    })
}

/// Derive a skill name from the file stem.
fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn prefixes() -> Vec<String> {
        vec!["obsidian-cli".to_string(), "obsidian://".to_string()]
    }

    /// Create a unique throwaway catalog root for one test.
    fn scratch_root() -> PathBuf {
        let root = std::env::temp_dir().join(format!("skillrouter-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn write_doc(root: &Path, category: &str, file: &str, content: &str) {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    const OBSIDIAN_DOC: &str = "---\nname: obsidian\ndescription: Notes\n---\n\nSearch with `obsidian-cli search \"query\"` and never `echo hi`.\n";

    #[test]
    fn test_missing_root_yields_empty_catalog() {
        let ghost = std::env::temp_dir().join(format!("skillrouter-ghost-{}", Uuid::new_v4()));
        assert!(load_catalog(&ghost, &prefixes()).is_empty());
    }

    #[test]
    fn test_load_builds_skills_with_filtered_commands() {
        let root = scratch_root();
        write_doc(&root, "notes", "obsidian.md", OBSIDIAN_DOC);

        let skills = load_catalog(&root, &prefixes());
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].metadata.name, "obsidian");
        assert_eq!(skills[0].commands, vec!["obsidian-cli search \"query\""]);
        assert!(!skills[0].content.contains("---"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_bad_document_is_skipped_not_fatal() {
        let root = scratch_root();
        write_doc(&root, "notes", "obsidian.md", OBSIDIAN_DOC);
        write_doc(&root, "notes", "broken.md", "no front block at all");

        let skills = load_catalog(&root, &prefixes());
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].metadata.name, "obsidian");

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_non_md_files_and_root_level_files_ignored() {
        let root = scratch_root();
        write_doc(&root, "notes", "obsidian.md", OBSIDIAN_DOC);
        write_doc(&root, "notes", "notes.txt", OBSIDIAN_DOC);
        fs::write(root.join("stray.md"), OBSIDIAN_DOC).unwrap();

        let skills = load_catalog(&root, &prefixes());
        assert_eq!(skills.len(), 1);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_nameless_document_falls_back_to_file_stem() {
        let root = scratch_root();
        write_doc(
            &root,
            "notes",
            "daily-notes.md",
            "---\ndescription: Unnamed\n---\nbody",
        );

        let skills = load_catalog(&root, &prefixes());
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].metadata.name, "daily-notes");

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_loading_twice_is_idempotent() {
        let root = scratch_root();
        write_doc(&root, "notes", "obsidian.md", OBSIDIAN_DOC);

        let first = load_catalog(&root, &prefixes());
        let second = load_catalog(&root, &prefixes());
        assert_eq!(first, second);

        fs::remove_dir_all(&root).unwrap();
    }
}
