//! Skill Catalog
//!
//! Document parsing, command extraction, and directory-tree loading for
//! the skill library.

pub mod commands;
pub mod format;
pub mod loader;
