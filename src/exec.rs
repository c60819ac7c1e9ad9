//! Execution Boundary
//!
//! Hands a resolved command string to the shell and captures the result.
//! The command is opaque here: no quoting, validation, or shell-semantics
//! assumptions beyond `sh -c`.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::ExecOutcome;

/// Run `command` via `sh -c` and capture its output.
pub fn run_command(command: &str) -> Result<ExecOutcome> {
    debug!(command, "executing resolved command");

    let output = Command::new("sh")
        .args(["-c", command])
        .output()
        .context("Failed to spawn shell for resolved command")?;

    Ok(ExecOutcome {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}
