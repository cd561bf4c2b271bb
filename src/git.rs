//! src/git.rs

use crate::errors::HookError;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

// --- Public API ---

pub async fn run_git_command(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("Failed to execute git command")?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout).context("Failed to parse git command output")?)
    } else {
        let stderr = String::from_utf8(output.stderr)
            .unwrap_or_else(|_| "Could not read stderr".to_string());
        Err(HookError::GitCommand {
            args: args.iter().map(|s| s.to_string()).collect(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        }
        .into())
    }
}

/// Abbreviated name of the checked-out ref. Detached HEAD yields `"HEAD"`.
pub async fn get_current_branch() -> Result<String> {
    let output = run_git_command(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
    Ok(output.trim().to_string())
}

/// Hooks directory git will actually run from; honours `core.hooksPath`.
pub async fn get_hooks_dir() -> Result<PathBuf> {
    let output = run_git_command(&["rev-parse", "--git-path", "hooks"])
        .await
        .context("Could not locate hooks directory. Are you in a git repo?")?;
    Ok(PathBuf::from(output.trim()))
}
