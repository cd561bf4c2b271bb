//! src/hook.rs

use crate::branch::{parse_branch_name, IssueKey};
use crate::config::HookPolicy;
use crate::errors::HookError;
use crate::git;
use crate::message::tag_message;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a commit-msg run did. Every variant ends the process with status 0.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// `git rev-parse` failed, e.g. outside a repository or before the first commit.
    NoBranch,
    BranchMismatch { branch: String },
    AlreadyTagged { key: IssueKey },
    Tagged { key: IssueKey },
}

#[derive(Debug, PartialEq)]
pub enum HookStatus {
    NotInstalled,
    InstalledByUs,
    InstalledByOther,
}

const HOOK_MARKER: &str = "git-issue-key";

const HOOK_CONTENT: &str = r#"#!/bin/sh
# commit-msg hook for git-issue-key
# Prepends the issue key found in the branch name to the commit message

git-issue-key "$1"
"#;

// --- commit-msg ---

pub async fn run_commit_msg(message_file: &Path, policy: &HookPolicy) -> Result<Outcome> {
    let branch = match git::get_current_branch().await {
        Ok(branch) => branch,
        Err(err) => {
            log::debug!("{err:#}");
            log::info!(
                "git rev-parse failed, HEAD is probably detached, passing along message without changing"
            );
            return Ok(Outcome::NoBranch);
        }
    };

    tag_message_file(message_file, &branch, policy).await
}

/// Applies the branch convention to `message_file` for a known branch name.
pub async fn tag_message_file(
    message_file: &Path,
    branch: &str,
    policy: &HookPolicy,
) -> Result<Outcome> {
    rewrite_message_file(message_file, message_file, branch, policy).await
}

/// Reads `source`, writes the tagged message to `target`. The hook always
/// passes the same path twice.
async fn rewrite_message_file(
    source: &Path,
    target: &Path,
    branch: &str,
    policy: &HookPolicy,
) -> Result<Outcome> {
    let Some(branch_ref) = parse_branch_name(branch) else {
        log::info!("Branch name '{branch}' does not match the pattern, message left unchanged");
        return Ok(Outcome::BranchMismatch {
            branch: branch.to_string(),
        });
    };
    log::debug!(
        "{} branch for {} ({})",
        branch_ref.category,
        branch_ref.key,
        branch_ref.summary
    );
    let key = branch_ref.key;

    let raw = fs::read(source)
        .await
        .map_err(|source_err| HookError::ReadMessage {
            path: source.to_path_buf(),
            source: source_err,
        })?;

    let Some(tagged) = tag_message(&raw, &key, policy) else {
        log::info!("Commit message already contains issue key {key}");
        return Ok(Outcome::AlreadyTagged { key });
    };

    // 原地覆盖写入，保留文件原有权限
    fs::write(target, tagged)
        .await
        .map_err(|source_err| HookError::WriteMessage {
            path: target.to_path_buf(),
            source: source_err,
        })?;

    log::info!("Prepended issue key {key} to commit message");
    Ok(Outcome::Tagged { key })
}

// --- install-hook ---

async fn get_hook_path() -> Result<PathBuf> {
    let hooks_dir = git::get_hooks_dir().await?;
    Ok(hooks_dir.join("commit-msg"))
}

pub async fn check_hook_status() -> Result<HookStatus> {
    let hook_path = get_hook_path().await?;
    hook_status_at(&hook_path).await
}

async fn hook_status_at(hook_path: &Path) -> Result<HookStatus> {
    if !hook_path.exists() {
        return Ok(HookStatus::NotInstalled);
    }

    let content = fs::read_to_string(hook_path)
        .await
        .context("Failed to read existing commit-msg hook")?;

    if content.contains(HOOK_MARKER) {
        Ok(HookStatus::InstalledByUs)
    } else {
        Ok(HookStatus::InstalledByOther)
    }
}

pub async fn install_commit_msg_hook() -> Result<HookStatus> {
    let hook_path = get_hook_path().await?;
    install_hook_at(&hook_path).await
}

/// Installs or extends the hook at `hook_path`, returning the status found
/// before installing.
async fn install_hook_at(hook_path: &Path) -> Result<HookStatus> {
    let hooks_dir = hook_path
        .parent()
        .context("Failed to get hooks directory from path")?;

    if !hooks_dir.exists() {
        fs::create_dir_all(hooks_dir)
            .await
            .context("Failed to create hooks directory")?;
    }

    let status = hook_status_at(hook_path).await?;
    match status {
        HookStatus::InstalledByUs => return Ok(status),
        HookStatus::InstalledByOther => {
            // 追加命令到现有钩子
            let mut new_content = fs::read_to_string(hook_path).await?;
            if !new_content.ends_with('\n') {
                new_content.push('\n');
            }
            new_content.push_str("\n# Added by git-issue-key\ngit-issue-key \"$1\"\n");
            fs::write(hook_path, new_content)
                .await
                .context("Failed to append to commit-msg hook")?;
        }
        HookStatus::NotInstalled => {
            fs::write(hook_path, HOOK_CONTENT)
                .await
                .context("Failed to write commit-msg hook")?;
        }
    }

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(hook_path).await?.permissions();
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)
            .await
            .context("Failed to set hook permissions")?;
    }

    Ok(status)
}
