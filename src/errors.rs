//! src/errors.rs

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal failures of a hook run. Everything else ends in an `Outcome`.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("No commit message file provided (usage: git-issue-key <commit-message-file>)")]
    MissingMessageFile,

    #[error("Failed to read commit message file {}", .path.display())]
    ReadMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write commit message file {}", .path.display())]
    WriteMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git {} failed with status {status}:\n{stderr}", .args.join(" "))]
    GitCommand {
        args: Vec<String>,
        status: ExitStatus,
        stderr: String,
    },
}
