//! src/config.rs

use clap::ValueEnum;

use crate::branch::IssueKey;

/// How the issue key is written in front of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrefixStyle {
    /// `[ABC-123] message`
    #[default]
    Bracket,
    /// `ABC-123: message`
    Colon,
}

impl PrefixStyle {
    pub fn render(&self, key: &IssueKey) -> String {
        match self {
            PrefixStyle::Bracket => format!("[{key}] "),
            PrefixStyle::Colon => format!("{key}: "),
        }
    }
}

/// The policy in force for one hook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookPolicy {
    pub prefix_style: PrefixStyle,
    /// Drop `#` lines before checking for the key and prefixing.
    pub strip_comments: bool,
}

impl Default for HookPolicy {
    fn default() -> Self {
        Self {
            prefix_style: PrefixStyle::Bracket,
            strip_comments: true,
        }
    }
}
