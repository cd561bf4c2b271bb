//! src/cli.rs
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{HookPolicy, PrefixStyle};

/// 把分支名中的 issue key 自动加到 commit message 前面的 git commit-msg 钩子
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to the commit message file git passes to the commit-msg hook.
    pub message_file: Option<PathBuf>,

    /// Anything after the message file is accepted and ignored.
    #[arg(hide = true)]
    pub extra_args: Vec<OsString>,

    /// How the issue key is written in front of the message.
    #[arg(long, value_enum, default_value_t = PrefixStyle::Bracket)]
    pub prefix_style: PrefixStyle,

    /// Keep `#` comment lines instead of stripping them before tagging.
    #[arg(long)]
    pub keep_comments: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn policy(&self) -> HookPolicy {
        HookPolicy {
            prefix_style: self.prefix_style,
            strip_comments: !self.keep_comments,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 安装 commit-msg 钩子
    InstallHook,

    /// 查看 commit-msg 钩子的安装状态
    HookStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_path_uses_default_policy() {
        let cli = Cli::try_parse_from(["git-issue-key", ".git/COMMIT_EDITMSG"]).unwrap();
        assert_eq!(cli.message_file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        assert!(cli.command.is_none());
        assert_eq!(cli.policy(), HookPolicy::default());
    }

    #[test]
    fn test_policy_flags() {
        let cli = Cli::try_parse_from([
            "git-issue-key",
            "--prefix-style",
            "colon",
            "--keep-comments",
            "msg",
        ])
        .unwrap();
        let policy = cli.policy();
        assert_eq!(policy.prefix_style, PrefixStyle::Colon);
        assert!(!policy.strip_comments);
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["git-issue-key", "msg", "message", "HEAD"]).unwrap();
        assert_eq!(cli.message_file, Some(PathBuf::from("msg")));
        assert_eq!(cli.extra_args, vec![OsString::from("message"), OsString::from("HEAD")]);
        assert_eq!(cli.policy(), HookPolicy::default());
    }

    #[test]
    fn test_subcommand_without_path() {
        let cli = Cli::try_parse_from(["git-issue-key", "install-hook"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InstallHook)));
        assert!(cli.message_file.is_none());
    }

    #[test]
    fn test_no_arguments_parses_to_nothing() {
        let cli = Cli::try_parse_from(["git-issue-key"]).unwrap();
        assert!(cli.message_file.is_none());
        assert!(cli.command.is_none());
    }
}
