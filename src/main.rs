//! src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

mod branch;
mod cli;
mod config;
mod errors;
mod git;
mod hook;
mod message;

use cli::{Cli, Commands};
use errors::HookError;
use hook::HookStatus;

fn init_logger(quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    // RUST_LOG 可以覆盖默认级别
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.quiet);

    match cli.command {
        Some(Commands::InstallHook) => {
            let previous = hook::install_commit_msg_hook()
                .await
                .context("Failed to install commit-msg hook.")?;
            match previous {
                HookStatus::InstalledByUs => {
                    println!("{}", "✅ commit-msg 钩子已包含 git-issue-key 命令。".green());
                }
                HookStatus::InstalledByOther => {
                    println!(
                        "{}",
                        "✅ 已将 git-issue-key 命令添加到现有的 commit-msg 钩子中。".green()
                    );
                }
                HookStatus::NotInstalled => {
                    println!("{}", "✅ commit-msg 钩子安装成功。".green());
                }
            }
        }
        Some(Commands::HookStatus) => {
            let status = hook::check_hook_status()
                .await
                .context("Failed to inspect commit-msg hook.")?;
            match status {
                HookStatus::InstalledByUs => println!("{}", "installed".green()),
                HookStatus::InstalledByOther => {
                    println!("{}", "installed by another tool".yellow())
                }
                HookStatus::NotInstalled => println!("{}", "not installed".red()),
            }
        }
        None => {
            let policy = cli.policy();
            if !cli.extra_args.is_empty() {
                log::debug!("Ignoring extra arguments: {:?}", cli.extra_args);
            }
            let message_file = cli.message_file.ok_or(HookError::MissingMessageFile)?;
            let outcome = hook::run_commit_msg(&message_file, &policy).await?;
            log::debug!("commit-msg finished: {outcome:?}");
        }
    }

    Ok(())
}
