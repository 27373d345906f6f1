//! `kubeswap` — swap the active kubectl config, keeping timestamped backups.
//!
//! # Usage
//!
//! ```text
//! kubeswap swap <file>     # back up ~/.kube/config, then replace it with <file>
//! kubeswap list            # print backup names from ~/.kube/kubeswap_backups
//! kubeswap --print-paths   # show the paths kubeswap operates on
//! ```
//!
//! # Module layout
//!
//! | Module               | Responsibility                                  |
//! |----------------------|-------------------------------------------------|
//! | [`cli`]              | Argument types parsed by clap                   |
//! | [`paths`]            | `KubePaths` derived from the home directory     |
//! | [`error`]            | `KubeswapError` taxonomy                        |
//! | [`fsutil`]           | File copy and directory creation                |
//! | [`backup`]           | Backup file naming and filtering                |
//! | [`commands::swap`]   | `kubeswap swap`                                 |
//! | [`commands::list`]   | `kubeswap list`                                 |
//! | [`ui`]               | Terminal output                                 |

mod backup;
mod cli;
mod commands;
mod error;
mod fsutil;
mod paths;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Subcommand};
use paths::KubePaths;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::eprint_error(&err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = KubePaths::discover()?;

    if cli.print_paths {
        ui::print_paths(&paths)?;
        return Ok(());
    }

    match &cli.command {
        // ── kubeswap swap <file> ─────────────────────────────────────────────
        Some(Subcommand::Swap { file }) => {
            let report = commands::swap::run(&paths, file, &Local::now())
                .context("Error swapping config")?;
            ui::print_swap_report(&report)?;
        },

        // ── kubeswap list ────────────────────────────────────────────────────
        Some(Subcommand::List) => {
            let names = commands::list::run(&paths).context("Error listing configs")?;
            ui::print_backup_list(&names)?;
        },

        // clap's `arg_required_else_help` keeps this unreachable in practice.
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        },
    }

    Ok(())
}
