//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  Argument-count errors, unknown subcommands and a
//! missing subcommand are all rejected by clap before any filesystem access.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name    = "kubeswap",
    about   = "Swap kubectl config files",
    long_about = "kubeswap is a CLI tool to manage and swap between different kubectl config \
                  files.\n\nThe active config (~/.kube/config) is copied into \
                  ~/.kube/kubeswap_backups/ before it is replaced.",
    version,
    arg_required_else_help = true,
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Subcommand>,

    /// Print the active config and backup directory paths, then exit.
    ///
    /// Nothing is read or written.
    #[arg(long)]
    pub print_paths: bool,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub enum Subcommand {
    /// Swap to a new kubectl config file.
    ///
    /// The current ~/.kube/config is first copied to
    /// ~/.kube/kubeswap_backups/config_backup_<YYYYMMDD_HHMMSS>, then
    /// overwritten with the contents of FILE.
    Swap {
        /// Replacement kubectl config.
        file: PathBuf,
    },

    /// List all backed up kubectl config files.
    ///
    /// Names are printed in directory order, not sorted.
    List,
}
