//! Error taxonomy.
//!
//! Every failure kubeswap can hit is one of the variants below.  Variants
//! that come from I/O keep the underlying [`std::io::Error`] as their
//! `source`, so the top level can print the whole cause chain.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KubeswapError {
    /// `$HOME` (or the platform equivalent) could not be resolved.
    #[error("could not determine the user's home directory")]
    HomeDirUnavailable,

    #[error("failed to create backup directory {}", path.display())]
    CreateBackupDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to backup current config {} to {}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set new config {} at {}", from.display(), to.display())]
    SetConfig {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The replacement resolves to the active config itself.
    #[error("{} is already the active config", path.display())]
    AlreadyActive { path: PathBuf },

    #[error("failed to read backup directory {}", path.display())]
    ReadBackupDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = KubeswapError> = std::result::Result<T, E>;
