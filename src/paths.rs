//! Filesystem locations kubeswap operates on.
//!
//! The two paths are derived from the invoking user's home directory and are
//! not configurable:
//!
//! | Path                                | Meaning                |
//! |-------------------------------------|------------------------|
//! | `<home>/.kube/config`               | active kubectl config  |
//! | `<home>/.kube/kubeswap_backups/`    | backup directory       |
//!
//! A [`KubePaths`] value is built once in `main` and passed by reference into
//! every command, so tests can point the whole tool at a temporary home.

use std::path::{Path, PathBuf};

use crate::error::{KubeswapError, Result};

/// Directory under the home directory that kubectl reads from.
pub const KUBE_DIR: &str = ".kube";

/// File name of the active kubectl config inside [`KUBE_DIR`].
pub const CONFIG_FILE: &str = "config";

/// Name of the backup directory inside [`KUBE_DIR`].
pub const BACKUP_DIR: &str = "kubeswap_backups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubePaths {
    /// The active config file, overwritten on every swap.
    pub config: PathBuf,
    /// Where timestamped snapshots of the active config are written.
    pub backup_dir: PathBuf,
}

impl KubePaths {
    /// Derive both paths from `home`.
    pub fn from_home(home: &Path) -> Self {
        let kube = home.join(KUBE_DIR);
        Self {
            config: kube.join(CONFIG_FILE),
            backup_dir: kube.join(BACKUP_DIR),
        }
    }

    /// Resolve the current user's home directory and derive the paths from it.
    ///
    /// Returns [`KubeswapError::HomeDirUnavailable`] instead of exiting, so the
    /// caller decides how to report it.
    pub fn discover() -> Result<Self> {
        dirs::home_dir()
            .map(|home| Self::from_home(&home))
            .ok_or(KubeswapError::HomeDirUnavailable)
    }
}
