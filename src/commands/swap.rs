//! `kubeswap swap <file>` — back up the active config, then replace it.
//!
//! # Steps (in order)
//!
//! | # | Step      | Failure variant                     |
//! |---|-----------|-------------------------------------|
//! | 0 | Check     | [`KubeswapError::AlreadyActive`]    |
//! | 1 | Mkdir     | [`KubeswapError::CreateBackupDir`]  |
//! | 2 | Backup    | [`KubeswapError::Backup`]           |
//! | 3 | Overwrite | [`KubeswapError::SetConfig`]        |
//!
//! The backup is always written before the active config is opened for
//! writing, so a failed backup never touches the active config.  There is no
//! rollback: if step 3 fails after step 2 succeeded, the backup stays and the
//! active config is left in whatever state the failed write produced.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::{
    backup::backup_file_name,
    error::{KubeswapError, Result},
    fsutil::{copy_file, ensure_dir, same_file},
    paths::KubePaths,
};

/// What a successful swap did, for the ui layer to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReport {
    /// The file that is now the active config.
    pub new_config: PathBuf,
    /// Where the previous active config was copied to.
    pub backup_path: PathBuf,
}

/// Swap `new_config` in as the active config, naming the backup after `now`.
pub fn run<Tz>(paths: &KubePaths, new_config: &Path, now: &DateTime<Tz>) -> Result<SwapReport>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if same_file(new_config, &paths.config) {
        return Err(KubeswapError::AlreadyActive {
            path: new_config.to_path_buf(),
        });
    }

    ensure_dir(&paths.backup_dir).map_err(|source| KubeswapError::CreateBackupDir {
        path: paths.backup_dir.clone(),
        source,
    })?;

    let backup_path = paths.backup_dir.join(backup_file_name(now));
    copy_file(&paths.config, &backup_path).map_err(|source| KubeswapError::Backup {
        from: paths.config.clone(),
        to: backup_path.clone(),
        source,
    })?;

    copy_file(new_config, &paths.config).map_err(|source| KubeswapError::SetConfig {
        from: new_config.to_path_buf(),
        to: paths.config.clone(),
        source,
    })?;

    Ok(SwapReport {
        new_config: new_config.to_path_buf(),
        backup_path,
    })
}
