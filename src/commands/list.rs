//! `kubeswap list` — names of existing backups.
//!
//! Names are returned in the order the OS yields directory entries.  They are
//! not sorted, and the order may change between runs if the directory is
//! modified.  A backup directory that does not exist yet is an error, not an
//! empty list.

use crate::{
    backup::is_backup_name,
    error::{KubeswapError, Result},
    paths::KubePaths,
};

/// Names of every entry in the backup directory that carries the backup
/// prefix.  Everything else is skipped.
pub fn run(paths: &KubePaths) -> Result<Vec<String>> {
    let read_err = |source| KubeswapError::ReadBackupDir {
        path: paths.backup_dir.clone(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&paths.backup_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_backup_name(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn home() -> (tempfile::TempDir, KubePaths) {
        let home = tempfile::tempdir().unwrap();
        let paths = KubePaths::from_home(home.path());
        (home, paths)
    }

    #[test]
    fn missing_backup_dir_is_an_error() {
        let (_home, paths) = home();
        let err = run(&paths).unwrap_err();
        assert!(matches!(err, KubeswapError::ReadBackupDir { .. }));
    }

    #[test]
    fn empty_backup_dir_lists_nothing() {
        let (_home, paths) = home();
        fs::create_dir_all(&paths.backup_dir).unwrap();
        assert!(run(&paths).unwrap().is_empty());
    }

    #[test]
    fn only_prefixed_entries_are_listed() {
        let (_home, paths) = home();
        fs::create_dir_all(&paths.backup_dir).unwrap();
        fs::write(paths.backup_dir.join("config_backup_20240101_000000"), "A").unwrap();
        fs::write(paths.backup_dir.join("config_backup_20240102_000000"), "B").unwrap();
        fs::write(paths.backup_dir.join("notes.txt"), "").unwrap();
        fs::create_dir(paths.backup_dir.join("archive")).unwrap();

        let mut names = run(&paths).unwrap();
        names.sort();

        assert_eq!(names, vec![
            "config_backup_20240101_000000",
            "config_backup_20240102_000000",
        ]);
    }

    #[test]
    fn backup_dir_that_is_a_file_is_an_error() {
        let (_home, paths) = home();
        fs::create_dir_all(paths.backup_dir.parent().unwrap()).unwrap();
        fs::write(&paths.backup_dir, "").unwrap();
        assert!(run(&paths).is_err());
    }
}
