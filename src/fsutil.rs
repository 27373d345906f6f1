//! Low-level filesystem helpers shared by the commands.

use std::{
    fs::{self, File},
    io,
    path::Path,
};

/// Copy the bytes of `src` into `dst`, creating or truncating `dst`.
///
/// Everything that can be checked on `src` is checked before `dst` is
/// touched, so a missing or unreadable source, a directory, or a source that
/// is `dst` itself (same path, symlink or hard link) leaves the destination
/// exactly as it was.  Both handles are closed when they go out of scope, on
/// success and on error.  Permissions, ownership and mtime are not carried
/// over; `dst` gets the default mode.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut source = File::open(src)?;
    if source.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", src.display()),
        ));
    }
    if same_file(src, dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} and {} are the same file", src.display(), dst.display()),
        ));
    }
    let mut dest = File::create(dst)?;
    io::copy(&mut source, &mut dest)
}

/// Whether `a` and `b` resolve to the same file, following symlinks.
///
/// A path that cannot be stat'ed is never the same as anything.
pub fn same_file(a: &Path, b: &Path) -> bool {
    let (Ok(ma), Ok(mb)) = (fs::metadata(a), fs::metadata(b)) else {
        return false;
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        ma.dev() == mb.dev() && ma.ino() == mb.ino()
    }
    #[cfg(not(unix))]
    {
        let _ = (ma, mb);
        matches!(
            (fs::canonicalize(a), fs::canonicalize(b)),
            (Ok(ca), Ok(cb)) if ca == cb
        )
    }
}

/// `mkdir -p`.  On Unix, directories it creates get mode `0700`: backups hold
/// cluster credentials and stay private to the user.  Existing directories
/// keep their mode.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path)
}
