//! Backup file naming.
//!
//! A backup is named `config_backup_<YYYYMMDD_HHMMSS>` using local time at
//! second precision.  Two swaps inside the same second therefore share a
//! name, and the later one overwrites the earlier backup.  Existing backup
//! sets rely on this exact format, so it is kept as is.

use chrono::{DateTime, TimeZone};

/// Every backup file name starts with this prefix.  `list` filters on it.
pub const BACKUP_PREFIX: &str = "config_backup_";

/// `strftime` format of the timestamp suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Backup file name for a swap performed at `now`.
pub fn backup_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{BACKUP_PREFIX}{}", now.format(TIMESTAMP_FORMAT))
}

/// Whether a directory entry name looks like a kubeswap backup.
pub fn is_backup_name(name: &str) -> bool {
    name.starts_with(BACKUP_PREFIX)
}
