//! Terminal output.
//!
//! This is the only module that writes to the terminal.  Command handlers
//! return plain data ([`SwapReport`], a list of names) and `main` hands it to
//! one of the functions below.  Every renderer takes a `&mut dyn Write` so
//! tests can capture the output in a `Vec<u8>`.
//!
//! `list` output is intentionally unstyled so it can be piped into other
//! tools.

use std::io::{self, Write};

use console::style;

use crate::{commands::swap::SwapReport, paths::KubePaths};

/// Header printed above the backup names by `kubeswap list`.
pub const LIST_HEADER: &str = "Available kubectl config backups:";

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Green ✓  — printed when an operation succeeds.
fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}
/// Red ✗    — printed in front of an error.
fn icon_err() -> console::StyledObject<&'static str> {
    style("✗").red().bold()
}

// ─── Renderers ───────────────────────────────────────────────────────────────

/// Report a successful swap: the config now in place, and where the old one
/// went.
pub fn write_swap_report(out: &mut dyn Write, report: &SwapReport) -> io::Result<()> {
    writeln!(
        out,
        "{} Successfully swapped to new config: {}",
        icon_ok(),
        report.new_config.display()
    )?;
    writeln!(
        out,
        "  Old config backed up to: {}",
        report.backup_path.display()
    )
}

/// Header line, then one backup name per line, in the order given.  The
/// header is printed even when `names` is empty.
pub fn write_backup_list(out: &mut dyn Write, names: &[String]) -> io::Result<()> {
    writeln!(out, "{LIST_HEADER}")?;
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Output of `--print-paths`.
pub fn write_paths(out: &mut dyn Write, paths: &KubePaths) -> io::Result<()> {
    writeln!(out, "config:     {}", paths.config.display())?;
    writeln!(out, "backup_dir: {}", paths.backup_dir.display())
}

/// Print `err` and its full cause chain.
///
/// ```text
/// ✗ Error: Error swapping config
///     caused by: failed to backup current config /home/u/.kube/config to …
///     caused by: No such file or directory (os error 2)
/// ```
pub fn write_error(out: &mut dyn Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        icon_err(),
        style("Error:").red().bold(),
        err
    )?;
    for cause in err.chain().skip(1) {
        writeln!(out, "    {} {cause}", style("caused by:").dim())?;
    }
    Ok(())
}

// ─── Convenience wrappers for main ───────────────────────────────────────────

pub fn print_swap_report(report: &SwapReport) -> io::Result<()> {
    write_swap_report(&mut io::stdout().lock(), report)
}

pub fn print_backup_list(names: &[String]) -> io::Result<()> {
    write_backup_list(&mut io::stdout().lock(), names)
}

pub fn print_paths(paths: &KubePaths) -> io::Result<()> {
    write_paths(&mut io::stdout().lock(), paths)
}

/// Errors go to stderr.  A failure to write the error itself is ignored;
/// there is nowhere left to report it.
pub fn eprint_error(err: &anyhow::Error) {
    let _ = write_error(&mut io::stderr().lock(), err);
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use anyhow::Context;

    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn backup_list_keeps_given_order() {
        let names = vec![
            "config_backup_20240102_000000".to_string(),
            "config_backup_20240101_000000".to_string(),
        ];
        let text = render(|out| write_backup_list(out, &names));
        insta::assert_snapshot!(text.trim_end(), @r"
        Available kubectl config backups:
        config_backup_20240102_000000
        config_backup_20240101_000000
        ");
    }

    #[test]
    fn empty_backup_list_prints_only_header() {
        let text = render(|out| write_backup_list(out, &[]));
        assert_eq!(text, format!("{LIST_HEADER}\n"));
    }

    #[test]
    fn swap_report_mentions_both_paths() {
        let report = SwapReport {
            new_config: "/tmp/new".into(),
            backup_path: "/home/u/.kube/kubeswap_backups/config_backup_20240101_000000".into(),
        };
        let text = render(|out| write_swap_report(out, &report));
        assert!(text.contains("Successfully swapped to new config: /tmp/new"));
        assert!(text.contains(
            "Old config backed up to: /home/u/.kube/kubeswap_backups/config_backup_20240101_000000"
        ));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn paths_output() {
        let paths = KubePaths::from_home(Path::new("/home/u"));
        let text = render(|out| write_paths(out, &paths));
        insta::assert_snapshot!(text.trim_end(), @r"
        config:     /home/u/.kube/config
        backup_dir: /home/u/.kube/kubeswap_backups
        ");
    }

    #[test]
    fn error_output_includes_cause_chain() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .context("inner step")
            .context("Error listing configs")
            .unwrap_err();
        let text = render(|out| write_error(out, &err));
        assert!(text.contains("Error: Error listing configs"));
        assert!(text.contains("caused by: inner step"));
        assert!(text.contains("caused by: gone"));
    }
}
