use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tracing::warn;

use crate::core::{locate_failed_rules, LogCatalog};
use crate::error::SnklogError;
use crate::models::{Category, FailedRule};

const SEPARATOR_WIDTH: usize = 60;

/// Report failed rules in a Snakemake log.
///
/// Without an identifier the most recent Snakemake log is analyzed. In
/// verbose mode the per-rule log files are printed as well.
pub fn show_failed_rules(
    catalog: &LogCatalog,
    identifier: Option<&str>,
    verbose: bool,
) -> Result<(), SnklogError> {
    let log = match identifier {
        Some(id) => catalog.resolve_str(id)?,
        None => catalog.most_recent(Category::Snakemake)?,
    };

    let stdout = io::stdout();
    write_failed_report(&mut stdout.lock(), &log.path, verbose)?;
    Ok(())
}

/// Analyze `log_path` and render the report into `out`.
///
/// Returns the number of failed rules found.
pub fn write_failed_report<W: Write>(
    out: &mut W,
    log_path: &Path,
    verbose: bool,
) -> Result<usize, SnklogError> {
    writeln!(out, "Analyzing Snakemake log: {}", log_path.display())?;

    let bytes = fs::read(log_path)?;
    let failed_rules = locate_failed_rules(&String::from_utf8_lossy(&bytes));
    if failed_rules.is_empty() {
        writeln!(out, "No failed rules found in the log.")?;
        return Ok(0);
    }

    writeln!(out, "Found {} failed rule(s):", failed_rules.len())?;
    write_rule_logs(out, &failed_rules, verbose)?;
    Ok(failed_rules.len())
}

/// Render each failed rule; verbose mode inlines the rule's own log files
pub fn write_rule_logs<W: Write>(
    out: &mut W,
    failed_rules: &[FailedRule],
    verbose: bool,
) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    if verbose && failed_rules.iter().any(|r| r.log_file.is_some()) {
        writeln!(
            out,
            "\nPrinting snakemake job logs. Ensure the latest snakemake log is used as specific job logs may have been overwritten."
        )?;
    }

    for rule in failed_rules {
        writeln!(out, "\n{}", separator)?;
        writeln!(out, "Rule: {}", rule.rule_name)?;
        writeln!(out, "Time: {}", rule.time)?;
        writeln!(out, "Log file: {}", rule.log_file.as_deref().unwrap_or("none"))?;

        if rule.log_file.is_none() {
            writeln!(out, "No specific log file assigned to this rule.")?;
            continue;
        }
        if !verbose {
            continue;
        }

        writeln!(out, "{}\n", separator)?;
        for path in rule.log_paths() {
            match read_rule_log(&path) {
                Ok(content) => writeln!(out, "\n\n{}", content)?,
                Err(e @ SnklogError::NotFound(_)) => writeln!(out, "{}", e)?,
                Err(e) => {
                    warn!("Could not read {}: {}", path.display(), e);
                    writeln!(out, "Could not read log file {}: {}", path.display(), e)?;
                }
            }
        }
    }

    Ok(())
}

fn read_rule_log(path: &Path) -> Result<String, SnklogError> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SnklogError::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(rules: &[FailedRule], verbose: bool) -> String {
        let mut out = Vec::new();
        write_rule_logs(&mut out, rules, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_non_verbose_summary() {
        let rules = vec![
            FailedRule::new("Mon Oct 23 10:05:12 2023", "align", Some("logs/align.log".into())),
            FailedRule::new("Mon Oct 23 10:07:44 2023", "merge", None),
        ];
        let text = render(&rules, false);

        assert!(text.contains("Rule: align"));
        assert!(text.contains("Time: Mon Oct 23 10:05:12 2023"));
        assert!(text.contains("Log file: logs/align.log"));
        assert!(text.contains("Rule: merge"));
        assert!(text.contains("Log file: none"));
        assert!(text.contains("No specific log file assigned to this rule."));
        assert!(!text.contains("Printing snakemake job logs"));
        assert_eq!(text.matches(&"=".repeat(SEPARATOR_WIDTH)).count(), 2);
    }

    #[test]
    fn test_verbose_prints_rule_log_and_continues_past_missing() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.log");
        fs::write(&present, "samtools: out of memory\n").unwrap();
        let missing = temp_dir.path().join("missing.log");

        let rules = vec![
            FailedRule::new("t1", "first", Some(missing.display().to_string())),
            FailedRule::new("t2", "second", Some(present.display().to_string())),
        ];
        let text = render(&rules, true);

        assert!(text.contains(&format!("Log file not found: {}", missing.display())));
        assert!(text.contains("Rule: second"));
        assert!(text.contains("samtools: out of memory"));
        assert_eq!(text.matches("Printing snakemake job logs").count(), 1);
    }

    #[test]
    fn test_default_log_requires_snakemake_logs() {
        let temp_dir = TempDir::new().unwrap();
        let slurm = temp_dir.path().join("slurm");
        fs::create_dir_all(&slurm).unwrap();
        fs::write(slurm.join("1.log"), "slurm output\n").unwrap();
        let catalog = LogCatalog::new(slurm, temp_dir.path().join("log"));

        for verbose in [false, true] {
            let err = show_failed_rules(&catalog, None, verbose).unwrap_err();
            assert!(matches!(err, SnklogError::EmptyCategory(Category::Snakemake)));
            assert_eq!(err.to_string(), "No Snakemake log files found.");
        }
    }

    #[test]
    fn test_explicit_identifier_is_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = LogCatalog::new(temp_dir.path().join("slurm"), temp_dir.path().join("log"));

        let err = show_failed_rules(&catalog, Some("M4"), false).unwrap_err();
        assert!(matches!(err, SnklogError::OutOfRange { count: 0, .. }));
    }

    #[test]
    fn test_report_without_failures() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("run.log");
        fs::write(&log, "Building DAG of jobs...\n3 of 3 steps (100%) done\n").unwrap();

        let mut out = Vec::new();
        let count = write_failed_report(&mut out, &log, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 0);
        assert!(text.contains("Analyzing Snakemake log:"));
        assert!(text.contains("No failed rules found in the log."));
    }

    #[test]
    fn test_report_counts_failures() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("run.log");
        fs::write(
            &log,
            "[Mon Oct 23 10:05:12 2023]\nError in rule align:\n    log: a.log (check log file(s) for error details)\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let count = write_failed_report(&mut out, &log, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 1);
        assert!(text.contains("Found 1 failed rule(s):"));
        assert!(text.contains("Rule: align"));
    }
}
