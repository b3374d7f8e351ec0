//! Common test utilities

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use snklog::core::LogCatalog;

/// Create a project with empty `.snakemake/slurm_logs` and `.snakemake/log` trees
pub fn create_test_project() -> (TempDir, LogCatalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    fs::create_dir_all(slurm_dir(root)).expect("Failed to create slurm log dir");
    fs::create_dir_all(snakemake_dir(root)).expect("Failed to create snakemake log dir");

    let catalog = LogCatalog::new(slurm_dir(root), snakemake_dir(root));
    (temp_dir, catalog)
}

pub fn slurm_dir(root: &Path) -> PathBuf {
    root.join(".snakemake").join("slurm_logs")
}

pub fn snakemake_dir(root: &Path) -> PathBuf {
    root.join(".snakemake").join("log")
}

/// Write a log file whose modification time is `age_secs` in the past
pub fn write_log(path: &Path, content: &str, age_secs: u64) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create log parent dir");
    }
    fs::write(path, content).expect("Failed to write log file");
    File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(SystemTime::now() - Duration::from_secs(age_secs)))
        .expect("Failed to set modification time");
    path.to_path_buf()
}

/// Text of a Snakemake run log with one failure per `(time, rule, log)` entry
pub fn snakemake_failure_log(failures: &[(&str, &str, Option<&str>)]) -> String {
    let mut content = String::from("Building DAG of jobs...\nUsing shell: /usr/bin/bash\n");
    for (time, rule, log) in failures {
        content.push_str(&format!("\n[{}]\nError in rule {}:\n    jobid: 1\n", time, rule));
        if let Some(log) = log {
            content.push_str(&format!(
                "    log: {} (check log file(s) for error details)\n",
                log
            ));
        }
        content.push_str("    shell:\n        exit 1\n");
    }
    content.push_str("\nShutting down, this might take some time.\n");
    content
}
