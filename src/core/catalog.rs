use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SnklogError};
use crate::models::{Category, Identifier, LogFile, LogsConfig};

/// Collect every `.log` file under `root`, newest first.
///
/// A missing or unreadable root yields an empty list. Files with equal
/// modification times are ordered by path.
pub fn collect_logs(root: &Path) -> Vec<LogFile> {
    let mut files: Vec<LogFile> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.path().extension().map(|e| e == "log").unwrap_or(false))
        .filter_map(|entry| {
            let path = entry.into_path();
            // Follows symlinks so linked log files are listed with their target's mtime
            let metadata = fs::metadata(&path).and_then(|m| Ok((m.is_file(), m.modified()?)));
            match metadata {
                Ok((true, modified)) => Some(LogFile::new(path, DateTime::<Local>::from(modified))),
                Ok((false, _)) => None,
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    None
                }
            }
        })
        .collect();

    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
    debug!("Found {} log files under {}", files.len(), root.display());
    files
}

/// Both log roots, enumerated fresh on every call
#[derive(Debug, Clone)]
pub struct LogCatalog {
    slurm_dir: PathBuf,
    snakemake_dir: PathBuf,
}

impl LogCatalog {
    pub fn new(slurm_dir: impl Into<PathBuf>, snakemake_dir: impl Into<PathBuf>) -> Self {
        Self {
            slurm_dir: slurm_dir.into(),
            snakemake_dir: snakemake_dir.into(),
        }
    }

    pub fn from_config(logs: &LogsConfig) -> Self {
        Self::new(logs.slurm_dir.clone(), logs.snakemake_dir.clone())
    }

    /// Directory scanned for the given category
    pub fn root(&self, category: Category) -> &Path {
        match category {
            Category::Slurm => &self.slurm_dir,
            Category::Snakemake => &self.snakemake_dir,
        }
    }

    /// Log files of one category, newest first
    pub fn files(&self, category: Category) -> Vec<LogFile> {
        collect_logs(self.root(category))
    }

    /// Look up the file an identifier points at in the current listing
    pub fn resolve(&self, identifier: &Identifier) -> Result<LogFile> {
        let mut files = self.files(identifier.category);
        let count = files.len();

        let index = usize::try_from(identifier.ordinal)
            .ok()
            .filter(|n| (1..=count).contains(n))
            .map(|n| n - 1)
            .ok_or(SnklogError::OutOfRange {
                category: identifier.category,
                number: identifier.ordinal,
                count,
            })?;

        let file = files.swap_remove(index);
        debug!("Resolved {} to {}", identifier, file.path.display());
        Ok(file)
    }

    /// Parse an identifier string and resolve it
    pub fn resolve_str(&self, identifier: &str) -> Result<LogFile> {
        let identifier: Identifier = identifier.parse()?;
        self.resolve(&identifier)
    }

    /// Newest file of a category
    pub fn most_recent(&self, category: Category) -> Result<LogFile> {
        self.files(category)
            .into_iter()
            .next()
            .ok_or(SnklogError::EmptyCategory(category))
    }
}
