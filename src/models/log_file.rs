use chrono::{DateTime, Local};
use std::path::PathBuf;

/// `ctime(3)`-style timestamp, e.g. `Mon Oct 23 10:00:00 2023`
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A log file found on disk together with its modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

impl LogFile {
    pub fn new(path: PathBuf, modified: DateTime<Local>) -> Self {
        Self { path, modified }
    }

    /// Modification time formatted for listings
    pub fn modified_display(&self) -> String {
        self.modified.format(CTIME_FORMAT).to_string()
    }
}
