use std::path::PathBuf;

/// A rule failure reported in a Snakemake log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRule {
    /// Timestamp of the failure block, at most 24 characters
    pub time: String,
    pub rule_name: String,
    /// Raw value of the `log:` line, if the failure named one
    pub log_file: Option<String>,
}

impl FailedRule {
    pub fn new(time: impl Into<String>, rule_name: impl Into<String>, log_file: Option<String>) -> Self {
        Self {
            time: time.into(),
            rule_name: rule_name.into(),
            log_file,
        }
    }

    /// Individual log paths; Snakemake joins multiple rule logs with ", "
    pub fn log_paths(&self) -> Vec<PathBuf> {
        self.log_file
            .as_deref()
            .map(|raw| {
                raw.split(", ")
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}
