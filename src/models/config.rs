use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "snklog.toml";

/// Configuration loaded from snklog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub follow: FollowConfig,
    #[serde(default)]
    pub pager: PagerConfig,
}

/// Directory roots scanned for log files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    /// Root of the Slurm job logs
    #[serde(default = "default_slurm_dir")]
    pub slurm_dir: PathBuf,
    /// Root of the Snakemake run logs
    #[serde(default = "default_snakemake_dir")]
    pub snakemake_dir: PathBuf,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            slurm_dir: default_slurm_dir(),
            snakemake_dir: default_snakemake_dir(),
        }
    }
}

fn default_slurm_dir() -> PathBuf {
    PathBuf::from(".snakemake/slurm_logs/")
}

fn default_snakemake_dir() -> PathBuf {
    PathBuf::from(".snakemake/log/")
}

/// Output defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Files listed per category by `list`
    #[serde(default = "default_num_files")]
    pub num_files: usize,
    /// Lines printed by `tail`
    #[serde(default = "default_tail_lines")]
    pub tail_lines: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            num_files: default_num_files(),
            tail_lines: default_tail_lines(),
        }
    }
}

fn default_num_files() -> usize {
    5
}

fn default_tail_lines() -> usize {
    10
}

/// Follow mode behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowConfig {
    /// Delay between reads once the end of the file is reached
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    100
}

/// External pager used by `less`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    #[serde(default = "default_pager_program")]
    pub program: String,
    /// Extra arguments placed before the file path
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            program: default_pager_program(),
            args: Vec::new(),
        }
    }
}

fn default_pager_program() -> String {
    "less".to_string()
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from snklog.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        slurm_dir: Option<PathBuf>,
        snakemake_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = slurm_dir {
            self.logs.slurm_dir = dir;
        }
        if let Some(dir) = snakemake_dir {
            self.logs.snakemake_dir = dir;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logs.slurm_dir, PathBuf::from(".snakemake/slurm_logs/"));
        assert_eq!(config.logs.snakemake_dir, PathBuf::from(".snakemake/log/"));
        assert_eq!(config.display.num_files, 5);
        assert_eq!(config.display.tail_lines, 10);
        assert_eq!(config.follow.poll_interval_ms, 100);
        assert_eq!(config.pager.program, "less");
        assert!(config.pager.args.is_empty());
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/tmp/slurm")), None);

        assert_eq!(config.logs.slurm_dir, PathBuf::from("/tmp/slurm"));
        assert_eq!(config.logs.snakemake_dir, PathBuf::from(".snakemake/log/"));
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[display]
num_files = 12

[pager]
program = "most"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.num_files, 12);
        assert_eq!(config.display.tail_lines, 10);
        assert_eq!(config.pager.program, "most");
        assert_eq!(config.logs.slurm_dir, PathBuf::from(".snakemake/slurm_logs/"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[display\nnum_files = ").unwrap();

        let result = Config::load_from_dir(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_, _))));
    }
}
