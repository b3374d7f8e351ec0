use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SnklogError;
use crate::models::Config;

/// Load configuration with CLI overrides.
///
/// An explicit `config_file` must exist; otherwise `snklog.toml` in
/// `project_root` is used when present.
pub fn load_config(
    project_root: &Path,
    config_file: Option<&Path>,
    slurm_dir: Option<PathBuf>,
    snakemake_dir: Option<PathBuf>,
) -> Result<Config, SnklogError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(project_root)?,
    };
    let config = config.with_overrides(slurm_dir, snakemake_dir);

    info!(
        "Configuration loaded: slurm_dir={}, snakemake_dir={}, pager={}",
        config.logs.slurm_dir.display(),
        config.logs.snakemake_dir.display(),
        config.pager.program
    );

    Ok(config)
}
