use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

use crate::error::{Result, SnklogError};
use crate::models::PagerConfig;

/// Open `path` in the configured pager and wait for it to exit
pub fn open_in_pager(pager: &PagerConfig, path: &Path) -> Result<ExitStatus> {
    debug!("Opening {} with {} {:?}", path.display(), pager.program, pager.args);

    let status = Command::new(&pager.program)
        .args(&pager.args)
        .arg(path)
        .status()
        .map_err(|source| SnklogError::Pager {
            program: pager.program.clone(),
            source,
        })?;

    if !status.success() {
        warn!("Pager '{}' exited with {}", pager.program, status);
    }

    Ok(status)
}
