use crate::core::{open_in_pager, LogCatalog};
use crate::error::SnklogError;
use crate::models::PagerConfig;

/// Open a log in the pager
pub fn less_log(
    catalog: &LogCatalog,
    identifier: &str,
    pager: &PagerConfig,
) -> Result<(), SnklogError> {
    let file = catalog.resolve_str(identifier)?;
    open_in_pager(pager, &file.path)?;
    Ok(())
}
