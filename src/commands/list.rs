use std::io::{self, Write};

use crate::core::LogCatalog;
use crate::error::SnklogError;
use crate::models::Category;

/// Print file counts and the most recent logs of each category
pub fn list_logs(catalog: &LogCatalog, num_files: usize) -> Result<(), SnklogError> {
    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), catalog, num_files)
}

/// Render the listing into `out`
pub fn write_listing<W: Write>(
    out: &mut W,
    catalog: &LogCatalog,
    num_files: usize,
) -> Result<(), SnklogError> {
    let listings: Vec<_> = Category::ALL
        .iter()
        .map(|&category| (category, catalog.files(category)))
        .collect();

    for (category, files) in &listings {
        writeln!(out, "Total number of {} log files: {}", category, files.len())?;
    }

    for (category, files) in &listings {
        writeln!(out, "\n{} most recent {} log files:", num_files, category)?;
        for (i, file) in files.iter().take(num_files).enumerate() {
            writeln!(
                out,
                "{}{}. {} - {}",
                category.tag(),
                i + 1,
                file.modified_display(),
                file.path.display()
            )?;
        }
    }

    Ok(())
}
