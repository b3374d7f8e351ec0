use futures::{Stream, StreamExt};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

use crate::core::{follow_file, tail_lines, until_cancelled, LogCatalog};
use crate::error::SnklogError;

/// Options for the tail command
#[derive(Debug, Clone)]
pub struct TailOptions {
    pub lines: usize,
    pub follow: bool,
    pub poll_interval: Duration,
}

/// Print the end of a log, or stream appended lines until Ctrl-C
pub async fn tail_log(
    catalog: &LogCatalog,
    identifier: &str,
    options: TailOptions,
) -> Result<(), SnklogError> {
    let file = catalog.resolve_str(identifier)?;
    writeln!(io::stdout(), "Tailing the log file: {}", file.path.display())?;

    if !options.follow {
        let lines = tail_lines(&file.path, options.lines).await?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let lines = follow_file(&file.path, options.poll_interval).await?;
    let lines = until_cancelled(lines, tokio::signal::ctrl_c());
    write_followed(&mut io::stdout(), lines).await?;
    debug!("Stopped following {}", file.path.display());

    Ok(())
}

/// Write each streamed line to `out` as it arrives.
///
/// Stops at the first read or write error, e.g. a closed pipe.
pub async fn write_followed<W, S>(out: &mut W, lines: S) -> Result<(), SnklogError>
where
    W: Write,
    S: Stream<Item = io::Result<String>>,
{
    let mut lines = Box::pin(lines);
    while let Some(line) = lines.next().await {
        writeln!(out, "{}", line?)?;
        out.flush()?;
    }
    Ok(())
}
