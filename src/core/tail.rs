//! Reading the end of a log file, once or continuously.
//!
//! Follow mode is exposed as a [`Stream`] of lines over any buffered async
//! reader. It never ends on its own; wrap it with [`until_cancelled`] to stop
//! it when a signal (or any other future) resolves.

use futures::stream::{self, Stream, StreamExt};
use std::future::Future;
use std::io::{self, SeekFrom};
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncSeekExt, BufReader};
use tracing::debug;

/// Last `count` lines of `path`, each with trailing whitespace removed
pub async fn tail_lines(path: &Path, count: usize) -> io::Result<Vec<String>> {
    let bytes = tokio::fs::read(path).await?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(last_lines(&content, count))
}

/// Last `count` lines of `content`, right-trimmed, in original order
pub fn last_lines(content: &str, count: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..]
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

struct FollowState<R> {
    reader: R,
    pending: Vec<u8>,
    poll_interval: Duration,
    failed: bool,
}

/// Stream complete lines as they are appended to `reader`.
///
/// At end of input the stream sleeps for `poll_interval` and reads again. A
/// line without its terminating newline is held back until the newline
/// arrives. A read error is yielded once and ends the stream.
pub fn follow_lines<R>(reader: R, poll_interval: Duration) -> impl Stream<Item = io::Result<String>>
where
    R: AsyncBufRead + Unpin,
{
    let state = FollowState {
        reader,
        pending: Vec::new(),
        poll_interval,
        failed: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.failed {
            return None;
        }
        loop {
            match state.reader.read_until(b'\n', &mut state.pending).await {
                Ok(0) => tokio::time::sleep(state.poll_interval).await,
                Ok(_) if state.pending.ends_with(b"\n") => {
                    let line = finish_line(&mut state.pending);
                    return Some((Ok(line), state));
                }
                // partial line at EOF, wait for the rest
                Ok(_) => continue,
                Err(e) => {
                    state.failed = true;
                    return Some((Err(e), state));
                }
            }
        }
    })
}

fn finish_line(pending: &mut Vec<u8>) -> String {
    let line = String::from_utf8_lossy(pending)
        .trim_end_matches(['\n', '\r'])
        .to_string();
    pending.clear();
    line
}

/// Open `path` positioned at its end and follow it
pub async fn follow_file(
    path: &Path,
    poll_interval: Duration,
) -> io::Result<impl Stream<Item = io::Result<String>>> {
    let mut file = File::open(path).await?;
    let offset = file.seek(SeekFrom::End(0)).await?;
    debug!("Following {} from offset {}", path.display(), offset);
    Ok(follow_lines(BufReader::new(file), poll_interval))
}

/// End `lines` as soon as `cancel` resolves
pub fn until_cancelled<S, F>(lines: S, cancel: F) -> impl Stream<Item = S::Item>
where
    S: Stream,
    F: Future,
{
    lines.take_until(cancel)
}
