//! Failed-rule extraction from Snakemake run logs.
//!
//! A Snakemake failure looks like:
//!
//! ```text
//! [Mon Oct 23 10:00:00 2023]
//! Error in rule align:
//!     jobid: 3
//!     log: logs/align.log (check log file(s) for error details)
//! ```
//!
//! Two patterns are tried in order. [`RULE_WITH_LOG`] captures the log path;
//! only when it finds nothing at all is [`RULE_BARE`] used, so a log never
//! mixes records from both formats.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::FailedRule;

/// Timestamps are cut to the length of a ctime string
const TIME_PREFIX_LEN: usize = 24;

/// Failure block followed, possibly several lines later, by its `log:` line.
///
/// The gap between header and `log:` may not contain a line starting with
/// `[`, so a failure without a log line never borrows the next block's log.
pub const RULE_WITH_LOG: &str = r"\[([^\]\n]*)\]\r?\nError in rule (\w+):(?:[^\n]|\n+[^\[\n])*?\n*log: ([^\n]*?) \(check log file\(s\) for error details\)";

/// Failure block header without a log path
pub const RULE_BARE: &str = r"\[([^\]\n]*)\]\r?\nError in rule (\w+):";

static RULE_WITH_LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RULE_WITH_LOG).expect("RULE_WITH_LOG is a valid regex"));

static RULE_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RULE_BARE).expect("RULE_BARE is a valid regex"));

/// One raw pattern hit, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub time: &'a str,
    pub rule_name: &'a str,
    pub log_file: Option<&'a str>,
}

/// All failures that name a log file, in order of appearance
pub fn match_with_log(text: &str) -> Vec<RuleMatch<'_>> {
    RULE_WITH_LOG_RE
        .captures_iter(text)
        .map(|caps| RuleMatch {
            time: caps.get(1).map_or("", |m| m.as_str()),
            rule_name: caps.get(2).map_or("", |m| m.as_str()),
            log_file: caps.get(3).map(|m| m.as_str()),
        })
        .collect()
}

/// All failure headers, ignoring any log file, in order of appearance
pub fn match_bare(text: &str) -> Vec<RuleMatch<'_>> {
    RULE_BARE_RE
        .captures_iter(text)
        .map(|caps| RuleMatch {
            time: caps.get(1).map_or("", |m| m.as_str()),
            rule_name: caps.get(2).map_or("", |m| m.as_str()),
            log_file: None,
        })
        .collect()
}

/// Extract failed rules from the text of a Snakemake log
pub fn locate_failed_rules(text: &str) -> Vec<FailedRule> {
    let mut matches = match_with_log(text);
    if matches.is_empty() {
        debug!("No failures with log files, falling back to bare rule headers");
        matches = match_bare(text);
    }
    debug!("Located {} failed rule(s)", matches.len());

    matches.into_iter().map(normalize).collect()
}

fn normalize(m: RuleMatch<'_>) -> FailedRule {
    let time: String = m.time.trim().chars().take(TIME_PREFIX_LEN).collect();
    FailedRule::new(
        time,
        m.rule_name.trim(),
        m.log_file.map(|path| path.trim().to_string()),
    )
}
