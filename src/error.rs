use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Category, ConfigError};

/// Main error type for snklog
#[derive(Error, Debug)]
pub enum SnklogError {
    #[error("Invalid identifier '{0}'. Use 'S' for Slurm logs or 'M' for Snakemake logs.")]
    InvalidCategory(String),

    #[error("Invalid identifier format '{0}'. Use 'S<number>' or 'M<number>'.")]
    InvalidFormat(String),

    #[error("Invalid file number {number}. Please choose a number between 1 and {count} ({category} logs)")]
    OutOfRange {
        category: Category,
        number: i64,
        count: usize,
    },

    #[error("Log file not found: {0}")]
    NotFound(PathBuf),

    #[error("No {0} log files found.")]
    EmptyCategory(Category),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to run pager '{program}': {source}")]
    Pager {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SnklogError {
    /// Process exit code for this kind of failure
    pub fn exit_code(&self) -> i32 {
        match self {
            SnklogError::InvalidCategory(_)
            | SnklogError::InvalidFormat(_)
            | SnklogError::OutOfRange { .. } => 2,
            SnklogError::NotFound(_) | SnklogError::EmptyCategory(_) => 3,
            SnklogError::Config(_) => 4,
            SnklogError::Pager { .. } => 5,
            SnklogError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnklogError>;
