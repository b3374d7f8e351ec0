//! snklog - browse Snakemake and Slurm logs and locate failed rules
//!
//! Logs are read from two directory trees, by default `.snakemake/slurm_logs/`
//! (Slurm job logs, identified as `S1`, `S2`, ...) and `.snakemake/log/`
//! (Snakemake run logs, `M1`, `M2`, ...), newest first.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (list, tail, less, failed)
//! - **core**: Log catalog, tailing, failed-rule extraction, pager, config loading
//! - **models**: Data structures (config, category, identifier, log file, failed rule)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, SnklogError};
