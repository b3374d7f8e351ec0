pub mod category;
pub mod config;
pub mod failed_rule;
pub mod identifier;
pub mod log_file;

pub use category::*;
pub use config::*;
pub use failed_rule::*;
pub use identifier::*;
pub use log_file::*;
