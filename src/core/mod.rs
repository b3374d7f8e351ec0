pub mod catalog;
pub mod config;
pub mod extract;
pub mod pager;
pub mod tail;

pub use catalog::*;
pub use config::*;
pub use extract::*;
pub use pager::*;
pub use tail::*;
