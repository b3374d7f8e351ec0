pub mod failed;
pub mod less;
pub mod list;
pub mod tail;

pub use failed::*;
pub use less::*;
pub use list::*;
pub use tail::*;
