mod filter;
mod result;

pub use filter::*;
pub use result::*;
