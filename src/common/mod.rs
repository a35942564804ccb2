// Components connecting the finality gates to their environment
pub mod chain_access;
pub mod format;

pub use chain_access::*;
pub use format::*;
