pub use json::*;
pub use preferences::*;
pub use ranking::*;
pub use storage::*;

mod json;
mod preferences;
mod ranking;
mod storage;
