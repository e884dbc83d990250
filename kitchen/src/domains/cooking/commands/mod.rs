pub use create_stove::*;
pub use start_frying::*;
pub use stop_cooking::*;

mod create_stove;
mod start_frying;
mod stop_cooking;
