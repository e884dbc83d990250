pub use get_stove::*;

mod get_stove;
