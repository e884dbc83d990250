pub use get_dispenser::*;

mod get_dispenser;
