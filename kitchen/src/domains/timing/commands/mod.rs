pub use add_time::*;
pub use start_countdown::*;
pub use toggle_pause::*;

mod add_time;
mod start_countdown;
mod toggle_pause;
