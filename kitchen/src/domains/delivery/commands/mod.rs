pub use add_score::*;
pub use complete_order::*;
pub use spawn_order::*;

mod add_score;
mod complete_order;
mod spawn_order;
