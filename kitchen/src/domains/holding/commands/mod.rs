pub use add_ingredient::*;
pub use attach_item::*;
pub use create_holder::*;
pub use cut_item::*;
pub use destroy_item::*;
pub use extract_item::*;
pub use replace_item::*;
pub use spawn_item::*;

mod add_ingredient;
mod attach_item;
mod create_holder;
mod cut_item;
mod destroy_item;
mod extract_item;
mod replace_item;
mod spawn_item;
