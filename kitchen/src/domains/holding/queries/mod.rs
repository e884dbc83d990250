pub use get_holder::*;
pub use get_item::*;
pub use validate_links::*;

mod get_holder;
mod get_item;
mod validate_links;
