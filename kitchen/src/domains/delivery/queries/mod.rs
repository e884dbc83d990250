pub use find_matching_order::*;

mod find_matching_order;
