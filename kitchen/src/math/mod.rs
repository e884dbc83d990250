pub use collision::*;
pub use random::*;
pub use raycast::*;
pub use vector::*;

mod collision;
mod random;
mod raycast;
mod vector;
