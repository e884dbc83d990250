pub use interaction::*;

mod interaction;
