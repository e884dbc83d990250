pub use generate_boundary::*;

mod generate_boundary;
