pub use boundary::*;
pub use commands::*;
pub use distribution::*;
pub use domain::*;
pub use polygon::*;
pub use rectangle::*;

mod boundary;
mod commands;
mod distribution;
mod domain;
mod polygon;
mod rectangle;
