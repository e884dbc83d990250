pub use bus::*;
pub use host::*;
pub use records::*;
pub use scene::*;

mod bus;
mod host;
mod records;
mod scene;
