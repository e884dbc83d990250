pub use create_dispenser::*;
pub use dispense_plate::*;
pub use return_plate::*;

mod create_dispenser;
mod dispense_plate;
mod return_plate;
