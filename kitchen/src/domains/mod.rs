pub mod cooking;
pub mod delivery;
pub mod holding;
pub mod layout;
pub mod plating;
pub mod timing;
