use crate::collections::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispenserId(pub usize);

pub struct Dispenser {
    pub id: DispenserId,
    pub supply: usize,
    pub capacity: usize,
    pub interval: f32,
    pub timer: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plating {
    PlateStocked {
        dispenser: DispenserId,
        supply: usize,
    },
    PlateDispensed {
        dispenser: DispenserId,
        supply: usize,
    },
    PlateReturned {
        dispenser: DispenserId,
        supply: usize,
    },
}

#[derive(Debug, PartialEq)]
pub enum PlatingError {
    DispenserNotFound { id: DispenserId },
    DispenserIsEmpty { id: DispenserId },
    DispenserIsFull { id: DispenserId },
}

#[derive(Default)]
pub struct PlatingDomain {
    pub dispensers_id: Sequence,
    pub dispensers: Vec<Dispenser>,
}
