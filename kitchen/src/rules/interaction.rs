use crate::holding::ObjectKey;
use crate::model::Knowledge;

/// What an actor or a counter holds at the moment of interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Grip {
    Empty,
    Ingredient(ObjectKey),
    Plate(Vec<ObjectKey>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Clear,
    Cutting,
    Stove,
    Plates { supply: usize, capacity: usize },
    Delivery,
    Trash,
    Container { object: ObjectKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Nothing,
    /// Actor's item goes to surface.
    Place,
    /// Surface item goes to actor.
    Take,
    /// Surface ingredient is consumed by plate in actor's hands.
    FillActorPlate,
    /// Actor's ingredient is consumed by plate lying on surface.
    FillSurfacePlate,
    Cut,
    DispensePlate,
    ReturnPlate,
    Deliver,
    Trash,
    Grab { object: ObjectKey },
}

fn can_plate(known: &Knowledge, plate: &[ObjectKey], ingredient: ObjectKey) -> bool {
    known.is_plateable(ingredient) && !plate.contains(&ingredient)
}

fn exchange(known: &Knowledge, actor: &Grip, surface: &Grip) -> Interaction {
    match (actor, surface) {
        (Grip::Empty, Grip::Empty) => Interaction::Nothing,
        (_, Grip::Empty) => Interaction::Place,
        (Grip::Empty, _) => Interaction::Take,
        (Grip::Plate(plate), Grip::Ingredient(ingredient)) => {
            if can_plate(known, plate, *ingredient) {
                Interaction::FillActorPlate
            } else {
                Interaction::Nothing
            }
        }
        (Grip::Ingredient(ingredient), Grip::Plate(plate)) => {
            if can_plate(known, plate, *ingredient) {
                Interaction::FillSurfacePlate
            } else {
                Interaction::Nothing
            }
        }
        _ => Interaction::Nothing,
    }
}

/// Decides outcome of primary interaction of actor with counter surface.
pub fn decide_interaction(
    known: &Knowledge,
    surface: &Surface,
    actor: &Grip,
    counter: &Grip,
) -> Interaction {
    match surface {
        Surface::Clear => exchange(known, actor, counter),
        Surface::Cutting => match (actor, counter) {
            (Grip::Ingredient(ingredient), Grip::Empty) => {
                if known.find_cutting(*ingredient).is_some() {
                    Interaction::Place
                } else {
                    Interaction::Nothing
                }
            }
            (Grip::Plate(_), Grip::Empty) => Interaction::Nothing,
            _ => exchange(known, actor, counter),
        },
        Surface::Stove => match (actor, counter) {
            (Grip::Ingredient(ingredient), Grip::Empty) => {
                if known.find_frying(*ingredient).is_some() {
                    Interaction::Place
                } else {
                    Interaction::Nothing
                }
            }
            (Grip::Plate(_), Grip::Empty) => Interaction::Nothing,
            (Grip::Ingredient(_), Grip::Ingredient(_)) => Interaction::Nothing,
            _ => exchange(known, actor, counter),
        },
        Surface::Plates { supply, .. } => match actor {
            Grip::Empty if *supply > 0 => Interaction::DispensePlate,
            _ => Interaction::Nothing,
        },
        Surface::Delivery => match actor {
            Grip::Plate(_) => Interaction::Deliver,
            _ => Interaction::Nothing,
        },
        Surface::Trash => match actor {
            Grip::Empty => Interaction::Nothing,
            _ => Interaction::Trash,
        },
        Surface::Container { object } => match actor {
            Grip::Empty => Interaction::Grab { object: *object },
            _ => Interaction::Nothing,
        },
    }
}

/// Decides outcome of alternate interaction.
pub fn decide_alternate_interaction(
    known: &Knowledge,
    surface: &Surface,
    actor: &Grip,
    counter: &Grip,
) -> Interaction {
    match surface {
        Surface::Cutting => match counter {
            Grip::Ingredient(ingredient) if known.find_cutting(*ingredient).is_some() => {
                Interaction::Cut
            }
            _ => Interaction::Nothing,
        },
        Surface::Plates { supply, capacity } => match actor {
            Grip::Plate(ingredients) if ingredients.is_empty() && supply < capacity => {
                Interaction::ReturnPlate
            }
            _ => Interaction::Nothing,
        },
        _ => Interaction::Nothing,
    }
}
