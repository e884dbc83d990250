use crate::collections::Shared;
use crate::holding::Holding::{IngredientAdded, ItemDestroyed};
use crate::holding::{Holding, HoldingDomain, HoldingError, ItemId, ObjectKind};

impl HoldingDomain {
    pub fn ensure_ingredient_fits(
        &self,
        plate: ItemId,
        kind: &ObjectKind,
    ) -> Result<(), HoldingError> {
        let target = self.get_item(plate)?;
        if !target.is_plate() {
            return Err(HoldingError::ItemIsNotPlate { item: plate });
        }
        if kind.plate {
            return Err(HoldingError::PlateCannotBeIngredient { kind: kind.id });
        }
        if !kind.plateable {
            return Err(HoldingError::IngredientNotPlateable { kind: kind.id });
        }
        if target.contains(kind.id) {
            return Err(HoldingError::IngredientAlreadyOnPlate {
                plate,
                ingredient: kind.id,
            });
        }
        Ok(())
    }

    pub fn add_ingredient(
        &mut self,
        plate: ItemId,
        kind: &Shared<ObjectKind>,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        self.ensure_ingredient_fits(plate, kind)?;
        let kind = kind.clone();
        let command = move || {
            let ingredient = kind.id;
            if let Some(target) = self.items.get_mut(&plate) {
                target.ingredients.push(kind);
            }
            vec![IngredientAdded { plate, ingredient }]
        };
        Ok(command)
    }

    /// Moves ingredient item onto plate: kind is recorded, the item itself is destroyed.
    pub fn put_ingredient_on_plate(
        &mut self,
        plate: ItemId,
        ingredient: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        let source = self.get_item(ingredient)?;
        let kind = source.kind.clone();
        let holder = source.holder;
        self.ensure_ingredient_fits(plate, &kind)?;
        let command = move || {
            let added = kind.id;
            if let Some(target) = self.items.get_mut(&plate) {
                target.ingredients.push(kind);
            }
            self.unlink(ingredient);
            self.items.remove(&ingredient);
            vec![
                IngredientAdded {
                    plate,
                    ingredient: added,
                },
                ItemDestroyed {
                    item: ingredient,
                    holder,
                },
            ]
        };
        Ok(command)
    }
}
