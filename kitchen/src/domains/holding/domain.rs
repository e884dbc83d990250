use std::collections::HashMap;

use crate::collections::{Sequence, Shared};
use crate::math::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectKey(pub usize);

pub struct ObjectKind {
    pub id: ObjectKey,
    pub name: String,
    pub visual: String,
    pub plate: bool,
    pub plateable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CuttingKey(pub usize);

pub struct CuttingKind {
    pub id: CuttingKey,
    pub name: String,
    pub input: ObjectKey,
    pub output: ObjectKey,
    pub cuts: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolderId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderRole {
    Counter,
    Chef,
}

pub struct Holder {
    pub id: HolderId,
    pub role: HolderRole,
    pub anchor: Position,
    pub item: Option<ItemId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

pub struct Item {
    pub id: ItemId,
    pub kind: Shared<ObjectKind>,
    pub holder: HolderId,
    pub cuts: u8,
    pub ingredients: Vec<Shared<ObjectKind>>,
}

impl Item {
    #[inline]
    pub fn is_plate(&self) -> bool {
        self.kind.plate
    }

    pub fn contains(&self, ingredient: ObjectKey) -> bool {
        self.ingredients.iter().any(|kind| kind.id == ingredient)
    }

    pub fn ingredient_keys(&self) -> Vec<ObjectKey> {
        self.ingredients.iter().map(|kind| kind.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Holding {
    HolderCreated {
        holder: HolderId,
        role: HolderRole,
    },
    ItemSpawned {
        item: ItemId,
        kind: ObjectKey,
        holder: HolderId,
    },
    ItemPlaced {
        item: ItemId,
        holder: HolderId,
    },
    ItemPickedUp {
        item: ItemId,
        holder: HolderId,
    },
    ItemDetached {
        item: ItemId,
        holder: HolderId,
    },
    ItemDestroyed {
        item: ItemId,
        holder: HolderId,
    },
    IngredientAdded {
        plate: ItemId,
        ingredient: ObjectKey,
    },
    ItemCut {
        item: ItemId,
        cuts: u8,
    },
}

#[derive(Debug, PartialEq)]
pub enum HoldingError {
    HolderNotFound {
        id: HolderId,
    },
    HolderAlreadyExists {
        id: HolderId,
    },
    ItemNotFound {
        id: ItemId,
    },
    HolderIsOccupied {
        holder: HolderId,
        item: ItemId,
    },
    HolderIsEmpty {
        holder: HolderId,
    },
    ItemIsNotPlate {
        item: ItemId,
    },
    PlateCannotBeIngredient {
        kind: ObjectKey,
    },
    IngredientNotPlateable {
        kind: ObjectKey,
    },
    IngredientAlreadyOnPlate {
        plate: ItemId,
        ingredient: ObjectKey,
    },
    BrokenLink {
        item: ItemId,
        holder: HolderId,
    },
}

#[derive(Default)]
pub struct HoldingDomain {
    pub holders_id: Sequence,
    pub holders: HashMap<HolderId, Holder>,
    pub items_id: Sequence,
    pub items: HashMap<ItemId, Item>,
}

impl HoldingDomain {
    pub(crate) fn link(&mut self, item: ItemId, holder: HolderId) {
        if let Some(slot) = self.holders.get_mut(&holder) {
            slot.item = Some(item);
        }
        if let Some(entry) = self.items.get_mut(&item) {
            entry.holder = holder;
        }
    }

    /// Clears holder slot of item. Item keeps stale back reference until linked again.
    pub(crate) fn unlink(&mut self, item: ItemId) -> Option<HolderId> {
        let holder = self.items.get(&item)?.holder;
        if let Some(slot) = self.holders.get_mut(&holder) {
            if slot.item == Some(item) {
                slot.item = None;
            }
        }
        Some(holder)
    }
}
