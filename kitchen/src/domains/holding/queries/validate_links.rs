use crate::holding::{HoldingDomain, HoldingError};

impl HoldingDomain {
    /// Checks that every item and its holder reference each other.
    pub fn validate_links(&self) -> Result<(), HoldingError> {
        for item in self.items.values() {
            let holder = self.get_holder(item.holder)?;
            if holder.item != Some(item.id) {
                return Err(HoldingError::BrokenLink {
                    item: item.id,
                    holder: holder.id,
                });
            }
        }
        for holder in self.holders.values() {
            if let Some(item) = holder.item {
                let item = self.get_item(item)?;
                if item.holder != holder.id {
                    return Err(HoldingError::BrokenLink {
                        item: item.id,
                        holder: holder.id,
                    });
                }
            }
        }
        Ok(())
    }
}
