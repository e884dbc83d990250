use crate::delivery::DeliveryDomain;
use crate::holding::ObjectKey;

/// Same ingredient count and every recipe ingredient present, order ignored.
pub fn is_recipe_matching(recipe: &[ObjectKey], ingredients: &[ObjectKey]) -> bool {
    recipe.len() == ingredients.len() && recipe.iter().all(|key| ingredients.contains(key))
}

impl DeliveryDomain {
    /// Index of first waiting order satisfied by plate contents.
    pub fn find_matching_order(&self, ingredients: &[ObjectKey]) -> Option<usize> {
        self.orders
            .iter()
            .position(|order| is_recipe_matching(&order.kind.ingredients, ingredients))
    }
}
