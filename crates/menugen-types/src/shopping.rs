/// One ingredient line of a shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub ingredient: String,
    /// How many times the ingredient appears across the menu, always >= 1
    pub count: usize,
}

impl ShoppingItem {
    pub fn new(ingredient: impl Into<String>, count: usize) -> Self {
        Self {
            ingredient: ingredient.into(),
            count,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.count > 1
    }
}

/// Ingredients needed for a menu, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Caller guarantees `items` is sorted by ingredient with unique names
    pub fn from_sorted(items: Vec<ShoppingItem>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0].ingredient < w[1].ingredient));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    /// Total count for one ingredient, 0 when absent
    pub fn count_of(&self, ingredient: &str) -> usize {
        self.items
            .binary_search_by(|item| item.ingredient.as_str().cmp(ingredient))
            .map(|i| self.items[i].count)
            .unwrap_or(0)
    }
}
