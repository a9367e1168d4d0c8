use std::collections::BTreeMap;

use menugen_types::{DishCatalog, Menu, ShoppingItem, ShoppingList};

/// Count every ingredient occurrence across the menu's dishes.
///
/// Dishes the catalog does not know contribute nothing. Repeats inside one dish's
/// list are counted too. The result is sorted by ingredient name (byte order).
pub fn aggregate(menu: &Menu, catalog: &DishCatalog) -> ShoppingList {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for dish in menu.dishes() {
        let Some(ingredients) = catalog.ingredients(dish) else {
            tracing::debug!("Dish '{}' not in catalog, no ingredients added", dish);
            continue;
        };
        for ingredient in ingredients {
            *counts.entry(ingredient.as_str()).or_default() += 1;
        }
    }

    ShoppingList::from_sorted(
        counts
            .into_iter()
            .map(|(ingredient, count)| ShoppingItem::new(ingredient, count))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(dishes: &[&str]) -> Menu {
        dishes.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_shared_ingredient_counted_per_dish() {
        let catalog = DishCatalog::builder()
            .dish("Pasta", ["tomato", "basil"])
            .dish("Salad", ["lettuce", "tomato"])
            .build();

        let list = aggregate(&menu(&["Pasta", "Salad"]), &catalog);

        assert_eq!(
            list.items(),
            &[
                ShoppingItem::new("basil", 1),
                ShoppingItem::new("lettuce", 1),
                ShoppingItem::new("tomato", 2),
            ]
        );
    }

    #[test]
    fn test_repeat_within_dish_is_counted() {
        let catalog = DishCatalog::builder()
            .dish("Garlic bread", ["garlic", "bread", "garlic"])
            .build();

        let list = aggregate(&menu(&["Garlic bread"]), &catalog);
        assert_eq!(list.count_of("garlic"), 2);
        assert_eq!(list.count_of("bread"), 1);
    }

    #[test]
    fn test_unknown_dish_contributes_nothing() {
        let catalog = DishCatalog::builder().dish("Soup", ["broth"]).build();
        let list = aggregate(&menu(&["Soup", "Ghost"]), &catalog);
        assert_eq!(list.items(), &[ShoppingItem::new("broth", 1)]);
    }

    #[test]
    fn test_sort_is_case_sensitive_ordinal() {
        let catalog = DishCatalog::builder()
            .dish("Mix", ["egg", "Butter", "apple", "Zest"])
            .build();

        let list = aggregate(&menu(&["Mix"]), &catalog);
        let names: Vec<&str> = list.iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, vec!["Butter", "Zest", "apple", "egg"]);
    }

    #[test]
    fn test_empty_menu_empty_list() {
        let catalog = DishCatalog::builder().dish("Soup", ["broth"]).build();
        assert!(aggregate(&Menu::default(), &catalog).is_empty());
    }
}
