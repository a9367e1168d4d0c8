use menugen_core::aggregate;
use menugen_types::{DishCatalog, Menu};

use crate::render::{render_menu, render_shopping_list};

fn render(menu: &Menu, catalog: &DishCatalog) -> String {
    let mut out = Vec::new();
    render_menu(&mut out, menu, catalog).unwrap();
    render_shopping_list(&mut out, &aggregate(menu, catalog)).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_layout() {
    let catalog = DishCatalog::builder()
        .dish("Pasta", ["tomato", "basil"])
        .dish("Salad", ["lettuce", "tomato"])
        .build();
    let menu: Menu = ["Salad", "Pasta"].map(String::from).into_iter().collect();

    let expected = "\n--- Your Menu ---\n\
                    Day 1: Salad\n  Ingredients: lettuce, tomato\n\
                    Day 2: Pasta\n  Ingredients: tomato, basil\n\
                    \n--- Shopping List ---\n\
                    - basil\n- lettuce\n- tomato (multiple)\n\n\n";
    assert_eq!(render(&menu, &catalog), expected);
}

#[test]
fn test_unknown_dish_is_not_found() {
    let catalog = DishCatalog::builder().dish("Soup", ["broth"]).build();
    let menu: Menu = ["Ghost", "Soup"].map(String::from).into_iter().collect();

    let out = render(&menu, &catalog);
    assert!(out.contains("Day 1: Ghost\n  Ingredients: Not found\n"));
    assert!(out.contains("Day 2: Soup\n  Ingredients: broth\n"));
}

#[test]
fn test_dish_without_ingredients() {
    let catalog = DishCatalog::builder()
        .dish("Water", Vec::<String>::new())
        .build();
    let menu: Menu = ["Water".to_string()].into_iter().collect();

    let out = render(&menu, &catalog);
    assert!(out.contains("Day 1: Water\n  Ingredients: \n"));
    assert!(out.ends_with("--- Shopping List ---\n\n\n"));
}
