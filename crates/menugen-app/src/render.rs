use std::io::{self, Write};

use menugen_types::{DishCatalog, Menu, ShoppingList};

pub const PROMPT: &str = "Do you want to generate a new menu? (y/n): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter 'y' or 'n'.";
pub const GOODBYE: &str = "Exiting program.";

/// Day-by-day listing. Dishes the catalog lost track of are marked "Not found".
pub fn render_menu<W: Write>(out: &mut W, menu: &Menu, catalog: &DishCatalog) -> io::Result<()> {
    writeln!(out, "\n--- Your Menu ---")?;
    for (day, dish) in menu.days() {
        writeln!(out, "Day {day}: {dish}")?;
        match catalog.ingredients(dish) {
            Some(ingredients) => writeln!(out, "  Ingredients: {}", ingredients.join(", "))?,
            None => writeln!(out, "  Ingredients: Not found")?,
        }
    }
    Ok(())
}

/// Counts above one are shown as "(multiple)" rather than the number
pub fn render_shopping_list<W: Write>(out: &mut W, list: &ShoppingList) -> io::Result<()> {
    writeln!(out, "\n--- Shopping List ---")?;
    for item in list.iter() {
        if item.is_multiple() {
            writeln!(out, "- {} (multiple)", item.ingredient)?;
        } else {
            writeln!(out, "- {}", item.ingredient)?;
        }
    }
    writeln!(out, "\n")
}
