pub mod catalog;
pub mod menu;
pub mod shopping;

pub use catalog::{CatalogBuilder, Dish, DishCatalog};
pub use menu::Menu;
pub use shopping::{ShoppingItem, ShoppingList};
