use std::collections::HashMap;

/// A named dish and its ingredients, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Every dish known for this run, keyed by name.
///
/// Built once through [`CatalogBuilder`] and read-only afterwards. Dishes keep the
/// position of their first appearance, so iteration order is stable for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
    index: HashMap<String, usize>,
}

impl DishCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of distinct dish names
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Ingredients of a dish, `None` if the catalog does not know it
    pub fn ingredients(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&i| self.dishes[i].ingredients.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dishes.iter().map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }
}

/// Collects dishes before freezing them into a [`DishCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: DishCatalog,
}

impl CatalogBuilder {
    /// Add a dish. A name seen before keeps its slot but takes the new ingredient list.
    ///
    /// Returns `true` when an earlier entry was replaced.
    pub fn insert(&mut self, name: impl Into<String>, ingredients: Vec<String>) -> bool {
        let name = name.into();
        match self.catalog.index.get(&name) {
            Some(&i) => {
                self.catalog.dishes[i].ingredients = ingredients;
                true
            }
            None => {
                self.catalog
                    .index
                    .insert(name.clone(), self.catalog.dishes.len());
                self.catalog.dishes.push(Dish { name, ingredients });
                false
            }
        }
    }

    /// Chaining form of [`CatalogBuilder::insert`]
    pub fn dish<I, S>(mut self, name: &str, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, ingredients.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn build(self) -> DishCatalog {
        self.catalog
    }
}
