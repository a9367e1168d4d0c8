use menugen_types::{DishCatalog, Menu};
use rand::Rng;

use crate::error::SampleError;

/// Pick `days` distinct dishes uniformly at random.
///
/// The caller owns the random source, so a seeded rng gives a reproducible menu.
/// Day order is the order the dishes were drawn in.
pub fn sample_menu<R>(catalog: &DishCatalog, days: usize, rng: &mut R) -> Result<Menu, SampleError>
where
    R: Rng + ?Sized,
{
    let available = catalog.len();
    if available < days {
        return Err(SampleError::InsufficientDishes {
            requested: days,
            available,
        });
    }

    let names: Vec<&str> = catalog.names().collect();
    let menu = rand::seq::index::sample(rng, available, days)
        .into_iter()
        .map(|i| names[i].to_string())
        .collect();

    Ok(menu)
}
