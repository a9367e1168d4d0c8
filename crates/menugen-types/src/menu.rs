/// Dishes picked for consecutive days, one per day, no repeats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    days: Vec<String>,
}

impl Menu {
    pub fn new(days: Vec<String>) -> Self {
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dishes(&self) -> &[String] {
        &self.days
    }

    /// `(day, dish)` pairs with 1-based day numbers
    pub fn days(&self) -> impl Iterator<Item = (usize, &str)> {
        self.days.iter().enumerate().map(|(i, d)| (i + 1, d.as_str()))
    }
}

impl FromIterator<String> for Menu {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
