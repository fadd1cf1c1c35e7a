//! Cart

use crate::{
    pricing::Price,
    records::{Plant, PlantId},
};

/// A line in the cart, copied from a plant when it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Plant id at add time.
    pub id: PlantId,

    /// Plant name at add time.
    pub name: String,

    /// Plant price at add time.
    pub price: Price,
}

impl From<&Plant> for CartEntry {
    fn from(plant: &Plant) -> Self {
        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            price: plant.price,
        }
    }
}

/// An in-memory, ordered shopping cart.
///
/// Entries are never merged: adding the same plant twice yields two lines.
/// Removal is positional so that, with duplicates present, exactly the line
/// at the given row goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn add(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, returning it.
    ///
    /// Out-of-range indexes leave the cart untouched.
    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Sum of every entry's price, computed afresh.
    pub fn total(&self) -> Price {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
