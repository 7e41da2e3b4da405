//! Item catalog parsing.

use crate::error::{GaError, Result};
use std::collections::HashMap;
use tracing::warn;

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64, value: u64) -> Self {
        Item {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// Ordered items with unique names.
///
/// Chromosome bit `i` selects `items()[i]`. Serializes as the plain item
/// list; deserializing applies the duplicate rule again.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct ItemCatalog {
    items: Vec<Item>,
    /// Name to position in `items`.
    positions: HashMap<String, usize>,
}

impl PartialEq for ItemCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for ItemCatalog {}

impl From<Vec<Item>> for ItemCatalog {
    fn from(items: Vec<Item>) -> Self {
        ItemCatalog::from_items(items)
    }
}

impl From<ItemCatalog> for Vec<Item> {
    fn from(catalog: ItemCatalog) -> Self {
        catalog.items
    }
}

impl ItemCatalog {
    /// Parses one `name, weight, value` item per line.
    ///
    /// Whitespace around fields is ignored and blank lines are skipped.
    /// The first malformed line fails the whole parse. A repeated name
    /// replaces the earlier item's weight and value but keeps its position.
    ///
    /// ```
    /// use evo_combinatorics::knapsack::ItemCatalog;
    ///
    /// let catalog = ItemCatalog::parse("Laptop, 7, 5\nBuku, 2, 4").unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.items()[1].name, "Buku");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut catalog = ItemCatalog::default();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            catalog.insert(parse_line(idx + 1, line)?);
        }
        Ok(catalog)
    }

    /// Builds a catalog from items, applying the same duplicate rule as
    /// [`parse`](Self::parse).
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = ItemCatalog::default();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    fn insert(&mut self, item: Item) {
        match self.positions.get(&item.name) {
            Some(&pos) => {
                warn!(name = %item.name, "duplicate item name, replacing earlier entry");
                self.items[pos] = item;
            }
            None => {
                self.positions.insert(item.name.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Item> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, weight, value] = fields.as_slice() else {
        return Err(GaError::parse(
            line_no,
            format!(
                "expected 3 comma-separated fields (name, weight, value), got {}",
                fields.len()
            ),
        ));
    };
    if name.is_empty() {
        return Err(GaError::parse(line_no, "item name is empty"));
    }
    let weight = weight.parse::<u64>().map_err(|e| {
        GaError::parse(line_no, format!("weight {weight:?} is not a non-negative integer: {e}"))
    })?;
    let value = value.parse::<u64>().map_err(|e| {
        GaError::parse(line_no, format!("value {value:?} is not a non-negative integer: {e}"))
    })?;
    Ok(Item::new(*name, weight, value))
}
