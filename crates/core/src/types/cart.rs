//! Cart line and cart model.
//!
//! The cart is an ordered list of lines keyed by `(id, kind)`. All mutation
//! rules live here so that the session layer in the storefront only has to
//! load, mutate, and save.

use serde::{Deserialize, Serialize};

use crate::types::money::Brl;

/// One product entry with a quantity in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog product id.
    pub id: i64,
    /// Category tag of the product (serialized as `type`).
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub price: Brl,
    /// Product image URL.
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Brl {
        self.price.times(self.quantity)
    }

    fn matches(&self, id: i64, kind: &str) -> bool {
        self.id == id && self.kind == kind
    }
}

/// Ordered collection of cart lines.
///
/// Lines are unique by `(id, kind)`; adding an existing key increments its
/// quantity instead of duplicating the line. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The current ordered list of lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Brl {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same `(id, kind)` already exists its quantity is
    /// incremented by the incoming quantity; otherwise the line is appended.
    /// A zero quantity is treated as 1 to preserve the `quantity >= 1`
    /// invariant.
    pub fn add(&mut self, line: CartLine) {
        let added = line.quantity.max(1);
        match self
            .lines
            .iter_mut()
            .find(|existing| existing.matches(line.id, &line.kind))
        {
            Some(existing) => existing.quantity += added,
            None => self.lines.push(CartLine {
                quantity: added,
                ..line
            }),
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity below 1 is a no-op, as is a missing key. Returns whether
    /// the cart changed.
    pub fn update_quantity(&mut self, id: i64, kind: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.lines.iter_mut().find(|line| line.matches(id, kind)) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line with the given key, if present. Returns whether a
    /// line was removed.
    pub fn remove(&mut self, id: i64, kind: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| !line.matches(id, kind));
        self.lines.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}
