//! Filtered, sorted views of the catalog.
//!
//! Pure derivation: the input slice is never mutated and the underlying
//! sort is stable, so equal keys keep their catalog order.

use serde::Deserialize;

use super::Product;

/// Category id that passes every product through the filter.
pub const ALL_CATEGORIES: &str = "todos";

/// A sidebar category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

const fn category(id: &'static str, label: &'static str) -> Category {
    Category { id, label }
}

/// Sidebar categories for the listing page.
pub const CATEGORIES: &[Category] = &[
    category(ALL_CATEGORIES, "Todos os Produtos"),
    category("monitores", "Monitores"),
    category("computadores", "Computadores"),
    category("placas-de-video", "Placas de Vídeo"),
    category("fontes", "Fontes"),
    category("gabinetes", "Gabinetes"),
];

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortKey {
    /// Lexicographic ascending by display name.
    #[default]
    #[serde(rename = "nome")]
    Name,
    /// Numeric ascending by price.
    #[serde(rename = "preco-asc")]
    PriceAsc,
    /// Numeric descending by price.
    #[serde(rename = "preco-desc")]
    PriceDesc,
}

impl SortKey {
    /// The query-string id of this sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::PriceAsc => "preco-asc",
            Self::PriceDesc => "preco-desc",
        }
    }
}

/// Derive the filtered, sorted view of the catalog.
///
/// [`ALL_CATEGORIES`] passes every product; any other category keeps only
/// products whose category equals the selection.
#[must_use]
pub fn derive(products: &[Product], category: &str, sort: SortKey) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| {
            category == ALL_CATEGORIES || product.category.as_deref() == Some(category)
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Name => view.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceAsc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    view
}
