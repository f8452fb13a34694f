//! Catalog API client.
//!
//! Products come from a single remote endpoint (`GET {base}/produtos`)
//! returning a JSON array. One request per listing render; no retry, no
//! cache, no pagination. Entries tagged with a foreign segment are dropped
//! before they reach any handler.

pub mod listing;

use std::sync::Arc;

use loja_tech_core::Brl;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::StorefrontConfig;

/// Segment tag marking catalog entries that belong to the general product
/// listing (as opposed to e.g. featured-only entries).
pub const PRODUCTS_SEGMENT: &str = "produtos";

/// A catalog product. Read-only, sourced externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Brl,
    /// Product image URL.
    pub img_src: String,
    /// Category id used by the listing filter; entries without one only
    /// match the "all" category.
    #[serde(default)]
    pub category: Option<String>,
    /// Listing segment tag; absent means the general listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
}

impl Product {
    /// Whether this entry belongs to the general product listing.
    #[must_use]
    pub fn in_products_segment(&self) -> bool {
        self.segment
            .as_deref()
            .is_none_or(|segment| segment == PRODUCTS_SEGMENT)
    }

    /// Category tag carried into cart lines (`product` when uncategorized).
    #[must_use]
    pub fn cart_kind(&self) -> &str {
        self.category.as_deref().unwrap_or("product")
    }
}

/// Errors from the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, body read, JSON parse).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the product catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let endpoint = format!(
            "{}/produtos",
            config.catalog_base_url.as_str().trim_end_matches('/')
        );

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Fetch the product list, keeping only the general listing segment.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, non-success status, or
    /// a body that does not parse as a JSON array of products.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.inner.client.get(&self.inner.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = response.json().await?;
        Ok(products
            .into_iter()
            .filter(Product::in_products_segment)
            .collect())
    }
}
