//! Product listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use loja_tech_core::Brl;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Product;
use crate::catalog::listing::{self, ALL_CATEGORIES, CATEGORIES, Category, SortKey};
use crate::error::Result;
use crate::filters;
use crate::services::flash::{self, Flash};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub categoria: Option<String>,
    pub ordenar: Option<SortKey>,
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i64,
    pub name: String,
    pub price: Brl,
    pub img_src: String,
    /// Category tag carried into the add-to-cart form.
    pub kind: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            img_src: product.img_src.clone(),
            kind: product.cart_kind().to_string(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub flashes: Vec<Flash>,
    pub products: Vec<ProductCardView>,
    pub categories: &'static [Category],
    pub selected_category: String,
    pub sort_id: &'static str,
    /// Page-level catalog error, rendered instead of the grid.
    pub error: Option<String>,
}

/// Display product listing page.
///
/// Fetches the catalog once per render, then derives the filtered, sorted
/// view from the query parameters. A catalog failure renders the listing's
/// error state; there is no retry.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListingQuery>,
) -> Result<ProductsIndexTemplate> {
    let category = query
        .categoria
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let sort = query.ordenar.unwrap_or_default();

    let (products, error) = match state.catalog().load().await {
        Ok(items) => {
            let view = listing::derive(&items, &category, sort);
            (view.iter().map(ProductCardView::from).collect(), None)
        }
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            (Vec::new(), Some("Falha ao carregar produtos".to_string()))
        }
    };

    Ok(ProductsIndexTemplate {
        flashes: flash::take(&session).await?,
        products,
        categories: CATEGORIES,
        selected_category: category,
        sort_id: sort.as_str(),
        error,
    })
}
