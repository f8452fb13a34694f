//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /produtos               - Product listing (filter/sort via query)
//!
//! # Cart (HTMX fragments)
//! GET  /carrinho               - Cart page
//! POST /carrinho/adicionar     - Add to cart (returns cart count fragment)
//! POST /carrinho/atualizar     - Update quantity (returns cart fragment)
//! POST /carrinho/remover       - Remove item (returns cart fragment)
//! GET  /carrinho/contagem      - Cart count badge (fragment)
//! POST /carrinho/checkout      - Freeze the snapshot, go to checkout
//!
//! # Checkout
//! GET  /checkout               - Billing form + order summary
//! POST /checkout               - Validate and place the order
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/adicionar", post(cart::add))
        .route("/atualizar", post(cart::update))
        .route("/remover", post(cart::remove))
        .route("/contagem", get(cart::count))
        .route("/checkout", post(cart::begin_checkout))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/", get(checkout::show).post(checkout::place_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product listing
        .route("/produtos", get(products::index))
        // Cart routes
        .nest("/carrinho", cart_routes())
        // Checkout
        .nest("/checkout", checkout_routes())
}
