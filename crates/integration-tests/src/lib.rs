//! Integration tests for Loja Tech.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p loja-tech-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart state machine scenarios
//! - `checkout_form` - Shipping form validation contract
//! - `catalog_listing` - Category filter and sort ordering
//! - `storefront_http` - HTTP-level routing tests against the in-process app
//!
//! The HTTP tests drive the router directly with `tower::ServiceExt::oneshot`,
//! so no server process or network catalog is required.
