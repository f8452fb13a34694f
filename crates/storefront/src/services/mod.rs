//! Storefront services.
//!
//! - [`cart`] - Session-backed cart and checkout snapshot stores
//! - [`flash`] - One-shot toast messages
//! - [`shipping`] - Shipping form validation

pub mod cart;
pub mod flash;
pub mod shipping;
