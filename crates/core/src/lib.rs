//! Loja Tech Core - Shared types library.
//!
//! This crate provides common types used across all Loja Tech components:
//! - `storefront` - Public-facing e-commerce site
//! - `integration-tests` - Workspace-level tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money, cart lines, and the cart model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
