//! Core types for Loja Tech.

pub mod cart;
pub mod money;

pub use cart::{Cart, CartLine};
pub use money::Brl;
