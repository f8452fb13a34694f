//! Session-backed cart and checkout snapshot stores.
//!
//! Two independently keyed records live in the session: the live cart lines
//! and the items frozen at the moment checkout begins. The snapshot is
//! decoupled from the live cart so that cart edits during checkout don't
//! retroactively change the order. Every mutation persists immediately and
//! hands the updated cart back so handlers can render synchronously.

use loja_tech_core::{Cart, CartLine};
use tower_sessions::Session;

/// Session keys for the two persisted records.
pub mod session_keys {
    /// Live cart lines.
    pub const CART: &str = "cart.lines";
    /// Items frozen when checkout begins.
    pub const CHECKOUT_SNAPSHOT: &str = "cart.checkout";
}

type Result<T> = std::result::Result<T, tower_sessions::session::Error>;

/// Read the live cart, or an empty cart if none is stored.
pub async fn load(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

async fn save(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await
}

/// Add a line to the cart, returning the updated cart.
///
/// An existing `(id, kind)` key has its quantity incremented instead of
/// being duplicated.
pub async fn add_line(session: &Session, line: CartLine) -> Result<Cart> {
    let mut cart = load(session).await?;
    cart.add(line);
    save(session, &cart).await?;
    Ok(cart)
}

/// Set the quantity of an existing line, returning the updated cart.
///
/// Quantities below 1 and unknown keys leave the stored state untouched.
pub async fn update_quantity(
    session: &Session,
    id: i64,
    kind: &str,
    quantity: u32,
) -> Result<Cart> {
    let mut cart = load(session).await?;
    if cart.update_quantity(id, kind, quantity) {
        save(session, &cart).await?;
    }
    Ok(cart)
}

/// Remove a line, returning the updated cart.
pub async fn remove_line(session: &Session, id: i64, kind: &str) -> Result<Cart> {
    let mut cart = load(session).await?;
    if cart.remove(id, kind) {
        save(session, &cart).await?;
    }
    Ok(cart)
}

/// Empty the live cart.
pub async fn clear(session: &Session) -> Result<()> {
    session.remove::<Cart>(session_keys::CART).await?;
    Ok(())
}

/// Overwrite the checkout snapshot with a copy of the given cart.
///
/// A serialization failure surfaces as an error; the caller must not
/// navigate to checkout in that case.
pub async fn capture_checkout(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CHECKOUT_SNAPSHOT, cart).await
}

/// Read the checkout snapshot, or an empty cart if none was captured.
pub async fn checkout_snapshot(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CHECKOUT_SNAPSHOT)
        .await?
        .unwrap_or_default())
}

/// Empty the checkout snapshot.
pub async fn clear_checkout(session: &Session) -> Result<()> {
    session.remove::<Cart>(session_keys::CHECKOUT_SNAPSHOT).await?;
    Ok(())
}
