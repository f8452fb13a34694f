//! Cart route handlers.
//!
//! Cart mutations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every mutation returns the updated
//! cart so the fragment renders the state it just wrote.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use loja_tech_core::{Brl, Cart, CartLine};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::cart as cart_store;
use crate::services::flash::{self, Flash};

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: i64,
    pub kind: String,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: Brl,
    pub line_total: Brl,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: Brl,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal(),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            kind: line.kind.clone(),
            title: line.title.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: line.price,
            line_total: line.line_total(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub price: Brl,
    pub image: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub flashes: Vec<Flash>,
    pub cart: CartView,
}

/// Cart layout fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_fragment.html")]
pub struct CartFragmentTemplate {
    pub cart: CartView,
    pub toast: Option<Flash>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
    pub toast: Option<Flash>,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = cart_store::load(&session).await?;

    Ok(CartShowTemplate {
        flashes: flash::take(&session).await?,
        cart: CartView::from(&cart),
    })
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line when the `(id, type)` key is already in the
/// cart. Returns the cart count badge plus an HTMX trigger so other
/// fragments can refresh.
#[instrument(skip(session, form))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let line = CartLine {
        id: form.id,
        kind: form.kind,
        title: form.title,
        price: form.price,
        image: form.image,
        quantity: form.quantity.unwrap_or(1),
    };

    let cart = cart_store::add_line(&session, line).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
            toast: Some(Flash::success("Adicionado ao carrinho")),
        },
    )
        .into_response())
}

/// Update cart item quantity (HTMX).
///
/// Quantities below 1 leave the stored state untouched; the fragment still
/// re-renders so the input snaps back to the stored value.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let cart = cart_store::update_quantity(&session, form.id, &form.kind, form.quantity).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartFragmentTemplate {
            cart: CartView::from(&cart),
            toast: None,
        },
    )
        .into_response())
}

/// Remove item from cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let cart = cart_store::remove_line(&session, form.id, &form.kind).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartFragmentTemplate {
            cart: CartView::from(&cart),
            toast: Some(Flash::success("Item removido do carrinho!")),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = cart_store::load(&session).await?;

    Ok(CartCountTemplate {
        count: cart.total_quantity(),
        toast: None,
    })
}

/// Freeze the cart into the checkout snapshot and move to checkout.
///
/// An empty cart or a snapshot-capture failure cancels the navigation and
/// flashes a notice on the cart page.
#[instrument(skip(session))]
pub async fn begin_checkout(session: Session) -> Result<Response> {
    let cart = cart_store::load(&session).await?;

    if cart.is_empty() {
        flash::push(
            &session,
            Flash::error("Seu carrinho está vazio. Adicione itens para continuar."),
        )
        .await?;
        return Ok(Redirect::to("/carrinho").into_response());
    }

    if let Err(e) = cart_store::capture_checkout(&session, &cart).await {
        tracing::error!("Failed to capture checkout snapshot: {e}");
        flash::push(
            &session,
            Flash::error("Não foi possível preparar o checkout. Tente novamente."),
        )
        .await?;
        return Ok(Redirect::to("/carrinho").into_response());
    }

    Ok(Redirect::to("/checkout").into_response())
}
