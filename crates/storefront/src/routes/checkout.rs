//! Checkout route handlers.
//!
//! The checkout page renders the items frozen when checkout began (the
//! snapshot), so cart edits made in another tab don't retroactively change
//! the order. There is intentionally no payment or order backend: placing a
//! valid order clears both stores and renders the confirmation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use loja_tech_core::Cart;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::CartView;
use crate::services::cart as cart_store;
use crate::services::flash::{self, Flash};
use crate::services::shipping::{
    self, COUNTRIES, DISTRICTS, FieldErrors, SelectOption, ShippingForm,
};

const EMPTY_CART_NOTICE: &str = "Seu carrinho está vazio. Adicione itens para continuar.";

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub flashes: Vec<Flash>,
    pub summary: CartView,
    pub form: ShippingForm,
    pub errors: FieldErrors,
    pub countries: &'static [SelectOption],
    pub districts: &'static [SelectOption],
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct OrderPlacedTemplate {
    pub flashes: Vec<Flash>,
}

/// Resolve the items being checked out: a non-empty snapshot wins, the live
/// cart is the fallback. `None` means both are empty.
async fn checkout_items(session: &Session) -> Result<Option<Cart>> {
    let snapshot = cart_store::checkout_snapshot(session).await?;
    if !snapshot.is_empty() {
        return Ok(Some(snapshot));
    }

    let cart = cart_store::load(session).await?;
    if cart.is_empty() {
        Ok(None)
    } else {
        Ok(Some(cart))
    }
}

async fn redirect_to_cart(session: &Session) -> Result<Response> {
    flash::push(session, Flash::error(EMPTY_CART_NOTICE)).await?;
    Ok(Redirect::to("/carrinho").into_response())
}

/// Display the checkout page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let Some(items) = checkout_items(&session).await? else {
        return redirect_to_cart(&session).await;
    };

    Ok(CheckoutTemplate {
        flashes: flash::take(&session).await?,
        summary: CartView::from(&items),
        form: initial_form(),
        errors: FieldErrors::new(),
        countries: COUNTRIES,
        districts: DISTRICTS,
    }
    .into_response())
}

/// Place the order.
///
/// Validation failures re-render the page with inline per-field errors and
/// a summary toast; a valid submission clears the cart and the snapshot and
/// renders the confirmation.
#[instrument(skip(session, form))]
pub async fn place_order(session: Session, Form(form): Form<ShippingForm>) -> Result<Response> {
    let Some(items) = checkout_items(&session).await? else {
        return redirect_to_cart(&session).await;
    };

    let errors = shipping::validate(&form);
    if !errors.is_empty() {
        return Ok(CheckoutTemplate {
            flashes: vec![Flash::error(
                "Preencha todos os campos obrigatórios corretamente.",
            )],
            summary: CartView::from(&items),
            form,
            errors,
            countries: COUNTRIES,
            districts: DISTRICTS,
        }
        .into_response());
    }

    cart_store::clear(&session).await?;
    cart_store::clear_checkout(&session).await?;

    Ok(OrderPlacedTemplate {
        flashes: vec![Flash::success("Compra finalizada! Obrigado pela compra.")],
    }
    .into_response())
}

/// First render of the form, with the default selections picked.
fn initial_form() -> ShippingForm {
    ShippingForm {
        country: "brasil".to_string(),
        district: "osasco".to_string(),
        ..ShippingForm::default()
    }
}
