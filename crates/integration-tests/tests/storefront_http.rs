//! HTTP-level routing tests.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; no
//! listener is bound. Each request runs with a fresh session, so these cover
//! the cold-visitor paths (empty cart, no checkout snapshot). The catalog
//! base URL points at a closed local port, so listing requests exercise the
//! degraded-catalog rendering rather than a live API.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use loja_tech_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;
use url::Url;

fn test_app() -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        // Closed port: catalog requests fail fast with a connect error.
        catalog_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
    };

    app(AppState::new(config))
}

async fn get(path: &str) -> axum::response::Response {
    test_app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(path: &str, body: &str) -> axum::response::Response {
    test_app()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
}

// =============================================================================
// Basic routing
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_home_page_renders() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Loja Tech"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = get("/nao-existe").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Listing with an unreachable catalog
// =============================================================================

#[tokio::test]
async fn test_listing_degrades_when_catalog_is_down() {
    let response = get("/produtos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Falha ao carregar produtos"));
}

// =============================================================================
// Cart pages
// =============================================================================

#[tokio::test]
async fn test_cart_page_shows_empty_state() {
    let response = get("/carrinho").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Seu carrinho está vazio"));
}

#[tokio::test]
async fn test_cart_count_starts_at_zero() {
    let response = get("/carrinho/contagem").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(">0<"));
}

#[tokio::test]
async fn test_add_to_cart_returns_count_fragment_and_trigger() {
    let response = post_form(
        "/carrinho/adicionar",
        "id=1&type=monitores&title=Monitor&price=500.00&image=%2Fimages%2F1.png",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let body = body_text(response).await;
    assert!(body.contains(">1<"));
    assert!(body.contains("Adicionado ao carrinho"));
}

// =============================================================================
// Checkout gating
// =============================================================================

#[tokio::test]
async fn test_begin_checkout_with_empty_cart_redirects_back() {
    let response = post_form("/carrinho/checkout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/carrinho");
}

#[tokio::test]
async fn test_checkout_page_with_no_items_redirects_to_cart() {
    let response = get("/checkout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/carrinho");
}

#[tokio::test]
async fn test_place_order_with_no_items_redirects_to_cart() {
    let response = post_form("/checkout", "firstName=Ana").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/carrinho");
}

// =============================================================================
// Full checkout flow (one session across requests)
// =============================================================================

/// The session cookie from a response's `Set-Cookie` header.
fn session_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
        .unwrap()
}

#[tokio::test]
async fn test_valid_order_clears_cart_and_snapshot() {
    let app = test_app();

    // Add an item; the session cookie carries the cart from here on.
    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/adicionar")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "id=1&type=monitores&title=Monitor&price=500.00&image=%2Fimages%2F1.png",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);

    // Freeze the snapshot and move to checkout.
    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/checkout")
                .header(header::COOKIE, cookie.as_str())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/checkout");

    // Submit a fully valid billing form.
    let form = "firstName=Ana&lastName=Silva&country=brasil&address=Av.+Paulista+1000\
                &city=Sao+Paulo&district=osasco&cep=01310-100\
                &contact=11987654321&email=ana%40example.com";
    let response = app
        .clone()
        .oneshot(
            Request::post("/checkout")
                .header(header::COOKIE, cookie.as_str())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Compra finalizada!"));

    // Both stores are gone: the cart page shows the empty state again.
    let response = app
        .clone()
        .oneshot(
            Request::get("/carrinho")
                .header(header::COOKIE, cookie.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Seu carrinho está vazio"));
}

#[tokio::test]
async fn test_snapshot_freezes_checkout_against_later_cart_edits() {
    let app = test_app();

    // One monitor in the cart when checkout begins.
    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/adicionar")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "id=1&type=monitores&title=Monitor+LG&price=1200.00&image=%2Fimages%2F1.png",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let cookie = session_cookie(&response);

    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/checkout")
                .header(header::COOKIE, cookie.as_str())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The cart changes after the snapshot was taken.
    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/adicionar")
                .header(header::COOKIE, cookie.as_str())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "id=2&type=fontes&title=Fonte+Corsair&price=450.00&image=%2Fimages%2F2.png",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The checkout summary still shows only the frozen items.
    let response = app
        .clone()
        .oneshot(
            Request::get("/checkout")
                .header(header::COOKIE, cookie.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Monitor LG"));
    assert!(!body.contains("Fonte Corsair"));
}

#[tokio::test]
async fn test_invalid_form_re_renders_with_field_errors() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/carrinho/adicionar")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "id=1&type=monitores&title=Monitor&price=500.00&image=%2Fimages%2F1.png",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let cookie = session_cookie(&response);

    // Missing everything: the page re-renders with inline messages.
    let response = app
        .clone()
        .oneshot(
            Request::post("/checkout")
                .header(header::COOKIE, cookie.as_str())
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Campo obrigatório"));
    assert!(body.contains("Selecione o bairro"));
}
