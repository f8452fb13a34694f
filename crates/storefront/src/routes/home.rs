//! Home page route handler.

use std::sync::LazyLock;

use askama::Template;
use askama_web::WebTemplate;
use loja_tech_core::Brl;
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::flash::{self, Flash};

/// A product in the static featured carousel strip.
#[derive(Clone)]
pub struct FeaturedProduct {
    pub name: &'static str,
    pub price: Brl,
    pub img_src: &'static str,
}

fn featured(name: &'static str, centavos: i64, img_src: &'static str) -> FeaturedProduct {
    FeaturedProduct {
        name,
        price: Brl::new(Decimal::new(centavos, 2)),
        img_src,
    }
}

/// Featured picks for the home carousel (static content, prices in
/// centavos).
static FEATURED_PRODUCTS: LazyLock<[FeaturedProduct; 12]> = LazyLock::new(|| [
    featured(
        "Akko Tac75 HE Magnetico",
        50399,
        "/static/images/home/tac-he75.png",
    ),
    featured(
        "Akko MonsGeek FUN60",
        36747,
        "/static/images/home/monsgeek-fun60.png",
    ),
    featured(
        "AJAZZ AK820 Mecanico",
        38108,
        "/static/images/home/ajazz-ak820.png",
    ),
    featured(
        "AULA HERO 68HE Magnetico",
        58718,
        "/static/images/home/aula-hero-68he.png",
    ),
    featured(
        "Logitech G435 LIGHTSPEED",
        49998,
        "/static/images/home/logitech-g435.png",
    ),
    featured(
        "Binnune BW06 HEADSET 2,4Ghz",
        28807,
        "/static/images/home/binnune-bw06.png",
    ),
    featured(
        "NUBWO G06 HEADSET GAMER",
        35809,
        "/static/images/home/nubwo-g06.png",
    ),
    featured(
        "Baseus GH02 Gaming",
        71867,
        "/static/images/home/baseus-gh02.png",
    ),
    featured(
        "Attack Shark X11 Base",
        20786,
        "/static/images/home/attack-shark-x11.png",
    ),
    featured("MousePad Dragão", 5608, "/static/images/home/pad-dragao.png"),
    featured(
        "MousePad Exco Sports",
        24697,
        "/static/images/home/pad-exco.png",
    ),
    featured(
        "Fone de Ouvido BUDS 6 Xiaomi",
        20699,
        "/static/images/home/xiaomi-buds6.png",
    ),
]);

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub flashes: Vec<Flash>,
    /// Featured products for the carousel strip.
    pub featured: Vec<FeaturedProduct>,
}

/// Display the home page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> Result<HomeTemplate> {
    Ok(HomeTemplate {
        flashes: flash::take(&session).await?,
        featured: FEATURED_PRODUCTS.to_vec(),
    })
}
