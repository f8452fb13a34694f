//! Shipping form validation for checkout.
//!
//! Pure and deterministic: no session or network access. Messages are the
//! user-facing Portuguese strings rendered inline next to each field.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A fixed `<select>` option on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn option(id: &'static str, label: &'static str) -> SelectOption {
    SelectOption { id, label }
}

/// Countries available for delivery.
pub const COUNTRIES: &[SelectOption] = &[option("brasil", "Brasil")];

/// Districts available for delivery (Grande São Paulo).
pub const DISTRICTS: &[SelectOption] = &[
    option("osasco", "Osasco"),
    option("sao-paulo-zona-norte", "São Paulo - Zona Norte"),
    option("sao-paulo-zona-sul", "São Paulo - Zona Sul"),
    option("sao-paulo-zona-leste", "São Paulo - Zona Leste"),
    option("sao-paulo-zona-oeste", "São Paulo - Zona Oeste"),
    option("santo-andre", "Santo André"),
    option("sao-bernardo-do-campo", "São Bernardo do Campo"),
    option("sao-caetano-do-sul", "São Caetano do Sul"),
    option("diadema", "Diadema"),
    option("guarulhos", "Guarulhos"),
    option("barueri", "Barueri"),
    option("carapicuiba", "Carapicuíba"),
    option("taboao-da-serra", "Taboão da Serra"),
    option("embu-das-artes", "Embu das Artes"),
    option("itapecerica-da-serra", "Itapecerica da Serra"),
];

/// Shipping/contact form fields as submitted from the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub country: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub cep: String,
    pub contact: String,
    pub email: String,
    pub additional_info: String,
}

/// Field name (form id) → error message for every failing rule.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validate the shipping form. An empty map signals success.
///
/// Rules: seven required non-empty fields, country and district selections,
/// a minimal `x@y.z` email shape, exactly 8 digits in the CEP, and at least
/// 10 digits in the contact number (both after stripping non-digits).
#[must_use]
pub fn validate(form: &ShippingForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let required: [(&'static str, &str); 7] = [
        ("firstName", &form.first_name),
        ("lastName", &form.last_name),
        ("address", &form.address),
        ("city", &form.city),
        ("cep", &form.cep),
        ("contact", &form.contact),
        ("email", &form.email),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.insert(field, "Campo obrigatório");
        }
    }

    if form.country.trim().is_empty() {
        errors.insert("country", "Selecione o país");
    }
    if form.district.trim().is_empty() {
        errors.insert("district", "Selecione o bairro");
    }
    if !form.email.trim().is_empty() && !email_shape_ok(&form.email) {
        errors.insert("email", "E-mail inválido");
    }

    // Format rules override the generic required-field message for these two.
    if digit_count(&form.cep) != 8 {
        errors.insert("cep", "CEP deve ter 8 dígitos");
    }
    if digit_count(&form.contact) < 10 {
        errors.insert("contact", "Contato inválido");
    }

    errors
}

/// Count numeric digits, ignoring separators and punctuation.
fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Minimal email shape: something before `@`, a dot-separated domain after.
fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}
