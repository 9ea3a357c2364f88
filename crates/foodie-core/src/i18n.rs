//! Translated UI strings.
//!
//! Lookups are opaque: the core asks for a [`TranslationKey`] in a
//! [`Language`] and gets a static string back.

use chrono::{Datelike, NaiveDateTime};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Parse a `LANGUAGE` code. Unknown codes fall back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    Menu,
    ViewOrder,
    YourOrder,
    Order,
    OrderSummary,
    Total,
    CollectionLocation,
    PlaceOrder,
    Configuration,
    SaveChanges,
    ResetToDefault,
    StoreClosed,
    StoreClosedDescription,
    OrderPlacedSuccessfully,
    OrderSentViaWhatsApp,
    ErrorTitle,
    SelectAtLeastOneItem,
    SelectCollectionLocation,
    Allergens,
    All,
    Calories,
    PreparationTime,
    ViewOnMap,
}

#[must_use]
pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Es => spanish(key),
    }
}

fn english(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Menu => "Menu",
        TranslationKey::ViewOrder => "View Order",
        TranslationKey::YourOrder => "Your Order",
        TranslationKey::Order => "Order",
        TranslationKey::OrderSummary => "Order Summary:",
        TranslationKey::Total => "Total:",
        TranslationKey::CollectionLocation => "Collection Location",
        TranslationKey::PlaceOrder => "Place Order",
        TranslationKey::Configuration => "App Configuration",
        TranslationKey::SaveChanges => "Save Changes",
        TranslationKey::ResetToDefault => "Reset to Default",
        TranslationKey::StoreClosed => "Store Closed",
        TranslationKey::StoreClosedDescription => {
            "Sorry, we are currently closed. Please try again during our opening hours."
        }
        TranslationKey::OrderPlacedSuccessfully => "Order Placed Successfully!",
        TranslationKey::OrderSentViaWhatsApp => "Your order has been sent via WhatsApp.",
        TranslationKey::ErrorTitle => "Error",
        TranslationKey::SelectAtLeastOneItem => "Please select at least one item to order.",
        TranslationKey::SelectCollectionLocation => "Please select a collection location.",
        TranslationKey::Allergens => "Allergens",
        TranslationKey::All => "All",
        TranslationKey::Calories => "Calories",
        TranslationKey::PreparationTime => "Preparation Time",
        TranslationKey::ViewOnMap => "View on Map",
    }
}

fn spanish(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Menu => "Menú",
        TranslationKey::ViewOrder => "Ver Pedido",
        TranslationKey::YourOrder => "Tu Pedido",
        TranslationKey::Order => "Pedido",
        TranslationKey::OrderSummary => "Detalle del Pedido",
        TranslationKey::Total => "Total:",
        TranslationKey::CollectionLocation => "Sucursal de Retiro",
        TranslationKey::PlaceOrder => "Pedir via WhatsApp",
        TranslationKey::Configuration => "Configuración",
        TranslationKey::SaveChanges => "Guardar",
        TranslationKey::ResetToDefault => "Restablecer",
        TranslationKey::StoreClosed => "Tienda Cerrada",
        TranslationKey::StoreClosedDescription => {
            "Lo sentimos, actualmente estamos cerrados. Por favor, inténtelo de nuevo durante nuestro horario de apertura."
        }
        TranslationKey::OrderPlacedSuccessfully => "¡Pedido Realizado con Éxito!",
        TranslationKey::OrderSentViaWhatsApp => "Su pedido ha sido enviado por WhatsApp.",
        TranslationKey::ErrorTitle => "Error",
        TranslationKey::SelectAtLeastOneItem => {
            "Por favor, seleccione al menos un artículo para pedir."
        }
        TranslationKey::SelectCollectionLocation => "Seleccione una sucursal de retiro.",
        TranslationKey::Allergens => "Alérgenos",
        TranslationKey::All => "Todo",
        TranslationKey::Calories => "Calorias",
        TranslationKey::PreparationTime => "Tiempo de Preparación",
        TranslationKey::ViewOnMap => "Ver Mapa",
    }
}

const ES_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long-form order timestamp, 24-hour clock: `15 de octubre de 2026, 14:30`.
///
/// Order headers always use the `es-AR` form, whatever the shop language.
#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    let month = ES_MONTHS
        .get(at.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!(
        "{} de {month} de {}, {}",
        at.day(),
        at.year(),
        at.format("%H:%M")
    )
}
