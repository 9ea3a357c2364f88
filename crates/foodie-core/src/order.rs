//! Order summary and message formatting.
//!
//! Formatting is deterministic: the order number and timestamp are inputs,
//! drawn by the caller.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::CartState;
use crate::i18n::{format_timestamp, translate, TranslationKey};
use crate::product::ProductItem;
use crate::shop::{CollectionOption, ShopConfig};

/// Shown in place of the address when no collection option resolves.
pub const NOT_SELECTED: &str = "Not selected";

/// Display order number, `000`–`999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderNumber(u16);

impl OrderNumber {
    pub const MAX: u16 = 999;

    /// Returns `None` above [`OrderNumber::MAX`].
    #[must_use]
    pub fn new(value: u16) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// One ordered product with its quantity and line total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'a> {
    pub product: &'a ProductItem,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Derived order: selected lines in catalog order plus the money totals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    pub lines: Vec<OrderLine<'a>>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub collection_option: Option<&'a CollectionOption>,
}

/// Build the order from the cart without rendering it.
///
/// Lines follow catalog order, not the order items were added. Tax is
/// `subtotal × TAX_PERCENTAGE / 100` and is not rounded until display.
/// Amounts saturate at [`Decimal::MAX`] instead of overflowing.
#[must_use]
pub fn summarize_order<'a>(
    cart: &CartState,
    catalog: &'a [ProductItem],
    config: &'a ShopConfig,
    collection_option_id: Option<&str>,
) -> OrderSummary<'a> {
    let lines: Vec<OrderLine<'a>> = catalog
        .iter()
        .filter_map(|product| {
            let quantity = cart.quantity(&product.id);
            (quantity > 0).then(|| OrderLine {
                product,
                quantity,
                line_total: product.price.saturating_mul(Decimal::from(quantity)),
            })
        })
        .collect();

    let subtotal = lines
        .iter()
        .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.line_total));
    let tax = subtotal.checked_mul(config.tax_percentage).map_or_else(
        || (subtotal / Decimal::ONE_HUNDRED).saturating_mul(config.tax_percentage),
        |scaled| scaled / Decimal::ONE_HUNDRED,
    );
    let total = subtotal.saturating_add(tax);
    let collection_option = collection_option_id.and_then(|id| config.collection_option(id));

    OrderSummary {
        lines,
        subtotal,
        tax,
        total,
        collection_option,
    }
}

/// Fixed-precision amount: rounded half away from zero, zero-padded to
/// exactly `decimals` fractional digits.
#[must_use]
pub fn format_amount(amount: Decimal, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // Precision zero-pads past the stored scale.
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Render the order message sent to the shop.
///
/// Sections, in order: header with order number and timestamp, itemized
/// lines, subtotal, tax, bold total, collection location. `**` marks bold
/// text. An empty cart renders an empty item section and zero totals.
#[must_use]
pub fn format_order(
    cart: &CartState,
    catalog: &[ProductItem],
    config: &ShopConfig,
    collection_option_id: Option<&str>,
    order_number: OrderNumber,
    placed_at: &NaiveDateTime,
) -> String {
    let summary = summarize_order(cart, catalog, config, collection_option_id);
    let language = config.language();
    let t = |key| translate(language, key);
    let currency = config.currency_sign.as_str();
    let money = |amount| format_amount(amount, config.price_decimals);

    let address = summary
        .collection_option
        .map_or(NOT_SELECTED, |option| option.address.as_str());

    let mut lines = vec![
        format!("**{} #{order_number}**", t(TranslationKey::Order)),
        format_timestamp(placed_at),
        String::new(),
        format!("**{}**", t(TranslationKey::OrderSummary)),
    ];
    lines.extend(summary.lines.iter().map(|line| {
        format!(
            "• {} x{} - {currency}{}",
            line.product.name,
            line.quantity,
            money(line.line_total)
        )
    }));
    lines.extend([
        String::new(),
        format!("Subtotal: {currency}{}", money(summary.subtotal)),
        format!(
            "Tax ({}%): {currency}{}",
            config.tax_percentage.normalize(),
            money(summary.tax)
        ),
        format!("**{} {currency}{}**", t(TranslationKey::Total), money(summary.total)),
        String::new(),
        format!("**{}**", t(TranslationKey::CollectionLocation)),
        address.to_string(),
        String::new(),
        String::new(),
    ]);

    lines.join("\n")
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
