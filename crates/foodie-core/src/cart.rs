//! In-memory cart: product id → selected quantity.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::product::ProductItem;

/// Quantities keyed by product id. Quantities are unsigned, so the
/// never-negative invariant holds by construction; [`CartState::set_quantity`]
/// floors at zero instead of underflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    quantities: HashMap<String, u32>,
}

impl CartState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cart tracking every product of `catalog` at quantity zero.
    #[must_use]
    pub fn for_catalog(catalog: &[ProductItem]) -> Self {
        let mut cart = Self::new();
        cart.initialize(catalog.iter().map(|item| item.id.as_str()));
        cart
    }

    /// Reset the cart to exactly `product_ids`, all at zero.
    ///
    /// Prior quantities are discarded even for ids that appear again.
    pub fn initialize<I, S>(&mut self, product_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quantities = product_ids
            .into_iter()
            .map(|id| (id.into(), 0))
            .collect();
    }

    /// Apply `delta` to the quantity of `product_id` and return the new quantity.
    ///
    /// The result is `max(0, old + delta)`. Unknown ids start from zero and are
    /// tracked from then on.
    pub fn set_quantity(&mut self, product_id: &str, delta: i64) -> u32 {
        let entry = self.quantities.entry(product_id.to_string()).or_insert(0);
        let updated = i64::from(*entry)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        *entry = u32::try_from(updated).unwrap_or(u32::MAX);
        *entry
    }

    /// Drop a line from the order entirely, keeping the id tracked at zero.
    pub fn clear(&mut self, product_id: &str) {
        if let Some(quantity) = self.quantities.get_mut(product_id) {
            *quantity = 0;
        }
    }

    #[must_use]
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.quantities.get(product_id).copied().unwrap_or(0)
    }

    /// `true` iff every tracked quantity is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Σ quantity × unit price over the products of `catalog`.
    ///
    /// Ids that carry a quantity but are no longer in the catalog contribute
    /// nothing. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self, catalog: &[ProductItem]) -> Decimal {
        catalog.iter().fold(Decimal::ZERO, |sum, item| {
            let line = item
                .price
                .saturating_mul(Decimal::from(self.quantity(&item.id)));
            sum.saturating_add(line)
        })
    }

    /// Tracked ids and their quantities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(id, &q)| (id.as_str(), q))
    }
}
