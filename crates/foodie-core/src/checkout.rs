//! Pre-submission gate and order submission.
//!
//! A real submission runs the gate first; only a clean gate formats the
//! message and builds the dispatch URL. Previews skip the gate.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::cart::CartState;
use crate::dispatch::build_dispatch_url;
use crate::order::{format_order, OrderNumber};
use crate::product::ProductItem;
use crate::shop::ShopConfig;
use crate::CheckoutError;

/// Snapshot of everything the gate and formatter read.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutInput<'a> {
    pub cart: &'a CartState,
    pub catalog: &'a [ProductItem],
    pub config: &'a ShopConfig,
    /// Selected collection option id; `None` or `""` when nothing is selected.
    pub collection_option_id: Option<&'a str>,
    /// Latest result of the opening-hours check.
    pub store_open: bool,
}

/// Independently clearable failure flags raised by [`validate_checkout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutErrors {
    pub store_closed: bool,
    pub collection_option: bool,
    pub empty_order: bool,
}

impl CheckoutErrors {
    #[must_use]
    pub fn is_clear(&self) -> bool {
        !(self.store_closed || self.collection_option || self.empty_order)
    }

    pub fn clear_store_closed(&mut self) {
        self.store_closed = false;
    }

    pub fn clear_collection_option(&mut self) {
        self.collection_option = false;
    }

    pub fn clear_empty_order(&mut self) {
        self.empty_order = false;
    }

    /// Raised failures, in the order they are presented.
    #[must_use]
    pub fn notices(&self) -> Vec<CheckoutError> {
        [
            (self.store_closed, CheckoutError::StoreClosed),
            (self.collection_option, CheckoutError::MissingCollectionOption),
            (self.empty_order, CheckoutError::EmptyOrder),
        ]
        .into_iter()
        .filter_map(|(raised, error)| raised.then_some(error))
        .collect()
    }
}

/// A formatted order ready to hand to the URL opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: String,
    pub dispatch_url: String,
}

/// Run the pre-submission gate.
///
/// A closed store blocks everything else and is the only flag raised.
/// Otherwise a missing collection option and an empty order are reported
/// together.
///
/// # Errors
///
/// Returns the raised [`CheckoutErrors`] when any check fails.
pub fn validate_checkout(input: &CheckoutInput<'_>) -> Result<(), CheckoutErrors> {
    if !input.store_open {
        return Err(CheckoutErrors {
            store_closed: true,
            ..CheckoutErrors::default()
        });
    }

    let errors = CheckoutErrors {
        store_closed: false,
        collection_option: input.collection_option_id.is_none_or(str::is_empty),
        empty_order: input.cart.total(input.catalog) <= Decimal::ZERO,
    };

    if errors.is_clear() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Gate, format and build the dispatch URL for a real submission.
///
/// # Errors
///
/// Returns the raised [`CheckoutErrors`] without formatting anything when the
/// gate fails.
pub fn submit_order(
    input: &CheckoutInput<'_>,
    order_number: OrderNumber,
    placed_at: &NaiveDateTime,
) -> Result<Submission, CheckoutErrors> {
    validate_checkout(input)?;

    let message = format_order(
        input.cart,
        input.catalog,
        input.config,
        input.collection_option_id,
        order_number,
        placed_at,
    );
    let dispatch_url = build_dispatch_url(&message, &input.config.whatsapp_phone);

    tracing::info!(
        %order_number,
        items = input.cart.item_count(),
        collection_option = input.collection_option_id.unwrap_or_default(),
        "order submitted"
    );

    Ok(Submission {
        message,
        dispatch_url,
    })
}
