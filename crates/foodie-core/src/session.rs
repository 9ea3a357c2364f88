//! Storefront view state.
//!
//! [`ShopSession`] is the single owner of everything the storefront view
//! mutates: active and staged configuration, catalog, cart, menu selection,
//! order drawer, load status and the checkout error flags. The cart engine,
//! availability check and order formatter are called on snapshots of it.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::availability::is_open;
use crate::cart::CartState;
use crate::checkout::{submit_order, CheckoutErrors, CheckoutInput, Submission};
use crate::menu::{categories, filter_by_category, CategoryFilter};
use crate::order::{format_order, OrderNumber};
use crate::product::ProductItem;
use crate::shop::ShopConfig;

/// Generic notice shown when either startup fetch fails.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load shop data. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Terminal for this view; nothing retries.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ShopSession {
    config: ShopConfig,
    staged_config: ShopConfig,
    catalog: Vec<ProductItem>,
    cart: CartState,
    selected_category: CategoryFilter,
    collection_option: Option<String>,
    order_drawer_open: bool,
    status: LoadStatus,
    store_open: bool,
    errors: CheckoutErrors,
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

impl ShopSession {
    /// A loading session with `config` active and staged. The store starts
    /// open until the first availability check runs.
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        Self {
            staged_config: config.clone(),
            config,
            catalog: Vec::new(),
            cart: CartState::new(),
            selected_category: CategoryFilter::All,
            collection_option: None,
            order_drawer_open: false,
            status: LoadStatus::Loading,
            store_open: true,
            errors: CheckoutErrors::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    #[must_use]
    pub fn staged_config(&self) -> &ShopConfig {
        &self.staged_config
    }

    #[must_use]
    pub fn catalog(&self) -> &[ProductItem] {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn store_open(&self) -> bool {
        self.store_open
    }

    #[must_use]
    pub fn errors(&self) -> CheckoutErrors {
        self.errors
    }

    #[must_use]
    pub fn order_drawer_open(&self) -> bool {
        self.order_drawer_open
    }

    #[must_use]
    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    #[must_use]
    pub fn collection_option(&self) -> Option<&str> {
        self.collection_option.as_deref()
    }

    /// Install a freshly fetched configuration as both active and staged.
    pub fn apply_config(&mut self, config: ShopConfig) {
        self.staged_config = config.clone();
        self.config = config;
    }

    /// Replace the catalog wholesale and reset every quantity to zero.
    ///
    /// Quantities are reset even for ids present in the previous catalog.
    pub fn load_catalog(&mut self, catalog: Vec<ProductItem>) {
        self.cart.initialize(catalog.iter().map(|item| item.id.as_str()));
        self.catalog = catalog;
        self.order_drawer_open = false;
        self.status = LoadStatus::Ready;
        tracing::debug!(products = self.catalog.len(), "catalog loaded into session");
    }

    pub fn fail_load(&mut self) {
        self.status = LoadStatus::Failed(LOAD_FAILED_NOTICE.to_string());
    }

    /// Apply a quantity change and close the order drawer once the cart empties.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64) -> u32 {
        let quantity = self.cart.set_quantity(product_id, delta);
        if self.cart.is_empty() {
            self.order_drawer_open = false;
        } else {
            self.errors.clear_empty_order();
        }
        quantity
    }

    /// Remove a line from the order.
    pub fn remove_line(&mut self, product_id: &str) {
        self.cart.clear(product_id);
        if self.cart.is_empty() {
            self.order_drawer_open = false;
        }
    }

    /// Open the order drawer; refused while the cart is empty.
    pub fn open_order_drawer(&mut self) -> bool {
        self.order_drawer_open = !self.cart.is_empty();
        self.order_drawer_open
    }

    pub fn close_order_drawer(&mut self) {
        self.order_drawer_open = false;
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }

    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        categories(&self.catalog)
    }

    /// Products shown under the current category selection.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&ProductItem> {
        filter_by_category(&self.catalog, &self.selected_category)
    }

    /// Select a collection option by id and clear its error flag.
    pub fn select_collection_option(&mut self, id: &str) {
        self.collection_option = Some(id.to_string());
        self.errors.clear_collection_option();
    }

    /// Re-evaluate opening hours at `now` and return the new state.
    pub fn refresh_availability<T>(&mut self, now: &T) -> bool
    where
        T: Datelike + Timelike,
    {
        let open = is_open(&self.config.opening_hours, now);
        if open != self.store_open {
            tracing::info!(open, shop = %self.config.shop_name, "store availability changed");
        }
        self.store_open = open;
        if open {
            self.errors.clear_store_closed();
        }
        open
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total(&self.catalog)
    }

    /// Edit the staged configuration only; the active one is untouched.
    pub fn stage_config<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ShopConfig),
    {
        edit(&mut self.staged_config);
    }

    /// Promote the staged configuration to active. The cart is not touched.
    pub fn save_config(&mut self) {
        self.config = self.staged_config.clone();
        tracing::info!(shop = %self.config.shop_name, "configuration saved");
    }

    /// Restore the embedded default configuration into the staged copy.
    pub fn reset_config(&mut self) {
        self.staged_config = ShopConfig::default();
    }

    /// Format the current order without running the gate.
    #[must_use]
    pub fn preview(&self, order_number: OrderNumber, placed_at: &NaiveDateTime) -> String {
        format_order(
            &self.cart,
            &self.catalog,
            &self.config,
            self.collection_option.as_deref(),
            order_number,
            placed_at,
        )
    }

    /// Run the gate and, when it passes, format and build the dispatch URL.
    ///
    /// Raised flags are stored on the session so they can be cleared
    /// individually afterwards. A successful submission closes the drawer.
    ///
    /// # Errors
    ///
    /// Returns the raised [`CheckoutErrors`] when the gate fails.
    pub fn checkout(
        &mut self,
        order_number: OrderNumber,
        placed_at: &NaiveDateTime,
    ) -> Result<Submission, CheckoutErrors> {
        let input = CheckoutInput {
            cart: &self.cart,
            catalog: &self.catalog,
            config: &self.config,
            collection_option_id: self.collection_option.as_deref(),
            store_open: self.store_open,
        };

        match submit_order(&input, order_number, placed_at) {
            Ok(submission) => {
                self.errors = CheckoutErrors::default();
                self.order_drawer_open = false;
                Ok(submission)
            }
            Err(errors) => {
                tracing::warn!(?errors, "checkout blocked");
                self.errors = errors;
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
