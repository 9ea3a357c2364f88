pub mod availability;
pub mod cart;
pub mod checkout;
pub mod dispatch;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod order;
pub mod product;
pub mod session;
pub mod settings;
pub mod settings_types;
pub mod shop;

pub use availability::{is_open, weekday_key};
pub use cart::CartState;
pub use checkout::{submit_order, validate_checkout, CheckoutInput, CheckoutErrors, Submission};
pub use dispatch::{build_dispatch_url, decode_dispatch_message, encode_message};
pub use error::{CheckoutError, ConfigError, DispatchError};
pub use i18n::{translate, Language, TranslationKey};
pub use menu::{categories, filter_by_category, CategoryFilter};
pub use order::{format_amount, format_order, summarize_order, OrderNumber, OrderSummary};
pub use product::{validate_products, DisplayOption, ProductItem};
pub use session::{LoadStatus, ShopSession};
pub use settings::{load_app_settings, load_app_settings_from_env};
pub use settings_types::AppSettings;
pub use shop::{
    load_shop_config_file, CollectionOption, Colors, OpeningHours, OpeningInterval, ShopConfig,
};
