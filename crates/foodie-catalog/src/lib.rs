pub mod client;
pub mod error;
pub mod source;

pub use client::{CatalogClient, LoadedShop};
pub use error::CatalogError;
pub use source::{ShopSource, SHOP_QUERY_PARAM};
