use thiserror::Error;

use crate::i18n::TranslationKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read shop config file {path}: {source}")]
    ShopFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shop config file: {0}")]
    ShopFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// A single reason the pre-submission gate refused an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("the store is currently closed")]
    StoreClosed,

    #[error("no collection location selected")]
    MissingCollectionOption,

    #[error("the order has no items")]
    EmptyOrder,
}

impl CheckoutError {
    /// Translation key of the user-facing notice for this failure.
    #[must_use]
    pub fn notice_key(self) -> TranslationKey {
        match self {
            CheckoutError::StoreClosed => TranslationKey::StoreClosedDescription,
            CheckoutError::MissingCollectionOption => TranslationKey::SelectCollectionLocation,
            CheckoutError::EmptyOrder => TranslationKey::SelectAtLeastOneItem,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("dispatch URL has no text parameter: {url}")]
    MissingText { url: String },

    #[error("dispatch message is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
