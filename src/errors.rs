use thiserror::Error;

use crate::domain::errors::LookupError;
use crate::view::i18n::{t, Locale, Msg};

/// Why the confirmation page ended up in its error view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Order ID not found")]
    MissingIdentifier,

    #[error("{0}")]
    ServiceReported(String),

    #[error("Failed to load order")]
    OrderAbsent,

    #[error("Failed to load order details: {0}")]
    Unexpected(String),
}

impl From<LookupError> for LoadError {
    fn from(e: LookupError) -> Self {
        LoadError::Unexpected(e.to_string())
    }
}

impl LoadError {
    /// Text shown to the user. Only service-reported messages are passed
    /// through; unexpected failures never leak their detail.
    pub fn message(&self, locale: Locale) -> &str {
        match self {
            LoadError::MissingIdentifier => t(locale, Msg::OrderIdNotFound),
            LoadError::ServiceReported(msg) => msg.as_str(),
            LoadError::OrderAbsent => t(locale, Msg::FailedToLoadOrder),
            LoadError::Unexpected(_) => t(locale, Msg::FailedToLoadOrderDetails),
        }
    }
}
