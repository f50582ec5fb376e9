use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::view::i18n::Locale;

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
}

/// Order summary handed to a notification channel.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub address: Option<String>,
    pub items: Vec<NotificationItem>,
    pub total: BigDecimal,
    pub locale: Locale,
}
