use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product reference embedded in an order item. Only the title is carried;
/// the id lives on the item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    /// Unit price.
    pub price: BigDecimal,
    #[serde(rename = "products", default)]
    pub product: Option<ProductRef>,
}

impl OrderItem {
    pub fn title(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Unit price × quantity, unrounded.
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub total_price: BigDecimal,
    #[serde(default)]
    pub customer_first_name: Option<String>,
    #[serde(default)]
    pub customer_last_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_street_address: Option<String>,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_state: Option<String>,
    #[serde(default)]
    pub customer_postcode: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Order {
    /// First and last name joined, if either is set.
    pub fn customer_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.customer_first_name, &self.customer_last_name]
            .into_iter()
            .filter_map(populated)
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    pub fn customer_phone(&self) -> Option<&str> {
        populated(&self.customer_phone)
    }

    pub fn customer_email(&self) -> Option<&str> {
        populated(&self.customer_email)
    }

    /// Street line plus a `city, state postcode` line. `None` without a street.
    pub fn delivery_address(&self) -> Option<(String, Option<String>)> {
        let street = populated(&self.customer_street_address)?;

        let tail = [&self.customer_state, &self.customer_postcode]
            .into_iter()
            .filter_map(populated)
            .collect::<Vec<_>>()
            .join(" ");
        let locality = match (populated(&self.customer_city), tail.is_empty()) {
            (Some(city), false) => Some(format!("{city}, {tail}")),
            (Some(city), true) => Some(city.to_string()),
            (None, false) => Some(tail),
            (None, true) => None,
        };

        Some((street.to_string(), locality))
    }

    pub fn has_customer_info(&self) -> bool {
        self.customer_name().is_some()
            || self.customer_phone().is_some()
            || self.customer_email().is_some()
            || self.delivery_address().is_some()
    }
}

/// Envelope returned by the order lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LookupResponse {
    pub fn found(order: Order) -> Self {
        Self {
            order: Some(order),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            order: None,
            error: Some(message.into()),
        }
    }
}
