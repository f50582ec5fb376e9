use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::order::{Order, OrderItem, ProductRef};
use crate::schema::{order_items, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: String,
    pub status: String,
    pub total_price: BigDecimal,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_street_address: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_postcode: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: String,
    pub status: String,
    pub total_price: BigDecimal,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_street_address: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_postcode: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: Uuid,
    pub order_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: Uuid,
    pub order_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub id: Uuid,
    pub title: String,
}

impl OrderItemRow {
    pub fn into_item(self, title: Option<String>) -> OrderItem {
        OrderItem {
            id: self.id.to_string(),
            product_id: self.product_id.to_string(),
            quantity: self.quantity,
            price: self.price,
            product: title.map(|title| ProductRef { title: Some(title) }),
        }
    }
}

impl OrderRow {
    pub fn into_order(self, order_items: Vec<OrderItem>) -> Order {
        Order {
            id: self.id,
            created_at: self.created_at,
            status: self.status,
            total_price: self.total_price,
            customer_first_name: self.customer_first_name,
            customer_last_name: self.customer_last_name,
            customer_phone: self.customer_phone,
            customer_email: self.customer_email,
            customer_street_address: self.customer_street_address,
            customer_city: self.customer_city,
            customer_state: self.customer_state,
            customer_postcode: self.customer_postcode,
            order_items,
        }
    }
}
