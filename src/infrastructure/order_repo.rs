use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::LookupError;
use crate::domain::order::{LookupResponse, Order};
use crate::domain::ports::OrderLookup;
use crate::schema::{order_items, orders, products};

use super::models::{OrderItemRow, OrderRow};

const ORDER_NOT_FOUND: &str = "Order not found";

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for LookupError {
    fn from(e: diesel::result::Error) -> Self {
        LookupError::Backend(e.to_string())
    }
}

impl From<r2d2::Error> for LookupError {
    fn from(e: r2d2::Error) -> Self {
        LookupError::Backend(e.to_string())
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

/// Reads orders straight from the storefront's Postgres database.
pub struct DieselOrderLookup {
    pool: DbPool,
}

impl DieselOrderLookup {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Order>, LookupError> {
        let mut conn = pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .left_join(products::table)
            .filter(order_items::order_id.eq(&order.id))
            .order((order_items::created_at.asc(), order_items::id.asc()))
            .select((OrderItemRow::as_select(), products::title.nullable()))
            .load::<(OrderItemRow, Option<String>)>(&mut conn)?;

        Ok(Some(order.into_order(
            items
                .into_iter()
                .map(|(item, title)| item.into_item(title))
                .collect(),
        )))
    }
}

#[async_trait]
impl OrderLookup for DieselOrderLookup {
    async fn get_order_by_id(&self, order_id: &str) -> Result<LookupResponse, LookupError> {
        let pool = self.pool.clone();
        let id = order_id.to_string();

        let order = tokio::task::spawn_blocking(move || Self::find_by_id(&pool, &id))
            .await
            .map_err(|e| LookupError::Backend(e.to_string()))??;

        Ok(match order {
            Some(order) => LookupResponse::found(order),
            None => LookupResponse::failed(ORDER_NOT_FOUND),
        })
    }
}
