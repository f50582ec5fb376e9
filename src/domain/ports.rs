use async_trait::async_trait;

use super::errors::{LookupError, NotificationError};
use super::notification::OrderDetails;
use super::order::LookupResponse;

#[async_trait]
pub trait OrderLookup: Send + Sync + 'static {
    async fn get_order_by_id(&self, order_id: &str) -> Result<LookupResponse, LookupError>;
}

/// What the caller should do after a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Send the user to a pre-filled outbound message link.
    Redirect(String),
    /// The channel delivered the message itself.
    Delivered,
}

pub trait NotificationChannel: Send + Sync + 'static {
    fn dispatch(&self, details: &OrderDetails) -> Result<Dispatch, NotificationError>;
}
