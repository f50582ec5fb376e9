use reqwest::Url;

use crate::domain::errors::NotificationError;
use crate::domain::notification::OrderDetails;
use crate::domain::ports::{Dispatch, NotificationChannel};

const WA_ME: &str = "https://wa.me/";

/// Sends the order summary as a pre-filled WhatsApp chat link to the shop's
/// business number.
pub struct WhatsAppChannel {
    number: Option<String>,
}

impl WhatsAppChannel {
    pub fn new(number: Option<String>) -> Self {
        Self { number }
    }

    /// Digits of the configured number, `+` and common separators removed.
    fn digits(&self) -> Result<String, NotificationError> {
        let raw = self
            .number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(NotificationError::NotConfigured)?;

        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, '+' | ' ' | '-' | '(' | ')'))
            .collect();
        if !(7..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(NotificationError::InvalidNumber(raw.to_string()));
        }
        Ok(digits)
    }

    pub fn message_link(&self, details: &OrderDetails) -> Result<Url, NotificationError> {
        let digits = self.digits()?;
        Url::parse_with_params(
            &format!("{WA_ME}{digits}"),
            &[("text", details.message())],
        )
        .map_err(|e| NotificationError::Link(e.to_string()))
    }
}

impl NotificationChannel for WhatsAppChannel {
    fn dispatch(&self, details: &OrderDetails) -> Result<Dispatch, NotificationError> {
        let link = self.message_link(details)?;
        log::info!("Prepared WhatsApp notification for order {}", details.order_id);
        Ok(Dispatch::Redirect(link.into()))
    }
}
