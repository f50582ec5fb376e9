use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::errors::LookupError;
use crate::domain::order::LookupResponse;
use crate::domain::ports::OrderLookup;

/// Order lookup against the storefront's order API: `GET {base}/orders/{id}`
/// answering with a `{ "order": ..., "error": ... }` envelope.
pub struct HttpOrderLookup {
    client: Client,
    base_url: Url,
}

impl HttpOrderLookup {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::Transport(format!("Invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Transport(format!(
                "Base url '{base_url}' cannot carry a path"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn order_url(&self, order_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("orders").push(order_id);
        }
        url
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}

#[async_trait]
impl OrderLookup for HttpOrderLookup {
    async fn get_order_by_id(&self, order_id: &str) -> Result<LookupResponse, LookupError> {
        let url = self.order_url(order_id);
        log::debug!("Fetching order from {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        match serde_json::from_slice::<LookupResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(LookupError::Status(status.as_u16())),
            Err(e) => Err(LookupError::Decode(e.to_string())),
        }
    }
}
