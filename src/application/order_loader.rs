use crate::domain::errors::LookupError;
use crate::domain::order::{LookupResponse, Order};
use crate::domain::ports::OrderLookup;
use crate::errors::LoadError;
use crate::view::i18n::Locale;

/// What the confirmation page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(LoadError),
    Loaded(Order),
}

/// Issued for every lookup started by [`OrderSuccessPage::navigate`]. Only the
/// ticket of the latest generation may settle the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    order_id: String,
}

impl FetchTicket {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Same identifier as last time; nothing to do.
    Unchanged,
    /// Settled without a lookup (no identifier).
    Resolved,
    /// A lookup must be issued for the ticket's identifier.
    Fetch(FetchTicket),
}

/// Maps a settled lookup onto the page's outcome.
pub fn classify(result: Result<LookupResponse, LookupError>) -> Result<Order, LoadError> {
    match result {
        Ok(LookupResponse {
            error: Some(message),
            ..
        }) if !message.is_empty() => Err(LoadError::ServiceReported(message)),
        Ok(LookupResponse {
            order: Some(order),
            ..
        }) => Ok(order),
        Ok(LookupResponse { order: None, .. }) => Err(LoadError::OrderAbsent),
        Err(e) => Err(e.into()),
    }
}

/// Per-request state of the order confirmation page.
pub struct OrderSuccessPage {
    locale: Locale,
    state: ViewState,
    generation: u64,
    // `None` until the first navigation; `Some(None)` for a missing identifier.
    current: Option<Option<String>>,
}

impl OrderSuccessPage {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            state: ViewState::Loading,
            generation: 0,
            current: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn order(&self) -> Option<&Order> {
        match &self.state {
            ViewState::Loaded(order) => Some(order),
            _ => None,
        }
    }

    /// Points the page at a (possibly absent) order identifier.
    pub fn navigate(&mut self, order_id: Option<&str>) -> Navigation {
        let order_id = order_id.filter(|id| !id.is_empty());
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.as_deref() == order_id)
        {
            return Navigation::Unchanged;
        }

        self.generation += 1;
        self.current = Some(order_id.map(str::to_string));

        match order_id {
            None => {
                log::warn!("Order confirmation requested without an order id");
                self.state = ViewState::Error(LoadError::MissingIdentifier);
                Navigation::Resolved
            }
            Some(id) => {
                self.state = ViewState::Loading;
                Navigation::Fetch(FetchTicket {
                    generation: self.generation,
                    order_id: id.to_string(),
                })
            }
        }
    }

    /// Applies a lookup result. Returns `false` when the ticket was superseded
    /// by a later navigation and the result was dropped.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<LookupResponse, LookupError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale lookup result for order {} (generation {}, current {})",
                ticket.order_id,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match classify(result) {
            Ok(order) => {
                log::info!("Loaded order {}", order.id);
                ViewState::Loaded(order)
            }
            Err(LoadError::Unexpected(detail)) => {
                log::error!("Failed to load order {}: {}", ticket.order_id, detail);
                ViewState::Error(LoadError::Unexpected(detail))
            }
            Err(e) => {
                log::warn!("Order {} could not be shown: {}", ticket.order_id, e);
                ViewState::Error(e)
            }
        };
        true
    }

    /// Navigates and, if needed, performs the lookup and settles the page.
    pub async fn load(&mut self, order_id: Option<&str>, lookup: &dyn OrderLookup) -> &ViewState {
        if let Navigation::Fetch(ticket) = self.navigate(order_id) {
            let result = lookup.get_order_by_id(ticket.order_id()).await;
            self.settle(ticket, result);
        }
        &self.state
    }
}
