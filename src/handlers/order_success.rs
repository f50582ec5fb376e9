use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::application::notification::order_details;
use crate::application::order_loader::OrderSuccessPage;
use crate::domain::ports::Dispatch;
use crate::view::i18n::Locale;
use crate::view::render::{page_path, render};
use crate::AppState;

// ── Query parameters ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OrderSuccessParams {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /{locale}/order-success?orderId=...
///
/// Loads the order and renders whichever view the page settled in. Error
/// views are still a normal page, so the status is always 200.
pub async fn show(
    state: web::Data<AppState>,
    locale: web::Path<String>,
    query: web::Query<OrderSuccessParams>,
) -> HttpResponse {
    let locale = Locale::from_tag(&locale);
    let mut page = OrderSuccessPage::new(locale);

    let view = page
        .load(query.order_id.as_deref(), state.lookup.as_ref())
        .await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render(view, locale).into_string())
}

/// POST /{locale}/order-success/notify?orderId=...
///
/// Best-effort: whatever happens, the user ends up either on the channel's
/// outbound link or back on the confirmation page.
pub async fn notify(
    state: web::Data<AppState>,
    locale: web::Path<String>,
    query: web::Query<OrderSuccessParams>,
) -> HttpResponse {
    let locale = Locale::from_tag(&locale);
    let order_id = query.order_id.as_deref().unwrap_or_default();
    let back = page_path(locale, order_id);

    let mut page = OrderSuccessPage::new(locale);
    page.load(query.order_id.as_deref(), state.lookup.as_ref())
        .await;
    let Some(order) = page.order() else {
        log::warn!("Notification requested for order '{}' that could not be loaded", order_id);
        return see_other(&back);
    };

    let details = order_details(order, &order.order_items, locale);
    match state.notifier.dispatch(&details) {
        Ok(Dispatch::Redirect(link)) => see_other(&link),
        Ok(Dispatch::Delivered) => see_other(&back),
        Err(e) => {
            log::error!("Error sending order {} notification: {}", order.id, e);
            see_other(&back)
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
