//! Server-side HTML for the three confirmation views, built with maud so
//! every interpolated value is escaped.

use maud::{html, Markup, DOCTYPE};
use url::form_urlencoded;

use crate::application::order_loader::ViewState;
use crate::domain::order::Order;
use crate::errors::LoadError;
use crate::view::format::{format_date, format_money, format_status, product_label};
use crate::view::i18n::{t, Locale, Msg};

pub const HOME_PATH: &str = "/";
pub const CONTACT_PATH: &str = "/contact";

pub fn render(state: &ViewState, locale: Locale) -> Markup {
    match state {
        ViewState::Loading => render_loading(locale),
        ViewState::Error(err) => render_error(err, locale),
        ViewState::Loaded(order) => render_success(order, locale),
    }
}

pub fn render_loading(locale: Locale) -> Markup {
    page(
        locale,
        Msg::OrderSuccessTitle,
        html! {
            div class="card card--center" role="status" aria-busy="true" {
                div class="spinner" {}
                p class="muted" { (t(locale, Msg::LoadingOrderDetails)) }
            }
        },
    )
}

pub fn render_error(err: &LoadError, locale: Locale) -> Markup {
    page(
        locale,
        Msg::OrderErrorTitle,
        html! {
            div class="card card--center" {
                div class="icon icon--error" { "⚠️" }
                h2 { (t(locale, Msg::SomethingWentWrong)) }
                p class="muted error-message" { (err.message(locale)) }
                a class="button" href=(HOME_PATH) { (t(locale, Msg::ReturnHome)) }
            }
        },
    )
}

pub fn render_success(order: &Order, locale: Locale) -> Markup {
    page(
        locale,
        Msg::OrderSuccessTitle,
        html! {
            div class="card" {
                div class="success-header" {
                    div class="icon icon--success" { "✅" }
                    h1 { (t(locale, Msg::OrderPlaced)) }
                    p class="muted" { (t(locale, Msg::ThankYou)) }
                }
                div class="details" {
                    (order_block(order, locale))
                    @if order.has_customer_info() {
                        (customer_block(order, locale))
                    }
                }
                @if !order.order_items.is_empty() {
                    (items_block(order, locale))
                }
                (next_steps_block(order, locale))
            }
        },
    )
}

fn order_block(order: &Order, locale: Locale) -> Markup {
    let rows = [
        (Msg::OrderIdLabel, format!("#{}", order.id), "order-id"),
        (
            Msg::OrderDateLabel,
            format_date(&order.created_at, locale),
            "order-date",
        ),
        (Msg::StatusLabel, format_status(&order.status), "order-status"),
        (Msg::TotalLabel, format_money(&order.total_price), "order-total"),
    ];

    html! {
        section class="order-info" {
            h3 { (t(locale, Msg::OrderDetails)) }
            dl {
                @for (label, value, class) in rows {
                    div class="row" {
                        dt { (t(locale, label)) }
                        dd class=(class) { (value) }
                    }
                }
            }
        }
    }
}

fn customer_block(order: &Order, locale: Locale) -> Markup {
    html! {
        section class="customer-info" {
            h3 { (t(locale, Msg::CustomerInformation)) }
            dl {
                @if let Some(name) = order.customer_name() {
                    div { dt { (t(locale, Msg::NameLabel)) } dd { (name) } }
                }
                @if let Some(phone) = order.customer_phone() {
                    div { dt { (t(locale, Msg::PhoneLabel)) } dd { (phone) } }
                }
                @if let Some(email) = order.customer_email() {
                    div { dt { (t(locale, Msg::EmailLabel)) } dd { (email) } }
                }
                @if let Some((street, locality)) = order.delivery_address() {
                    div {
                        dt { (t(locale, Msg::DeliveryAddressLabel)) }
                        dd {
                            (street)
                            @if let Some(locality) = locality {
                                br;
                                (locality)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn items_block(order: &Order, locale: Locale) -> Markup {
    html! {
        section class="order-items" {
            h3 { (t(locale, Msg::OrderItems)) }
            ul {
                @for item in &order.order_items {
                    li class="item" data-item-id=(item.id) {
                        div {
                            h4 { (product_label(item, locale)) }
                            p class="muted" { (t(locale, Msg::QuantityLabel)) " " (item.quantity) }
                        }
                        p class="line-total" { (format_money(&item.line_total())) }
                    }
                }
            }
        }
    }
}

fn next_steps_block(order: &Order, locale: Locale) -> Markup {
    html! {
        section class="next-steps" {
            h3 { (t(locale, Msg::WhatsNext)) }
            div class="grid" {
                div class="tile" {
                    div class="icon" { "📞" }
                    h4 { (t(locale, Msg::WeWillContact)) }
                    p class="muted" { (t(locale, Msg::WeWillContactBody)) }
                }
                div class="tile" {
                    div class="icon" { "🚚" }
                    h4 { (t(locale, Msg::FastDelivery)) }
                    p class="muted" { (t(locale, Msg::FastDeliveryBody)) }
                }
            }
            div class="actions" {
                a class="button" href=(HOME_PATH) { (t(locale, Msg::ContinueShopping)) }
                a class="button button--outline" href=(CONTACT_PATH) { (t(locale, Msg::ContactUs)) }
            }
            form class="notify" method="post" action=(notify_path(locale, &order.id)) {
                button type="submit" class="button button--whatsapp" { (t(locale, Msg::SendWhatsApp)) }
            }
        }
    }
}

/// Confirmation page URL for an order.
pub fn page_path(locale: Locale, order_id: &str) -> String {
    with_order_id(&format!("/{}/order-success", locale.tag()), order_id)
}

pub fn notify_path(locale: Locale, order_id: &str) -> String {
    with_order_id(&format!("/{}/order-success/notify", locale.tag()), order_id)
}

fn with_order_id(path: &str, order_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("orderId", order_id)
        .finish();
    format!("{path}?{query}")
}

fn page(locale: Locale, title: Msg, content: Markup) -> Markup {
    let title = t(locale, title);
    html! {
        (DOCTYPE)
        html lang=(locale.tag()) dir=(locale.dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                nav class="breadcrumb" {
                    h1 { (title) }
                    ol {
                        li { a href=(HOME_PATH) { (t(locale, Msg::Home)) } }
                        li { (title) }
                    }
                }
                main class="section" { (content) }
            }
        }
    }
}
