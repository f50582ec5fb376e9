use crate::domain::notification::{NotificationItem, OrderDetails};
use crate::domain::order::{Order, OrderItem};
use crate::view::format::{format_date, format_money, format_status, product_label};
use crate::view::i18n::{t, Locale, Msg};

pub fn order_details(order: &Order, items: &[OrderItem], locale: Locale) -> OrderDetails {
    let address = order
        .delivery_address()
        .map(|(street, locality)| match locality {
            Some(locality) => format!("{street}, {locality}"),
            None => street,
        });

    OrderDetails {
        order_id: order.id.clone(),
        created_at: order.created_at,
        status: order.status.clone(),
        customer_name: order.customer_name(),
        customer_phone: order.customer_phone().map(str::to_string),
        customer_email: order.customer_email().map(str::to_string),
        address,
        items: items
            .iter()
            .map(|item| NotificationItem {
                name: product_label(item, locale),
                quantity: item.quantity,
                unit_price: item.price.clone(),
                line_total: item.line_total(),
            })
            .collect(),
        total: order.total_price.clone(),
        locale,
    }
}

impl OrderDetails {
    /// Plain-text summary suitable for a chat message.
    pub fn message(&self) -> String {
        let locale = self.locale;
        let mut lines = vec![
            format!("{} #{}", t(locale, Msg::NewOrder), self.order_id),
            format!(
                "{} {}",
                t(locale, Msg::OrderDateLabel),
                format_date(&self.created_at, locale)
            ),
            format!(
                "{} {}",
                t(locale, Msg::StatusLabel),
                format_status(&self.status)
            ),
        ];

        let customer = [
            (Msg::NameLabel, &self.customer_name),
            (Msg::PhoneLabel, &self.customer_phone),
            (Msg::EmailLabel, &self.customer_email),
            (Msg::DeliveryAddressLabel, &self.address),
        ];
        let customer: Vec<String> = customer
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .as_ref()
                    .map(|value| format!("{} {}", t(locale, label), value))
            })
            .collect();
        if !customer.is_empty() {
            lines.push(String::new());
            lines.extend(customer);
        }

        if !self.items.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}:", t(locale, Msg::OrderItems)));
            for item in &self.items {
                lines.push(format!(
                    "- {} x{} @ {} = {}",
                    item.name,
                    item.quantity,
                    format_money(&item.unit_price),
                    format_money(&item.line_total)
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            t(locale, Msg::TotalLabel),
            format_money(&self.total)
        ));
        lines.join("\n")
    }
}
