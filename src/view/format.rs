use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};

use crate::domain::order::OrderItem;
use crate::view::i18n::{t, Locale, Msg};

/// `$X.YY`, rounded half-up to two decimal places.
pub fn format_money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale_round(2, RoundingMode::HalfUp))
}

pub fn format_date(at: &DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::En => at.format("%-m/%-d/%Y").to_string(),
        Locale::Ar => at.format("%d/%m/%Y").to_string(),
    }
}

/// Upper-cases the first letter of each word: `on hold` -> `On Hold`.
pub fn format_status(status: &str) -> String {
    status
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Product title, or a label built from the product id.
pub fn product_label(item: &OrderItem, locale: Locale) -> String {
    match item.title() {
        Some(title) => title.to_string(),
        None => format!("{} {}", t(locale, Msg::ProductFallback), item.product_id),
    }
}
