//! Formatting service: currency configuration and localized rendering of
//! amounts and month labels. The engine computes numbers only; every string
//! a user sees comes from here.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("DOP")
    }
}

/// Currency configuration persisted alongside the entity collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyConfig {
    pub code: CurrencyCode,
    pub locale: String,
    pub show_decimals: bool,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: CurrencyCode::default(),
            locale: "es-DO".into(),
            show_decimals: true,
        }
    }
}

impl CurrencyConfig {
    /// Switches currency, carrying the matching locale from the registry.
    pub fn select(&mut self, code: &str) {
        self.code = CurrencyCode::new(code);
        if let Some(info) = currency_info(self.code.as_str()) {
            self.locale = info.locale.to_string();
        }
    }
}

/// One registry entry of the supported currencies.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub locale: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "DOP", locale: "es-DO", symbol: "RD$", name: "Peso Dominicano" },
    CurrencyInfo { code: "USD", locale: "en-US", symbol: "$", name: "Dólar Estadounidense" },
    CurrencyInfo { code: "EUR", locale: "es-ES", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "COP", locale: "es-CO", symbol: "$", name: "Peso Colombiano" },
    CurrencyInfo { code: "MXN", locale: "es-MX", symbol: "$", name: "Peso Mexicano" },
    CurrencyInfo { code: "ARS", locale: "es-AR", symbol: "$", name: "Peso Argentino" },
    CurrencyInfo { code: "CLP", locale: "es-CL", symbol: "$", name: "Peso Chileno" },
    CurrencyInfo { code: "PEN", locale: "es-PE", symbol: "S/", name: "Sol Peruano" },
    CurrencyInfo { code: "VES", locale: "es-VE", symbol: "Bs", name: "Bolívar" },
    CurrencyInfo { code: "GTQ", locale: "es-GT", symbol: "Q", name: "Quetzal" },
    CurrencyInfo { code: "HNL", locale: "es-HN", symbol: "L", name: "Lempira" },
    CurrencyInfo { code: "NIO", locale: "es-NI", symbol: "C$", name: "Córdoba" },
    CurrencyInfo { code: "CRC", locale: "es-CR", symbol: "₡", name: "Colón" },
    CurrencyInfo { code: "PYG", locale: "es-PY", symbol: "₲", name: "Guaraní" },
    CurrencyInfo { code: "UYU", locale: "es-UY", symbol: "$", name: "Peso Uruguayo" },
    CurrencyInfo { code: "BOB", locale: "es-BO", symbol: "Bs", name: "Boliviano" },
];

static CURRENCY_INDEX: Lazy<HashMap<&'static str, &'static CurrencyInfo>> =
    Lazy::new(|| CURRENCIES.iter().map(|info| (info.code, info)).collect());

pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCY_INDEX.get(code).copied()
}

pub fn symbol_for(code: &str) -> String {
    match currency_info(code) {
        Some(info) => info.symbol.to_string(),
        None => code.to_string(),
    }
}

/// Renders a monetary amount per the active configuration. Rounding happens
/// here and only here; the engine aggregates at full precision.
pub fn format_amount(value: Decimal, config: &CurrencyConfig) -> String {
    let precision: u32 = if config.show_decimals { 2 } else { 0 };
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let mut body = format!("{:.*}", precision as usize, rounded.abs());
    group_integer_part(&mut body);
    let symbol = symbol_for(config.code.as_str());
    if negative {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

fn group_integer_part(body: &mut String) {
    let split = body.find('.').unwrap_or(body.len());
    let grouped = group_digits(&body[..split]);
    body.replace_range(..split, &grouped);
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

const MONTHS_ES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month label for time-series buckets, localized by the configured
/// locale's language. `month` is 1-based; out-of-range yields an empty label.
pub fn short_month_label(month: u32, config: &CurrencyConfig) -> &'static str {
    let table = if config.locale.starts_with("es") {
        &MONTHS_ES
    } else {
        &MONTHS_EN
    };
    match month {
        1..=12 => table[(month - 1) as usize],
        _ => "",
    }
}
