use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProposalError, Result};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aed,
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Aed => "AED",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Aed => "AED ",
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "AED" => Some(Currency::Aed),
            "EUR" => Some(Currency::Eur),
            "USD" => Some(Currency::Usd),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Conversion from AED into the client's secondary currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    currency: Currency,
    /// AED per unit of `currency`
    rate: f64,
}

impl ExchangeRate {
    pub fn new(currency: Currency, rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ProposalError::InvalidExchangeRate(rate));
        }
        Ok(Self { currency, rate })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Unrounded; round only when formatting.
    pub fn to_secondary(&self, aed: f64) -> f64 {
        aed / self.rate
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Group digits with thousands separators: 1234567 -> "1,234,567"
pub fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Two decimals with thousands separators: 23900 -> "23,900.00"
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let formatted = format!("{}.{:02}", format_grouped_int(cents / 100), cents % 100);
    if value < 0.0 && cents != 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// "AED 23,900.00", "€5,975.00", "-AED 1,000.00"
pub fn format_money(value: f64, currency: Currency) -> String {
    let amount = format_amount(value.abs());
    let cents = (value.abs() * 100.0).round() as i64;
    if value < 0.0 && cents != 0 {
        format!("-{}{}", currency.symbol(), amount)
    } else {
        format!("{}{}", currency.symbol(), amount)
    }
}
