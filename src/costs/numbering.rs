use serde::Serialize;

use crate::services::{ServiceContext, ServiceItem, ServiceKey};

use super::currency::{format_money, Currency, ExchangeRate};

/// A line item ready for a table: numbered and converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub number: usize,
    #[serde(skip)]
    pub key: ServiceKey,
    pub context: ServiceContext,
    pub id: String,
    /// "{number}. {description}"
    pub description: String,
    pub amount: f64,
    pub secondary_amount: f64,
    pub is_reduction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl CostItem {
    pub fn signed_amount(&self) -> f64 {
        if self.is_reduction {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Reductions render with a leading "-".
    pub fn display_amount(&self, currency: Currency) -> String {
        format_money(self.signed_amount(), currency)
    }

    pub fn display_secondary_amount(&self, currency: Currency) -> String {
        let signed = if self.is_reduction {
            -self.secondary_amount
        } else {
            self.secondary_amount
        };
        format_money(signed, currency)
    }
}

/// Number items 1..=N in their current order.
///
/// Numbers follow position, so dropping an earlier item renumbers every item
/// after it.
pub fn number_items(items: &[ServiceItem], rate: &ExchangeRate) -> Vec<CostItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let number = index + 1;
            CostItem {
                number,
                key: item.key,
                context: item.context,
                id: item.id.clone(),
                description: format!("{number}. {}", item.description),
                amount: item.amount,
                secondary_amount: rate.to_secondary(item.amount),
                is_reduction: item.is_reduction,
                explanation: item.explanation.clone(),
            }
        })
        .collect()
}
