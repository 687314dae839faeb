use serde::Serialize;

use crate::services::ServiceItem;

use super::currency::ExchangeRate;
use super::numbering::CostItem;

/// An amount in AED with its secondary currency counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Money {
    pub aed: f64,
    pub secondary: f64,
}

impl Money {
    /// The secondary amount is derived from the AED total, never summed from
    /// already converted items.
    pub fn from_aed(aed: f64, rate: &ExchangeRate) -> Self {
        Self {
            aed,
            secondary: rate.to_secondary(aed),
        }
    }
}

/// Non-reduction amounts minus reduction amounts.
pub fn sum_items(items: &[ServiceItem]) -> f64 {
    items.iter().map(ServiceItem::signed_amount).sum()
}

pub fn sum_cost_items<'a>(items: impl IntoIterator<Item = &'a CostItem>) -> f64 {
    items.into_iter().map(CostItem::signed_amount).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub setup: Money,
    pub visa: Money,
    pub yearly: Money,
    /// Optional services; shown separately and not part of `grand`
    pub additional: Money,
    pub grand: Money,
}

pub fn calculate_totals<'a>(
    setup: impl IntoIterator<Item = &'a CostItem>,
    visa: impl IntoIterator<Item = &'a CostItem>,
    yearly: impl IntoIterator<Item = &'a CostItem>,
    additional: impl IntoIterator<Item = &'a CostItem>,
    rate: &ExchangeRate,
) -> Totals {
    let setup = sum_cost_items(setup);
    let visa = sum_cost_items(visa);
    let yearly = sum_cost_items(yearly);
    let additional = sum_cost_items(additional);

    Totals {
        setup: Money::from_aed(setup, rate),
        visa: Money::from_aed(visa, rate),
        yearly: Money::from_aed(yearly, rate),
        additional: Money::from_aed(additional, rate),
        grand: Money::from_aed(setup + visa + yearly, rate),
    }
}
