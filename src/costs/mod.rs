//! Numbering, currency conversion and aggregation of generated line items.

mod currency;
mod numbering;
mod table;
mod totals;

pub use currency::{
    format_amount, format_grouped_int, format_money, round_to_cents, Currency, ExchangeRate,
};
pub use numbering::{number_items, CostItem};
pub use table::CostTable;
pub use totals::{calculate_totals, sum_cost_items, sum_items, Money, Totals};
