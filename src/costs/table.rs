use serde::Serialize;

use crate::layout::{ItemCount, Section, Sectioned};
use crate::services::{ServiceContext, ServiceTable};

use super::currency::ExchangeRate;
use super::numbering::{number_items, CostItem};
use super::totals::{sum_cost_items, Money};

/// A numbered table as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTable {
    pub title: String,
    pub section: Section,
    pub context: ServiceContext,
    pub items: Vec<CostItem>,
    pub total: Money,
}

impl CostTable {
    pub fn from_service_table(table: &ServiceTable, rate: &ExchangeRate) -> Self {
        let items = number_items(&table.items, rate);
        let total = Money::from_aed(sum_cost_items(&items), rate);
        Self {
            title: table.title.clone(),
            section: table.section,
            context: table.context,
            items,
            total,
        }
    }
}

impl ItemCount for CostTable {
    fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Sectioned for CostTable {
    fn section(&self) -> Section {
        self.section
    }
}
