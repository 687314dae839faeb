use tracing::trace;

use super::item::{ServiceItem, ServiceKey};

/// One step of a generator: when it applies and which items it produces.
///
/// Generators are plain slices of rules, so the line item order of a table
/// is the order of its rule list.
pub struct ServiceRule<C> {
    pub key: ServiceKey,
    applies: fn(&C) -> bool,
    build: fn(&C) -> Vec<ServiceItem>,
}

impl<C> ServiceRule<C> {
    pub fn new(
        key: ServiceKey,
        applies: fn(&C) -> bool,
        build: fn(&C) -> Vec<ServiceItem>,
    ) -> Self {
        Self { key, applies, build }
    }

    /// A rule gated only by its amount being positive.
    pub fn always(key: ServiceKey, build: fn(&C) -> Vec<ServiceItem>) -> Self {
        Self::new(key, |_| true, build)
    }
}

/// Run the rules in order. Items with a zero, negative or non-finite amount
/// are dropped so no empty rows reach a document.
pub fn evaluate_rules<C>(rules: &[ServiceRule<C>], context: &C) -> Vec<ServiceItem> {
    let mut items = Vec::new();

    for rule in rules {
        if !(rule.applies)(context) {
            trace!(key = ?rule.key, "rule not applicable");
            continue;
        }

        for item in (rule.build)(context) {
            if item.amount.is_finite() && item.amount > 0.0 {
                items.push(item);
            } else {
                trace!(key = ?rule.key, amount = item.amount, "dropping non-positive item");
            }
        }
    }

    items
}

/// The documented order of a generator.
pub fn rule_order<C>(rules: &[ServiceRule<C>]) -> Vec<ServiceKey> {
    rules.iter().map(|rule| rule.key).collect()
}
