use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::costs::CostItem;
use crate::services::{ServiceContext, ServiceItem, ServiceKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub id: String,
    pub title: String,
    pub explanation: String,
}

/// An item that may carry footnote text.
pub trait Explainable {
    fn key(&self) -> ServiceKey;
    fn context(&self) -> ServiceContext;
    fn explanation(&self) -> Option<&str>;
}

impl Explainable for ServiceItem {
    fn key(&self) -> ServiceKey {
        self.key
    }

    fn context(&self) -> ServiceContext {
        self.context
    }

    fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

impl Explainable for CostItem {
    fn key(&self) -> ServiceKey {
        self.key
    }

    fn context(&self) -> ServiceContext {
        self.context
    }

    fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

/// "for spouse visa", "for spouse and child visa",
/// "for company, spouse and child visa"
fn context_phrase(contexts: impl IntoIterator<Item = ServiceContext>) -> Option<String> {
    let nouns: Vec<&str> = contexts.into_iter().filter_map(|c| c.visa_noun()).collect();
    let joined = match nouns.as_slice() {
        [] => return None,
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    };
    Some(format!("for {joined} visa"))
}

/// One explanation per service, however many tables mention it.
///
/// Contexts are merged into the title. The text comes from the lowest
/// context present (smallest text on ties), and the output follows service
/// order, so input order never changes the result.
pub fn deduplicate_explanations<'a, E, I>(items: I) -> Vec<Explanation>
where
    E: Explainable + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut grouped: BTreeMap<ServiceKey, BTreeMap<ServiceContext, BTreeSet<&'a str>>> =
        BTreeMap::new();

    for item in items {
        let Some(text) = item.explanation().map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        grouped
            .entry(item.key())
            .or_default()
            .entry(item.context())
            .or_default()
            .insert(text);
    }

    grouped
        .into_iter()
        .filter_map(|(key, contexts)| {
            let text = contexts.values().next()?.iter().next()?.to_string();
            let title = match context_phrase(contexts.keys().copied()) {
                Some(phrase) => format!("{} {}", key.title(), phrase),
                None => key.title(),
            };
            Some(Explanation {
                id: key.id(),
                title,
                explanation: text,
            })
        })
        .collect()
}
