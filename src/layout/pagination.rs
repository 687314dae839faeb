//! Splitting breakdown tables into page groups.
//!
//! Every strategy here preserves the input order and places each table in
//! exactly one group: concatenating the groups gives back the input.

use serde::Serialize;

pub trait ItemCount {
    fn item_count(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGroup<T> {
    /// 1-based position among the breakdown pages
    pub page: usize,
    pub tables: Vec<T>,
    pub carries_explanations: bool,
}

impl<T: ItemCount> PageGroup<T> {
    pub fn item_count(&self) -> usize {
        self.tables.iter().map(ItemCount::item_count).sum()
    }
}

fn into_groups<T>(chunks: Vec<Vec<T>>) -> Vec<PageGroup<T>> {
    chunks
        .into_iter()
        .filter(|tables| !tables.is_empty())
        .enumerate()
        .map(|(index, tables)| PageGroup {
            page: index + 1,
            tables,
            carries_explanations: false,
        })
        .collect()
}

fn chunked<T>(tables: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(size);
    for table in tables {
        current.push(table);
        if current.len() == size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Which dependents have a breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DependentPlan {
    /// The first table is the spouse's
    pub has_spouse: bool,
    pub number_of_children: u32,
    /// Cancellation lines make every table longer
    pub has_visa_cancellation: bool,
}

impl DependentPlan {
    pub fn needs_split(&self) -> bool {
        self.has_visa_cancellation || (self.has_spouse && self.number_of_children > 2)
    }
}

const CHILDREN_PER_PAGE_WITH_CANCELLATION: usize = 3;
const TABLES_PER_PAGE: usize = 2;

/// Group spouse and child breakdown tables into pages.
///
/// Tables are expected in document order: spouse first (if any), then children.
pub fn paginate_dependents<T>(tables: Vec<T>, plan: &DependentPlan) -> Vec<PageGroup<T>> {
    if tables.is_empty() {
        return Vec::new();
    }

    if !plan.needs_split() {
        return into_groups(vec![tables]);
    }

    if plan.has_visa_cancellation {
        let mut tables = tables.into_iter();
        let mut chunks = Vec::new();
        if plan.has_spouse {
            chunks.push(tables.by_ref().take(1).collect());
        }
        chunks.extend(chunked(tables.collect(), CHILDREN_PER_PAGE_WITH_CANCELLATION));
        return into_groups(chunks);
    }

    into_groups(chunked(tables, TABLES_PER_PAGE))
}

/// Fill pages greedily up to `max_items` line items.
///
/// A table is never split; one larger than the budget gets a page of its own.
pub fn paginate_by_item_budget<T: ItemCount>(
    tables: Vec<T>,
    max_items: usize,
) -> Vec<PageGroup<T>> {
    let mut chunks: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut used = 0;

    for table in tables {
        let count = table.item_count();
        if !current.is_empty() && used + count > max_items {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        used += count;
        current.push(table);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    into_groups(chunks)
}

/// Where the explanations page content ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ExplanationPlacement {
    None,
    /// Printed below the tables of this page group
    Inline { page: usize },
    /// A dedicated page after the last group
    TrailingPage { page: usize },
}

/// Route explanations inline or onto a trailing page.
///
/// Inline only when `total_items <= threshold`, and then always on the last
/// group with tables. Marks the receiving group.
pub fn place_explanations<T>(
    groups: &mut [PageGroup<T>],
    has_explanations: bool,
    total_items: usize,
    threshold: usize,
) -> ExplanationPlacement {
    for group in groups.iter_mut() {
        group.carries_explanations = false;
    }

    if !has_explanations {
        return ExplanationPlacement::None;
    }

    let last = groups.iter_mut().rev().find(|group| !group.tables.is_empty());
    match last {
        Some(group) if total_items <= threshold => {
            group.carries_explanations = true;
            ExplanationPlacement::Inline { page: group.page }
        }
        Some(group) => ExplanationPlacement::TrailingPage {
            page: group.page + 1,
        },
        None => ExplanationPlacement::TrailingPage { page: 1 },
    }
}

/// Paginated breakdowns plus where their explanations go.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout<T> {
    pub groups: Vec<PageGroup<T>>,
    pub explanations: ExplanationPlacement,
}

impl<T> Default for PageLayout<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            explanations: ExplanationPlacement::None,
        }
    }
}

impl<T: ItemCount> PageLayout<T> {
    pub fn new(
        mut groups: Vec<PageGroup<T>>,
        has_explanations: bool,
        threshold: usize,
    ) -> Self {
        let total_items = groups.iter().map(PageGroup::item_count).sum();
        let explanations =
            place_explanations(&mut groups, has_explanations, total_items, threshold);
        Self {
            groups,
            explanations,
        }
    }

    pub fn page_count(&self) -> usize {
        let trailing = matches!(self.explanations, ExplanationPlacement::TrailingPage { .. });
        self.groups.len() + usize::from(trailing)
    }
}
