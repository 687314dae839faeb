//! Section visibility, page grouping and the explanations page.

mod explanations;
mod pagination;
mod sections;

pub use explanations::{deduplicate_explanations, Explainable, Explanation};
pub use pagination::{
    paginate_by_item_budget, paginate_dependents, place_explanations, DependentPlan,
    ExplanationPlacement, ItemCount, PageGroup, PageLayout,
};
pub use sections::{visible_sections, Section, Sectioned};
