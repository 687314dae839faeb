//! Service description generators.
//!
//! Every generator is a list of [`ServiceRule`]s evaluated in order against a
//! context built from the input document. Generators never fail: missing
//! optional data simply produces no line item.

mod additional;
mod company_services;
mod golden_visa;
mod item;
mod pipeline;
mod setup;
mod taxation;
mod visa;
mod yearly;

pub use additional::{additional_rules, generate_additional_items};
pub use company_services::{
    company_services_rules, generate_company_services_items, CompanyServicesContext,
};
pub use golden_visa::{
    generate_dependent_tables, generate_golden_visa_authority_items,
    generate_golden_visa_tme_items, golden_visa_authority_rules, golden_visa_tme_rules,
    GoldenVisaContext,
};
pub use item::{count_label, ServiceContext, ServiceItem, ServiceKey, ServiceTable};
pub use pipeline::{evaluate_rules, rule_order, ServiceRule};
pub use setup::{
    det_setup_rules, fallback_setup_rules, generate_setup_items, ifza_setup_rules, SetupContext,
};
pub use taxation::{generate_taxation_items, taxation_rules};
pub use visa::{generate_visa_items, group_by_insurance, visa_rules, VisaContext, VisaProfile};
pub use yearly::{generate_yearly_items, yearly_rules, YearlyContext};
