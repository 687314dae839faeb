use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::pagination::ItemCount;

/// Pages of a proposal, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Cover,
    InitialSetup,
    CompanyVisas,
    SpouseVisa,
    ChildVisas,
    YearlyRunning,
    AdditionalServices,
    GoldenVisaAuthority,
    GoldenVisaDependents,
    CompanyServices,
    Taxation,
    Explanations,
    Closing,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::Cover,
        Section::InitialSetup,
        Section::CompanyVisas,
        Section::SpouseVisa,
        Section::ChildVisas,
        Section::YearlyRunning,
        Section::AdditionalServices,
        Section::GoldenVisaAuthority,
        Section::GoldenVisaDependents,
        Section::CompanyServices,
        Section::Taxation,
        Section::Explanations,
        Section::Closing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Cover => "Cover",
            Section::InitialSetup => "Initial Setup Cost",
            Section::CompanyVisas => "Company Visa Cost",
            Section::SpouseVisa => "Spouse Visa Cost",
            Section::ChildVisas => "Child Visa Cost",
            Section::YearlyRunning => "Yearly Running Cost",
            Section::AdditionalServices => "Additional Services",
            Section::GoldenVisaAuthority => "Golden Visa Authority Cost",
            Section::GoldenVisaDependents => "Dependent Golden Visa Cost",
            Section::CompanyServices => "Company Services",
            Section::Taxation => "Taxation Services",
            Section::Explanations => "Explanations",
            Section::Closing => "Closing",
        }
    }

    /// Cover and closing pages are printed for every document.
    fn is_fixed(&self) -> bool {
        matches!(self, Section::Cover | Section::Closing)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Anything that belongs to one section and has line items.
pub trait Sectioned: ItemCount {
    fn section(&self) -> Section;
}

/// Sections to print, in page order.
///
/// A content section is shown only when at least one of its tables has items;
/// the explanations page only when there is something to explain.
pub fn visible_sections<'a, T>(
    tables: impl IntoIterator<Item = &'a T>,
    has_explanations: bool,
) -> Vec<Section>
where
    T: Sectioned + 'a,
{
    let filled: BTreeSet<Section> = tables
        .into_iter()
        .filter(|table| table.item_count() > 0)
        .map(Sectioned::section)
        .collect();

    Section::ALL
        .into_iter()
        .filter(|section| match section {
            s if s.is_fixed() => true,
            Section::Explanations => has_explanations,
            s => filled.contains(s),
        })
        .collect()
}
