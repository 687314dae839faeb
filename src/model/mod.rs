//! Strongly typed input documents.
//!
//! The form layer posts one envelope ([`DocumentRequest`]) per document. It is
//! converted into a [`Document`] whose body is exactly one of the supported
//! document kinds, so generators never probe optional bags of unrelated data.

mod client;
mod company_services;
mod document;
mod golden_visa;
mod offer;
mod taxation;
mod visa;

pub use client::ClientDetails;
pub use company_services::{
    AccountingFrequency, AccountingService, CompanyServicesData, PayrollService,
};
pub use document::{Document, DocumentBody, DocumentKind, DocumentRequest};
pub use golden_visa::{
    GoldenVisaChildren, GoldenVisaData, GoldenVisaDependents, GoldenVisaSpouse, GoldenVisaType,
};
pub use offer::{
    AdditionalServices, DetLicense, DetLicenseType, IfzaLicense, OfferData, SetupOptions,
    VisaCosts, YearlyRunning,
};
pub use taxation::TaxationData;
pub use visa::{HealthInsurance, VisaHolder, VisaType};

use chrono::NaiveDate;

use crate::error::{ProposalError, Result};

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ProposalError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
