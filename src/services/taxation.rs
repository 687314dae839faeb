use crate::model::TaxationData;

use super::item::{ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

fn tax_item(key: ServiceKey, amount: f64, explanation: &str) -> Vec<ServiceItem> {
    vec![
        ServiceItem::new(key, ServiceContext::General, key.title(), amount)
            .with_explanation(explanation),
    ]
}

pub fn taxation_rules() -> Vec<ServiceRule<TaxationData>> {
    vec![
        ServiceRule::always(ServiceKey::CorporateTaxRegistration, |c: &TaxationData| {
            tax_item(
                ServiceKey::CorporateTaxRegistration,
                c.corporate_tax_registration_fee,
                "Registration with the Federal Tax Authority and issuance of the tax registration number.",
            )
        }),
        ServiceRule::always(ServiceKey::CorporateTaxReturn, |c: &TaxationData| {
            tax_item(
                ServiceKey::CorporateTaxReturn,
                c.corporate_tax_return_fee,
                "Computation of taxable income and filing of the annual corporate tax return.",
            )
        }),
        ServiceRule::always(ServiceKey::VatRegistration, |c: &TaxationData| {
            tax_item(
                ServiceKey::VatRegistration,
                c.vat_registration_fee,
                "VAT registration once taxable supplies exceed the mandatory threshold.",
            )
        }),
        ServiceRule::always(ServiceKey::TaxResidencyCertificate, |c: &TaxationData| {
            tax_item(
                ServiceKey::TaxResidencyCertificate,
                c.tax_residency_certificate_fee,
                "Certificate confirming UAE tax residency for double taxation treaties.",
            )
        }),
        ServiceRule::always(ServiceKey::PenaltyWaiver, |c: &TaxationData| {
            tax_item(
                ServiceKey::PenaltyWaiver,
                c.penalty_waiver_fee,
                "Request to waive administrative penalties for late registration or filing.",
            )
        }),
    ]
}

pub fn generate_taxation_items(data: &TaxationData) -> Vec<ServiceItem> {
    evaluate_rules(&taxation_rules(), data)
}
