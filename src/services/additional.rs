use crate::model::AdditionalServices;

use super::item::{ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

fn optional(key: ServiceKey, amount: f64, explanation: &str) -> Vec<ServiceItem> {
    vec![
        ServiceItem::new(key, ServiceContext::General, key.title(), amount)
            .with_explanation(explanation),
    ]
}

/// Optional services offered alongside the setup; priced but not part of the
/// grand total.
pub fn additional_rules() -> Vec<ServiceRule<AdditionalServices>> {
    vec![
        ServiceRule::always(ServiceKey::BankAccountAssistance, |c: &AdditionalServices| {
            optional(
                ServiceKey::BankAccountAssistance,
                c.bank_account_assistance,
                "Preparing the bank's KYC file and accompanying the account opening.",
            )
        }),
        ServiceRule::always(ServiceKey::PersonalBankAccount, |c: &AdditionalServices| {
            optional(
                ServiceKey::PersonalBankAccount,
                c.personal_bank_account,
                "Opening a personal account for the shareholder once the residence visa is issued.",
            )
        }),
        ServiceRule::always(ServiceKey::VatRegistration, |c: &AdditionalServices| {
            optional(
                ServiceKey::VatRegistration,
                c.vat_registration,
                "Registration with the Federal Tax Authority for VAT.",
            )
        }),
        ServiceRule::always(ServiceKey::CorporateTaxRegistration, |c: &AdditionalServices| {
            optional(
                ServiceKey::CorporateTaxRegistration,
                c.corporate_tax_registration,
                "Mandatory corporate tax registration with the Federal Tax Authority.",
            )
        }),
        ServiceRule::always(ServiceKey::CompanyStamp, |c: &AdditionalServices| {
            optional(ServiceKey::CompanyStamp, c.company_stamp, "Official company stamp.")
        }),
        ServiceRule::always(ServiceKey::AccountingSetup, |c: &AdditionalServices| {
            optional(
                ServiceKey::AccountingSetup,
                c.accounting_setup,
                "Chart of accounts and bookkeeping system setup.",
            )
        }),
    ]
}

pub fn generate_additional_items(services: &AdditionalServices) -> Vec<ServiceItem> {
    evaluate_rules(&additional_rules(), services)
}
