use crate::model::{AccountingService, CompanyServicesData, PayrollService};

use super::item::{count_label, ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

const VAT_RETURNS_PER_YEAR: f64 = 4.0;
const PAYROLL_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, Copy)]
pub struct CompanyServicesContext {
    pub accounting: Option<AccountingService>,
    pub vat_return_filing_fee: f64,
    pub corporate_tax_filing_fee: f64,
    pub payroll: Option<PayrollService>,
    pub compliance_fee: f64,
    pub price_reduction: f64,
}

impl From<&CompanyServicesData> for CompanyServicesContext {
    fn from(data: &CompanyServicesData) -> Self {
        Self {
            accounting: data.accounting,
            vat_return_filing_fee: data.vat_return_filing_fee,
            corporate_tax_filing_fee: data.corporate_tax_filing_fee,
            payroll: data.payroll,
            compliance_fee: data.compliance_fee,
            price_reduction: data.price_reduction,
        }
    }
}

fn general(key: ServiceKey, description: impl Into<String>, amount: f64) -> ServiceItem {
    ServiceItem::new(key, ServiceContext::General, description, amount)
}

/// Every amount here is for one year of service.
pub fn company_services_rules() -> Vec<ServiceRule<CompanyServicesContext>> {
    vec![
        ServiceRule::new(
            ServiceKey::Accounting,
            |c: &CompanyServicesContext| c.accounting.is_some(),
            |c: &CompanyServicesContext| {
                let Some(accounting) = c.accounting else {
                    return Vec::new();
                };
                let periods = accounting.frequency.periods_per_year();
                vec![general(
                    ServiceKey::Accounting,
                    format!("Accounting Services ({}, {} per year)", accounting.frequency.label(), periods),
                    accounting.fee_per_period * periods as f64,
                )
                .with_explanation("Bookkeeping, reconciliations and management accounts for the year.")]
            },
        ),
        ServiceRule::always(ServiceKey::VatReturnFiling, |c: &CompanyServicesContext| {
            vec![general(
                ServiceKey::VatReturnFiling,
                "VAT Return Filing (4 quarters)",
                c.vat_return_filing_fee * VAT_RETURNS_PER_YEAR,
            )
            .with_explanation("Preparation and submission of the quarterly VAT returns.")]
        }),
        ServiceRule::always(ServiceKey::CorporateTaxReturn, |c: &CompanyServicesContext| {
            vec![general(
                ServiceKey::CorporateTaxReturn,
                "Corporate Tax Return Filing",
                c.corporate_tax_filing_fee,
            )
            .with_explanation("Preparation and submission of the annual corporate tax return.")]
        }),
        ServiceRule::new(
            ServiceKey::Payroll,
            |c: &CompanyServicesContext| c.payroll.is_some_and(|p| p.employees > 0),
            |c: &CompanyServicesContext| {
                let Some(payroll) = c.payroll else {
                    return Vec::new();
                };
                vec![general(
                    ServiceKey::Payroll,
                    format!("Payroll Services ({})", count_label(payroll.employees, "employee")),
                    payroll.fee_per_employee * payroll.employees as f64 * PAYROLL_MONTHS,
                )
                .with_explanation("Monthly WPS salary processing and payslips.")]
            },
        ),
        ServiceRule::always(ServiceKey::Compliance, |c: &CompanyServicesContext| {
            vec![general(ServiceKey::Compliance, "Compliance Services", c.compliance_fee)
                .with_explanation("UBO, ESR and AML filings kept up to date throughout the year.")]
        }),
        ServiceRule::always(ServiceKey::PriceReduction, |c: &CompanyServicesContext| {
            vec![general(ServiceKey::PriceReduction, "Price Reduction", c.price_reduction).reduction()]
        }),
    ]
}

pub fn generate_company_services_items(data: &CompanyServicesData) -> Vec<ServiceItem> {
    evaluate_rules(&company_services_rules(), &CompanyServicesContext::from(data))
}
