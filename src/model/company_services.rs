use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AccountingFrequency {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl AccountingFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            AccountingFrequency::Monthly => 12,
            AccountingFrequency::Quarterly => 4,
            AccountingFrequency::Yearly => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountingFrequency::Monthly => "monthly",
            AccountingFrequency::Quarterly => "quarterly",
            AccountingFrequency::Yearly => "yearly",
        }
    }
}

/// Ongoing services for an already incorporated company, priced per year.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyServicesData {
    pub accounting: Option<AccountingService>,
    /// Fee per quarterly VAT return
    pub vat_return_filing_fee: f64,
    pub corporate_tax_filing_fee: f64,
    pub payroll: Option<PayrollService>,
    pub compliance_fee: f64,
    pub price_reduction: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountingService {
    pub frequency: AccountingFrequency,
    pub fee_per_period: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PayrollService {
    pub employees: u32,
    /// Monthly fee per employee on the payroll
    pub fee_per_employee: f64,
}
