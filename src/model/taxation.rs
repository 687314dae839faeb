use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::parse_iso_date;

/// Corporate tax return is due nine months after the end of the tax period.
const FILING_WINDOW_MONTHS: u32 = 9;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxationData {
    /// Last day of the financial year (YYYY-MM-DD)
    pub financial_year_end: Option<String>,
    pub corporate_tax_registration_fee: f64,
    pub corporate_tax_return_fee: f64,
    pub vat_registration_fee: f64,
    pub tax_residency_certificate_fee: f64,
    pub penalty_waiver_fee: f64,
}

impl TaxationData {
    pub fn financial_year_end_date(&self) -> Result<Option<NaiveDate>> {
        self.financial_year_end
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_iso_date("taxationData.financialYearEnd", d))
            .transpose()
    }

    /// Deadline for the corporate tax return.
    pub fn filing_deadline(&self) -> Result<Option<NaiveDate>> {
        Ok(self.financial_year_end_date()?.and_then(filing_deadline_after))
    }
}

/// A period ending on a month end is due on the month end nine months later.
fn filing_deadline_after(end: NaiveDate) -> Option<NaiveDate> {
    let is_month_end = end.succ_opt().is_some_and(|next| next.day() == 1);
    if is_month_end {
        end.with_day(1)?
            .checked_add_months(Months::new(FILING_WINDOW_MONTHS + 1))?
            .pred_opt()
    } else {
        end.checked_add_months(Months::new(FILING_WINDOW_MONTHS))
    }
}
