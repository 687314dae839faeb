use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::costs::Currency;
use crate::error::Result;

use super::parse_iso_date;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDetails {
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    /// Address the document to the company instead of the person
    pub address_to_company: bool,
    pub secondary_currency: Option<Currency>,
    /// AED per unit of the secondary currency
    pub exchange_rate: Option<f64>,
    /// Document date (YYYY-MM-DD)
    pub date: Option<String>,
}

impl ClientDetails {
    pub fn display_name(&self) -> String {
        if self.address_to_company {
            if let Some(company) = self.company_name.as_deref().filter(|c| !c.trim().is_empty()) {
                return company.trim().to_string();
            }
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn parsed_date(&self) -> Result<Option<NaiveDate>> {
        self.date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_iso_date("clientDetails.date", d))
            .transpose()
    }
}
