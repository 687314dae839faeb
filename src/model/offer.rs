use serde::{Deserialize, Serialize};

use crate::fees::AuthorityId;

use super::VisaHolder;

/// Company setup offer for a free zone or mainland authority.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferData {
    pub authority: AuthorityId,
    pub ifza_license: Option<IfzaLicense>,
    pub det_license: Option<DetLicense>,
    pub setup: SetupOptions,
    pub visa_costs: Option<VisaCosts>,
    pub yearly_running: Option<YearlyRunning>,
    pub additional_services: Option<AdditionalServices>,
}

impl OfferData {
    pub fn ifza(&self) -> IfzaLicense {
        self.ifza_license.unwrap_or_default()
    }

    pub fn det(&self) -> DetLicense {
        self.det_license.unwrap_or_default()
    }

    pub fn company_visa_count(&self) -> u32 {
        self.visa_costs
            .as_ref()
            .map_or(0, |v| v.company_visas.len() as u32)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IfzaLicense {
    pub visa_quota: u32,
    /// License term paid upfront; 0 is treated as a single year
    pub license_years: u32,
    pub cross_border_license: bool,
    pub third_party_approval_amount: f64,
    pub office_rent_amount: f64,
}

impl IfzaLicense {
    pub fn years(&self) -> u32 {
        self.license_years.max(1)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum DetLicenseType {
    #[default]
    Commercial,
    Professional,
    CommercialProfessional,
}

impl DetLicenseType {
    pub fn label(&self) -> &'static str {
        match self {
            DetLicenseType::Commercial => "Commercial",
            DetLicenseType::Professional => "Professional",
            DetLicenseType::CommercialProfessional => "Commercial & Professional",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DetLicense {
    pub license_type: DetLicenseType,
    pub rent_amount: f64,
    pub noc_amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SetupOptions {
    pub moa_translation_amount: f64,
    pub tme_services_fee: f64,
    pub price_reduction: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaCosts {
    /// TME Services fee charged per processed visa
    pub tme_visa_service_fee: f64,
    pub company_visas: Vec<VisaHolder>,
    pub spouse_visa: Option<VisaHolder>,
    pub child_visas: Vec<VisaHolder>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct YearlyRunning {
    pub tme_yearly_fee: f64,
    pub accounting_fee: f64,
    pub office_rent_renewal: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalServices {
    pub bank_account_assistance: f64,
    pub personal_bank_account: f64,
    pub vat_registration: f64,
    pub corporate_tax_registration: f64,
    pub company_stamp: f64,
    pub accounting_setup: f64,
}
