use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{DetLicenseType, HealthInsurance};

/// Documents name the authority in any letter case.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum AuthorityId {
    Ifza,
    Det,
    /// Any authority without a fee table; resolves to zero fees
    #[default]
    Unknown,
}

impl From<String> for AuthorityId {
    fn from(value: String) -> Self {
        AuthorityId::parse(&value)
    }
}

impl AuthorityId {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "IFZA" => AuthorityId::Ifza,
            "DET" => AuthorityId::Det,
            _ => AuthorityId::Unknown,
        }
    }
}

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            AuthorityId::Ifza => "IFZA",
            AuthorityId::Det => "DET",
            AuthorityId::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Fee schedule of one licensing authority, in AED.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct AuthorityConfig {
    pub base_license_fee: f64,
    /// Added to the license fee per unit of visa quota
    pub visa_quota_fee: f64,
    pub cross_border_license_fee: f64,
    /// GDRFA immigration establishment card
    pub establishment_card_fee: f64,
    pub registration_fee: f64,
    /// Ministry of Human Resources labour file
    pub mohre_fee: f64,
    pub license_fees: LicenseFees,
    pub visa_fee: f64,
    pub status_change_fee: f64,
    pub vip_stamping_fee: f64,
    pub employee_insurance_fee: f64,
    pub visa_cancellation_fee: f64,
    pub health_insurance: HealthInsuranceFees,
    pub establishment_card_renewal_fee: f64,
    pub mohre_renewal_fee: f64,
}

impl AuthorityConfig {
    pub fn ifza() -> Self {
        Self {
            base_license_fee: 12_900.0,
            visa_quota_fee: 2_000.0,
            cross_border_license_fee: 2_000.0,
            establishment_card_fee: 2_000.0,
            visa_fee: 3_750.0,
            status_change_fee: 1_600.0,
            vip_stamping_fee: 1_500.0,
            visa_cancellation_fee: 250.0,
            health_insurance: HealthInsuranceFees::standard(),
            establishment_card_renewal_fee: 2_000.0,
            ..Self::default()
        }
    }

    pub fn det() -> Self {
        Self {
            establishment_card_fee: 2_000.0,
            registration_fee: 1_500.0,
            mohre_fee: 1_200.0,
            license_fees: LicenseFees {
                commercial: 13_000.0,
                professional: 9_000.0,
                commercial_professional: 14_500.0,
            },
            visa_fee: 4_750.0,
            status_change_fee: 1_600.0,
            vip_stamping_fee: 1_500.0,
            employee_insurance_fee: 190.0,
            visa_cancellation_fee: 250.0,
            health_insurance: HealthInsuranceFees::standard(),
            establishment_card_renewal_fee: 2_000.0,
            mohre_renewal_fee: 1_200.0,
            ..Self::default()
        }
    }

    /// One year of an IFZA-style license: base fee plus the visa quota.
    pub fn quota_license_fee(&self, visa_quota: u32) -> f64 {
        self.base_license_fee + self.visa_quota_fee * visa_quota as f64
    }

    pub fn visa_schedule(&self) -> VisaFeeSchedule {
        VisaFeeSchedule {
            application_fee: self.visa_fee,
            medical_emirates_id_fee: 0.0,
            status_change_fee: self.status_change_fee,
            vip_stamping_fee: self.vip_stamping_fee,
            employee_insurance_fee: self.employee_insurance_fee,
            cancellation_fee: self.visa_cancellation_fee,
            health_insurance: self.health_insurance,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct LicenseFees {
    pub commercial: f64,
    pub professional: f64,
    pub commercial_professional: f64,
}

impl LicenseFees {
    pub fn for_type(&self, license_type: DetLicenseType) -> f64 {
        match license_type {
            DetLicenseType::Commercial => self.commercial,
            DetLicenseType::Professional => self.professional,
            DetLicenseType::CommercialProfessional => self.commercial_professional,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct HealthInsuranceFees {
    pub low_cost: f64,
    pub silver_package: f64,
    pub gold_package: f64,
}

impl HealthInsuranceFees {
    pub fn standard() -> Self {
        Self {
            low_cost: 1_000.0,
            silver_package: 6_000.0,
            gold_package: 9_000.0,
        }
    }

    pub fn price(&self, tier: HealthInsurance) -> f64 {
        match tier {
            HealthInsurance::NoInsurance => 0.0,
            HealthInsurance::LowCost => self.low_cost,
            HealthInsurance::SilverPackage => self.silver_package,
            HealthInsurance::GoldPackage => self.gold_package,
        }
    }
}

/// Per-holder visa fees, independent of where they come from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisaFeeSchedule {
    pub application_fee: f64,
    pub medical_emirates_id_fee: f64,
    pub status_change_fee: f64,
    pub vip_stamping_fee: f64,
    pub employee_insurance_fee: f64,
    pub cancellation_fee: f64,
    pub health_insurance: HealthInsuranceFees,
}

/// Upfront discount for multi-year license terms, in percent.
pub fn multi_year_discount_percent(license_years: u32) -> f64 {
    match license_years {
        2 => 15.0,
        3 => 20.0,
        5 => 30.0,
        _ => 0.0,
    }
}
