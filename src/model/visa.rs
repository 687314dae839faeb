use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum VisaType {
    #[default]
    Investor,
    Employment,
}

#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum HealthInsurance {
    #[default]
    NoInsurance,
    LowCost,
    SilverPackage,
    GoldPackage,
}

impl HealthInsurance {
    pub fn label(&self) -> &'static str {
        match self {
            HealthInsurance::NoInsurance => "No Insurance",
            HealthInsurance::LowCost => "Low Cost",
            HealthInsurance::SilverPackage => "Silver Package",
            HealthInsurance::GoldPackage => "Gold Package",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            HealthInsurance::NoInsurance => "no-insurance",
            HealthInsurance::LowCost => "low-cost",
            HealthInsurance::SilverPackage => "silver-package",
            HealthInsurance::GoldPackage => "gold-package",
        }
    }
}

/// One person the offer applies for a residence visa for.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaHolder {
    pub visa_type: VisaType,
    pub health_insurance: HealthInsurance,
    /// Applicant is inside the UAE and changes status instead of entering
    pub status_change: bool,
    pub vip_stamping: bool,
    /// An existing visa has to be cancelled first
    pub visa_cancellation: bool,
}
