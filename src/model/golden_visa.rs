use serde::{Deserialize, Serialize};

use crate::fees::GoldenVisaFeeOverrides;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum GoldenVisaType {
    #[default]
    PropertyInvestment,
    TimeDeposit,
    SkilledEmployee,
}

impl GoldenVisaType {
    pub fn label(&self) -> &'static str {
        match self {
            GoldenVisaType::PropertyInvestment => "Property Investment",
            GoldenVisaType::TimeDeposit => "Time Deposit",
            GoldenVisaType::SkilledEmployee => "Skilled Employee",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldenVisaData {
    pub visa_type: GoldenVisaType,
    pub primary_visa_required: bool,
    pub tme_services_fee: f64,
    pub authority_fees: Option<GoldenVisaFeeOverrides>,
    pub dependents: Option<GoldenVisaDependents>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldenVisaDependents {
    pub spouse: Option<GoldenVisaSpouse>,
    pub children: Option<GoldenVisaChildren>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldenVisaSpouse {
    pub visa_cancellation: bool,
    pub tme_services_fee: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldenVisaChildren {
    pub number_of_children: u32,
    pub visa_cancellation: bool,
    pub tme_services_fee_per_child: f64,
}
