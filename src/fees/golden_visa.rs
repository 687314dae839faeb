use serde::{Deserialize, Serialize};

use crate::model::GoldenVisaType;

use super::authority::{HealthInsuranceFees, VisaFeeSchedule};

/// Government fees for one golden visa route, in AED.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct GoldenVisaFeeTable {
    pub authority_fee: f64,
    pub medical_emirates_id_fee: f64,
    /// Route specific fee (property evaluation, deposit certificate, attestation)
    pub route_fee: f64,
    pub dependent_authority_fee: f64,
    pub dependent_medical_emirates_id_fee: f64,
    pub visa_cancellation_fee: f64,
}

impl GoldenVisaFeeTable {
    fn with_route_fee(route_fee: f64) -> Self {
        Self {
            authority_fee: 4_010.0,
            medical_emirates_id_fee: 2_250.0,
            route_fee,
            dependent_authority_fee: 3_750.0,
            dependent_medical_emirates_id_fee: 2_250.0,
            visa_cancellation_fee: 185.0,
        }
    }

    pub fn with_overrides(mut self, overrides: &GoldenVisaFeeOverrides) -> Self {
        let apply = |slot: &mut f64, value: Option<f64>| {
            if let Some(value) = value {
                *slot = value;
            }
        };
        apply(&mut self.authority_fee, overrides.authority_fee);
        apply(&mut self.medical_emirates_id_fee, overrides.medical_emirates_id_fee);
        apply(&mut self.route_fee, overrides.route_fee);
        apply(&mut self.dependent_authority_fee, overrides.dependent_authority_fee);
        apply(
            &mut self.dependent_medical_emirates_id_fee,
            overrides.dependent_medical_emirates_id_fee,
        );
        apply(&mut self.visa_cancellation_fee, overrides.visa_cancellation_fee);
        self
    }

    /// Dependents pay no status change, stamping or insurance through this table.
    pub fn dependent_schedule(&self) -> VisaFeeSchedule {
        VisaFeeSchedule {
            application_fee: self.dependent_authority_fee,
            medical_emirates_id_fee: self.dependent_medical_emirates_id_fee,
            cancellation_fee: self.visa_cancellation_fee,
            health_insurance: HealthInsuranceFees::default(),
            ..VisaFeeSchedule::default()
        }
    }
}

/// Per-document adjustments to the built-in golden visa fees.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GoldenVisaFeeOverrides {
    pub authority_fee: Option<f64>,
    pub medical_emirates_id_fee: Option<f64>,
    pub route_fee: Option<f64>,
    pub dependent_authority_fee: Option<f64>,
    pub dependent_medical_emirates_id_fee: Option<f64>,
    pub visa_cancellation_fee: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GoldenVisaFeeTables {
    pub property_investment: GoldenVisaFeeTable,
    pub time_deposit: GoldenVisaFeeTable,
    pub skilled_employee: GoldenVisaFeeTable,
}

impl Default for GoldenVisaFeeTables {
    fn default() -> Self {
        Self {
            property_investment: GoldenVisaFeeTable::with_route_fee(4_020.0),
            time_deposit: GoldenVisaFeeTable::with_route_fee(350.0),
            skilled_employee: GoldenVisaFeeTable::with_route_fee(500.0),
        }
    }
}

impl GoldenVisaFeeTables {
    pub fn for_type(&self, visa_type: GoldenVisaType) -> GoldenVisaFeeTable {
        match visa_type {
            GoldenVisaType::PropertyInvestment => self.property_investment,
            GoldenVisaType::TimeDeposit => self.time_deposit,
            GoldenVisaType::SkilledEmployee => self.skilled_employee,
        }
    }
}
