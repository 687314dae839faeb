//! Visa costs for company employees, spouses and children.
//!
//! All visa domains share one rule list. What differs between them (label,
//! context, which sub-fees apply, where the fees come from) is carried by a
//! [`VisaProfile`] and a [`VisaFeeSchedule`].

use crate::fees::{AuthorityId, VisaFeeSchedule};
use crate::model::{HealthInsurance, VisaHolder, VisaType};

use super::item::{count_label, ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisaProfile {
    pub context: ServiceContext,
    pub label: &'static str,
    /// Employee insurance for employment visas (DET only)
    pub employee_insurance: bool,
}

impl VisaProfile {
    pub const COMPANY: VisaProfile = VisaProfile {
        context: ServiceContext::Company,
        label: "Company Visa",
        employee_insurance: true,
    };

    pub const SPOUSE: VisaProfile = VisaProfile {
        context: ServiceContext::Spouse,
        label: "Spouse Visa",
        employee_insurance: false,
    };

    pub const CHILD: VisaProfile = VisaProfile {
        context: ServiceContext::Child,
        label: "Child Visa",
        employee_insurance: false,
    };

    pub const GOLDEN_SPOUSE: VisaProfile = VisaProfile {
        context: ServiceContext::Spouse,
        label: "Spouse Golden Visa",
        employee_insurance: false,
    };

    pub const GOLDEN_CHILD: VisaProfile = VisaProfile {
        context: ServiceContext::Child,
        label: "Child Golden Visa",
        employee_insurance: false,
    };
}

#[derive(Debug, Clone)]
pub struct VisaContext {
    pub profile: VisaProfile,
    pub schedule: VisaFeeSchedule,
    pub authority: AuthorityId,
    pub holders: Vec<VisaHolder>,
    /// TME Services fee per processed visa
    pub tme_fee_per_visa: f64,
}

impl VisaContext {
    fn holder_count(&self) -> u32 {
        self.holders.len() as u32
    }

    fn count_where(&self, predicate: impl Fn(&VisaHolder) -> bool) -> u32 {
        self.holders.iter().filter(|h| predicate(h)).count() as u32
    }

    fn item(&self, key: ServiceKey, description: String, amount: f64) -> ServiceItem {
        ServiceItem::new(key, self.profile.context, description, amount)
    }
}

/// Holders per insurance tier, in the order tiers first appear.
pub fn group_by_insurance(holders: &[VisaHolder]) -> Vec<(HealthInsurance, u32)> {
    let mut groups: Vec<(HealthInsurance, u32)> = Vec::new();

    for holder in holders {
        if holder.health_insurance == HealthInsurance::NoInsurance {
            continue;
        }
        match groups.iter_mut().find(|(tier, _)| *tier == holder.health_insurance) {
            Some((_, count)) => *count += 1,
            None => groups.push((holder.health_insurance, 1)),
        }
    }

    groups
}

pub fn visa_rules() -> Vec<ServiceRule<VisaContext>> {
    vec![
        ServiceRule::always(ServiceKey::VisaApplication, |c: &VisaContext| {
            let count = c.holder_count();
            vec![c
                .item(
                    ServiceKey::VisaApplication,
                    format!("{} Application Fee ({})", c.profile.label, count_label(count, "visa")),
                    c.schedule.application_fee * count as f64,
                )
                .with_explanation("Entry permit and residence visa issuance fees charged by immigration.")]
        }),
        ServiceRule::always(ServiceKey::MedicalEmiratesId, |c: &VisaContext| {
            let count = c.holder_count();
            vec![c
                .item(
                    ServiceKey::MedicalEmiratesId,
                    format!("Medical Test & Emirates ID ({})", count_label(count, "visa")),
                    c.schedule.medical_emirates_id_fee * count as f64,
                )
                .with_explanation("Medical fitness test and Emirates ID card issuance.")]
        }),
        ServiceRule::always(ServiceKey::StatusChange, |c: &VisaContext| {
            let count = c.count_where(|h| h.status_change);
            vec![c
                .item(
                    ServiceKey::StatusChange,
                    format!("Status Change ({})", count_label(count, "visa")),
                    c.schedule.status_change_fee * count as f64,
                )
                .with_explanation("Changing visa status from inside the UAE without leaving the country.")]
        }),
        ServiceRule::always(ServiceKey::VipStamping, |c: &VisaContext| {
            let count = c.count_where(|h| h.vip_stamping);
            vec![c
                .item(
                    ServiceKey::VipStamping,
                    format!("VIP Visa Stamping ({})", count_label(count, "visa")),
                    c.schedule.vip_stamping_fee * count as f64,
                )
                .with_explanation("Express medical test and visa stamping without queueing.")]
        }),
        ServiceRule::new(
            ServiceKey::EmployeeInsurance,
            |c: &VisaContext| c.profile.employee_insurance && c.authority == AuthorityId::Det,
            |c: &VisaContext| {
                let count = c.count_where(|h| h.visa_type == VisaType::Employment);
                vec![c
                    .item(
                        ServiceKey::EmployeeInsurance,
                        format!("Employee Insurance ({})", count_label(count, "visa")),
                        c.schedule.employee_insurance_fee * count as f64,
                    )
                    .with_explanation("Mandatory insurance scheme for mainland employment visas.")]
            },
        ),
        ServiceRule::always(ServiceKey::HealthInsurance(HealthInsurance::NoInsurance), |c: &VisaContext| {
            group_by_insurance(&c.holders)
                .into_iter()
                .map(|(tier, count)| {
                    c.item(
                        ServiceKey::HealthInsurance(tier),
                        format!("Health Insurance - {} ({})", tier.label(), count_label(count, "visa")),
                        c.schedule.health_insurance.price(tier) * count as f64,
                    )
                    .with_explanation(format!(
                        "Annual health insurance policy ({}) required for every residence visa.",
                        tier.label()
                    ))
                })
                .collect()
        }),
        ServiceRule::always(ServiceKey::VisaCancellation, |c: &VisaContext| {
            let count = c.count_where(|h| h.visa_cancellation);
            vec![c
                .item(
                    ServiceKey::VisaCancellation,
                    format!("Visa Cancellation ({})", count_label(count, "visa")),
                    c.schedule.cancellation_fee * count as f64,
                )
                .with_explanation("Cancelling an existing UAE residence visa before the new one is issued.")]
        }),
        ServiceRule::always(ServiceKey::TmeVisaServiceFee, |c: &VisaContext| {
            let count = c.holder_count();
            vec![c
                .item(
                    ServiceKey::TmeVisaServiceFee,
                    format!("TME Services Visa Processing Fee ({})", count_label(count, "visa")),
                    c.tme_fee_per_visa * count as f64,
                )
                .with_explanation("Our fee for handling the application, appointments and document collection.")]
        }),
    ]
}

pub fn generate_visa_items(context: &VisaContext) -> Vec<ServiceItem> {
    if context.holders.is_empty() {
        return Vec::new();
    }
    evaluate_rules(&visa_rules(), context)
}
