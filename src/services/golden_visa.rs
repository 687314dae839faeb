//! Golden visa authority, TME and dependent costs.

use crate::fees::{AuthorityId, GoldenVisaFeeTable};
use crate::layout::Section;
use crate::model::{GoldenVisaData, GoldenVisaType, VisaHolder};

use super::item::{ServiceContext, ServiceItem, ServiceKey, ServiceTable};
use super::pipeline::{evaluate_rules, ServiceRule};
use super::visa::{generate_visa_items, VisaContext, VisaProfile};

#[derive(Debug, Clone, Copy)]
pub struct GoldenVisaContext {
    pub visa_type: GoldenVisaType,
    pub primary_visa_required: bool,
    pub tme_services_fee: f64,
    pub table: GoldenVisaFeeTable,
}

impl GoldenVisaContext {
    pub fn new(data: &GoldenVisaData, table: &GoldenVisaFeeTable) -> Self {
        let table = match &data.authority_fees {
            Some(overrides) => table.with_overrides(overrides),
            None => *table,
        };
        Self {
            visa_type: data.visa_type,
            primary_visa_required: data.primary_visa_required,
            tme_services_fee: data.tme_services_fee,
            table,
        }
    }

    fn route_fee_label(&self) -> &'static str {
        match self.visa_type {
            GoldenVisaType::PropertyInvestment => "DLD Property Evaluation Fee",
            GoldenVisaType::TimeDeposit => "Bank Deposit Certificate Fee",
            GoldenVisaType::SkilledEmployee => "Degree Attestation Fee",
        }
    }
}

fn primary(key: ServiceKey, description: impl Into<String>, amount: f64) -> ServiceItem {
    ServiceItem::new(key, ServiceContext::Primary, description, amount)
}

fn requires_primary_visa(c: &GoldenVisaContext) -> bool {
    c.primary_visa_required
}

pub fn golden_visa_authority_rules() -> Vec<ServiceRule<GoldenVisaContext>> {
    vec![
        ServiceRule::new(
            ServiceKey::GoldenVisaAuthorityFee,
            requires_primary_visa,
            |c: &GoldenVisaContext| {
                vec![primary(
                    ServiceKey::GoldenVisaAuthorityFee,
                    format!("Golden Visa Authority Fee ({})", c.visa_type.label()),
                    c.table.authority_fee,
                )
                .with_explanation("Immigration fees for the 10-year golden residence visa.")]
            },
        ),
        ServiceRule::new(ServiceKey::GoldenVisaRouteFee, requires_primary_visa, |c: &GoldenVisaContext| {
            vec![primary(ServiceKey::GoldenVisaRouteFee, c.route_fee_label(), c.table.route_fee)
                .with_explanation("Fee for proving eligibility under the selected golden visa route.")]
        }),
        ServiceRule::new(ServiceKey::MedicalEmiratesId, requires_primary_visa, |c: &GoldenVisaContext| {
            vec![primary(
                ServiceKey::MedicalEmiratesId,
                "Medical Test & Emirates ID",
                c.table.medical_emirates_id_fee,
            )
            .with_explanation("Medical fitness test and Emirates ID card issuance.")]
        }),
    ]
}

pub fn golden_visa_tme_rules() -> Vec<ServiceRule<GoldenVisaContext>> {
    vec![ServiceRule::always(ServiceKey::GoldenVisaTmeFee, |c: &GoldenVisaContext| {
        vec![primary(
            ServiceKey::GoldenVisaTmeFee,
            "TME Services Golden Visa Fee",
            c.tme_services_fee,
        )
        .with_explanation("Our fee for the eligibility review, application and follow-up until issuance.")]
    })]
}

pub fn generate_golden_visa_authority_items(
    data: &GoldenVisaData,
    table: &GoldenVisaFeeTable,
) -> Vec<ServiceItem> {
    evaluate_rules(&golden_visa_authority_rules(), &GoldenVisaContext::new(data, table))
}

pub fn generate_golden_visa_tme_items(
    data: &GoldenVisaData,
    table: &GoldenVisaFeeTable,
) -> Vec<ServiceItem> {
    evaluate_rules(&golden_visa_tme_rules(), &GoldenVisaContext::new(data, table))
}

/// One breakdown table per dependent: spouse first, then each child.
pub fn generate_dependent_tables(
    data: &GoldenVisaData,
    table: &GoldenVisaFeeTable,
) -> Vec<ServiceTable> {
    let schedule = GoldenVisaContext::new(data, table).table.dependent_schedule();
    let Some(dependents) = &data.dependents else {
        return Vec::new();
    };

    let dependent_table = |profile: VisaProfile, title: String, cancellation: bool, tme_fee: f64| {
        let context = VisaContext {
            profile,
            schedule,
            authority: AuthorityId::Unknown,
            holders: vec![VisaHolder {
                visa_cancellation: cancellation,
                ..VisaHolder::default()
            }],
            tme_fee_per_visa: tme_fee,
        };
        ServiceTable::new(
            title,
            Section::GoldenVisaDependents,
            profile.context,
            generate_visa_items(&context),
        )
    };

    let mut tables = Vec::new();
    if let Some(spouse) = &dependents.spouse {
        tables.push(dependent_table(
            VisaProfile::GOLDEN_SPOUSE,
            "Spouse Golden Visa".to_string(),
            spouse.visa_cancellation,
            spouse.tme_services_fee,
        ));
    }
    if let Some(children) = &dependents.children {
        for index in 1..=children.number_of_children {
            tables.push(dependent_table(
                VisaProfile::GOLDEN_CHILD,
                format!("Child {index} Golden Visa"),
                children.visa_cancellation,
                children.tme_services_fee_per_child,
            ));
        }
    }
    tables
}
