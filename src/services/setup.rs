//! Initial company setup costs.
//!
//! IFZA and DET each have their own rule list; any other authority only gets
//! the firm's own charges, since there is no fee table to price it with.

use crate::fees::{multi_year_discount_percent, AuthorityConfig, AuthorityId};
use crate::model::{DetLicense, IfzaLicense, OfferData, SetupOptions};

use super::item::{count_label, ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

#[derive(Debug, Clone, Copy)]
pub struct SetupContext {
    pub fees: AuthorityConfig,
    pub ifza: IfzaLicense,
    pub det: DetLicense,
    pub setup: SetupOptions,
    pub company_visas: u32,
}

impl SetupContext {
    pub fn new(offer: &OfferData, fees: &AuthorityConfig) -> Self {
        Self {
            fees: *fees,
            ifza: offer.ifza(),
            det: offer.det(),
            setup: offer.setup,
            company_visas: offer.company_visa_count(),
        }
    }

    /// License fee for the whole prepaid term, before any discount.
    pub fn total_license_fee(&self) -> f64 {
        self.fees.quota_license_fee(self.ifza.visa_quota) * self.ifza.years() as f64
    }

    pub fn multi_year_discount(&self) -> f64 {
        self.total_license_fee() * multi_year_discount_percent(self.ifza.years()) / 100.0
    }
}

fn general(key: ServiceKey, description: impl Into<String>, amount: f64) -> ServiceItem {
    ServiceItem::new(key, ServiceContext::General, description, amount)
}

fn tme_professional_fee(c: &SetupContext) -> Vec<ServiceItem> {
    vec![general(
        ServiceKey::TmeProfessionalFee,
        "TME Services Professional Fee (Company Setup)",
        c.setup.tme_services_fee,
    )
    .with_explanation(
        "Our fee for preparing and submitting the incorporation documents and \
         coordinating with the authority until the license is issued.",
    )]
}

fn moa_translation(c: &SetupContext) -> Vec<ServiceItem> {
    vec![general(
        ServiceKey::MoaTranslation,
        "MoA / PoA Translation & Attestation",
        c.setup.moa_translation_amount,
    )
    .with_explanation("Legal translation and attestation of the memorandum and power of attorney.")]
}

fn price_reduction(c: &SetupContext) -> Vec<ServiceItem> {
    vec![general(
        ServiceKey::PriceReduction,
        "Price Reduction",
        c.setup.price_reduction,
    )
    .reduction()]
}

pub fn ifza_setup_rules() -> Vec<ServiceRule<SetupContext>> {
    vec![
        ServiceRule::always(ServiceKey::IfzaLicense, |c: &SetupContext| {
            let years = c.ifza.years();
            let description = if years > 1 {
                format!("IFZA License Cost ({years} years)")
            } else {
                "IFZA License Cost".to_string()
            };
            vec![general(ServiceKey::IfzaLicense, description, c.total_license_fee())
                .with_explanation(
                    "Authority fee for the trade license including the requested visa quota.",
                )]
        }),
        ServiceRule::new(
            ServiceKey::MultiYearDiscount,
            |c: &SetupContext| multi_year_discount_percent(c.ifza.years()) > 0.0,
            |c: &SetupContext| {
                let percent = multi_year_discount_percent(c.ifza.years());
                vec![general(
                    ServiceKey::MultiYearDiscount,
                    format!("Multi-Year License Discount ({percent:.0}%)"),
                    c.multi_year_discount(),
                )
                .reduction()
                .with_explanation("Discount granted by the authority for paying several license years upfront.")]
            },
        ),
        ServiceRule::new(
            ServiceKey::CrossBorderLicense,
            |c: &SetupContext| c.ifza.cross_border_license,
            |c: &SetupContext| {
                vec![general(
                    ServiceKey::CrossBorderLicense,
                    "Cross Border License",
                    c.fees.cross_border_license_fee,
                )
                .with_explanation("Allows the company to operate outside the free zone in Dubai mainland.")]
            },
        ),
        ServiceRule::always(ServiceKey::ThirdPartyApprovals, |c: &SetupContext| {
            vec![general(
                ServiceKey::ThirdPartyApprovals,
                "Third Party Approvals",
                c.ifza.third_party_approval_amount,
            )
            .with_explanation("External approvals required by some regulated business activities.")]
        }),
        ServiceRule::new(
            ServiceKey::EstablishmentCard,
            |c: &SetupContext| c.ifza.visa_quota > 0,
            |c: &SetupContext| {
                vec![general(
                    ServiceKey::EstablishmentCard,
                    "GDRFA Cost (Establishment Card)",
                    c.fees.establishment_card_fee,
                )
                .with_explanation("Immigration establishment card required before any visa can be issued.")]
            },
        ),
        ServiceRule::always(ServiceKey::OfficeRent, |c: &SetupContext| {
            vec![general(ServiceKey::OfficeRent, "Office Rent", c.ifza.office_rent_amount)]
        }),
        ServiceRule::always(ServiceKey::MoaTranslation, moa_translation),
        ServiceRule::always(ServiceKey::TmeProfessionalFee, tme_professional_fee),
        ServiceRule::always(ServiceKey::PriceReduction, price_reduction),
    ]
}

pub fn det_setup_rules() -> Vec<ServiceRule<SetupContext>> {
    vec![
        ServiceRule::always(ServiceKey::DetRegistration, |c: &SetupContext| {
            vec![general(ServiceKey::DetRegistration, "DET Registration Fee", c.fees.registration_fee)
                .with_explanation("Department of Economy and Tourism fee for registering the trade name.")]
        }),
        ServiceRule::always(ServiceKey::EstablishmentCard, |c: &SetupContext| {
            vec![general(
                ServiceKey::EstablishmentCard,
                "GDRFA Cost (Establishment Card)",
                c.fees.establishment_card_fee,
            )
            .with_explanation("Immigration establishment card required before any visa can be issued.")]
        }),
        ServiceRule::new(
            ServiceKey::Mohre,
            |c: &SetupContext| c.company_visas > 0,
            |c: &SetupContext| {
                vec![general(
                    ServiceKey::Mohre,
                    format!("MoHRE Cost ({})", count_label(c.company_visas, "visa")),
                    c.fees.mohre_fee,
                )
                .with_explanation("Ministry of Human Resources labour file for the company's employees.")]
            },
        ),
        ServiceRule::always(ServiceKey::DetLicense, |c: &SetupContext| {
            vec![general(
                ServiceKey::DetLicense,
                format!("DET License Fee ({})", c.det.license_type.label()),
                c.fees.license_fees.for_type(c.det.license_type),
            )
            .with_explanation("Annual mainland trade license fee for the selected license type.")]
        }),
        ServiceRule::always(ServiceKey::OfficeRent, |c: &SetupContext| {
            vec![general(ServiceKey::OfficeRent, "Office Rent (Ejari)", c.det.rent_amount)
                .with_explanation("Registered tenancy contract required for a mainland license.")]
        }),
        ServiceRule::always(ServiceKey::Noc, |c: &SetupContext| {
            vec![general(ServiceKey::Noc, "NOC Fee", c.det.noc_amount)
                .with_explanation("No objection certificate from a sponsor, employer or parent company.")]
        }),
        ServiceRule::always(ServiceKey::MoaTranslation, moa_translation),
        ServiceRule::always(ServiceKey::TmeProfessionalFee, tme_professional_fee),
        ServiceRule::always(ServiceKey::PriceReduction, price_reduction),
    ]
}

pub fn fallback_setup_rules() -> Vec<ServiceRule<SetupContext>> {
    vec![
        ServiceRule::always(ServiceKey::MoaTranslation, moa_translation),
        ServiceRule::always(ServiceKey::TmeProfessionalFee, tme_professional_fee),
        ServiceRule::always(ServiceKey::PriceReduction, price_reduction),
    ]
}

pub fn generate_setup_items(offer: &OfferData, fees: &AuthorityConfig) -> Vec<ServiceItem> {
    let context = SetupContext::new(offer, fees);
    let rules = match offer.authority {
        AuthorityId::Ifza => ifza_setup_rules(),
        AuthorityId::Det => det_setup_rules(),
        AuthorityId::Unknown => fallback_setup_rules(),
    };
    evaluate_rules(&rules, &context)
}
