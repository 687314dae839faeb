use crate::fees::{AuthorityConfig, AuthorityId};
use crate::model::{DetLicense, IfzaLicense, OfferData, YearlyRunning};

use super::item::{ServiceContext, ServiceItem, ServiceKey};
use super::pipeline::{evaluate_rules, ServiceRule};

/// Costs of keeping the company licensed from the second year on.
#[derive(Debug, Clone, Copy)]
pub struct YearlyContext {
    pub authority: AuthorityId,
    pub fees: AuthorityConfig,
    pub ifza: IfzaLicense,
    pub det: DetLicense,
    pub yearly: YearlyRunning,
    pub company_visas: u32,
}

impl YearlyContext {
    pub fn new(offer: &OfferData, fees: &AuthorityConfig, yearly: YearlyRunning) -> Self {
        Self {
            authority: offer.authority,
            fees: *fees,
            ifza: offer.ifza(),
            det: offer.det(),
            yearly,
            company_visas: offer.company_visa_count(),
        }
    }

    fn license_renewal_fee(&self) -> f64 {
        match self.authority {
            AuthorityId::Ifza => self.fees.quota_license_fee(self.ifza.visa_quota),
            AuthorityId::Det => self.fees.license_fees.for_type(self.det.license_type),
            AuthorityId::Unknown => 0.0,
        }
    }
}

fn general(key: ServiceKey, description: &str, amount: f64) -> ServiceItem {
    ServiceItem::new(key, ServiceContext::General, description, amount)
}

pub fn yearly_rules() -> Vec<ServiceRule<YearlyContext>> {
    vec![
        ServiceRule::always(ServiceKey::LicenseRenewal, |c: &YearlyContext| {
            vec![general(
                ServiceKey::LicenseRenewal,
                &format!("{} License Renewal", c.authority),
                c.license_renewal_fee(),
            )
            .with_explanation("Yearly renewal of the trade license at the authority's current rate.")]
        }),
        ServiceRule::new(
            ServiceKey::EstablishmentCardRenewal,
            |c: &YearlyContext| match c.authority {
                AuthorityId::Ifza => c.ifza.visa_quota > 0,
                AuthorityId::Det => true,
                AuthorityId::Unknown => false,
            },
            |c: &YearlyContext| {
                vec![general(
                    ServiceKey::EstablishmentCardRenewal,
                    "Establishment Card Renewal",
                    c.fees.establishment_card_renewal_fee,
                )]
            },
        ),
        ServiceRule::new(
            ServiceKey::MohreRenewal,
            |c: &YearlyContext| c.authority == AuthorityId::Det && c.company_visas > 0,
            |c: &YearlyContext| {
                vec![general(ServiceKey::MohreRenewal, "MoHRE Renewal", c.fees.mohre_renewal_fee)]
            },
        ),
        ServiceRule::always(ServiceKey::OfficeRentRenewal, |c: &YearlyContext| {
            vec![general(
                ServiceKey::OfficeRentRenewal,
                "Office Rent Renewal",
                c.yearly.office_rent_renewal,
            )]
        }),
        ServiceRule::always(ServiceKey::AccountingFee, |c: &YearlyContext| {
            vec![general(
                ServiceKey::AccountingFee,
                "Accounting & Bookkeeping",
                c.yearly.accounting_fee,
            )
            .with_explanation("Bookkeeping and annual financial statements required for the renewal.")]
        }),
        ServiceRule::always(ServiceKey::TmeYearlyFee, |c: &YearlyContext| {
            vec![general(
                ServiceKey::TmeYearlyFee,
                "TME Services Yearly Fee",
                c.yearly.tme_yearly_fee,
            )
            .with_explanation("Our fee for managing renewals, reminders and authority correspondence.")]
        }),
    ]
}

/// Renewal costs; an offer without a yearly running section has none.
pub fn generate_yearly_items(offer: &OfferData, fees: &AuthorityConfig) -> Vec<ServiceItem> {
    let Some(yearly) = offer.yearly_running else {
        return Vec::new();
    };
    evaluate_rules(&yearly_rules(), &YearlyContext::new(offer, fees, yearly))
}
