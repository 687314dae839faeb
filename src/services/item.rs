use serde::Serialize;

use crate::layout::Section;
use crate::model::HealthInsurance;

/// Structured identity of a service, independent of how it is rendered.
///
/// Declaration order is the order explanations are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceKey {
    IfzaLicense,
    MultiYearDiscount,
    CrossBorderLicense,
    ThirdPartyApprovals,
    DetRegistration,
    EstablishmentCard,
    Mohre,
    DetLicense,
    OfficeRent,
    Noc,
    MoaTranslation,
    TmeProfessionalFee,
    GoldenVisaAuthorityFee,
    GoldenVisaRouteFee,
    VisaApplication,
    MedicalEmiratesId,
    StatusChange,
    VipStamping,
    EmployeeInsurance,
    HealthInsurance(HealthInsurance),
    VisaCancellation,
    TmeVisaServiceFee,
    GoldenVisaTmeFee,
    LicenseRenewal,
    EstablishmentCardRenewal,
    MohreRenewal,
    OfficeRentRenewal,
    AccountingFee,
    TmeYearlyFee,
    BankAccountAssistance,
    PersonalBankAccount,
    VatRegistration,
    CorporateTaxRegistration,
    CompanyStamp,
    AccountingSetup,
    Accounting,
    VatReturnFiling,
    CorporateTaxReturn,
    Payroll,
    Compliance,
    TaxResidencyCertificate,
    PenaltyWaiver,
    PriceReduction,
}

impl ServiceKey {
    pub fn id(&self) -> String {
        let id = match self {
            ServiceKey::IfzaLicense => "ifza-license",
            ServiceKey::MultiYearDiscount => "multi-year-discount",
            ServiceKey::CrossBorderLicense => "cross-border-license",
            ServiceKey::ThirdPartyApprovals => "third-party-approvals",
            ServiceKey::DetRegistration => "det-registration",
            ServiceKey::EstablishmentCard => "establishment-card",
            ServiceKey::Mohre => "mohre",
            ServiceKey::DetLicense => "det-license",
            ServiceKey::OfficeRent => "office-rent",
            ServiceKey::Noc => "noc",
            ServiceKey::MoaTranslation => "moa-translation",
            ServiceKey::TmeProfessionalFee => "tme-professional-fee",
            ServiceKey::GoldenVisaAuthorityFee => "golden-visa-authority-fee",
            ServiceKey::GoldenVisaRouteFee => "golden-visa-route-fee",
            ServiceKey::VisaApplication => "visa-application",
            ServiceKey::MedicalEmiratesId => "medical-emirates-id",
            ServiceKey::StatusChange => "status-change",
            ServiceKey::VipStamping => "vip-stamping",
            ServiceKey::EmployeeInsurance => "employee-insurance",
            ServiceKey::HealthInsurance(tier) => return format!("health-insurance-{}", tier.slug()),
            ServiceKey::VisaCancellation => "visa-cancellation",
            ServiceKey::TmeVisaServiceFee => "tme-visa-service-fee",
            ServiceKey::GoldenVisaTmeFee => "golden-visa-tme-fee",
            ServiceKey::LicenseRenewal => "license-renewal",
            ServiceKey::EstablishmentCardRenewal => "establishment-card-renewal",
            ServiceKey::MohreRenewal => "mohre-renewal",
            ServiceKey::OfficeRentRenewal => "office-rent-renewal",
            ServiceKey::AccountingFee => "accounting-fee",
            ServiceKey::TmeYearlyFee => "tme-yearly-fee",
            ServiceKey::BankAccountAssistance => "bank-account-assistance",
            ServiceKey::PersonalBankAccount => "personal-bank-account",
            ServiceKey::VatRegistration => "vat-registration",
            ServiceKey::CorporateTaxRegistration => "corporate-tax-registration",
            ServiceKey::CompanyStamp => "company-stamp",
            ServiceKey::AccountingSetup => "accounting-setup",
            ServiceKey::Accounting => "accounting",
            ServiceKey::VatReturnFiling => "vat-return-filing",
            ServiceKey::CorporateTaxReturn => "corporate-tax-return",
            ServiceKey::Payroll => "payroll",
            ServiceKey::Compliance => "compliance",
            ServiceKey::TaxResidencyCertificate => "tax-residency-certificate",
            ServiceKey::PenaltyWaiver => "penalty-waiver",
            ServiceKey::PriceReduction => "price-reduction",
        };
        id.to_string()
    }

    /// Context free title used for the explanation footnotes.
    pub fn title(&self) -> String {
        let title = match self {
            ServiceKey::IfzaLicense => "IFZA License Cost",
            ServiceKey::MultiYearDiscount => "Multi-Year License Discount",
            ServiceKey::CrossBorderLicense => "Cross Border License",
            ServiceKey::ThirdPartyApprovals => "Third Party Approvals",
            ServiceKey::DetRegistration => "DET Registration Fee",
            ServiceKey::EstablishmentCard => "GDRFA Cost (Establishment Card)",
            ServiceKey::Mohre => "MoHRE Cost",
            ServiceKey::DetLicense => "DET License Fee",
            ServiceKey::OfficeRent => "Office Rent",
            ServiceKey::Noc => "NOC Fee",
            ServiceKey::MoaTranslation => "MoA / PoA Translation",
            ServiceKey::TmeProfessionalFee => "TME Services Professional Fee",
            ServiceKey::GoldenVisaAuthorityFee => "Golden Visa Authority Fee",
            ServiceKey::GoldenVisaRouteFee => "Golden Visa Qualification Fee",
            ServiceKey::VisaApplication => "Visa Application Fee",
            ServiceKey::MedicalEmiratesId => "Medical Test & Emirates ID",
            ServiceKey::StatusChange => "Status Change",
            ServiceKey::VipStamping => "VIP Visa Stamping",
            ServiceKey::EmployeeInsurance => "Employee Insurance",
            ServiceKey::HealthInsurance(tier) => {
                return format!("Health Insurance - {}", tier.label())
            }
            ServiceKey::VisaCancellation => "Visa Cancellation",
            ServiceKey::TmeVisaServiceFee => "TME Services Visa Processing Fee",
            ServiceKey::GoldenVisaTmeFee => "TME Services Golden Visa Fee",
            ServiceKey::LicenseRenewal => "License Renewal",
            ServiceKey::EstablishmentCardRenewal => "Establishment Card Renewal",
            ServiceKey::MohreRenewal => "MoHRE Renewal",
            ServiceKey::OfficeRentRenewal => "Office Rent Renewal",
            ServiceKey::AccountingFee => "Accounting & Bookkeeping",
            ServiceKey::TmeYearlyFee => "TME Services Yearly Fee",
            ServiceKey::BankAccountAssistance => "Corporate Bank Account Assistance",
            ServiceKey::PersonalBankAccount => "Personal Bank Account",
            ServiceKey::VatRegistration => "VAT Registration",
            ServiceKey::CorporateTaxRegistration => "Corporate Tax Registration",
            ServiceKey::CompanyStamp => "Company Stamp",
            ServiceKey::AccountingSetup => "Accounting Setup",
            ServiceKey::Accounting => "Accounting Services",
            ServiceKey::VatReturnFiling => "VAT Return Filing",
            ServiceKey::CorporateTaxReturn => "Corporate Tax Return",
            ServiceKey::Payroll => "Payroll Services",
            ServiceKey::Compliance => "Compliance Services",
            ServiceKey::TaxResidencyCertificate => "Tax Residency Certificate",
            ServiceKey::PenaltyWaiver => "Penalty Waiver Request",
            ServiceKey::PriceReduction => "Price Reduction",
        };
        title.to_string()
    }
}

/// Who a line item is charged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceContext {
    #[default]
    General,
    Company,
    Primary,
    Spouse,
    Child,
}

impl ServiceContext {
    /// Word used in "for spouse and child visa" phrases; none for general items.
    pub fn visa_noun(&self) -> Option<&'static str> {
        match self {
            ServiceContext::General => None,
            ServiceContext::Company => Some("company"),
            ServiceContext::Primary => Some("main"),
            ServiceContext::Spouse => Some("spouse"),
            ServiceContext::Child => Some("child"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub key: ServiceKey,
    pub context: ServiceContext,
    pub id: String,
    pub description: String,
    /// Always in AED
    pub amount: f64,
    /// Subtracted from totals instead of added
    pub is_reduction: bool,
    pub explanation: Option<String>,
}

impl ServiceItem {
    pub fn new(
        key: ServiceKey,
        context: ServiceContext,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            key,
            context,
            id: key.id(),
            description: description.into(),
            amount,
            is_reduction: false,
            explanation: None,
        }
    }

    pub fn reduction(mut self) -> Self {
        self.is_reduction = true;
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn signed_amount(&self) -> f64 {
        if self.is_reduction {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// Ordered line items that make up one table of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTable {
    pub title: String,
    pub section: Section,
    pub context: ServiceContext,
    pub items: Vec<ServiceItem>,
}

impl ServiceTable {
    pub fn new(
        title: impl Into<String>,
        section: Section,
        context: ServiceContext,
        items: Vec<ServiceItem>,
    ) -> Self {
        Self {
            title: title.into(),
            section,
            context,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// "1 visa", "3 visas"
pub fn count_label(count: u32, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
