use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProposalError, Result};

use super::{ClientDetails, CompanyServicesData, GoldenVisaData, OfferData, TaxationData};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Offer,
    GoldenVisa,
    CompanyServices,
    Taxation,
}

impl DocumentKind {
    /// Name of the envelope field that carries this kind's data.
    pub fn data_field(&self) -> &'static str {
        match self {
            DocumentKind::Offer => "offer",
            DocumentKind::GoldenVisa => "goldenVisaData",
            DocumentKind::CompanyServices => "companyServicesData",
            DocumentKind::Taxation => "taxationData",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            DocumentKind::Offer => "Offer",
            DocumentKind::GoldenVisa => "Golden Visa",
            DocumentKind::CompanyServices => "Company Services",
            DocumentKind::Taxation => "Taxation",
        };
        write!(f, "{label}")
    }
}

/// Raw document as posted by the form layer.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub document_type: DocumentKind,
    #[serde(default)]
    pub client_details: Option<ClientDetails>,
    #[serde(default)]
    pub offer: Option<OfferData>,
    #[serde(default)]
    pub golden_visa_data: Option<GoldenVisaData>,
    #[serde(default)]
    pub company_services_data: Option<CompanyServicesData>,
    #[serde(default)]
    pub taxation_data: Option<TaxationData>,
}

impl DocumentRequest {
    /// Select the data bag named by `documentType`; unrelated bags are ignored.
    pub fn into_document(self) -> Result<Document> {
        let kind = self.document_type;
        let missing = || ProposalError::InvalidData(format!("{} is missing", kind.data_field()));

        let client = self
            .client_details
            .ok_or_else(|| ProposalError::InvalidData("clientDetails is missing".to_string()))?;

        let body = match kind {
            DocumentKind::Offer => DocumentBody::Offer(self.offer.ok_or_else(missing)?),
            DocumentKind::GoldenVisa => {
                DocumentBody::GoldenVisa(self.golden_visa_data.ok_or_else(missing)?)
            }
            DocumentKind::CompanyServices => {
                DocumentBody::CompanyServices(self.company_services_data.ok_or_else(missing)?)
            }
            DocumentKind::Taxation => {
                DocumentBody::Taxation(self.taxation_data.ok_or_else(missing)?)
            }
        };

        Ok(Document { client, body })
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub client: ClientDetails,
    pub body: DocumentBody,
}

#[derive(Debug, Clone)]
pub enum DocumentBody {
    Offer(OfferData),
    GoldenVisa(GoldenVisaData),
    CompanyServices(CompanyServicesData),
    Taxation(TaxationData),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self.body {
            DocumentBody::Offer(_) => DocumentKind::Offer,
            DocumentBody::GoldenVisa(_) => DocumentKind::GoldenVisa,
            DocumentBody::CompanyServices(_) => DocumentKind::CompanyServices,
            DocumentBody::Taxation(_) => DocumentKind::Taxation,
        }
    }
}
