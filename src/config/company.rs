use serde::{Deserialize, Serialize};

use crate::costs::Currency;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub company: Company,
    #[serde(default)]
    pub proposal: ProposalSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// The firm issuing the proposals.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Tax registration number
    #[serde(default)]
    pub trn: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ProposalSettings {
    pub number_format: String,
    /// Used when a document names no secondary currency
    pub default_secondary_currency: Currency,
    /// AED per unit of the default secondary currency
    pub default_exchange_rate: f64,
}

impl Default for ProposalSettings {
    fn default() -> Self {
        Self {
            number_format: "TME-{year}-{seq:04}".to_string(),
            default_secondary_currency: Currency::Eur,
            default_exchange_rate: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Up to this many breakdown items, explanations share the last page
    pub explanation_item_threshold: usize,
    pub max_items_per_page: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            explanation_item_threshold: 8,
            max_items_per_page: 14,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub output_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
        }
    }
}
