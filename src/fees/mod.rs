//! Fee table resolver.
//!
//! Built-in tables cover IFZA, DET and the three golden visa routes. A
//! `fees.toml` in the config directory may override any subset of values;
//! keys it does not mention keep their built-in amount.

mod authority;
mod golden_visa;

pub use authority::{
    multi_year_discount_percent, AuthorityConfig, AuthorityId, HealthInsuranceFees, LicenseFees,
    VisaFeeSchedule,
};
pub use golden_visa::{GoldenVisaFeeOverrides, GoldenVisaFeeTable, GoldenVisaFeeTables};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{ProposalError, Result};
use crate::model::GoldenVisaType;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FeeTables {
    pub ifza: AuthorityConfig,
    pub det: AuthorityConfig,
    pub golden_visa: GoldenVisaFeeTables,
}

impl Default for FeeTables {
    fn default() -> Self {
        Self {
            ifza: AuthorityConfig::ifza(),
            det: AuthorityConfig::det(),
            golden_visa: GoldenVisaFeeTables::default(),
        }
    }
}

impl FeeTables {
    /// Look up the fee table of an authority. Unknown authorities get an
    /// all-zero table so partially configured drafts still render.
    pub fn resolve(&self, authority: AuthorityId) -> AuthorityConfig {
        match authority {
            AuthorityId::Ifza => self.ifza,
            AuthorityId::Det => self.det,
            AuthorityId::Unknown => {
                warn!("no fee table for unknown authority, using zero fees");
                AuthorityConfig::default()
            }
        }
    }

    pub fn golden_visa(&self, visa_type: GoldenVisaType) -> GoldenVisaFeeTable {
        self.golden_visa.for_type(visa_type)
    }

    /// Parse a `fees.toml` document layered over the built-in tables.
    pub fn from_toml_overrides(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |source: toml::de::Error| ProposalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        };
        let overrides: toml::Table = content.parse().map_err(parse_error)?;
        let mut merged = toml::Table::try_from(FeeTables::default())
            .map_err(|e| ProposalError::Serialization(e.to_string()))?;
        merge_tables(&mut merged, overrides);
        toml::Value::Table(merged).try_into().map_err(parse_error)
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(nested) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, nested),
                _ => {
                    base.insert(key, toml::Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
