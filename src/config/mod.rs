mod company;
mod state;

pub use company::{Company, Config, LayoutSettings, OutputSettings, ProposalSettings};
pub use state::{Counter, HistoryEntry, State};

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ProposalError, Result};
use crate::fees::FeeTables;
use crate::model::DocumentRequest;

/// Get the config directory path (~/.proposal/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "proposal") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = dirs_home().ok_or_else(|| {
        ProposalError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".proposal"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Relative output directories live inside the config directory.
pub fn resolve_output_dir(output_dir: &str, config_dir: &Path) -> PathBuf {
    let expanded = expand_path(output_dir);
    if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    }
}

/// Load the main config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(ProposalError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ProposalError::ConfigParse { path, source: e })
}

/// Load fee tables, applying fees.toml overrides when present
pub fn load_fee_tables(config_dir: &Path) -> Result<FeeTables> {
    let path = config_dir.join("fees.toml");
    if !path.exists() {
        debug!("no fees.toml, using built-in fee tables");
        return Ok(FeeTables::default());
    }
    let content = fs::read_to_string(&path)?;
    FeeTables::from_toml_overrides(&content, &path)
}

/// Load state.toml (creates default if missing)
pub fn load_state(config_dir: &Path) -> Result<State> {
    let path = config_dir.join("state.toml");
    if !path.exists() {
        return Ok(State::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ProposalError::ConfigParse { path, source: e })
}

/// Save state.toml
pub fn save_state(config_dir: &Path, state: &State) -> Result<()> {
    let path = config_dir.join("state.toml");
    let content =
        toml::to_string_pretty(state).map_err(|e| ProposalError::Serialization(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

/// Read an input document from a .json or .toml file
pub fn load_document(path: &Path) -> Result<DocumentRequest> {
    if !path.exists() {
        return Err(ProposalError::DocumentNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content = fs::read_to_string(path)?;
    let parse_error = |reason: String| ProposalError::DocumentParse {
        path: path.to_path_buf(),
        reason,
    };

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => Err(ProposalError::UnsupportedDocumentFormat(path.to_path_buf())),
    }
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "Your Firm Name"
address = "Office 101, Business Bay"
city = "Dubai"
country = "United Arab Emirates"
email = "setup@yourfirm.ae"
# phone = "+971-4-000-0000"     # optional
# website = "https://yourfirm.ae" # optional
# trn = "100000000000003"       # optional

[proposal]
number_format = "TME-{year}-{seq:04}"  # e.g., TME-2026-0001
default_secondary_currency = "EUR"     # EUR, USD or GBP
default_exchange_rate = 4.0            # AED per unit of the secondary currency

[layout]
explanation_item_threshold = 8  # breakdown items before explanations get their own page
max_items_per_page = 14

[output]
output_dir = "output"  # relative paths live inside this directory; ~/ is expanded
"#;

/// Template content for fees.toml
pub const FEES_TEMPLATE: &str = r#"# Overrides for the built-in authority fee tables (AED).
# Only the keys you set are changed; everything else keeps its default.
# Run `proposal fees` to see the tables in effect.
#
# [ifza]
# base_license_fee = 12900.0
# visa_fee = 3750.0
#
# [det.license_fees]
# commercial = 13000.0
#
# [golden_visa.property_investment]
# authority_fee = 4010.0
"#;
