use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProposalError {
    #[error("Config directory not found at {0}. Run 'proposal init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Document file not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("Failed to parse document {path}: {reason}")]
    DocumentParse { path: PathBuf, reason: String },

    #[error("Unsupported document format for {0}. Use a .json or .toml file.")]
    UnsupportedDocumentFormat(PathBuf),

    #[error("Invalid data provided: {0}")]
    InvalidData(String),

    #[error("Invalid exchange rate {0}: must be a positive number")]
    InvalidExchangeRate(f64),

    #[error("Invalid date '{value}' for {field}. Expected YYYY-MM-DD.")]
    InvalidDate { field: String, value: String },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Proposal '{0}' not found in history")]
    ProposalNotFound(String),

    #[error("Invalid proposal index '{0}'. Use 'proposal list' to see generated proposals.")]
    InvalidProposalIndex(String),

    #[error("Failed to serialize proposal: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProposalError>;
