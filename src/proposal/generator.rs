use chrono::{Datelike, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{
    load_config, load_document, load_fee_tables, load_state, resolve_output_dir, save_state,
    Company, HistoryEntry,
};
use crate::costs::{format_money, Currency};
use crate::error::{ProposalError, Result};

use super::builder::{Proposal, ProposalBuilder};

/// What gets written to disk for a generated proposal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalFile<'a> {
    pub number: &'a str,
    pub issuer: &'a Company,
    #[serde(flatten)]
    pub proposal: &'a Proposal,
}

/// Format proposal number from template
pub fn format_proposal_number(format: &str, year: u32, seq: u32) -> String {
    format
        .replace("{year}", &year.to_string())
        .replace("{seq:04}", &format!("{:04}", seq))
        .replace("{seq:05}", &format!("{:05}", seq))
        .replace("{seq:03}", &format!("{:03}", seq))
}

/// Compute a proposal from a document file without recording it.
pub fn preview_proposal(cfg_dir: &Path, document_path: &Path) -> Result<Proposal> {
    let config = load_config(cfg_dir)?;
    let fees = load_fee_tables(cfg_dir)?;
    let request = load_document(document_path)?;

    ProposalBuilder::new(&fees, config.layout)
        .with_defaults(&config.proposal)
        .build_from_request(Some(request))
}

/// Generate a new proposal: number it, write it as JSON and record it.
pub fn generate_proposal(
    cfg_dir: &Path,
    document_path: &Path,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let config = load_config(cfg_dir)?;
    let fees = load_fee_tables(cfg_dir)?;
    let mut state = load_state(cfg_dir)?;
    let request = load_document(document_path)?;

    let proposal = ProposalBuilder::new(&fees, config.layout)
        .with_defaults(&config.proposal)
        .build_from_request(Some(request))?;

    // Determine proposal number
    let today = Local::now().date_naive();
    let current_year = today.year() as u32;
    let seq = state.next_sequence(current_year);
    let number = format_proposal_number(&config.proposal.number_format, current_year, seq);

    let output_dir = resolve_output_dir(&config.output.output_dir, cfg_dir);
    std::fs::create_dir_all(&output_dir)?;

    let filename = format!("{}.json", number);
    let path = output_path.unwrap_or_else(|| output_dir.join(&filename));

    let file = ProposalFile {
        number: &number,
        issuer: &config.company,
        proposal: &proposal,
    };
    let content = serde_json::to_string_pretty(&file)
        .map_err(|e| ProposalError::Serialization(e.to_string()))?;
    std::fs::write(&path, content)?;
    info!(number = %number, path = %path.display(), "wrote proposal");

    // Update state
    state.counter.last_number = seq;
    state.counter.last_year = current_year;
    state.history.push(HistoryEntry {
        number: number.clone(),
        client: proposal.client_name.clone(),
        kind: proposal.kind,
        date: today,
        total: proposal.totals.grand.aed,
        file: filename,
    });

    save_state(cfg_dir, &state)?;

    println!("Generated {}", number);
    println!("  Client: {}", proposal.client_name);
    println!("  Type:   {}", proposal.kind);
    println!(
        "  Total:  {} ({})",
        format_money(proposal.totals.grand.aed, Currency::Aed),
        format_money(proposal.totals.grand.secondary, proposal.currency)
    );
    println!("  Saved:  {}", path.display());

    Ok(path)
}
