use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use proposal::config::{
    config_dir, load_config, load_fee_tables, load_state, resolve_output_dir, CONFIG_TEMPLATE,
    FEES_TEMPLATE,
};
use proposal::costs::{format_grouped_int, format_money, CostTable, Currency};
use proposal::fees::{AuthorityConfig, AuthorityId, FeeTables, GoldenVisaFeeTable};
use proposal::layout::ExplanationPlacement;
use proposal::model::{DetLicenseType, GoldenVisaType, HealthInsurance};
use proposal::proposal::format_proposal_number;
use proposal::{generate_proposal, preview_proposal, Proposal, ProposalError, Result};

#[derive(Parser)]
#[command(name = "proposal")]
#[command(version, about = "Cost proposals for UAE company setup and visa services", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.proposal or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// Compute a proposal from a document and print its cost tables
    Quote {
        /// Input document (.json or .toml)
        file: PathBuf,

        /// Print the computed proposal as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show visible sections and how breakdown tables are paged
    Pages {
        /// Input document (.json or .toml)
        file: PathBuf,
    },

    /// Show the deduplicated explanations of a document
    Explain {
        /// Input document (.json or .toml)
        file: PathBuf,
    },

    /// Show the fee tables in effect
    Fees {
        /// Only show this authority (IFZA, DET)
        #[arg(short, long)]
        authority: Option<String>,
    },

    /// Generate a numbered proposal and record it in the history
    Generate {
        /// Input document (.json or .toml)
        file: PathBuf,

        /// Custom output file path (default: output_dir/TME-XXXX.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List generated proposals
    List {
        /// Number of proposals to show (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a generated proposal
    Show {
        /// Proposal number or index from 'list' (e.g., 1 or TME-2026-0001)
        proposal: String,
    },

    /// Show proposal status and next number
    Status,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays usable for --json.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Quote { file, json } => cmd_quote(&cfg_dir, &file, json),
        Commands::Pages { file } => cmd_pages(&cfg_dir, &file),
        Commands::Explain { file } => cmd_explain(&cfg_dir, &file),
        Commands::Fees { authority } => cmd_fees(&cfg_dir, authority.as_deref()),
        Commands::Generate { file, output } => cmd_generate(&cfg_dir, &file, output),
        Commands::List { limit } => cmd_list(&cfg_dir, limit),
        Commands::Show { proposal } => cmd_show(&cfg_dir, &proposal),
        Commands::Status => cmd_status(&cfg_dir),
    }
}

fn ensure_initialized(cfg_dir: &Path) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(ProposalError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    Ok(())
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(ProposalError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::create_dir_all(cfg_dir.join("output"))?;

    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(cfg_dir.join("fees.toml"), FEES_TEMPLATE)?;

    println!("Initialized proposal config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your firm details:     $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Adjust authority fees:      $EDITOR {}/fees.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then quote your first document:");
    println!("  proposal quote <document.json>");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct CostRow {
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "AED")]
    amount: String,
    #[tabled(rename = "SECONDARY")]
    secondary: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "AED")]
    amount: String,
    #[tabled(rename = "SECONDARY")]
    secondary: String,
}

#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "FEE")]
    fee: String,
    #[tabled(rename = "AED")]
    amount: String,
}

#[derive(Tabled)]
struct ProposalRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "CLIENT")]
    client: String,
}

fn format_whole_money(value: f64, currency: Currency) -> String {
    let rounded = value.round() as i64;
    let grouped = format_grouped_int(rounded);
    format!("{}{:>6}", currency.symbol(), grouped)
}

fn print_cost_table(table: &CostTable, currency: Currency) {
    let mut rows: Vec<CostRow> = table
        .items
        .iter()
        .map(|item| CostRow {
            description: item.description.clone(),
            amount: item.display_amount(Currency::Aed),
            secondary: item.display_secondary_amount(currency),
        })
        .collect();
    rows.push(CostRow {
        description: "TOTAL".to_string(),
        amount: format_money(table.total.aed, Currency::Aed),
        secondary: format_money(table.total.secondary, currency),
    });

    println!("{}", table.title);
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

fn print_totals(proposal: &Proposal) {
    let totals = &proposal.totals;
    let categories = [
        ("Setup", totals.setup),
        ("Visas", totals.visa),
        ("Yearly running", totals.yearly),
        ("Grand total", totals.grand),
    ];

    let mut rows: Vec<TotalRow> = categories
        .iter()
        .filter(|(label, money)| *label == "Grand total" || money.aed != 0.0)
        .map(|(label, money)| TotalRow {
            category: label.to_string(),
            amount: format_money(money.aed, Currency::Aed),
            secondary: format_money(money.secondary, proposal.currency),
        })
        .collect();
    if totals.additional.aed != 0.0 {
        rows.push(TotalRow {
            category: "Additional (optional)".to_string(),
            amount: format_money(totals.additional.aed, Currency::Aed),
            secondary: format_money(totals.additional.secondary, proposal.currency),
        });
    }

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Compute and print a proposal without recording it
fn cmd_quote(cfg_dir: &Path, file: &Path, json: bool) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let proposal = preview_proposal(cfg_dir, file)?;

    if json {
        let content = serde_json::to_string_pretty(&proposal)
            .map_err(|e| ProposalError::Serialization(e.to_string()))?;
        println!("{content}");
        return Ok(());
    }

    println!("{} proposal for {}", proposal.kind, proposal.client_name);
    println!(
        "Date: {}  |  1 {} = {} AED",
        proposal.date.format("%B %d, %Y"),
        proposal.currency,
        proposal.exchange_rate
    );
    println!();

    for table in proposal.all_tables() {
        print_cost_table(table, proposal.currency);
        println!();
    }
    print_totals(&proposal);

    if let Some(deadline) = proposal.tax_filing_deadline {
        println!();
        println!("Corporate tax return due: {}", deadline.format("%B %d, %Y"));
    }

    Ok(())
}

/// Show visible sections and breakdown pages
fn cmd_pages(cfg_dir: &Path, file: &Path) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let proposal = preview_proposal(cfg_dir, file)?;

    println!("Sections:");
    for (idx, section) in proposal.sections.iter().enumerate() {
        println!("  {}. {}", idx + 1, section);
    }

    let layout = &proposal.breakdowns;
    if layout.groups.is_empty() {
        println!();
        println!("No breakdown pages.");
    } else {
        println!();
        println!("Breakdown pages:");
        for group in &layout.groups {
            let titles: Vec<&str> = group.tables.iter().map(|t| t.title.as_str()).collect();
            let marker = if group.carries_explanations {
                " + explanations"
            } else {
                ""
            };
            println!(
                "  Page {}: {} ({} items){}",
                group.page,
                titles.join(", "),
                group.item_count(),
                marker
            );
        }
    }

    println!();
    match layout.explanations {
        ExplanationPlacement::None => println!("Explanations: none"),
        ExplanationPlacement::Inline { page } => {
            println!("Explanations: inline on page {page}")
        }
        ExplanationPlacement::TrailingPage { page } => {
            println!("Explanations: own page ({page})")
        }
    }

    Ok(())
}

/// Show deduplicated explanations
fn cmd_explain(cfg_dir: &Path, file: &Path) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let proposal = preview_proposal(cfg_dir, file)?;

    if proposal.explanations.is_empty() {
        println!("No explanations for this document.");
        return Ok(());
    }

    for explanation in &proposal.explanations {
        println!("{}", explanation.title);
        println!("  {}", explanation.explanation);
        println!();
    }

    Ok(())
}

fn authority_rows(fees: &AuthorityConfig) -> Vec<FeeRow> {
    let mut entries: Vec<(String, f64)> = vec![
        ("Base license fee".to_string(), fees.base_license_fee),
        ("Visa quota fee (per visa)".to_string(), fees.visa_quota_fee),
        ("Cross border license".to_string(), fees.cross_border_license_fee),
        ("Establishment card".to_string(), fees.establishment_card_fee),
        ("Registration fee".to_string(), fees.registration_fee),
        ("MoHRE fee".to_string(), fees.mohre_fee),
    ];
    for license_type in [
        DetLicenseType::Commercial,
        DetLicenseType::Professional,
        DetLicenseType::CommercialProfessional,
    ] {
        entries.push((
            format!("{} license", license_type.label()),
            fees.license_fees.for_type(license_type),
        ));
    }
    entries.extend([
        ("Visa fee".to_string(), fees.visa_fee),
        ("Status change".to_string(), fees.status_change_fee),
        ("VIP stamping".to_string(), fees.vip_stamping_fee),
        ("Employee insurance".to_string(), fees.employee_insurance_fee),
        ("Visa cancellation".to_string(), fees.visa_cancellation_fee),
    ]);
    for tier in [
        HealthInsurance::LowCost,
        HealthInsurance::SilverPackage,
        HealthInsurance::GoldPackage,
    ] {
        entries.push((
            format!("Health insurance ({})", tier.label()),
            fees.health_insurance.price(tier),
        ));
    }
    entries.extend([
        (
            "Establishment card renewal".to_string(),
            fees.establishment_card_renewal_fee,
        ),
        ("MoHRE renewal".to_string(), fees.mohre_renewal_fee),
    ]);

    entries
        .into_iter()
        .filter(|(_, amount)| *amount != 0.0)
        .map(|(fee, amount)| FeeRow {
            fee,
            amount: format_money(amount, Currency::Aed),
        })
        .collect()
}

fn golden_visa_rows(table: &GoldenVisaFeeTable) -> Vec<FeeRow> {
    [
        ("Authority fee", table.authority_fee),
        ("Medical test & Emirates ID", table.medical_emirates_id_fee),
        ("Route fee", table.route_fee),
        ("Dependent authority fee", table.dependent_authority_fee),
        (
            "Dependent medical test & Emirates ID",
            table.dependent_medical_emirates_id_fee,
        ),
        ("Visa cancellation", table.visa_cancellation_fee),
    ]
    .into_iter()
    .map(|(fee, amount)| FeeRow {
        fee: fee.to_string(),
        amount: format_money(amount, Currency::Aed),
    })
    .collect()
}

/// Show the fee tables in effect
fn cmd_fees(cfg_dir: &Path, authority: Option<&str>) -> Result<()> {
    let fees = if cfg_dir.exists() {
        load_fee_tables(cfg_dir)?
    } else {
        FeeTables::default()
    };

    let authorities = match authority {
        Some(value) => match AuthorityId::parse(value) {
            AuthorityId::Unknown => {
                println!("No fee table for '{value}'; documents for it are priced at zero.");
                return Ok(());
            }
            id => vec![id],
        },
        None => vec![AuthorityId::Ifza, AuthorityId::Det],
    };

    for id in &authorities {
        println!("{id}");
        let rows = authority_rows(&fees.resolve(*id));
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
        println!();
    }

    if authority.is_none() {
        for visa_type in [
            GoldenVisaType::PropertyInvestment,
            GoldenVisaType::TimeDeposit,
            GoldenVisaType::SkilledEmployee,
        ] {
            println!("Golden Visa ({})", visa_type.label());
            let rows = golden_visa_rows(&fees.golden_visa(visa_type));
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
            println!();
        }
    }

    Ok(())
}

/// Generate a new proposal
fn cmd_generate(cfg_dir: &Path, file: &Path, output: Option<PathBuf>) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    generate_proposal(cfg_dir, file, output)?;
    Ok(())
}

/// List generated proposals
fn cmd_list(cfg_dir: &Path, limit: Option<usize>) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let state = load_state(cfg_dir)?;

    if state.history.is_empty() {
        println!("No proposals generated yet.");
        return Ok(());
    }

    let proposals: Vec<_> = state.history.iter().rev().enumerate().collect();
    let proposals = match limit {
        Some(n) => &proposals[..n.min(proposals.len())],
        None => &proposals[..],
    };

    let rows: Vec<ProposalRow> = proposals
        .iter()
        .map(|(idx, entry)| ProposalRow {
            index: idx + 1,
            number: entry.number.clone(),
            date: entry.date.to_string(),
            kind: entry.kind.to_string(),
            total: format_whole_money(entry.total, Currency::Aed),
            client: entry.client.clone(),
        })
        .collect();

    let shown_total: f64 = proposals.iter().map(|(_, entry)| entry.total).sum();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!(
        "Total: {} proposals, {} quoted",
        state.history.len(),
        format_money(shown_total, Currency::Aed)
    );
    println!("Use index number with show (e.g., 'proposal show 1')");

    Ok(())
}

/// Resolve a proposal reference to the actual proposal number.
/// Accepts either an index (1-based) from 'list' or the full proposal number.
fn resolve_proposal_number(cfg_dir: &Path, reference: &str) -> Result<String> {
    let state = load_state(cfg_dir)?;

    if let Ok(idx) = reference.parse::<usize>() {
        // Proposals are displayed newest first, 1-indexed
        let proposals: Vec<_> = state.history.iter().rev().collect();
        if idx == 0 || idx > proposals.len() {
            return Err(ProposalError::InvalidProposalIndex(reference.to_string()));
        }
        return Ok(proposals[idx - 1].number.clone());
    }

    if state.find(reference).is_some() {
        Ok(reference.to_string())
    } else {
        Err(ProposalError::ProposalNotFound(reference.to_string()))
    }
}

/// Show a generated proposal
fn cmd_show(cfg_dir: &Path, reference: &str) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let number = resolve_proposal_number(cfg_dir, reference)?;
    let config = load_config(cfg_dir)?;
    let state = load_state(cfg_dir)?;
    let entry = state
        .find(&number)
        .ok_or_else(|| ProposalError::ProposalNotFound(number.clone()))?;

    let path = resolve_output_dir(&config.output.output_dir, cfg_dir).join(&entry.file);

    println!("Proposal {}", entry.number);
    println!("  Client: {}", entry.client);
    println!("  Type:   {}", entry.kind);
    println!("  Date:   {}", entry.date.format("%B %d, %Y"));
    println!("  Total:  {}", format_money(entry.total, Currency::Aed));
    if path.exists() {
        println!("  File:   {}", path.display());
    } else {
        println!("  File:   {} (missing)", path.display());
    }

    Ok(())
}

/// Show proposal status
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    ensure_initialized(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let state = load_state(cfg_dir)?;

    let current_year = chrono::Local::now().year() as u32;
    let next_number = format_proposal_number(
        &config.proposal.number_format,
        current_year,
        state.next_sequence(current_year),
    );
    let fees_overridden = cfg_dir.join("fees.toml").exists();

    println!("Proposal Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("Company:          {}", config.company.name);
    println!(
        "Currency:         {} (1 {} = {} AED)",
        config.proposal.default_secondary_currency,
        config.proposal.default_secondary_currency,
        config.proposal.default_exchange_rate
    );
    println!(
        "Fee tables:       {}",
        if fees_overridden {
            "built-in + fees.toml"
        } else {
            "built-in"
        }
    );
    println!("Proposals:        {}", state.history.len());
    println!("Next proposal:    {}", next_number);

    if !state.history.is_empty() {
        println!();
        println!("Recent proposals:");
        for entry in state.history.iter().rev().take(5) {
            println!(
                "  {} - {} - {}",
                entry.number,
                entry.client,
                format_money(entry.total, Currency::Aed)
            );
        }
    }

    Ok(())
}
