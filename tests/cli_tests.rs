use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn proposal_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("proposal"))
}

fn init_config(temp_dir: &TempDir) -> PathBuf {
    let config_path = temp_dir.path().join("proposal-config");
    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();
    config_path
}

fn write_document(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const IFZA_OFFER: &str = r#"{
  "documentType": "offer",
  "clientDetails": {
    "firstName": "Amira",
    "lastName": "Haddad",
    "secondaryCurrency": "EUR",
    "exchangeRate": 4.0,
    "date": "2026-03-02"
  },
  "offer": {
    "authority": "IFZA",
    "ifzaLicense": { "visaQuota": 2, "licenseYears": 1 },
    "setup": { "tmeServicesFee": 5000.0 }
  }
}"#;

const GOLDEN_VISA: &str = r#"{
  "documentType": "goldenVisa",
  "clientDetails": { "firstName": "Omar", "lastName": "Saleh" },
  "goldenVisaData": {
    "visaType": "propertyInvestment",
    "primaryVisaRequired": true,
    "tmeServicesFee": 7500.0,
    "dependents": {
      "spouse": { "visaCancellation": true, "tmeServicesFee": 2000.0 },
      "children": {
        "numberOfChildren": 3,
        "visaCancellation": true,
        "tmeServicesFeePerChild": 1500.0
      }
    }
  }
}"#;

#[test]
fn test_help() {
    proposal_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost proposals"));
}

#[test]
fn test_version() {
    proposal_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("proposal"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("proposal-config");

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized proposal config"));

    assert!(config_path.join("config.toml").exists());
    assert!(config_path.join("fees.toml").exists());
    assert!(config_path.join("output").is_dir());
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_status_without_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_status() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposal Status"))
        .stdout(predicate::str::contains("Next proposal:"))
        .stdout(predicate::str::contains("TME-"));
}

#[test]
fn test_quote_ifza_offer() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "offer.json", IFZA_OFFER);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("Offer proposal for Amira Haddad"))
        .stdout(predicate::str::contains("1. IFZA License Cost"))
        .stdout(predicate::str::contains("2. GDRFA Cost (Establishment Card)"))
        .stdout(predicate::str::contains("AED 23,900.00"))
        .stdout(predicate::str::contains("€5,975.00"))
        .stdout(predicate::str::contains("Grand total"));
}

#[test]
fn test_quote_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "offer.json", IFZA_OFFER);

    let output = proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote", "--json"])
        .arg(&document)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["clientName"], "Amira Haddad");
    assert_eq!(value["totals"]["setup"]["aed"], 23900.0);
    assert_eq!(value["tables"][0]["section"], "initialSetup");
}

#[test]
fn test_quote_toml_document() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(
        temp_dir.path(),
        "taxation.toml",
        r#"documentType = "taxation"

[clientDetails]
firstName = "Amira"
lastName = "Haddad"

[taxationData]
financialYearEnd = "2025-12-31"
corporateTaxReturnFee = 3000.0
"#,
    );

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Corporate Tax Return"))
        .stdout(predicate::str::contains("Corporate tax return due: September 30, 2026"));
}

#[test]
fn test_quote_uses_fee_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    fs::write(
        config_path.join("fees.toml"),
        "[ifza]\nbase_license_fee = 13900.0\n",
    )
    .unwrap();
    let document = write_document(temp_dir.path(), "offer.json", IFZA_OFFER);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("AED 24,900.00"));
}

#[test]
fn test_pages_golden_visa() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "golden.json", GOLDEN_VISA);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "pages"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1: Spouse Golden Visa (4 items)"))
        .stdout(predicate::str::contains(
            "Page 2: Child 1 Golden Visa, Child 2 Golden Visa, Child 3 Golden Visa (12 items)",
        ))
        .stdout(predicate::str::contains("Explanations: own page (3)"));
}

#[test]
fn test_explain_merges_contexts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "golden.json", GOLDEN_VISA);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "explain"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Visa Cancellation for spouse and child visa",
        ))
        .stdout(predicate::str::contains("Golden Visa Authority Fee for main visa"));
}

#[test]
fn test_fees_single_authority() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "fees", "--authority", "ifza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IFZA"))
        .stdout(predicate::str::contains("AED 12,900.00"))
        .stdout(predicate::str::contains("Golden Visa").not());
}

#[test]
fn test_fees_unknown_authority() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "fees", "-a", "RAKEZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fee table for 'RAKEZ'"));
}

#[test]
fn test_quote_missing_document() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document file not found"));
}

#[test]
fn test_quote_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "offer.yaml", "documentType: offer");

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document format"));
}

#[test]
fn test_quote_missing_data_bag() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(
        temp_dir.path(),
        "offer.json",
        r#"{ "documentType": "offer", "clientDetails": { "firstName": "Amira" } }"#,
    );

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid data provided: offer is missing"));
}

#[test]
fn test_quote_invalid_exchange_rate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(
        temp_dir.path(),
        "offer.json",
        &IFZA_OFFER.replace("\"exchangeRate\": 4.0", "\"exchangeRate\": 0"),
    );

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "quote"])
        .arg(&document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid exchange rate"));
}

#[test]
fn test_generate_list_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);
    let document = write_document(temp_dir.path(), "offer.json", IFZA_OFFER);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "generate"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated TME-"))
        .stdout(predicate::str::contains("Client: Amira Haddad"));

    let generated: Vec<_> = fs::read_dir(config_path.join("output"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(generated.len(), 1);
    let content = fs::read_to_string(&generated[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value["number"].as_str().unwrap().starts_with("TME-"));
    assert_eq!(value["issuer"]["name"], "Your Firm Name");

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amira Haddad"))
        .stdout(predicate::str::contains("Total: 1 proposals"));

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client: Amira Haddad"))
        .stdout(predicate::str::contains("AED 23,900.00"));

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposals:        1"))
        .stdout(predicate::str::contains("-0002"));
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No proposals generated yet."));
}

#[test]
fn test_show_invalid_reference() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = init_config(&temp_dir);

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid proposal index"));

    proposal_cmd()
        .args(["-C", config_path.to_str().unwrap(), "show", "TME-1999-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in history"));
}
