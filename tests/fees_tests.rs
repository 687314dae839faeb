use std::path::Path;

use proposal::fees::{multi_year_discount_percent, AuthorityId, FeeTables, GoldenVisaFeeOverrides};
use proposal::model::{DetLicenseType, GoldenVisaType};
use proposal::ProposalError;

fn overrides(content: &str) -> proposal::Result<FeeTables> {
    FeeTables::from_toml_overrides(content, Path::new("fees.toml"))
}

#[test]
fn test_resolve_known_authorities() {
    let fees = FeeTables::default();

    let ifza = fees.resolve(AuthorityId::Ifza);
    assert_eq!(ifza.quota_license_fee(0), 12900.0);
    assert_eq!(ifza.quota_license_fee(2), 16900.0);
    assert_eq!(ifza.visa_schedule().medical_emirates_id_fee, 0.0);

    let det = fees.resolve(AuthorityId::Det);
    assert_eq!(det.license_fees.for_type(DetLicenseType::Professional), 9000.0);
    assert_eq!(det.employee_insurance_fee, 190.0);
}

#[test]
fn test_resolve_unknown_authority_is_zero() {
    let fees = FeeTables::default().resolve(AuthorityId::parse("RAKEZ"));
    assert_eq!(fees.base_license_fee, 0.0);
    assert_eq!(fees.visa_fee, 0.0);
}

#[test]
fn test_authority_parse() {
    assert_eq!(AuthorityId::parse("ifza"), AuthorityId::Ifza);
    assert_eq!(AuthorityId::parse(" DET "), AuthorityId::Det);
    assert_eq!(AuthorityId::parse("DMCC"), AuthorityId::Unknown);
}

#[test]
fn test_discount_percentages() {
    assert_eq!(multi_year_discount_percent(1), 0.0);
    assert_eq!(multi_year_discount_percent(2), 15.0);
    assert_eq!(multi_year_discount_percent(3), 20.0);
    assert_eq!(multi_year_discount_percent(4), 0.0);
    assert_eq!(multi_year_discount_percent(5), 30.0);
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let fees = overrides(
        r#"
[ifza]
base_license_fee = 14000.0

[det.license_fees]
commercial = 15000.0
"#,
    )
    .unwrap();

    let defaults = FeeTables::default();
    assert_eq!(fees.ifza.base_license_fee, 14000.0);
    assert_eq!(fees.ifza.visa_quota_fee, defaults.ifza.visa_quota_fee);
    assert_eq!(fees.ifza.health_insurance, defaults.ifza.health_insurance);
    assert_eq!(fees.det.license_fees.commercial, 15000.0);
    assert_eq!(fees.det.license_fees.professional, 9000.0);
    assert_eq!(fees.golden_visa, defaults.golden_visa);
}

#[test]
fn test_empty_override_is_default() {
    assert_eq!(overrides("").unwrap(), FeeTables::default());
}

#[test]
fn test_golden_visa_override() {
    let fees = overrides(
        r#"
[golden_visa.time_deposit]
route_fee = 400.0
"#,
    )
    .unwrap();
    assert_eq!(fees.golden_visa(GoldenVisaType::TimeDeposit).route_fee, 400.0);
    assert_eq!(fees.golden_visa(GoldenVisaType::TimeDeposit).authority_fee, 4010.0);
    assert_eq!(fees.golden_visa(GoldenVisaType::SkilledEmployee).route_fee, 500.0);
}

#[test]
fn test_invalid_override_is_parse_error() {
    let result = overrides("[ifza]\nbase_license_fee = \"a lot\"\n");
    assert!(matches!(result, Err(ProposalError::ConfigParse { .. })));

    let result = overrides("not toml at all = = =");
    assert!(matches!(result, Err(ProposalError::ConfigParse { .. })));
}

#[test]
fn test_document_overrides_apply_per_field() {
    let table = FeeTables::default().golden_visa(GoldenVisaType::PropertyInvestment);
    let adjusted = table.with_overrides(&GoldenVisaFeeOverrides {
        visa_cancellation_fee: Some(200.0),
        ..GoldenVisaFeeOverrides::default()
    });

    assert_eq!(adjusted.visa_cancellation_fee, 200.0);
    assert_eq!(adjusted.route_fee, table.route_fee);
    assert_eq!(adjusted.dependent_schedule().cancellation_fee, 200.0);
    assert_eq!(adjusted.dependent_schedule().application_fee, 3750.0);
}
