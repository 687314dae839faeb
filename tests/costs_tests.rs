use proposal::costs::{
    calculate_totals, format_amount, format_money, number_items, round_to_cents, sum_cost_items,
    CostItem, CostTable, Currency, ExchangeRate,
};
use proposal::layout::Section;
use proposal::services::{ServiceContext, ServiceItem, ServiceKey, ServiceTable};
use proposal::ProposalError;

fn item(key: ServiceKey, description: &str, amount: f64) -> ServiceItem {
    ServiceItem::new(key, ServiceContext::General, description, amount)
}

fn eur(rate: f64) -> ExchangeRate {
    ExchangeRate::new(Currency::Eur, rate).unwrap()
}

#[test]
fn test_number_items_sequential() {
    let items = vec![
        item(ServiceKey::IfzaLicense, "IFZA License Cost", 16900.0),
        item(ServiceKey::EstablishmentCard, "GDRFA Cost (Establishment Card)", 2000.0),
        item(
            ServiceKey::TmeProfessionalFee,
            "TME Services Professional Fee (Company Setup)",
            5000.0,
        ),
    ];
    let numbered = number_items(&items, &eur(4.0));

    let descriptions: Vec<&str> = numbered.iter().map(|i| i.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "1. IFZA License Cost",
            "2. GDRFA Cost (Establishment Card)",
            "3. TME Services Professional Fee (Company Setup)",
        ]
    );
    let numbers: Vec<usize> = numbered.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(numbered[0].secondary_amount, 4225.0);
}

#[test]
fn test_dropping_an_item_renumbers_the_rest() {
    let mut items = vec![
        item(ServiceKey::IfzaLicense, "IFZA License Cost", 16900.0),
        item(ServiceKey::CrossBorderLicense, "Cross Border License", 2000.0),
        item(ServiceKey::OfficeRent, "Office Rent", 8000.0),
    ];
    items.remove(1);

    let numbered = number_items(&items, &eur(4.0));
    assert_eq!(numbered[1].number, 2);
    assert_eq!(numbered[1].description, "2. Office Rent");
}

#[test]
fn test_number_items_empty() {
    assert!(number_items(&[], &eur(4.0)).is_empty());
}

#[test]
fn test_cost_table_total_with_reduction() {
    let table = ServiceTable::new(
        "Initial Setup Cost",
        Section::InitialSetup,
        ServiceContext::General,
        vec![
            item(ServiceKey::IfzaLicense, "IFZA License Cost", 12900.0),
            item(ServiceKey::PriceReduction, "Price Reduction", 900.0).reduction(),
        ],
    );
    let cost_table = CostTable::from_service_table(&table, &eur(4.0));

    assert_eq!(cost_table.total.aed, 12000.0);
    assert_eq!(cost_table.total.secondary, 3000.0);
    assert_eq!(cost_table.items[1].display_amount(Currency::Aed), "-AED 900.00");
    assert_eq!(cost_table.items[1].display_secondary_amount(Currency::Eur), "-€225.00");
}

#[test]
fn test_secondary_total_derived_from_aed_total() {
    let items = vec![
        item(ServiceKey::IfzaLicense, "IFZA License Cost", 100.0),
        item(ServiceKey::OfficeRent, "Office Rent", 100.0),
        item(ServiceKey::Noc, "NOC Fee", 100.0),
    ];
    let rate = eur(3.0);
    let numbered = number_items(&items, &rate);
    let none: Vec<CostItem> = Vec::new();
    let totals = calculate_totals(&numbered, &none, &none, &none, &rate);

    assert_eq!(totals.setup.aed, 300.0);
    assert_eq!(totals.setup.secondary, 100.0);
    assert_eq!(totals.grand.secondary, 300.0 / 3.0);
}

#[test]
fn test_grand_total_excludes_additional() {
    let rate = eur(4.0);
    let setup = number_items(
        &[item(ServiceKey::IfzaLicense, "IFZA License Cost", 23900.0)],
        &rate,
    );
    let visa = number_items(
        &[item(ServiceKey::VisaApplication, "Company Visa Application Fee", 3750.0)],
        &rate,
    );
    let yearly = number_items(
        &[item(ServiceKey::LicenseRenewal, "IFZA License Renewal", 16900.0)],
        &rate,
    );
    let additional = number_items(
        &[item(ServiceKey::CompanyStamp, "Company Stamp", 250.0)],
        &rate,
    );

    let totals = calculate_totals(&setup, &visa, &yearly, &additional, &rate);
    assert_eq!(totals.grand.aed, 23900.0 + 3750.0 + 16900.0);
    assert_eq!(totals.additional.aed, 250.0);
    assert_eq!(sum_cost_items(&additional), 250.0);
}

#[test]
fn test_exchange_rate_must_be_positive() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            ExchangeRate::new(Currency::Usd, rate),
            Err(ProposalError::InvalidExchangeRate(_))
        ));
    }
    assert_eq!(eur(4.0).to_secondary(23900.0), 5975.0);
}

#[test]
fn test_money_formatting() {
    assert_eq!(format_amount(23900.0), "23,900.00");
    assert_eq!(format_amount(0.5), "0.50");
    assert_eq!(format_amount(1234567.891), "1,234,567.89");
    assert_eq!(format_money(23900.0, Currency::Aed), "AED 23,900.00");
    assert_eq!(format_money(5975.0, Currency::Eur), "€5,975.00");
    assert_eq!(format_money(-1000.0, Currency::Aed), "-AED 1,000.00");
    assert_eq!(format_money(-0.001, Currency::Usd), "$0.00");
    assert_eq!(round_to_cents(10.0 / 3.0), 3.33);
}

#[test]
fn test_currency_parse() {
    assert_eq!(Currency::parse("usd"), Some(Currency::Usd));
    assert_eq!(Currency::parse(" GBP "), Some(Currency::Gbp));
    assert_eq!(Currency::parse("CHF"), None);
    assert_eq!(Currency::default(), Currency::Eur);
}
