use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{LayoutSettings, ProposalSettings};
use crate::costs::{calculate_totals, CostItem, CostTable, Currency, ExchangeRate, Totals};
use crate::error::{ProposalError, Result};
use crate::fees::FeeTables;
use crate::layout::{
    deduplicate_explanations, paginate_by_item_budget, paginate_dependents, visible_sections,
    DependentPlan, Explanation, PageLayout, Section,
};
use crate::model::{
    CompanyServicesData, Document, DocumentBody, DocumentKind, DocumentRequest, GoldenVisaData,
    OfferData, TaxationData, VisaHolder,
};
use crate::services::{
    generate_additional_items, generate_company_services_items, generate_dependent_tables,
    generate_golden_visa_authority_items, generate_golden_visa_tme_items, generate_setup_items,
    generate_taxation_items, generate_visa_items, generate_yearly_items, ServiceContext,
    ServiceKey, ServiceTable, VisaContext, VisaProfile,
};

/// A fully computed proposal, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub kind: DocumentKind,
    pub client_name: String,
    pub date: NaiveDate,
    pub currency: Currency,
    /// AED per unit of `currency`
    pub exchange_rate: f64,
    pub sections: Vec<Section>,
    /// Tables printed on their section pages
    pub tables: Vec<CostTable>,
    /// Per-dependent breakdown tables grouped into pages
    pub breakdowns: PageLayout<CostTable>,
    pub totals: Totals,
    pub explanations: Vec<Explanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_filing_deadline: Option<NaiveDate>,
}

impl Proposal {
    /// Main tables first, then breakdown tables in page order.
    pub fn all_tables(&self) -> impl Iterator<Item = &CostTable> {
        self.tables
            .iter()
            .chain(self.breakdowns.groups.iter().flat_map(|group| group.tables.iter()))
    }

    pub fn items(&self) -> impl Iterator<Item = &CostItem> {
        self.all_tables().flat_map(|table| table.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }
}

/// Generated tables before numbering, split by how they are laid out.
#[derive(Default)]
struct Generated {
    tables: Vec<ServiceTable>,
    breakdowns: Breakdowns,
    tax_filing_deadline: Option<NaiveDate>,
}

#[derive(Default)]
enum Breakdowns {
    #[default]
    None,
    ItemBudget(Vec<ServiceTable>),
    Dependents(Vec<ServiceTable>, DependentPlan),
}

pub struct ProposalBuilder<'a> {
    fees: &'a FeeTables,
    layout: LayoutSettings,
    default_currency: Currency,
    default_exchange_rate: f64,
}

impl<'a> ProposalBuilder<'a> {
    pub fn new(fees: &'a FeeTables, layout: LayoutSettings) -> Self {
        let defaults = ProposalSettings::default();
        Self {
            fees,
            layout,
            default_currency: defaults.default_secondary_currency,
            default_exchange_rate: defaults.default_exchange_rate,
        }
    }

    /// Currency and rate for documents whose client details name none.
    pub fn with_defaults(mut self, settings: &ProposalSettings) -> Self {
        self.default_currency = settings.default_secondary_currency;
        self.default_exchange_rate = settings.default_exchange_rate;
        self
    }

    /// Build from a raw request; a missing request is invalid input.
    pub fn build_from_request(&self, request: Option<DocumentRequest>) -> Result<Proposal> {
        let request =
            request.ok_or_else(|| ProposalError::InvalidData("document is missing".to_string()))?;
        self.build(&request.into_document()?)
    }

    pub fn build(&self, document: &Document) -> Result<Proposal> {
        let client = &document.client;
        let currency = client.secondary_currency.unwrap_or(self.default_currency);
        let rate = ExchangeRate::new(
            currency,
            client.exchange_rate.unwrap_or(self.default_exchange_rate),
        )?;
        let date = client
            .parsed_date()?
            .unwrap_or_else(|| Local::now().date_naive());

        let generated = match &document.body {
            DocumentBody::Offer(offer) => self.offer_tables(offer),
            DocumentBody::GoldenVisa(data) => self.golden_visa_tables(data),
            DocumentBody::CompanyServices(data) => company_services_tables(data),
            DocumentBody::Taxation(data) => taxation_tables(data)?,
        };

        let tables: Vec<CostTable> = generated
            .tables
            .iter()
            .filter(|table| !table.is_empty())
            .map(|table| CostTable::from_service_table(table, &rate))
            .collect();

        let groups = match generated.breakdowns {
            Breakdowns::None => Vec::new(),
            Breakdowns::ItemBudget(tables) => paginate_by_item_budget(
                numbered(&tables, &rate),
                self.layout.max_items_per_page,
            ),
            Breakdowns::Dependents(tables, plan) => {
                paginate_dependents(numbered(&tables, &rate), &plan)
            }
        };

        let explanations = {
            let items = tables
                .iter()
                .chain(groups.iter().flat_map(|group| group.tables.iter()))
                .flat_map(|table| table.items.iter());
            deduplicate_explanations(items)
        };
        let breakdowns = PageLayout::new(
            groups,
            !explanations.is_empty(),
            self.layout.explanation_item_threshold,
        );

        let totals = category_totals(&tables, &breakdowns, &rate);
        let sections = visible_sections(
            tables
                .iter()
                .chain(breakdowns.groups.iter().flat_map(|group| group.tables.iter())),
            !explanations.is_empty(),
        );

        let proposal = Proposal {
            kind: document.kind(),
            client_name: client.display_name(),
            date,
            currency,
            exchange_rate: rate.rate(),
            sections,
            tables,
            breakdowns,
            totals,
            explanations,
            tax_filing_deadline: generated.tax_filing_deadline,
        };
        info!(
            kind = %proposal.kind,
            items = proposal.item_count(),
            grand_total = proposal.totals.grand.aed,
            "built proposal"
        );
        Ok(proposal)
    }

    fn offer_tables(&self, offer: &OfferData) -> Generated {
        let fees = self.fees.resolve(offer.authority);
        let mut tables = vec![ServiceTable::new(
            Section::InitialSetup.title(),
            Section::InitialSetup,
            ServiceContext::General,
            generate_setup_items(offer, &fees),
        )];
        let mut children = Vec::new();

        if let Some(visas) = &offer.visa_costs {
            let visa_table = |profile: VisaProfile,
                              section: Section,
                              title: String,
                              holders: Vec<VisaHolder>| {
                let context = VisaContext {
                    profile,
                    schedule: fees.visa_schedule(),
                    authority: offer.authority,
                    holders,
                    tme_fee_per_visa: visas.tme_visa_service_fee,
                };
                ServiceTable::new(title, section, profile.context, generate_visa_items(&context))
            };

            tables.push(visa_table(
                VisaProfile::COMPANY,
                Section::CompanyVisas,
                Section::CompanyVisas.title().to_string(),
                visas.company_visas.clone(),
            ));
            if let Some(spouse) = visas.spouse_visa {
                tables.push(visa_table(
                    VisaProfile::SPOUSE,
                    Section::SpouseVisa,
                    Section::SpouseVisa.title().to_string(),
                    vec![spouse],
                ));
            }
            for (index, child) in visas.child_visas.iter().enumerate() {
                children.push(visa_table(
                    VisaProfile::CHILD,
                    Section::ChildVisas,
                    format!("Child {} Visa Cost", index + 1),
                    vec![*child],
                ));
            }
        }

        if offer.yearly_running.is_some() {
            tables.push(ServiceTable::new(
                Section::YearlyRunning.title(),
                Section::YearlyRunning,
                ServiceContext::General,
                generate_yearly_items(offer, &fees),
            ));
        }
        if let Some(additional) = &offer.additional_services {
            tables.push(ServiceTable::new(
                Section::AdditionalServices.title(),
                Section::AdditionalServices,
                ServiceContext::General,
                generate_additional_items(additional),
            ));
        }

        log_tables(&tables);
        log_tables(&children);
        children.retain(|table| !table.is_empty());

        Generated {
            tables,
            breakdowns: Breakdowns::ItemBudget(children),
            tax_filing_deadline: None,
        }
    }

    fn golden_visa_tables(&self, data: &GoldenVisaData) -> Generated {
        let fee_table = self.fees.golden_visa(data.visa_type);
        let tables = vec![
            ServiceTable::new(
                "Authority Fees",
                Section::GoldenVisaAuthority,
                ServiceContext::Primary,
                generate_golden_visa_authority_items(data, &fee_table),
            ),
            ServiceTable::new(
                "TME Services Fees",
                Section::GoldenVisaAuthority,
                ServiceContext::Primary,
                generate_golden_visa_tme_items(data, &fee_table),
            ),
        ];

        let mut dependents = generate_dependent_tables(data, &fee_table);
        log_tables(&tables);
        log_tables(&dependents);
        dependents.retain(|table| !table.is_empty());

        let plan = dependent_plan(&dependents);
        Generated {
            tables,
            breakdowns: Breakdowns::Dependents(dependents, plan),
            tax_filing_deadline: None,
        }
    }
}

fn company_services_tables(data: &CompanyServicesData) -> Generated {
    let tables = vec![ServiceTable::new(
        Section::CompanyServices.title(),
        Section::CompanyServices,
        ServiceContext::General,
        generate_company_services_items(data),
    )];
    log_tables(&tables);
    Generated {
        tables,
        ..Generated::default()
    }
}

fn taxation_tables(data: &TaxationData) -> Result<Generated> {
    let tables = vec![ServiceTable::new(
        Section::Taxation.title(),
        Section::Taxation,
        ServiceContext::General,
        generate_taxation_items(data),
    )];
    log_tables(&tables);
    Ok(Generated {
        tables,
        breakdowns: Breakdowns::None,
        tax_filing_deadline: data.filing_deadline()?,
    })
}

/// Describe the dependent tables that actually have items.
fn dependent_plan(tables: &[ServiceTable]) -> DependentPlan {
    let has_spouse = tables
        .first()
        .is_some_and(|table| table.context == ServiceContext::Spouse);
    let number_of_children = tables
        .iter()
        .filter(|table| table.context == ServiceContext::Child)
        .count() as u32;
    let has_visa_cancellation = tables.iter().any(|table| {
        table
            .items
            .iter()
            .any(|item| item.key == ServiceKey::VisaCancellation)
    });
    DependentPlan {
        has_spouse,
        number_of_children,
        has_visa_cancellation,
    }
}

fn numbered(tables: &[ServiceTable], rate: &ExchangeRate) -> Vec<CostTable> {
    tables
        .iter()
        .map(|table| CostTable::from_service_table(table, rate))
        .collect()
}

fn log_tables(tables: &[ServiceTable]) {
    for table in tables {
        debug!(title = %table.title, items = table.items.len(), "generated table");
    }
}

/// Sort every table into its cost category.
///
/// Company services and taxation documents have no visa or yearly costs, so
/// their items count as setup.
fn category_totals(
    tables: &[CostTable],
    breakdowns: &PageLayout<CostTable>,
    rate: &ExchangeRate,
) -> Totals {
    let all = tables
        .iter()
        .chain(breakdowns.groups.iter().flat_map(|group| group.tables.iter()));

    let mut setup = Vec::new();
    let mut visa = Vec::new();
    let mut yearly = Vec::new();
    let mut additional = Vec::new();

    for table in all {
        let bucket = match table.section {
            Section::InitialSetup | Section::CompanyServices | Section::Taxation => &mut setup,
            Section::CompanyVisas
            | Section::SpouseVisa
            | Section::ChildVisas
            | Section::GoldenVisaAuthority
            | Section::GoldenVisaDependents => &mut visa,
            Section::YearlyRunning => &mut yearly,
            Section::AdditionalServices => &mut additional,
            Section::Cover | Section::Explanations | Section::Closing => continue,
        };
        bucket.extend(table.items.iter());
    }

    calculate_totals(setup, visa, yearly, additional, rate)
}
