use proposal::layout::{
    deduplicate_explanations, paginate_by_item_budget, paginate_dependents, place_explanations,
    visible_sections, DependentPlan, ExplanationPlacement, ItemCount, PageGroup, PageLayout,
    Section, Sectioned,
};
use proposal::model::HealthInsurance;
use proposal::services::{ServiceContext, ServiceItem, ServiceKey};

#[derive(Debug, Clone, PartialEq)]
struct Table {
    name: &'static str,
    items: usize,
    section: Section,
}

impl ItemCount for Table {
    fn item_count(&self) -> usize {
        self.items
    }
}

impl Sectioned for Table {
    fn section(&self) -> Section {
        self.section
    }
}

fn table(name: &'static str, items: usize) -> Table {
    Table {
        name,
        items,
        section: Section::GoldenVisaDependents,
    }
}

fn dependents(has_spouse: bool, children: u32) -> Vec<Table> {
    let mut tables = Vec::new();
    if has_spouse {
        tables.push(table("spouse", 3));
    }
    let names = ["c1", "c2", "c3", "c4", "c5", "c6", "c7"];
    for name in names.iter().take(children as usize) {
        tables.push(table(name, 3));
    }
    tables
}

fn names(groups: &[PageGroup<Table>]) -> Vec<Vec<&'static str>> {
    groups
        .iter()
        .map(|g| g.tables.iter().map(|t| t.name).collect())
        .collect()
}

#[test]
fn test_spouse_alone_then_children_in_threes_with_cancellation() {
    let plan = DependentPlan {
        has_spouse: true,
        number_of_children: 3,
        has_visa_cancellation: true,
    };
    let groups = paginate_dependents(dependents(true, 3), &plan);

    assert_eq!(names(&groups), vec![vec!["spouse"], vec!["c1", "c2", "c3"]]);
    assert_eq!(groups[0].page, 1);
    assert_eq!(groups[1].page, 2);
}

#[test]
fn test_no_split_keeps_one_group() {
    let plan = DependentPlan {
        has_spouse: true,
        number_of_children: 2,
        has_visa_cancellation: false,
    };
    assert!(!plan.needs_split());
    let groups = paginate_dependents(dependents(true, 2), &plan);
    assert_eq!(names(&groups), vec![vec!["spouse", "c1", "c2"]]);
}

#[test]
fn test_split_without_cancellation_pairs_tables() {
    let plan = DependentPlan {
        has_spouse: true,
        number_of_children: 3,
        has_visa_cancellation: false,
    };
    let groups = paginate_dependents(dependents(true, 3), &plan);
    assert_eq!(names(&groups), vec![vec!["spouse", "c1"], vec!["c2", "c3"]]);
}

#[test]
fn test_children_only_with_cancellation() {
    let plan = DependentPlan {
        has_spouse: false,
        number_of_children: 4,
        has_visa_cancellation: true,
    };
    let groups = paginate_dependents(dependents(false, 4), &plan);
    assert_eq!(names(&groups), vec![vec!["c1", "c2", "c3"], vec!["c4"]]);
}

#[test]
fn test_pagination_preserves_every_table_in_order() {
    for has_spouse in [false, true] {
        for children in 0..=7 {
            for has_visa_cancellation in [false, true] {
                let plan = DependentPlan {
                    has_spouse,
                    number_of_children: children,
                    has_visa_cancellation,
                };
                let input = dependents(has_spouse, children);
                let groups = paginate_dependents(input.clone(), &plan);

                let flattened: Vec<Table> =
                    groups.iter().flat_map(|g| g.tables.iter().cloned()).collect();
                assert_eq!(flattened, input, "plan = {plan:?}");
                assert!(groups.iter().all(|g| !g.tables.is_empty()));
                let pages: Vec<usize> = groups.iter().map(|g| g.page).collect();
                assert_eq!(pages, (1..=groups.len()).collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn test_empty_input_has_no_groups() {
    let plan = DependentPlan {
        has_spouse: true,
        number_of_children: 3,
        has_visa_cancellation: true,
    };
    assert!(paginate_dependents(Vec::<Table>::new(), &plan).is_empty());
    assert!(paginate_by_item_budget(Vec::<Table>::new(), 14).is_empty());
}

#[test]
fn test_item_budget_fills_pages() {
    let tables = vec![
        table("a", 6),
        table("b", 6),
        table("c", 6),
        table("d", 20),
        table("e", 1),
    ];
    let groups = paginate_by_item_budget(tables, 14);
    assert_eq!(
        names(&groups),
        vec![vec!["a", "b"], vec!["c"], vec!["d"], vec!["e"]]
    );
    assert_eq!(groups[0].item_count(), 12);
}

#[test]
fn test_item_budget_oversized_table_gets_own_page() {
    let groups = paginate_by_item_budget(vec![table("big", 30)], 14);
    assert_eq!(names(&groups), vec![vec!["big"]]);
    assert_eq!(groups[0].page, 1);

    let groups = paginate_by_item_budget(
        vec![table("big", 30), table("a", 2), table("b", 2), table("huge", 15)],
        14,
    );
    assert_eq!(
        names(&groups),
        vec![vec!["big"], vec!["a", "b"], vec!["huge"]]
    );
    assert_eq!(groups[2].item_count(), 15);
}

#[test]
fn test_explanations_inline_at_threshold() {
    let plan = DependentPlan::default();
    let mut groups = paginate_dependents(vec![table("a", 4), table("b", 4)], &plan);

    let placement = place_explanations(&mut groups, true, 8, 8);
    assert_eq!(placement, ExplanationPlacement::Inline { page: 1 });
    assert!(groups[0].carries_explanations);
}

#[test]
fn test_explanations_trailing_page_over_threshold() {
    let plan = DependentPlan {
        has_spouse: true,
        number_of_children: 3,
        has_visa_cancellation: true,
    };
    let mut groups = paginate_dependents(dependents(true, 3), &plan);

    let placement = place_explanations(&mut groups, true, 9, 8);
    assert_eq!(placement, ExplanationPlacement::TrailingPage { page: 3 });
    assert!(groups.iter().all(|g| !g.carries_explanations));
}

#[test]
fn test_explanations_inline_only_on_last_group() {
    let groups = vec![
        PageGroup {
            page: 1,
            tables: vec![table("a", 2)],
            carries_explanations: true,
        },
        PageGroup {
            page: 2,
            tables: vec![table("b", 2)],
            carries_explanations: false,
        },
    ];
    let layout = PageLayout::new(groups, true, 8);

    assert_eq!(layout.explanations, ExplanationPlacement::Inline { page: 2 });
    let carriers: Vec<bool> = layout.groups.iter().map(|g| g.carries_explanations).collect();
    assert_eq!(carriers, vec![false, true]);
    assert_eq!(layout.page_count(), 2);
}

#[test]
fn test_no_explanations_no_placement() {
    let groups = vec![PageGroup {
        page: 1,
        tables: vec![table("a", 2)],
        carries_explanations: false,
    }];
    let layout = PageLayout::new(groups, false, 8);
    assert_eq!(layout.explanations, ExplanationPlacement::None);
    assert_eq!(layout.page_count(), 1);

    let empty: PageLayout<Table> = PageLayout::new(Vec::new(), true, 8);
    assert_eq!(empty.explanations, ExplanationPlacement::TrailingPage { page: 1 });
    assert_eq!(empty.page_count(), 1);
}

fn explained(key: ServiceKey, context: ServiceContext, text: &str) -> ServiceItem {
    ServiceItem::new(key, context, key.title(), 100.0).with_explanation(text)
}

#[test]
fn test_dedup_merges_contexts_into_title() {
    let items = vec![
        explained(ServiceKey::VisaCancellation, ServiceContext::Child, "Cancel existing visa."),
        explained(ServiceKey::VisaCancellation, ServiceContext::Spouse, "Cancel existing visa."),
        explained(ServiceKey::VisaCancellation, ServiceContext::Child, "Cancel existing visa."),
    ];
    let explanations = deduplicate_explanations(&items);

    assert_eq!(explanations.len(), 1);
    assert_eq!(explanations[0].id, "visa-cancellation");
    assert_eq!(explanations[0].title, "Visa Cancellation for spouse and child visa");
    assert_eq!(explanations[0].explanation, "Cancel existing visa.");
}

#[test]
fn test_dedup_three_contexts_and_general() {
    let items = vec![
        explained(ServiceKey::VisaApplication, ServiceContext::Child, "Entry permit."),
        explained(ServiceKey::VisaApplication, ServiceContext::Company, "Entry permit."),
        explained(ServiceKey::VisaApplication, ServiceContext::Spouse, "Entry permit."),
        explained(ServiceKey::IfzaLicense, ServiceContext::General, "License fee."),
    ];
    let explanations = deduplicate_explanations(&items);

    let titles: Vec<&str> = explanations.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "IFZA License Cost",
            "Visa Application Fee for company, spouse and child visa",
        ]
    );
}

#[test]
fn test_dedup_ignores_input_order() {
    let items = vec![
        explained(ServiceKey::VisaCancellation, ServiceContext::Spouse, "Spouse text."),
        explained(ServiceKey::TmeVisaServiceFee, ServiceContext::Child, "Our fee."),
        explained(ServiceKey::VisaCancellation, ServiceContext::Child, "Child text."),
        explained(
            ServiceKey::HealthInsurance(HealthInsurance::LowCost),
            ServiceContext::Company,
            "Low cost policy.",
        ),
        ServiceItem::new(ServiceKey::OfficeRent, ServiceContext::General, "Office Rent", 10.0),
    ];
    let expected = deduplicate_explanations(&items);

    let mut reversed = items.clone();
    reversed.reverse();
    assert_eq!(deduplicate_explanations(&reversed), expected);

    let mut rotated = items.clone();
    rotated.rotate_left(2);
    assert_eq!(deduplicate_explanations(&rotated), expected);

    assert_eq!(expected.len(), 3);
    assert_eq!(expected[1].explanation, "Spouse text.");
}

#[test]
fn test_dedup_without_explanations() {
    let items = vec![ServiceItem::new(
        ServiceKey::OfficeRent,
        ServiceContext::General,
        "Office Rent",
        10.0,
    )];
    assert!(deduplicate_explanations(&items).is_empty());
}

#[test]
fn test_visible_sections_skip_empty() {
    let section_table = |name, items, section| Table {
        name,
        items,
        section,
    };
    let tables = vec![
        section_table("setup", 3, Section::InitialSetup),
        section_table("visas", 0, Section::CompanyVisas),
        section_table("yearly", 2, Section::YearlyRunning),
    ];

    assert_eq!(
        visible_sections(&tables, true),
        vec![
            Section::Cover,
            Section::InitialSetup,
            Section::YearlyRunning,
            Section::Explanations,
            Section::Closing,
        ]
    );
    assert_eq!(
        visible_sections(Vec::<&Table>::new(), false),
        vec![Section::Cover, Section::Closing]
    );
}
