use navtree::{
    BrokenLinkPolicy, Category, ConfigError, DocId, DuplicatePolicy, MemoryStore, NavbarItem,
    Node, NodePath, Position, Severity, SidebarRegistry, SiteConfig, validate,
};

const SITE: &str = include_str!("fixtures/dibs.json");

fn site() -> SiteConfig {
    SiteConfig::from_json(SITE).expect("fixture parses")
}

/// Every page the fixture site has on disk.
fn full_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for sidebar in &site().sidebars {
        for id in sidebar.doc_ids() {
            store.insert(id.clone());
        }
    }
    store.insert("lessons");
    store.insert("syllabus");
    store
}

fn single(items: Vec<Node>) -> SiteConfig {
    SiteConfig::new(SidebarRegistry::new().with("s", items))
}

// =============================================================================
// Happy Path Tests
// =============================================================================

#[test]
fn test_fixture_site_is_clean() {
    let report = validate(&site(), &full_store());
    assert!(report.is_valid());
    assert!(report.is_clean(), "{:?}", report.diagnostics());
}

#[test]
fn test_empty_configuration_is_clean() {
    let config = SiteConfig::new(SidebarRegistry::new());
    assert!(validate(&config, &MemoryStore::new()).is_clean());
}

#[test]
fn test_external_links_are_not_checked() {
    let config = single(vec![Node::link("GitHub", "https://github.com/r8vnhill/dibs")]);
    assert!(validate(&config, &MemoryStore::new()).is_clean());
}

// =============================================================================
// Navbar Tests
// =============================================================================

#[test]
fn test_navbar_missing_sidebar_is_an_error() {
    let config = site().navbar(vec![NavbarItem::DocSidebar {
        sidebar_id: "labsSidebar".into(),
        label: Some("Laboratorios".into()),
        position: Position::Left,
    }]);

    let report = validate(&config, &full_store());
    assert!(!report.is_valid());
    assert!(report.contains(&ConfigError::MissingSidebar {
        name: "labsSidebar".into(),
        referenced_by: "Laboratorios".into(),
    }));
}

#[test]
fn test_missing_sidebar_ignores_broken_link_policy() {
    let config = site()
        .on_broken_links(BrokenLinkPolicy::Ignore)
        .navbar(vec![NavbarItem::DocSidebar {
            sidebar_id: "labsSidebar".into(),
            label: None,
            position: Position::Left,
        }]);

    assert!(!validate(&config, &full_store()).is_valid());
}

#[test]
fn test_navbar_route_must_resolve() {
    let config = site();

    // Without the lessons page, "/docs/lessons" goes nowhere.
    let mut store: MemoryStore = config
        .sidebars
        .iter()
        .flat_map(|s| s.doc_ids())
        .cloned()
        .chain([DocId::new("syllabus")])
        .collect();
    let report = validate(&config, &store);
    assert!(report.contains(&ConfigError::BrokenNavbarLink {
        to: "/docs/lessons".into(),
    }));

    // A section index satisfies the route too.
    store.insert("lessons/index");
    assert!(validate(&config, &store).is_valid());
}

#[test]
fn test_navbar_doc_item_is_checked() {
    let config = site().navbar(vec![NavbarItem::Doc {
        doc_id: DocId::new("intro"),
        label: None,
        position: Position::Left,
    }]);

    let report = validate(&config, &full_store());
    assert!(report.contains(&ConfigError::DanglingReference {
        id: DocId::new("intro"),
        path: NodePath::root("navbar"),
    }));
}

// =============================================================================
// Dangling Reference Tests
// =============================================================================

#[test]
fn test_dangling_reference_names_its_location() {
    let config = single(vec![Node::category(
        "Unidad 1",
        vec![Node::doc("unit-1/introduction"), Node::doc("unit-1/missing")],
    )]);
    let store: MemoryStore = ["unit-1/introduction"].into_iter().collect();

    let report = validate(&config, &store);
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].error,
        ConfigError::DanglingReference {
            id: DocId::new("unit-1/missing"),
            path: NodePath::root("s").child("Unidad 1"),
        }
    );
    assert_eq!(
        errors[0].to_string(),
        "error: document 'unit-1/missing' referenced at s > Unidad 1 does not exist"
    );
}

#[test]
fn test_dangling_landing_page_is_reported() {
    let config = single(vec![Node::Category(
        Category::new("Unidad 2", vec![Node::doc("unit-2/objects")]).with_landing("unit-2/index"),
    )]);
    let store: MemoryStore = ["unit-2/objects"].into_iter().collect();

    let report = validate(&config, &store);
    assert!(report.contains(&ConfigError::DanglingReference {
        id: DocId::new("unit-2/index"),
        path: NodePath::root("s").child("Unidad 2"),
    }));
}

#[test]
fn test_broken_link_policy_controls_severity() {
    let config = single(vec![Node::doc("missing")]);
    let store = MemoryStore::new();

    let throw = validate(&config, &store);
    assert_eq!(throw.errors().count(), 1);

    let warn = validate(&config.clone().on_broken_links(BrokenLinkPolicy::Warn), &store);
    assert!(warn.is_valid());
    assert_eq!(warn.warnings().count(), 1);

    let ignore = validate(&config.on_broken_links(BrokenLinkPolicy::Ignore), &store);
    assert!(ignore.is_clean());
}

// =============================================================================
// Landing Page Tests
// =============================================================================

#[test]
fn test_landing_listed_as_child_is_an_error() {
    let config = single(vec![Node::Category(
        Category::new("Unidad 2", vec![Node::doc("unit-2/index")]).with_landing("unit-2/index"),
    )]);
    let store: MemoryStore = ["unit-2/index"].into_iter().collect();

    let report = validate(&config, &store);
    assert!(!report.is_valid());
    assert!(report.contains(&ConfigError::LandingListedAsChild {
        label: "Unidad 2".into(),
        landing: DocId::new("unit-2/index"),
        path: NodePath::root("s").child("Unidad 2"),
    }));
}

#[test]
fn test_landing_reappearing_deeper_is_a_cycle() {
    let config = single(vec![Node::Category(
        Category::new(
            "Outer",
            vec![Node::category("Inner", vec![Node::doc("outer/index")])],
        )
        .with_landing("outer/index"),
    )]);
    let store: MemoryStore = ["outer/index"].into_iter().collect();

    let report = validate(&config, &store);
    assert!(report.contains(&ConfigError::CategoryCycle {
        label: "Outer".into(),
        landing: DocId::new("outer/index"),
        path: NodePath::root("s").child("Outer").child("Inner"),
    }));
}

#[test]
fn test_landing_elsewhere_in_sidebar_is_not_a_cycle() {
    let config = single(vec![
        Node::doc("shared"),
        Node::Category(Category::new("Cat", vec![]).with_landing("shared")),
    ])
    .on_duplicate_docs(DuplicatePolicy::Allow);
    let store: MemoryStore = ["shared"].into_iter().collect();

    assert!(validate(&config, &store).is_clean());
}

// =============================================================================
// Duplicate Tests
// =============================================================================

#[test]
fn test_duplicate_document_warns_by_default() {
    let config = single(vec![
        Node::doc("a"),
        Node::category("Again", vec![Node::doc("a")]),
    ]);
    let store: MemoryStore = ["a"].into_iter().collect();

    let report = validate(&config, &store);
    assert!(report.is_valid());
    let warnings: Vec<_> = report.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].error,
        ConfigError::DuplicateDocument {
            id: DocId::new("a"),
            first: NodePath::root("s"),
            second: NodePath::root("s").child("Again"),
        }
    );
}

#[test]
fn test_duplicate_policy_allow_and_deny() {
    let config = single(vec![Node::doc("a"), Node::doc("a")]);
    let store: MemoryStore = ["a"].into_iter().collect();

    let allowed = validate(&config.clone().on_duplicate_docs(DuplicatePolicy::Allow), &store);
    assert!(allowed.is_clean());

    let denied = validate(&config.on_duplicate_docs(DuplicatePolicy::Deny), &store);
    assert!(!denied.is_valid());
}

#[test]
fn test_same_document_in_two_sidebars_is_fine() {
    let config = SiteConfig::new(
        SidebarRegistry::new()
            .with("a", vec![Node::doc("shared")])
            .with("b", vec![Node::doc("shared")]),
    );
    let store: MemoryStore = ["shared"].into_iter().collect();
    assert!(validate(&config, &store).is_clean());
}

#[test]
fn test_redefined_sidebar_warns() {
    let json = r#"{ "sidebars": { "s": ["a"], "s": ["a"] } }"#;
    let config = SiteConfig::from_json(json).unwrap();
    let store: MemoryStore = ["a"].into_iter().collect();

    let report = validate(&config, &store);
    assert!(report.is_valid());
    assert!(report.contains(&ConfigError::DuplicateSidebar { name: "s".into() }));
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_findings_keep_discovery_order() {
    let config = single(vec![Node::doc("x"), Node::doc("y")]);
    let report = validate(&config, &MemoryStore::new());

    let ids: Vec<_> = report
        .diagnostics()
        .iter()
        .filter_map(|d| match &d.error {
            ConfigError::DanglingReference { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(ids, ["x", "y"]);
}

#[test]
fn test_into_result_splits_by_severity() {
    let config = single(vec![Node::doc("missing"), Node::doc("a"), Node::doc("a")]);
    let store: MemoryStore = ["a"].into_iter().collect();

    let failed = validate(&config, &store).into_result().unwrap_err();
    assert_eq!(failed.errors.len(), 1);
    assert_eq!(failed.warnings.len(), 1);
    assert_eq!(failed.errors[0].severity, Severity::Error);
    assert_eq!(failed.to_string(), "site configuration has 1 error(s)");
}

#[test]
fn test_into_result_returns_warnings_on_success() {
    let config = single(vec![Node::doc("a"), Node::doc("a")]);
    let store: MemoryStore = ["a"].into_iter().collect();

    let warnings = validate(&config, &store).into_result().unwrap();
    assert_eq!(warnings.len(), 1);
}
