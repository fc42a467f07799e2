//! Walks a site configuration and collects findings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, warn};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::error::ConfigError;
use crate::model::{Category, DocId, Node, NodePath, Sidebar};
use crate::navbar::NavbarItem;

use super::result::{Severity, ValidationReport};

/// Validates one site configuration against a content store.
///
/// # Example
///
/// ```
/// use navtree::{MemoryStore, Node, SidebarRegistry, SiteConfig, Validator};
///
/// let sidebars = SidebarRegistry::new().with(
///     "tutorialSidebar",
///     vec![Node::doc("unit-1/introduction"), Node::doc("unit-1/basics")],
/// );
/// let store: MemoryStore = ["unit-1/introduction"].into_iter().collect();
///
/// let report = Validator::new(&SiteConfig::new(sidebars), &store).validate();
/// assert!(!report.is_valid());
/// ```
pub struct Validator<'a> {
    config: &'a SiteConfig,
    store: &'a dyn ContentStore,
    report: ValidationReport,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a SiteConfig, store: &'a dyn ContentStore) -> Self {
        Self {
            config,
            store,
            report: ValidationReport::new(),
        }
    }

    /// Run every check.
    pub fn validate(mut self) -> ValidationReport {
        let config = self.config;
        self.check_redefinitions();
        self.check_navbar();
        for sidebar in &config.sidebars {
            self.check_sidebar(sidebar);
        }

        debug!(
            "validated {} sidebar(s): {} error(s), {} warning(s)",
            config.sidebars.len(),
            self.report.errors().count(),
            self.report.warnings().count()
        );
        self.report
    }

    fn record(&mut self, severity: Option<Severity>, error: ConfigError) {
        let Some(severity) = severity else { return };
        if severity == Severity::Warning {
            warn!("{}", error);
        }
        self.report.push(severity, error);
    }

    fn check_redefinitions(&mut self) {
        let config = self.config;
        for name in config.sidebars.redefined() {
            self.record(
                Some(Severity::Warning),
                ConfigError::DuplicateSidebar { name: name.clone() },
            );
        }
    }

    fn check_navbar(&mut self) {
        let config = self.config;
        let broken = config.on_broken_links.severity();

        for item in &config.navbar {
            match item {
                NavbarItem::DocSidebar { sidebar_id, .. } => {
                    if !config.sidebars.contains(sidebar_id) {
                        self.record(
                            Some(Severity::Error),
                            ConfigError::MissingSidebar {
                                name: sidebar_id.clone(),
                                referenced_by: item.label().to_string(),
                            },
                        );
                    }
                }
                NavbarItem::Doc { doc_id, .. } => {
                    if !self.store.contains(doc_id) {
                        self.record(
                            broken,
                            ConfigError::DanglingReference {
                                id: doc_id.clone(),
                                path: NodePath::root("navbar"),
                            },
                        );
                    }
                }
                NavbarItem::Internal { to, .. } => {
                    let candidates = config.route_candidates(to);
                    if !candidates.is_empty()
                        && !candidates.iter().any(|id| self.store.contains(id))
                    {
                        self.record(broken, ConfigError::BrokenNavbarLink { to: to.clone() });
                    }
                }
                NavbarItem::External { .. } => {}
            }
        }
    }

    fn check_sidebar(&mut self, sidebar: &Sidebar) {
        let mut seen = HashMap::new();
        let root = NodePath::root(sidebar.name());
        self.check_nodes(sidebar.items(), &root, &mut seen);
    }

    fn check_nodes(
        &mut self,
        nodes: &[Node],
        path: &NodePath,
        seen: &mut HashMap<DocId, NodePath>,
    ) {
        for node in nodes {
            match node {
                Node::Doc(doc) => self.check_doc(&doc.id, path, seen),
                Node::Category(category) => {
                    let inner = path.child(&category.label);
                    if let Some(landing) = category.landing_doc() {
                        self.check_doc(landing, &inner, seen);
                        self.check_landing(category, landing, &inner);
                    }
                    self.check_nodes(&category.items, &inner, seen);
                }
                Node::Link(_) | Node::GeneratedIndex(_) => {}
            }
        }
    }

    fn check_doc(&mut self, id: &DocId, path: &NodePath, seen: &mut HashMap<DocId, NodePath>) {
        let broken = self.config.on_broken_links.severity();
        let duplicate = self.config.on_duplicate_docs.severity();

        if !self.store.contains(id) {
            self.record(
                broken,
                ConfigError::DanglingReference {
                    id: id.clone(),
                    path: path.clone(),
                },
            );
        }

        match seen.entry(id.clone()) {
            Entry::Occupied(first) => {
                let error = ConfigError::DuplicateDocument {
                    id: id.clone(),
                    first: first.get().clone(),
                    second: path.clone(),
                };
                self.record(duplicate, error);
            }
            Entry::Vacant(slot) => {
                slot.insert(path.clone());
            }
        }
    }

    /// A category must not list its own landing page among its contents.
    fn check_landing(&mut self, category: &Category, landing: &DocId, path: &NodePath) {
        let listed_directly = category
            .items
            .iter()
            .any(|node| node.doc_id() == Some(landing));

        if listed_directly {
            self.record(
                Some(Severity::Error),
                ConfigError::LandingListedAsChild {
                    label: category.label.clone(),
                    landing: landing.clone(),
                    path: path.clone(),
                },
            );
        } else if let Some(found) = find_doc(&category.items, landing, path) {
            self.record(
                Some(Severity::Error),
                ConfigError::CategoryCycle {
                    label: category.label.clone(),
                    landing: landing.clone(),
                    path: found,
                },
            );
        }
    }
}

/// First place `id` appears under `nodes`, as a document or a landing page.
fn find_doc(nodes: &[Node], id: &DocId, path: &NodePath) -> Option<NodePath> {
    for node in nodes {
        match node {
            Node::Doc(doc) if &doc.id == id => return Some(path.clone()),
            Node::Category(category) => {
                let inner = path.child(&category.label);
                if category.landing_doc() == Some(id) {
                    return Some(inner);
                }
                if let Some(found) = find_doc(&category.items, id, &inner) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_doc_reports_nested_location() {
        let nodes = vec![
            Node::doc("a"),
            Node::category("Inner", vec![Node::doc("b")]),
        ];
        let root = NodePath::root("s");

        assert_eq!(find_doc(&nodes, &DocId::new("a"), &root), Some(root.clone()));
        assert_eq!(
            find_doc(&nodes, &DocId::new("b"), &root),
            Some(root.child("Inner"))
        );
        assert_eq!(find_doc(&nodes, &DocId::new("c"), &root), None);
    }

    #[test]
    fn test_find_doc_matches_landing_pages() {
        let nodes = vec![Node::Category(
            Category::new("Inner", vec![]).with_landing("x"),
        )];
        let root = NodePath::root("s");
        assert_eq!(
            find_doc(&nodes, &DocId::new("x"), &root),
            Some(root.child("Inner"))
        );
    }
}
