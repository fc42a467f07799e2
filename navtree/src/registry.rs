//! Registry of named sidebars.

use std::fmt;

use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::model::{DocId, Node, Sidebar};

/// All sidebars of a site, keyed by name.
///
/// The registry is filled once while the site configuration loads and is
/// read-only afterwards; it offers no removal. Iteration follows definition
/// order.
///
/// Defining a name twice replaces the earlier sidebar in place and records
/// the name, so validation can warn about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarRegistry {
    /// Sidebars in definition order.
    sidebars: Vec<Sidebar>,

    /// Names that were defined more than once, in order of redefinition.
    redefined: Vec<String>,
}

impl SidebarRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a sidebar.
    ///
    /// Returns the previous sidebar if the name was already taken.
    pub fn define(&mut self, name: impl Into<String>, items: Vec<Node>) -> Option<Sidebar> {
        let sidebar = Sidebar::new(name, items);

        match self.sidebars.iter_mut().find(|s| s.name() == sidebar.name()) {
            Some(existing) => {
                debug!("sidebar '{}' redefined", sidebar.name());
                self.redefined.push(sidebar.name().to_string());
                Some(std::mem::replace(existing, sidebar))
            }
            None => {
                self.sidebars.push(sidebar);
                None
            }
        }
    }

    /// Builder form of [`define`](Self::define).
    pub fn with(mut self, name: impl Into<String>, items: Vec<Node>) -> Self {
        self.define(name, items);
        self
    }

    /// Get a sidebar by name.
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate sidebars in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.iter()
    }

    /// Sidebar names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(Sidebar::name)
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Names that were defined more than once.
    pub fn redefined(&self) -> &[String] {
        &self.redefined
    }

    /// Name of the first sidebar listing the document.
    pub fn sidebar_for(&self, id: &DocId) -> Option<&str> {
        self.sidebars
            .iter()
            .find(|sidebar| sidebar.contains_doc(id))
            .map(Sidebar::name)
    }
}

impl<'a> IntoIterator for &'a SidebarRegistry {
    type Item = &'a Sidebar;
    type IntoIter = std::slice::Iter<'a, Sidebar>;

    fn into_iter(self) -> Self::IntoIter {
        self.sidebars.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Node>)> for SidebarRegistry {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Node>)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, items) in iter {
            registry.define(name, items);
        }
        registry
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = SidebarRegistry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of sidebar names to item lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut registry = SidebarRegistry::new();
        while let Some((name, items)) = map.next_entry::<String, Vec<Node>>()? {
            registry.define(name, items);
        }
        Ok(registry)
    }
}

/// Repeated keys are kept as redefinitions instead of being collapsed by a
/// map type.
impl<'de> Deserialize<'de> for SidebarRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}
