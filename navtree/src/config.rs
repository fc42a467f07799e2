//! Site configuration.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::LoadError;
use crate::model::DocId;
use crate::navbar::NavbarItem;
use crate::registry::SidebarRegistry;
use crate::validation::Severity;

/// How to treat references to documents that do not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Report a warning.
    Warn,
    /// Say nothing.
    Ignore,
}

impl BrokenLinkPolicy {
    /// Severity of a broken reference, or `None` when it is not reported.
    pub fn severity(self) -> Option<Severity> {
        match self {
            BrokenLinkPolicy::Throw => Some(Severity::Error),
            BrokenLinkPolicy::Warn => Some(Severity::Warning),
            BrokenLinkPolicy::Ignore => None,
        }
    }
}

/// How to treat a document listed twice within one sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Shared pages are intentional.
    Allow,
    /// Report a warning.
    #[default]
    Warn,
    /// Fail the build.
    Deny,
}

impl DuplicatePolicy {
    /// Severity of a duplicate listing, or `None` when it is not reported.
    pub fn severity(self) -> Option<Severity> {
        match self {
            DuplicatePolicy::Allow => None,
            DuplicatePolicy::Warn => Some(Severity::Warning),
            DuplicatePolicy::Deny => Some(Severity::Error),
        }
    }
}

fn default_base_url() -> String {
    "/".into()
}

fn default_docs_route() -> String {
    "/docs".into()
}

/// Everything validation needs to know about a site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub title: String,

    /// Production URL of the site.
    pub url: Option<String>,

    /// Path the site is served under.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route prefix of the documentation pages.
    #[serde(default = "default_docs_route")]
    pub docs_route: String,

    #[serde(default)]
    pub on_broken_links: BrokenLinkPolicy,

    #[serde(default)]
    pub on_duplicate_docs: DuplicatePolicy,

    #[serde(default)]
    pub navbar: Vec<NavbarItem>,

    pub sidebars: SidebarRegistry,
}

impl SiteConfig {
    /// A configuration with default policies and no navbar.
    pub fn new(sidebars: SidebarRegistry) -> Self {
        Self {
            title: String::new(),
            url: None,
            base_url: default_base_url(),
            docs_route: default_docs_route(),
            on_broken_links: BrokenLinkPolicy::default(),
            on_duplicate_docs: DuplicatePolicy::default(),
            navbar: Vec::new(),
            sidebars,
        }
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("loading site configuration from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| LoadError::io(path, source))?;
        Self::from_json(&json)
    }

    /// Set the navbar.
    pub fn navbar(mut self, navbar: Vec<NavbarItem>) -> Self {
        self.navbar = navbar;
        self
    }

    /// Set the broken link policy.
    pub fn on_broken_links(mut self, policy: BrokenLinkPolicy) -> Self {
        self.on_broken_links = policy;
        self
    }

    /// Set the duplicate document policy.
    pub fn on_duplicate_docs(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate_docs = policy;
        self
    }

    /// Document ids a docs route may resolve to.
    ///
    /// `/docs/lessons` resolves to `lessons` or `lessons/index`. Routes
    /// outside the docs route, and the docs route itself, yield nothing.
    pub fn route_candidates(&self, to: &str) -> Vec<DocId> {
        let prefix = self.docs_route.trim_end_matches('/');
        let Some(rest) = to.strip_prefix(prefix) else {
            return Vec::new();
        };
        let Some(rest) = rest.strip_prefix('/') else {
            return Vec::new();
        };

        let rest = rest.split(['#', '?']).next().unwrap_or_default();
        let id = rest.trim_matches('/');
        if id.is_empty() {
            return Vec::new();
        }

        vec![DocId::new(id), DocId::new(format!("{}/index", id))]
    }
}
