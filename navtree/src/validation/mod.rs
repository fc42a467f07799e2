//! Build-time validation of a site configuration.
//!
//! Validation runs once, after the configuration loads and before the site
//! is rendered. It checks that:
//!
//! - every sidebar the navbar references is defined;
//! - every document id resolves in the content store;
//! - no category lists its own landing page among its contents;
//! - sidebar names are unique;
//! - documents are not listed twice within a sidebar, per
//!   [`DuplicatePolicy`](crate::config::DuplicatePolicy).
//!
//! # Example
//!
//! ```
//! use navtree::{validate, Category, MemoryStore, Node, SidebarRegistry, SiteConfig};
//!
//! let sidebars = SidebarRegistry::new().with(
//!     "tutorialSidebar",
//!     vec![Node::Category(
//!         Category::new("Unidad 2", vec![Node::doc("unit-2/objects")])
//!             .with_landing("unit-2/index"),
//!     )],
//! );
//! let store: MemoryStore = ["unit-2/index", "unit-2/objects"].into_iter().collect();
//!
//! let report = validate(&SiteConfig::new(sidebars), &store);
//! assert!(report.is_clean());
//! ```

mod result;
mod validator;

pub use result::{Diagnostic, Severity, ValidationFailed, ValidationReport};
pub use validator::Validator;

use crate::config::SiteConfig;
use crate::content::ContentStore;

/// Validate a site configuration against a content store.
pub fn validate(config: &SiteConfig, store: &dyn ContentStore) -> ValidationReport {
    Validator::new(config, store).validate()
}
