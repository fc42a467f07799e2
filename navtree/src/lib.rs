//! Navigation tree model for a documentation site.
//!
//! Sidebars are declared once in the site configuration, checked at build
//! time, and read by the renderer to draw menus, breadcrumbs, and
//! previous/next links.

pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod navbar;
pub mod registry;
pub mod traverse;
pub mod validation;

pub use config::{BrokenLinkPolicy, DuplicatePolicy, SiteConfig};
pub use content::{ContentStore, FsStore, MemoryStore};
pub use error::{ConfigError, LoadError};
pub use model::{
    Category, CategoryLink, DocId, DocRef, ExternalLink, GeneratedIndex, Node, NodePath, Sidebar,
};
pub use navbar::{NavbarItem, Position};
pub use registry::SidebarRegistry;
pub use traverse::{Entry, EntryItem, Pagination};
pub use validation::{
    Diagnostic, Severity, ValidationFailed, ValidationReport, Validator, validate,
};
