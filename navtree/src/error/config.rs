//! Findings about a site configuration.

use thiserror::Error;

use crate::model::{DocId, NodePath};

/// A problem found while validating the site configuration.
///
/// Whether a finding fails the build depends on the site's policies; see
/// [`crate::validation::Severity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A navbar item points at a sidebar that is not defined.
    #[error("sidebar '{name}' referenced by navbar item '{referenced_by}' is not defined")]
    MissingSidebar {
        /// The missing sidebar name.
        name: String,
        /// Label of the navbar item holding the reference.
        referenced_by: String,
    },

    /// A document id has no page in the content store.
    #[error("document '{id}' referenced at {path} does not exist")]
    DanglingReference { id: DocId, path: NodePath },

    /// A category lists its landing document as a direct child.
    #[error("category '{label}' at {path} lists its landing document '{landing}' as a child")]
    LandingListedAsChild {
        label: String,
        landing: DocId,
        path: NodePath,
    },

    /// A category's landing document shows up again deeper inside it.
    #[error("category '{label}' reaches its own landing document '{landing}' again at {path}")]
    CategoryCycle {
        label: String,
        landing: DocId,
        /// Where the landing document reappears.
        path: NodePath,
    },

    /// A sidebar name was defined more than once; the last definition wins.
    #[error("sidebar '{name}' is defined more than once; the last definition wins")]
    DuplicateSidebar { name: String },

    /// A document is listed twice within one sidebar.
    #[error("document '{id}' is listed twice: at {first} and at {second}")]
    DuplicateDocument {
        id: DocId,
        first: NodePath,
        second: NodePath,
    },

    /// A navbar route under the docs route resolves to no document.
    #[error("navbar link '{to}' does not resolve to a document")]
    BrokenNavbarLink { to: String },
}
