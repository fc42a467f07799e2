//! Navigation tree data model.
//!
//! A sidebar is an ordered forest of [`Node`]s. Nodes are owned values, so a
//! node can only ever have one parent; the same document id may still be
//! listed twice, which validation reports according to the site's
//! duplicate policy.

mod encoding;
mod node;
mod path;
mod sidebar;

pub use node::{Category, CategoryLink, DocId, DocRef, ExternalLink, GeneratedIndex, Node};
pub use path::NodePath;
pub use sidebar::Sidebar;
