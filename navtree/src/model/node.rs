//! Navigation node types.

use std::fmt;

use serde::Deserialize;

/// Opaque identifier of a content page.
///
/// The tree never interprets an id beyond comparing and ordering it;
/// resolving it to a page is the content store's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to an authored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRef {
    pub id: DocId,
    /// Sidebar label override; the page title is used when absent.
    pub label: Option<String>,
}

impl DocRef {
    pub fn new(id: impl Into<DocId>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A link leaving the documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

/// A listing page the renderer synthesizes instead of an authored page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIndex {
    pub label: String,
    pub title: String,
    pub description: Option<String>,
    /// Route override for the generated page.
    pub slug: Option<String>,
}

impl GeneratedIndex {
    /// An index whose title repeats its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            title: label.clone(),
            label,
            description: None,
            slug: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// The page shown when a category itself is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLink {
    Doc(DocId),
    GeneratedIndex(GeneratedIndex),
}

/// A labelled, collapsible group of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub items: Vec<Node>,
    pub link: Option<CategoryLink>,
    /// Whether the renderer lets readers fold this category.
    pub collapsible: bool,
    /// Whether the category starts folded.
    pub collapsed: bool,
}

impl Category {
    pub fn new(label: impl Into<String>, items: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            items,
            link: None,
            collapsible: true,
            collapsed: true,
        }
    }

    /// Use an authored document as the landing page.
    pub fn with_landing(mut self, id: impl Into<DocId>) -> Self {
        self.link = Some(CategoryLink::Doc(id.into()));
        self
    }

    /// Use a generated index as the landing page.
    pub fn with_generated_index(mut self, index: GeneratedIndex) -> Self {
        self.link = Some(CategoryLink::GeneratedIndex(index));
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// The landing document, if the landing is an authored page.
    pub fn landing_doc(&self) -> Option<&DocId> {
        match &self.link {
            Some(CategoryLink::Doc(id)) => Some(id),
            _ => None,
        }
    }
}

/// One entry in a sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Doc(DocRef),
    Category(Category),
    Link(ExternalLink),
    GeneratedIndex(GeneratedIndex),
}

impl Node {
    /// A document reference without a label override.
    pub fn doc(id: impl Into<DocId>) -> Self {
        Node::Doc(DocRef::new(id))
    }

    pub fn category(label: impl Into<String>, items: Vec<Node>) -> Self {
        Node::Category(Category::new(label, items))
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Node::Link(ExternalLink {
            label: label.into(),
            href: href.into(),
        })
    }

    /// The referenced document, for document nodes.
    pub fn doc_id(&self) -> Option<&DocId> {
        match self {
            Node::Doc(doc) => Some(&doc.id),
            _ => None,
        }
    }

    /// The explicit label, when the node carries one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Doc(doc) => doc.label.as_deref(),
            Node::Category(category) => Some(&category.label),
            Node::Link(link) => Some(&link.label),
            Node::GeneratedIndex(index) => Some(&index.label),
        }
    }
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Node::Category(category)
    }
}

impl From<DocRef> for Node {
    fn from(doc: DocRef) -> Self {
        Node::Doc(doc)
    }
}

impl From<GeneratedIndex> for Node {
    fn from(index: GeneratedIndex) -> Self {
        Node::GeneratedIndex(index)
    }
}
