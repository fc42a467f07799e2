//! JSON encoding of sidebar items.
//!
//! A bare string is a document id. Objects carry a `type` tag:
//!
//! ```json
//! [
//!   "unit-1/introduction",
//!   { "type": "doc", "id": "unit-1/basics", "label": "Basics" },
//!   { "type": "link", "label": "GitHub", "href": "https://github.com/r8vnhill/dibs" },
//!   {
//!     "type": "category",
//!     "label": "Unidad 2",
//!     "link": { "type": "doc", "id": "unit-2/index" },
//!     "items": ["unit-2/objects"]
//!   }
//! ]
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer};

use super::node::{Category, CategoryLink, DocId, DocRef, ExternalLink, GeneratedIndex, Node};

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum TaggedNode {
    Doc {
        id: DocId,
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<Node>,
        link: Option<LinkRepr>,
        #[serde(default = "default_true")]
        collapsible: bool,
        #[serde(default = "default_true")]
        collapsed: bool,
    },
    Link {
        label: String,
        href: String,
    },
    GeneratedIndex {
        label: String,
        title: Option<String>,
        description: Option<String>,
        slug: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum LinkRepr {
    Doc {
        id: DocId,
    },
    GeneratedIndex {
        title: Option<String>,
        description: Option<String>,
        slug: Option<String>,
    },
}

impl LinkRepr {
    /// Generated index titles default to the owning category's label.
    fn into_link(self, category_label: &str) -> CategoryLink {
        match self {
            LinkRepr::Doc { id } => CategoryLink::Doc(id),
            LinkRepr::GeneratedIndex {
                title,
                description,
                slug,
            } => CategoryLink::GeneratedIndex(GeneratedIndex {
                label: category_label.to_string(),
                title: title.unwrap_or_else(|| category_label.to_string()),
                description,
                slug,
            }),
        }
    }
}

impl From<TaggedNode> for Node {
    fn from(tagged: TaggedNode) -> Self {
        match tagged {
            TaggedNode::Doc { id, label } => Node::Doc(DocRef { id, label }),
            TaggedNode::Category {
                label,
                items,
                link,
                collapsible,
                collapsed,
            } => {
                let link = link.map(|link| link.into_link(&label));
                Node::Category(Category {
                    label,
                    items,
                    link,
                    collapsible,
                    collapsed,
                })
            }
            TaggedNode::Link { label, href } => Node::Link(ExternalLink { label, href }),
            TaggedNode::GeneratedIndex {
                label,
                title,
                description,
                slug,
            } => Node::GeneratedIndex(GeneratedIndex {
                title: title.unwrap_or_else(|| label.clone()),
                label,
                description,
                slug,
            }),
        }
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document id or a sidebar item object")
    }

    fn visit_str<E: de::Error>(self, id: &str) -> Result<Node, E> {
        Ok(Node::doc(id))
    }

    fn visit_string<E: de::Error>(self, id: String) -> Result<Node, E> {
        Ok(Node::doc(id))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Node, A::Error> {
        TaggedNode::deserialize(MapAccessDeserializer::new(map)).map(Node::from)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}
