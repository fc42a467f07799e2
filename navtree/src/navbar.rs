//! Navbar items that point into the navigation tree.

use serde::Deserialize;

use crate::model::DocId;

/// Side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NavbarItemRepr")]
pub enum NavbarItem {
    /// Opens the first document of a sidebar.
    DocSidebar {
        sidebar_id: String,
        label: Option<String>,
        position: Position,
    },
    /// Opens a single document.
    Doc {
        doc_id: DocId,
        label: Option<String>,
        position: Position,
    },
    /// A route inside the site.
    Internal {
        to: String,
        label: String,
        position: Position,
    },
    /// A link leaving the site.
    External {
        href: String,
        label: String,
        position: Position,
    },
}

impl NavbarItem {
    /// Displayed label, falling back to the referenced id.
    pub fn label(&self) -> &str {
        match self {
            NavbarItem::DocSidebar {
                label, sidebar_id, ..
            } => label.as_deref().unwrap_or(sidebar_id.as_str()),
            NavbarItem::Doc { label, doc_id, .. } => label.as_deref().unwrap_or(doc_id.as_str()),
            NavbarItem::Internal { label, .. } | NavbarItem::External { label, .. } => {
                label.as_str()
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            NavbarItem::DocSidebar { position, .. }
            | NavbarItem::Doc { position, .. }
            | NavbarItem::Internal { position, .. }
            | NavbarItem::External { position, .. } => *position,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavbarItemRepr {
    #[serde(rename = "type")]
    kind: Option<String>,
    sidebar_id: Option<String>,
    doc_id: Option<DocId>,
    to: Option<String>,
    href: Option<String>,
    label: Option<String>,
    #[serde(default)]
    position: Position,
}

impl TryFrom<NavbarItemRepr> for NavbarItem {
    type Error = String;

    fn try_from(repr: NavbarItemRepr) -> Result<Self, Self::Error> {
        let NavbarItemRepr {
            kind,
            sidebar_id,
            doc_id,
            to,
            href,
            label,
            position,
        } = repr;

        match kind.as_deref() {
            Some("docSidebar") => {
                let sidebar_id = sidebar_id.ok_or("docSidebar item without sidebarId")?;
                Ok(NavbarItem::DocSidebar {
                    sidebar_id,
                    label,
                    position,
                })
            }
            Some("doc") => {
                let doc_id = doc_id.ok_or("doc item without docId")?;
                Ok(NavbarItem::Doc {
                    doc_id,
                    label,
                    position,
                })
            }
            Some("default") | None => {
                let label = label.ok_or("link item without label")?;
                match (to, href) {
                    (Some(to), None) => Ok(NavbarItem::Internal {
                        to,
                        label,
                        position,
                    }),
                    (None, Some(href)) => Ok(NavbarItem::External {
                        href,
                        label,
                        position,
                    }),
                    _ => Err(format!(
                        "navbar item '{}' needs exactly one of `to` or `href`",
                        label
                    )),
                }
            }
            Some(other) => Err(format!("unknown navbar item type '{}'", other)),
        }
    }
}
