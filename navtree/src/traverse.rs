//! Render-order traversal of sidebars.
//!
//! A sidebar is walked depth-first in declared order. A category yields its
//! own entry, then its landing page (if any), then its children.

use crate::model::{
    Category, CategoryLink, DocId, DocRef, ExternalLink, GeneratedIndex, Node, Sidebar,
};

/// What a traversal entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryItem<'a> {
    Category(&'a Category),
    /// A category's landing page, listed before the category's children.
    Landing(&'a CategoryLink),
    Doc(&'a DocRef),
    Link(&'a ExternalLink),
    GeneratedIndex(&'a GeneratedIndex),
}

/// One visible row of a rendered sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Nesting depth, 0 for top-level nodes.
    pub depth: usize,
    /// Labels of the enclosing categories, outermost first.
    pub trail: Vec<&'a str>,
    pub item: EntryItem<'a>,
}

impl<'a> Entry<'a> {
    /// The document this entry opens, if it opens an authored page.
    pub fn doc_id(&self) -> Option<&'a DocId> {
        match self.item {
            EntryItem::Doc(doc) => Some(&doc.id),
            EntryItem::Landing(CategoryLink::Doc(id)) => Some(id),
            _ => None,
        }
    }
}

/// Previous and next documents around a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination<'a> {
    pub previous: Option<&'a DocId>,
    pub next: Option<&'a DocId>,
}

impl Sidebar {
    /// Every row in render order.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut entries = Vec::new();
        let mut trail = Vec::new();
        collect(self.items(), &mut trail, &mut entries);
        entries
    }

    /// Document ids in render order, landing pages included.
    pub fn doc_ids(&self) -> Vec<&DocId> {
        self.entries().iter().filter_map(Entry::doc_id).collect()
    }

    /// Whether the sidebar opens this document anywhere.
    pub fn contains_doc(&self, id: &DocId) -> bool {
        self.doc_ids().contains(&id)
    }

    /// Category labels leading to the first occurrence of a document.
    pub fn breadcrumbs(&self, id: &DocId) -> Option<Vec<&str>> {
        self.entries()
            .into_iter()
            .find(|entry| entry.doc_id() == Some(id))
            .map(|entry| entry.trail)
    }

    /// Documents before and after the first occurrence of `id`.
    pub fn pagination(&self, id: &DocId) -> Option<Pagination<'_>> {
        let ids = self.doc_ids();
        let index = ids.iter().position(|candidate| *candidate == id)?;
        Some(Pagination {
            previous: index.checked_sub(1).map(|i| ids[i]),
            next: ids.get(index + 1).copied(),
        })
    }
}

fn collect<'a>(nodes: &'a [Node], trail: &mut Vec<&'a str>, entries: &mut Vec<Entry<'a>>) {
    for node in nodes {
        let depth = trail.len();
        match node {
            Node::Doc(doc) => entries.push(Entry {
                depth,
                trail: trail.clone(),
                item: EntryItem::Doc(doc),
            }),
            Node::Link(link) => entries.push(Entry {
                depth,
                trail: trail.clone(),
                item: EntryItem::Link(link),
            }),
            Node::GeneratedIndex(index) => entries.push(Entry {
                depth,
                trail: trail.clone(),
                item: EntryItem::GeneratedIndex(index),
            }),
            Node::Category(category) => {
                entries.push(Entry {
                    depth,
                    trail: trail.clone(),
                    item: EntryItem::Category(category),
                });

                trail.push(&category.label);
                if let Some(link) = &category.link {
                    entries.push(Entry {
                        depth: depth + 1,
                        trail: trail.clone(),
                        item: EntryItem::Landing(link),
                    });
                }
                collect(&category.items, trail, entries);
                trail.pop();
            }
        }
    }
}
