use super::node::Node;

/// A named, ordered group of top-level nodes.
///
/// Item order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    name: String,
    items: Vec<Node>,
}

impl Sidebar {
    pub fn new(name: impl Into<String>, items: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level nodes in declared order.
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
