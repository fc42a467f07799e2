use std::fmt;

/// Location of a node: its sidebar and the category labels leading to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    pub sidebar: String,
    pub categories: Vec<String>,
}

impl NodePath {
    /// The top level of a sidebar.
    pub fn root(sidebar: impl Into<String>) -> Self {
        Self {
            sidebar: sidebar.into(),
            categories: Vec::new(),
        }
    }

    /// The inside of a category at this location.
    pub fn child(&self, category: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.categories.push(category.into());
        path
    }

    /// Nesting depth below the sidebar root.
    pub fn depth(&self) -> usize {
        self.categories.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sidebar)?;
        for category in &self.categories {
            write!(f, " > {}", category)?;
        }
        Ok(())
    }
}
