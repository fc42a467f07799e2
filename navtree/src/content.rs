//! Content stores resolve document ids to pages.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LoadError;
use crate::model::DocId;

/// File extensions recognised as documents.
pub const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Lookup of authored documents by id.
pub trait ContentStore {
    /// Whether a page exists for the id.
    fn contains(&self, id: &DocId) -> bool;
}

/// A fixed set of known document ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ids: HashSet<DocId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<DocId>) {
        self.ids.insert(id.into());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<I: Into<DocId>> FromIterator<I> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ContentStore for MemoryStore {
    fn contains(&self, id: &DocId) -> bool {
        self.ids.contains(id)
    }
}

/// Documents found under a docs directory.
///
/// `unit-2/objects.md` and `unit-2/objects.mdx` both become the id
/// `unit-2/objects`. Files and directories starting with `_` are partials
/// and are skipped, as are hidden entries.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    ids: BTreeSet<DocId>,
}

impl FsStore {
    /// Scan `root` recursively.
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let root = root.into();
        let mut ids = BTreeSet::new();
        scan_dir(&root, &root, &mut ids)?;
        debug!("found {} documents under {}", ids.len(), root.display());
        Ok(Self { root, ids })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All document ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &DocId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ContentStore for FsStore {
    fn contains(&self, id: &DocId) -> bool {
        self.ids.contains(id)
    }
}

fn is_skipped(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

fn scan_dir(root: &Path, dir: &Path, ids: &mut BTreeSet<DocId>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::io(dir, source))?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::io(dir, source))?;
        let path = entry.path();
        let name = entry.file_name();
        if is_skipped(&name.to_string_lossy()) {
            continue;
        }

        let file_type = entry
            .file_type()
            .map_err(|source| LoadError::io(&path, source))?;
        if file_type.is_dir() {
            scan_dir(root, &path, ids)?;
        } else if let Some(id) = doc_id_for(root, &path) {
            ids.insert(id);
        }
    }

    Ok(())
}

/// Id of a document file relative to the docs root.
fn doc_id_for(root: &Path, path: &Path) -> Option<DocId> {
    let extension = path.extension()?.to_str()?;
    if !DOC_EXTENSIONS.contains(&extension) {
        return None;
    }

    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(DocId::new(parts.join("/")))
}
