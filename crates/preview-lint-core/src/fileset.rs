//! Virtual file set and file-kind classification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed name of the project manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// One entry of a [`FileSet`].
///
/// Content is absent for entries that stand for directories or files whose
/// text has not been loaded; such entries are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Text content, when loaded.
    pub content: Option<String>,
}

impl FileEntry {
    /// Creates an entry with loaded content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Creates a content-less entry (directory or not-yet-loaded file).
    #[must_use]
    pub fn unloaded() -> Self {
        Self { content: None }
    }
}

/// In-memory project tree, standing in for the editable file storage.
///
/// The engine borrows a set immutably for the duration of one run and never
/// caches it across runs; the caller owns it and may mutate it between
/// calls. The backing map is ordered so file-dispatch order is
/// deterministic (lexicographic by path).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSet {
    files: BTreeMap<String, FileEntry>,
}

impl FileSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a file with loaded content, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), FileEntry::new(content));
    }

    /// Inserts a content-less entry, replacing any previous entry.
    pub fn insert_unloaded(&mut self, path: impl Into<String>) {
        self.files.insert(path.into(), FileEntry::unloaded());
    }

    /// Returns true if `path` is a key of the set, loaded or not.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Looks up an entry by exact path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.files.get(path)
    }

    /// Looks up loaded content by exact path.
    #[must_use]
    pub fn content(&self, path: &str) -> Option<&str> {
        self.files.get(path).and_then(|entry| entry.content.as_deref())
    }

    /// Number of entries, including content-less ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates entries in dispatch order (lexicographic by path).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.files.iter().map(|(path, entry)| (path.as_str(), entry))
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileSet {
    fn from_iter<T: IntoIterator<Item = (P, C)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (path, content) in iter {
            set.insert(path, content);
        }
        set
    }
}

/// Closed classification of a path into the rule set that applies to it.
///
/// The pipeline dispatches on this exhaustively, so adding a kind forces
/// every dispatch site to say what happens to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Component-markup source (`.tsx` / `.jsx`).
    Markup,
    /// Plain script/module source (`.ts` / `.js`).
    Script,
    /// The project manifest, matched by exact path.
    Manifest,
    /// Anything the pipeline does not understand; never validated.
    Other,
}

impl FileKind {
    /// Classifies a path.
    #[must_use]
    pub fn of(path: &str) -> Self {
        if path == MANIFEST_FILE {
            return Self::Manifest;
        }
        if path.ends_with(".tsx") || path.ends_with(".jsx") {
            return Self::Markup;
        }
        if path.ends_with(".ts") || path.ends_with(".js") {
            return Self::Script;
        }
        Self::Other
    }
}
