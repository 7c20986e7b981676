//! The INI document: an ordered entry list plus the path it persists to.
//!
//! All category-scoped operations target the first category marker with a
//! matching name and stop at the next marker of any name. Later sections
//! that reuse a name are never merged into the first.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::entry::{Entry, Pair};
use crate::error::{LoadError, SaveError, SetValueError};
use crate::parser;
use crate::writer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
    path: Option<PathBuf>,
}

impl Document {
    /// Empty document with no backing path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole file at `path` and parse it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut doc = Self::parse(&content);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Like [`Document::load`], but a read failure is logged and yields an
    /// empty document that still remembers `path`.
    pub fn load_lenient(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            error!("{e}");
            Self {
                entries: vec![],
                path: Some(path.to_path_buf()),
            }
        })
    }

    pub fn parse(content: &str) -> Self {
        Self {
            entries: parser::parse_str(content),
            path: None,
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: parser::parse_lines(lines),
            path: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Index range of the pairs belonging to the first `category` section.
    fn section(&self, category: &str) -> Option<std::ops::Range<usize>> {
        let start = self
            .entries
            .iter()
            .position(|e| e.is_category_named(category))?
            + 1;
        let end = self.entries[start..]
            .iter()
            .position(Entry::is_category)
            .map_or(self.entries.len(), |offset| start + offset);
        Some(start..end)
    }

    fn find_key(&self, category: &str, key: &str) -> Result<usize, SetValueError> {
        let range = self
            .section(category)
            .ok_or_else(|| SetValueError::CategoryNotFound(category.to_string()))?;
        let start = range.start;
        self.entries[range]
            .iter()
            .position(|e| matches!(e, Entry::Pair { key: k, .. } if k == key))
            .map(|offset| start + offset)
            .ok_or_else(|| SetValueError::KeyNotFound {
                category: category.to_string(),
                key: key.to_string(),
            })
    }

    /// First pair named `key` in the first `category` section.
    pub fn get_value(&self, category: &str, key: &str) -> Option<Pair<'_>> {
        let idx = self.find_key(category, key).ok()?;
        self.entries[idx].as_pair()
    }

    /// All pairs of the first `category` section in document order.
    ///
    /// Empty when the category is missing or has no pairs.
    pub fn get_values(&self, category: &str) -> Vec<Pair<'_>> {
        self.section(category)
            .map(|range| {
                self.entries[range]
                    .iter()
                    .filter_map(Entry::as_pair)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the value of an existing key, keeping its position.
    ///
    /// Missing categories or keys are never created.
    pub fn set_value(
        &mut self,
        category: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), SetValueError> {
        if key.starts_with('[') {
            error!("cannot change category name: {key:?}");
            return Err(SetValueError::CategoryKey(key.to_string()));
        }

        let idx = self.find_key(category, key)?;
        if let Entry::Pair { value: v, .. } = &mut self.entries[idx] {
            *v = value.into();
        }
        Ok(())
    }

    /// Append a `category` marker unless one already exists.
    ///
    /// Returns `true` if the category was absent (and has now been added).
    pub fn create_category(&mut self, category: &str) -> bool {
        if self.contains_category(category) {
            return false;
        }
        self.entries.push(Entry::category(category));
        true
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.is_category_named(category))
    }

    /// Category names in document order, duplicates included.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Category { name, .. } => Some(name.as_str()),
            Entry::Pair { .. } => None,
        })
    }

    pub fn to_lines(&self) -> Result<Vec<String>, SaveError> {
        writer::to_lines(&self.entries)
    }

    pub fn serialize(&self) -> Result<String, SaveError> {
        writer::serialize(&self.entries)
    }

    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), SaveError> {
        writer::write_entries(&self.entries, sink)
    }

    /// Save to the path the document was loaded from (or last saved to).
    pub fn save(&self) -> Result<(), SaveError> {
        let path = self.path.as_deref().ok_or(SaveError::NoPath)?;
        self.write_file(path)
    }

    /// Save to `path` and remember it for later [`Document::save`] calls.
    ///
    /// The path is updated even when the write fails.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), SaveError> {
        let path = path.into();
        self.path = Some(path.clone());
        self.write_file(&path)
    }

    fn write_file(&self, path: &Path) -> Result<(), SaveError> {
        let content = self.serialize().inspect_err(|e| warn!("{e}"))?;
        fs::write(path, content).map_err(|source| {
            let err = SaveError::Io {
                path: path.to_path_buf(),
                source,
            };
            error!("{err}");
            err
        })
    }
}
