//! Ignore-list loading
//!
//! The ignore file is plain text with one entry per line. Entries are
//! literal strings, not globs: each one is compared against both the
//! root-relative path and the basename of every walked entry.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{IdStampError, Result};

/// Default ignore file name, looked up in the scan root
pub const DEFAULT_IGNORE_FILE: &str = ".ignore";

/// Immutable set of literal paths and basenames to skip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

impl IgnoreSet {
    /// Load an ignore file. A missing file yields an empty set.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let set = Self::parse(&content);
                debug!(path = %path.display(), entries = set.len(), "loaded ignore list");
                Ok(set)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no ignore file");
                Ok(Self::default())
            }
            Err(e) => Err(IdStampError::io(path, e)),
        }
    }

    /// Parse ignore file contents, skipping blank lines and `#` comments.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Check a root-relative path (with `/` separators) against the set,
    /// by full path or by basename.
    pub fn matches(&self, rel_path: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let basename = rel_path.rsplit('/').next().unwrap_or(rel_path);
        self.entries.contains(rel_path) || self.entries.contains(basename)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
