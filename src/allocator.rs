//! Per-folder id registry and allocation
//!
//! Ids are unique per top-level folder, not globally. The registry is built
//! from the ids already present on disk and then grows as new ids are handed
//! out, so two documents missing an id in the same folder never collide.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

/// Id strings in use, keyed by top-level folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderIds {
    folders: BTreeMap<String, BTreeSet<String>>,
}

impl FolderIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `folder` has an entry, even if it holds no ids yet.
    pub fn register_folder(&mut self, folder: &str) {
        self.folders.entry(folder.to_string()).or_default();
    }

    /// Record an id already in use within `folder`.
    pub fn record(&mut self, folder: &str, id: impl Into<String>) {
        self.folders
            .entry(folder.to_string())
            .or_default()
            .insert(id.into());
    }

    /// Highest numeric id in `folder`; 0 when there is none.
    ///
    /// Ids without a leading integer do not count here, though they stay in
    /// the registry.
    pub fn max_numeric(&self, folder: &str) -> i64 {
        self.folders
            .get(folder)
            .and_then(|ids| ids.iter().filter_map(|id| numeric_value(id)).max())
            .unwrap_or(0)
    }

    /// Allocate the next id for `folder` and record it immediately.
    pub fn allocate(&mut self, folder: &str) -> i64 {
        let next = self.max_numeric(folder).saturating_add(1);
        self.record(folder, next.to_string());
        next
    }

    pub fn ids(&self, folder: &str) -> Option<&BTreeSet<String>> {
        self.folders.get(folder)
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }
}

/// First component of a root-relative path.
///
/// A file sitting directly in the root is its own scope.
pub fn top_level_folder(rel_path: &Path) -> String {
    rel_path
        .components()
        .find_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Leading integer of an id string.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"12abc"` reads as 12. Returns `None` when no digits lead
/// or the value does not fit in an `i64`.
pub fn numeric_value(id: &str) -> Option<i64> {
    let s = id.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
