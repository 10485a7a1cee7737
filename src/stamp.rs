//! The stamping run: walk, collect existing ids, fill gaps, write back
//!
//! Two passes over the collected documents:
//!
//! 1. [`collect_existing_ids`] builds a [`FolderIds`] registry from every
//!    document that already carries an id.
//! 2. [`fill_missing`] takes that registry by `&mut`, allocates ids and
//!    slugs for documents missing them, and rewrites only those files.
//!
//! The registry has to be complete before any allocation, otherwise a new
//! id could collide with one in a document not yet visited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::allocator::{top_level_folder, FolderIds};
use crate::document::{DocId, Document};
use crate::error::{IdStampError, Result};
use crate::ignore_list::IgnoreSet;
use crate::report::{Change, Field, StampReport};
use crate::slug::slugify;
use crate::walk::{collect_yaml_files, rel_path_string};

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOptions {
    /// Directory to scan
    pub root: PathBuf,
    /// Ignore file; resolved against `root` when relative
    pub ignore_file: PathBuf,
    /// Compute changes without writing
    pub dry_run: bool,
}

impl StampOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_file: PathBuf::from(crate::ignore_list::DEFAULT_IGNORE_FILE),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn ignore_path(&self) -> PathBuf {
        if self.ignore_file.is_absolute() {
            self.ignore_file.clone()
        } else {
            self.root.join(&self.ignore_file)
        }
    }
}

/// A parsed file waiting for pass 2
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Path relative to the scan root
    pub rel_path: PathBuf,
    pub folder: String,
    pub document: Document,
}

/// Run both passes over the tree described by `options`.
pub fn stamp_tree(options: &StampOptions) -> Result<StampReport> {
    let ignore_set = IgnoreSet::load(&options.ignore_path())?;
    let files = collect_yaml_files(&options.root, &ignore_set)?;
    debug!(root = %options.root.display(), files = files.len(), "collected YAML files");

    let mut documents = load_documents(&options.root, &files)?;
    let mut ids = collect_existing_ids(&documents);
    fill_missing(&options.root, &mut documents, &mut ids, options.dry_run)
}

/// Read and parse every file. The first failure aborts.
pub fn load_documents(root: &Path, files: &[PathBuf]) -> Result<Vec<LoadedDocument>> {
    files
        .iter()
        .map(|rel_path| {
            let full_path = root.join(rel_path);
            let content =
                fs::read_to_string(&full_path).map_err(|e| IdStampError::io(&full_path, e))?;
            let document = Document::parse(&full_path, &content)?;
            Ok(LoadedDocument {
                rel_path: rel_path.clone(),
                folder: top_level_folder(rel_path),
                document,
            })
        })
        .collect()
}

/// Pass 1: register every folder and every id already in use.
pub fn collect_existing_ids(documents: &[LoadedDocument]) -> FolderIds {
    let mut ids = FolderIds::new();
    for loaded in documents {
        ids.register_folder(&loaded.folder);
        if let Some(id) = &loaded.document.id {
            ids.record(&loaded.folder, id.to_string());
        }
    }
    ids
}

/// Pass 2: fill missing ids and slugs in walk order and write back the
/// documents that changed.
pub fn fill_missing(
    root: &Path,
    documents: &mut [LoadedDocument],
    ids: &mut FolderIds,
    dry_run: bool,
) -> Result<StampReport> {
    let mut report = StampReport {
        files_scanned: documents.len(),
        dry_run,
        ..Default::default()
    };

    for loaded in documents.iter_mut() {
        let display_path = rel_path_string(&loaded.rel_path);
        let mut changes = Vec::new();

        if loaded.document.id.is_none() {
            let id = ids.allocate(&loaded.folder);
            loaded.document.id = Some(DocId::Number(id));
            changes.push(Change {
                path: display_path.clone(),
                field: Field::Id,
                value: id.to_string(),
            });
        }

        if loaded.document.slug.is_none() {
            let basename = loaded
                .rel_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let slug = slugify(&basename);
            loaded.document.slug = Some(slug.clone().into());
            changes.push(Change {
                path: display_path.clone(),
                field: Field::Slug,
                value: slug,
            });
        }

        if changes.is_empty() {
            continue;
        }

        for change in &changes {
            info!(path = %change.path, field = %change.field, value = %change.value, "added field");
        }

        if !dry_run {
            let full_path = root.join(&loaded.rel_path);
            let yaml = loaded.document.to_yaml(&full_path)?;
            fs::write(&full_path, yaml).map_err(|e| IdStampError::io(&full_path, e))?;
            debug!(path = %full_path.display(), "rewrote file");
        }

        report.files_changed += 1;
        report.changes.extend(changes);
    }

    Ok(report)
}
