//! idstamp: per-folder ids and filename slugs for YAML content trees
//!
//! Walks a directory of YAML documents and makes sure each one carries a
//! numeric `id`, unique within its top-level folder, and a `slug` derived
//! from its file name. Files that already have both are left byte-for-byte
//! untouched; the rest are rewritten with `id` and `slug` as the first keys.
//!
//! # Example
//!
//! ```no_run
//! use idstamp::{stamp_tree, StampOptions};
//!
//! let report = stamp_tree(&StampOptions::new("content").dry_run(true))?;
//! for change in &report.changes {
//!     println!("{} {} -> {}", change.field, change.value, change.path);
//! }
//! # Ok::<(), idstamp::IdStampError>(())
//! ```

pub mod allocator;
pub mod cli;
pub mod document;
pub mod error;
pub mod ignore_list;
pub mod report;
pub mod slug;
pub mod stamp;
pub mod walk;

// Re-export commonly used types
pub use allocator::{numeric_value, top_level_folder, FolderIds};
pub use cli::{Cli, OutputFormat};
pub use document::{DocId, Document};
pub use error::{IdStampError, Result};
pub use ignore_list::IgnoreSet;
pub use report::{Change, Field, StampReport};
pub use slug::slugify;
pub use stamp::{collect_existing_ids, fill_missing, load_documents, stamp_tree, StampOptions};
pub use walk::collect_yaml_files;
