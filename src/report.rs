//! Run report and its rendering

use std::fmt;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Which field a change added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Slug,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("id"),
            Self::Slug => f.write_str("slug"),
        }
    }
}

/// One field added to one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    pub field: Field,
    pub value: String,
}

/// Outcome of a stamping run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StampReport {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub dry_run: bool,
    pub changes: Vec<Change>,
}

impl StampReport {
    pub fn has_changes(&self) -> bool {
        self.files_changed > 0
    }

    pub fn changes_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Change> + 'a {
        self.changes.iter().filter(move |c| c.path == path)
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }

    fn render_text(&self) -> String {
        let verb = if self.dry_run { "Would add" } else { "Added" };
        let mut output = String::new();
        for change in &self.changes {
            output.push_str(&format!(
                "{} {}: {} → {}\n",
                verb, change.field, change.value, change.path
            ));
        }

        if self.has_changes() {
            output.push_str(&format!(
                "{} {} of {} file(s)\n",
                if self.dry_run { "Would update" } else { "Updated" },
                self.files_changed,
                self.files_scanned
            ));
        } else {
            output.push_str(&format!(
                "All {} file(s) already have an id and slug\n",
                self.files_scanned
            ));
        }
        output
    }
}
