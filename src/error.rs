//! Error types for idstamp

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, IdStampError>;

/// Everything that can abort a stamping run.
///
/// There is no per-file isolation: the first error stops the run and any
/// files rewritten before it stay rewritten.
#[derive(Debug, Error)]
pub enum IdStampError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document root in {} is not a mapping", path.display())]
    NotAMapping { path: PathBuf },

    #[error("{count} file(s) need an id or slug")]
    PendingChanges { count: usize },
}

impl IdStampError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } | Self::Walk(_) => ExitCode::from(1),
            Self::Yaml { .. } | Self::Serialize { .. } | Self::NotAMapping { .. } => {
                ExitCode::from(2)
            }
            Self::PendingChanges { .. } => ExitCode::from(3),
        }
    }
}
