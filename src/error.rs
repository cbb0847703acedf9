use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    // Config
    #[error("scan root is not a readable directory: {}", .0.display())]
    InvalidSource(PathBuf),

    #[error("header line count must be at least 1, got {0}")]
    InvalidLineCount(usize),

    // Traversal
    #[error("permission denied listing {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("failed to list {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Matched files
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has {found} line(s), expected at least {expected}", .path.display())]
    ShortFile {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl CollectError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidSource(p)
            | Self::PermissionDenied(p)
            | Self::Walk { path: p, .. }
            | Self::Open { path: p, .. }
            | Self::Read { path: p, .. }
            | Self::ShortFile { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the collector can keep going after this error.
    ///
    /// Only traversal errors are recoverable: a directory that cannot be
    /// listed is skipped and the walk continues. Anything that goes wrong
    /// with a matched file aborts the run. Short files are governed by
    /// [`ShortFilePolicy`](crate::ShortFilePolicy) instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::Walk { .. })
    }
}
