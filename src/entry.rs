use std::path::PathBuf;

/// One visited directory, produced by a [`Source`](crate::traits::Source)
/// during traversal.
///
/// Sources yield these bottom-up: every descendant directory comes before
/// the directory that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    /// Path of the visited directory, as reached from the scan root.
    pub dir: PathBuf,

    /// Names of the non-directory entries directly inside `dir`.
    pub files: Vec<String>,
}

impl TraversalEntry {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    /// Final segment of `dir`, or `""` when it has none (e.g. `.`).
    pub fn dir_name(&self) -> String {
        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
