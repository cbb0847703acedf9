use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};

use crate::entry::TraversalEntry;
use crate::error::CollectError;
use crate::traits::Source;

/// A fixed list of directories, with file contents served from memory.
///
/// Entries are yielded in the order they were added, so callers list them
/// bottom-up (children before parents). Files not present fail to open with
/// `NotFound`.
///
/// ```rust
/// use license_head::MemorySource;
///
/// let tree = MemorySource::new()
///     .dir("proj/sub", [("license.txt", "a\nb\nc\nd\ne\nf\n")])
///     .dir("proj", [("license.txt", "1\n2\n3\n4\n5\n")]);
///
/// let report = license_head::collect().source(tree).run().unwrap();
/// assert_eq!(report.records[0].parent_name, "sub");
/// ```
#[derive(Default)]
pub struct MemorySource {
    entries:  Vec<TraversalEntry>,
    contents: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory holding `(name, content)` files.
    pub fn dir<I, N, C>(mut self, dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let dir = dir.into();
        let mut names = Vec::new();
        for (name, content) in files {
            let name = name.into();
            self.contents.insert(dir.join(&name), content.into());
            names.push(name);
        }
        self.entries.push(TraversalEntry::new(dir, names));
        self
    }

    /// List a file without giving it any content, so opening it fails.
    pub fn unreadable(mut self, dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let dir = dir.into();
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.dir == dir) {
            Some(entry) => entry.files.push(name),
            None => self.entries.push(TraversalEntry::new(dir, vec![name])),
        }
        self
    }
}

impl Source for MemorySource {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TraversalEntry, CollectError>> + '_> {
        Box::new(self.entries.iter().cloned().map(Ok))
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        match self.contents.get(path) {
            Some(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not in the memory source", path.display()),
            )),
        }
    }
}
