use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::entry::TraversalEntry;
use crate::error::CollectError;

/// A tree of directories and files to collect headers from.
///
/// [`DirectorySource`](crate::engine::DirectorySource) walks the real
/// filesystem. Implement this for anything else: an in-memory tree in tests,
/// an archive, a remote listing.
///
/// # Ordering
///
/// `walk()` must yield directories bottom-up. The report is built in the
/// order entries arrive; the engine never reorders them.
///
/// # Error Handling
///
/// Yield `Err` for directories that cannot be listed. Recoverable errors
/// (see [`CollectError::is_recoverable`]) are logged and stored in
/// [`Report::skipped`](crate::Report::skipped); anything else stops the run.
///
/// # Example
///
/// ```rust
/// use std::io::{self, BufRead, Cursor};
/// use std::path::Path;
/// use license_head::{CollectError, Source, TraversalEntry};
///
/// struct OneFile;
///
/// impl Source for OneFile {
///     fn walk(&self) -> Box<dyn Iterator<Item = Result<TraversalEntry, CollectError>> + '_> {
///         let entry = TraversalEntry::new("vendor", vec!["license.txt".into()]);
///         Box::new(std::iter::once(Ok(entry)))
///     }
///
///     fn open(&self, _path: &Path) -> io::Result<Box<dyn BufRead>> {
///         Ok(Box::new(Cursor::new("a\nb\nc\nd\ne\n")))
///     }
/// }
/// ```
pub trait Source {
    /// Traverse the source bottom-up, one entry per directory.
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TraversalEntry, CollectError>> + '_>;

    /// Open a file previously listed by `walk()` for line-oriented reading.
    ///
    /// The returned reader is dropped as soon as the header has been read.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Decides which file names produce a record.
///
/// # Example
///
/// ```rust
/// use license_head::Matcher;
///
/// struct AnyLicense;
///
/// impl Matcher for AnyLicense {
///     fn is_match(&self, file_name: &str) -> bool {
///         file_name.to_ascii_lowercase().starts_with("license")
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if a file with this name should be collected.
    fn is_match(&self, file_name: &str) -> bool;
}
