use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::entry::TraversalEntry;
use crate::error::CollectError;
use crate::results::{MatchRecord, Report, ScanStats};
use crate::traits::{Matcher, Source};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What to do with a matched file that has fewer lines than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortFilePolicy {
    /// Abort the whole run. Nothing is reported.
    #[default]
    Fail,

    /// Log a warning, keep the error in [`Report::skipped`], carry on.
    Skip,
}

/// Collection parameters passed from the builder to the engine.
pub(crate) struct CollectConfig {
    pub header_lines: usize,
    pub short_files:  ShortFilePolicy,
}

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config:  CollectConfig,
    pub source:  Box<dyn Source>,
    pub matcher: Box<dyn Matcher>,
}

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Walks a directory on disk, yielding each directory after all of its
/// descendants.
///
/// Symbolic links are never followed. A link that points at a directory is
/// not listed as a file either.
pub struct DirectorySource {
    root:   PathBuf,
    sorted: bool,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:   root.into(),
            sorted: false,
        }
    }

    /// Visit siblings in file-name order instead of the order the OS
    /// returns them in.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Source for DirectorySource {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<TraversalEntry, CollectError>> + '_> {
        let mut walker = WalkDir::new(&self.root)
            .follow_links(false)
            .contents_first(true);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        Box::new(BottomUp {
            inner:   walker.into_iter(),
            pending: HashMap::new(),
        })
    }
}

/// Regroups walkdir's contents-first stream into one entry per directory.
///
/// walkdir emits a directory only after everything beneath it, but files of
/// a directory are interleaved with its subtrees. File names are parked under
/// their parent until the parent itself comes out, so a directory's files
/// always follow every descendant directory.
struct BottomUp {
    inner:   walkdir::IntoIter,
    pending: HashMap<PathBuf, Vec<String>>,
}

impl Iterator for BottomUp {
    type Item = Result<TraversalEntry, CollectError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(e) => return Some(Err(map_walk_error(e))),
            };

            if entry.file_type().is_dir() {
                let files = self.pending.remove(entry.path()).unwrap_or_default();
                return Some(Ok(TraversalEntry::new(entry.into_path(), files)));
            }

            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }

            let Some(parent) = entry.path().parent() else {
                continue;
            };
            self.pending
                .entry(parent.to_path_buf())
                .or_default()
                .push(entry.file_name().to_string_lossy().into_owned());
        }
    }
}

// ---------------------------------------------------------------------------
// read_header()
// ---------------------------------------------------------------------------

/// Read exactly `count` lines from `reader`, terminators included.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`, and the terminator bytes are
/// kept as they are. The last line may lack a terminator if the file ends
/// right there. Fewer than `count` lines is [`CollectError::ShortFile`];
/// invalid UTF-8 is a [`CollectError::Read`].
pub fn read_header<R: BufRead>(
    mut reader: R,
    path: &Path,
    count: usize,
) -> Result<Vec<String>, CollectError> {
    let read_error = |source: io::Error| CollectError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut lines = Vec::with_capacity(count);

    while lines.len() < count {
        let mut raw = Vec::new();
        let n = read_raw_line(&mut reader, &mut raw).map_err(read_error)?;

        if n == 0 {
            return Err(CollectError::ShortFile {
                path:     path.to_path_buf(),
                expected: count,
                found:    lines.len(),
            });
        }

        let line = String::from_utf8(raw)
            .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        lines.push(line);
    }

    Ok(lines)
}

/// Append one line to `buf`, terminator included. Returns the bytes read;
/// `0` means end of input.
fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let start = buf.len();
    let mut after_cr = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        if available.is_empty() {
            break;
        }

        // A `\r` ended the previous chunk: take a following `\n`, else stop.
        if after_cr {
            if available[0] == b'\n' {
                buf.push(b'\n');
                reader.consume(1);
            }
            break;
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                buf.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                if terminator == b'\n' {
                    break;
                }
                after_cr = true;
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }

    Ok(buf.len() - start)
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk the source and build the report.
///
/// Called by `CollectorBuilder::run()` after validating inputs. Records are
/// kept in the order the source yields directories and, within one
/// directory, the order of its file list.
pub(crate) fn run(opts: EngineOptions) -> Result<Report, CollectError> {
    let EngineOptions { config, source, matcher } = opts;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut dirs    = 0usize;
    let mut files   = 0usize;

    let start = Instant::now();

    for item in source.walk() {
        let entry = match item {
            Ok(e) => e,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "skipping unreadable directory");
                skipped.push(e);
                continue;
            }
            Err(e) => return Err(e),
        };

        dirs  += 1;
        files += entry.files.len();

        let parent_name = entry.dir_name();

        for name in entry.files.iter().filter(|n| matcher.is_match(n.as_str())) {
            let path = entry.dir.join(name);

            let header = {
                let reader = source
                    .open(&path)
                    .map_err(|err| open_error(&path, err))?;
                read_header(reader, &path, config.header_lines)
            };

            match header {
                Ok(header_lines) => {
                    debug!(path = %path.display(), parent = %parent_name, "collected header");
                    records.push(MatchRecord {
                        path,
                        parent_name: parent_name.clone(),
                        header_lines,
                    });
                }
                Err(e @ CollectError::ShortFile { .. })
                    if config.short_files == ShortFilePolicy::Skip =>
                {
                    warn!(error = %e, "skipping short file");
                    skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    let duration = start.elapsed();
    let matches  = records.len();

    Ok(Report {
        records,
        stats: ScanStats {
            dirs,
            files,
            matches,
            duration,
        },
        skipped,
    })
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn open_error(path: &Path, source: io::Error) -> CollectError {
    CollectError::Open {
        path: path.to_path_buf(),
        source,
    }
}

fn map_walk_error(e: walkdir::Error) -> CollectError {
    let path = e.path().map(Path::to_path_buf).unwrap_or_default();

    match e.into_io_error() {
        Some(io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => {
            CollectError::PermissionDenied(path)
        }
        Some(io_err) => CollectError::Walk {
            path,
            source: io_err,
        },
        None => CollectError::Source(format!("walk failed at {}", path.display())),
    }
}
