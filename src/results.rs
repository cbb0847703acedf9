use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CollectError;

/// One matched file: where it was, and the lines read from its top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Full path of the matched file.
    pub path: PathBuf,

    /// Name of the directory containing the file (last segment only).
    pub parent_name: String,

    /// Leading lines of the file, each with its original terminator.
    pub header_lines: Vec<String>,
}

impl fmt::Display for MatchRecord {
    /// Writes the `Name: <dir>` line followed by the raw header lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.parent_name)?;
        for line in &self.header_lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// The output of a completed collection.
pub struct Report {
    /// Matched files, in discovery order (bottom-up).
    pub records: Vec<MatchRecord>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Errors that were logged and stepped over: unreadable directories,
    /// and short files when [`ShortFilePolicy::Skip`](crate::ShortFilePolicy)
    /// is in effect.
    pub skipped: Vec<CollectError>,
}

impl Report {
    /// Concatenate every record into a single block of text.
    ///
    /// Records are joined with no separator; each header line already ends
    /// in its own terminator. An empty report renders as `""`.
    pub fn render(&self) -> String {
        self.records.iter().map(ToString::to_string).collect()
    }
}

/// Counters for a completed scan.
pub struct ScanStats {
    /// Directories visited.
    pub dirs: usize,

    /// Files listed across all visited directories (matched or not).
    pub files: usize,

    /// Records produced.
    pub matches: usize,

    /// Wall-clock time from start to completion.
    pub duration: Duration,
}
