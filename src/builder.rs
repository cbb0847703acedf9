use std::path::PathBuf;

use tracing::debug;

use crate::engine::{run, CollectConfig, DirectorySource, EngineOptions, ShortFilePolicy};
use crate::error::CollectError;
use crate::results::Report;
use crate::traits::{Matcher, Source};

/// File name collected when none is configured.
pub const DEFAULT_FILE_NAME: &str = "license.txt";

/// Lines read from each matched file when none is configured.
pub const DEFAULT_HEADER_LINES: usize = 5;

// ---------------------------------------------------------------------------
// CollectorBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a collection.
///
/// Created via [`license_head::collect()`](crate::collect). Configure with
/// chained builder methods, then call [`run()`](CollectorBuilder::run).
///
/// # Example
///
/// ```rust,no_run
/// use license_head::ShortFilePolicy;
///
/// let report = license_head::collect()
///     .root("third_party")
///     .short_files(ShortFilePolicy::Skip)
///     .run()?;
///
/// print!("{}", report.render());
/// # Ok::<(), license_head::CollectError>(())
/// ```
pub struct CollectorBuilder {
    root:         Option<PathBuf>,
    source:       Option<Box<dyn Source>>,
    matcher:      Option<Box<dyn Matcher>>,
    file_name:    String,
    header_lines: usize,
    short_files:  ShortFilePolicy,
    sorted:       bool,
}

impl Default for CollectorBuilder {
    fn default() -> Self {
        Self {
            root:         None,
            source:       None,
            matcher:      None,
            file_name:    DEFAULT_FILE_NAME.to_string(),
            header_lines: DEFAULT_HEADER_LINES,
            short_files:  ShortFilePolicy::default(),
            sorted:       false,
        }
    }
}

impl CollectorBuilder {
    // ── Source ────────────────────────────────────────────────────────────

    /// Scan this directory on disk. Defaults to `.`.
    ///
    /// Ignored when a custom [`source()`](Self::source) is set.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Scan a custom source instead of the filesystem.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Collect files with exactly this name (case-sensitive).
    ///
    /// Defaults to `license.txt`. Overridden by [`with_matcher()`](Self::with_matcher).
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set a custom file-name matcher.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Number of lines read from each matched file. Must be at least 1.
    pub fn header_lines(mut self, n: usize) -> Self {
        self.header_lines = n;
        self
    }

    /// How to treat matched files with fewer lines than requested.
    pub fn short_files(mut self, policy: ShortFilePolicy) -> Self {
        self.short_files = policy;
        self
    }

    /// Visit directory entries in name order. Only affects the filesystem
    /// source; off by default.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the collection and return the report.
    ///
    /// # Errors
    ///
    /// Configuration errors (`header_lines(0)`, a root that is not a
    /// directory) are returned before anything is read. During the run, a
    /// matched file that cannot be opened or read fails the whole collection,
    /// as does a short file under [`ShortFilePolicy::Fail`].
    pub fn run(self) -> Result<Report, CollectError> {
        if self.header_lines == 0 {
            return Err(CollectError::InvalidLineCount(self.header_lines));
        }

        let source: Box<dyn Source> = match self.source {
            Some(s) => s,
            None => {
                let root = self.root.unwrap_or_else(|| PathBuf::from("."));
                if !root.is_dir() {
                    return Err(CollectError::InvalidSource(root));
                }
                debug!(root = %root.display(), sorted = self.sorted, "scanning directory");
                Box::new(DirectorySource::new(root).sorted(self.sorted))
            }
        };

        let matcher: Box<dyn Matcher> = match self.matcher {
            Some(m) => m,
            None    => Box::new(ExactNameMatcher(self.file_name)),
        };

        let opts = EngineOptions {
            config: CollectConfig {
                header_lines: self.header_lines,
                short_files:  self.short_files,
            },
            source,
            matcher,
        };

        run(opts)
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Matches file names equal to the given name, byte for byte.
pub struct ExactNameMatcher(pub String);

impl Matcher for ExactNameMatcher {
    fn is_match(&self, file_name: &str) -> bool {
        file_name == self.0
    }
}
