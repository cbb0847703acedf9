//! # license-head
//!
//! Find every `license.txt` under a directory tree and report the first few
//! lines of each, tagged with the name of the directory that holds it.
//!
//! The tree is walked bottom-up: every descendant directory is visited before
//! its parent, so a nested license is reported before the one above it. The
//! whole report is built in memory and returned as a value; nothing is
//! written until the caller decides to.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let report = license_head::collect().run()?;
//! println!("{}", report.render());
//! # Ok::<(), license_head::CollectError>(())
//! ```
//!
//! The rendered text is one block per match:
//!
//! ```text
//! Name: <parent-directory-name>
//! <line 1>
//! ...
//! <line 5>
//! ```
//!
//! # Custom Sources
//!
//! Implement [`Source`] to collect from something other than the local
//! filesystem, or use the bundled [`MemorySource`]:
//!
//! ```rust
//! use license_head::MemorySource;
//!
//! let tree = MemorySource::new()
//!     .dir("proj/sub", [("license.txt", "L1\nL2\nL3\nL4\nL5\nL6\n")])
//!     .dir("proj", [("license.txt", "L1\nL2\nL3\nL4\nL5\n")]);
//!
//! let report = license_head::collect().source(tree).run().unwrap();
//! assert!(report.render().starts_with("Name: sub\nL1\n"));
//! ```

#![forbid(unsafe_code)]

pub mod engine;

mod builder;
mod entry;
mod error;
mod memory;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{CollectorBuilder, ExactNameMatcher, DEFAULT_FILE_NAME, DEFAULT_HEADER_LINES};
pub use engine::{read_header, DirectorySource, ShortFilePolicy};
pub use entry::TraversalEntry;
pub use error::CollectError;
pub use memory::MemorySource;
pub use results::{MatchRecord, Report, ScanStats};
pub use traits::{Matcher, Source};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`CollectorBuilder`] with the default settings: scan `.`,
/// match `license.txt` exactly, read 5 lines, fail on short files.
pub fn collect() -> CollectorBuilder {
    CollectorBuilder::default()
}
