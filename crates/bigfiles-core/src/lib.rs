/// bigfiles Core — size parsing, size formatting, and tree scanning.
///
/// This crate contains all search logic with zero CLI dependencies.
/// The `bigfiles` binary is a thin frontend over [`report::search_big_files`].
///
/// # Modules
///
/// - [`model`] — Size specification parsing and human-readable formatting.
/// - [`scanner`] — Lazy, single-threaded directory walk yielding large files.
/// - [`report`] — Console report around a scan (banner, results, completion).
/// - [`error`] — Error taxonomy shared by all of the above.
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::{Error, Result};
pub use model::{format_count, format_readable, parse_size, SizeInput, SizeUnit};
pub use report::{search_big_files, SearchSummary};
pub use scanner::{scan, BigFiles, ScanEntry};
