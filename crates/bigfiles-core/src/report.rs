/// Console report around a scan.
///
/// Writes the banner, one line per qualifying file, one line per recovered
/// entry error, and the completion line. Output order follows the walk;
/// consumers compare result lines as a set.
use crate::error::{Error, Result};
use crate::model::{format_count, format_readable};
use crate::scanner::{self, ScanEntry};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Printed after the last result, whether or not errors occurred.
pub const COMPLETION_LINE: &str = "Search is done.";

/// Totals of a finished search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Files at or above the threshold.
    pub matched: u64,
    /// Sum of their sizes.
    pub matched_bytes: u128,
    /// Entry errors that were reported and skipped.
    pub error_count: u64,
    pub duration: Duration,
}

/// `"<readable> (<exact> bytes)"`, shared by the banner and result lines.
pub fn size_info(bytes: u128) -> String {
    format!("{} ({} bytes)", format_readable(bytes), format_count(bytes))
}

/// The line printed before any result.
pub fn banner(root: &Path, min_size: u128) -> String {
    format!(
        "Searching files equal to or larger than {} in folder: \"{}\" ...",
        size_info(min_size),
        root.display()
    )
}

/// The line printed for one qualifying file.
pub fn result_line(entry: &ScanEntry) -> String {
    format!(
        "{} {}",
        size_info(u128::from(entry.size)),
        entry.path.display()
    )
}

/// Search `root` for files of at least `min_size` bytes and report to `out`.
///
/// Entry errors are written inline and counted. A root failure is written,
/// followed by the completion line, and then returned.
pub fn search_big_files<W: Write>(
    root: &Path,
    min_size: u128,
    out: &mut W,
) -> Result<SearchSummary> {
    let start = Instant::now();
    writeln!(out, "{}", banner(root, min_size))?;

    let results = match scanner::scan(root, min_size) {
        Ok(results) => results,
        Err(err) => return finish_with_error(out, err),
    };

    let mut summary = SearchSummary::default();
    for result in results {
        match result {
            Ok(entry) => {
                summary.matched += 1;
                summary.matched_bytes += u128::from(entry.size);
                writeln!(out, "{}", result_line(&entry))?;
            }
            Err(err @ Error::RootAccess { .. }) => return finish_with_error(out, err),
            Err(err) => {
                summary.error_count += 1;
                writeln!(out, "{err}")?;
            }
        }
    }

    writeln!(out, "{COMPLETION_LINE}")?;
    out.flush()?;

    summary.duration = start.elapsed();
    info!(
        "Search done: {} files, {} bytes, {} errors in {:?}",
        summary.matched, summary.matched_bytes, summary.error_count, summary.duration
    );
    Ok(summary)
}

fn finish_with_error<W: Write>(out: &mut W, err: Error) -> Result<SearchSummary> {
    writeln!(out, "{err}")?;
    writeln!(out, "{COMPLETION_LINE}")?;
    out.flush()?;
    Err(err)
}
