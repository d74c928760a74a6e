/// Scanner module — finds files at or above a size threshold.
///
/// The walk is `jwalk`-based but runs serially on the calling thread, and
/// results are produced lazily through the [`BigFiles`] iterator so huge
/// trees are never materialised in memory.
///
/// Per-entry failures are recovered: dangling symlinks are skipped
/// silently, every other entry error is yielded as an `Err` item and the
/// walk continues. Only a failure to enumerate the root ends the walk.
pub mod walk;

pub use walk::BigFiles;

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A regular file whose size met the threshold.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanEntry {
    /// Path as discovered by the walk, rooted at the scan root as given.
    pub path: PathBuf,
    /// Exact size in bytes (symlinks report their target's size).
    pub size: u64,
}

/// Start a scan of `root` for regular files of at least `min_size` bytes.
///
/// The root is probed before the walk starts so an unreadable or missing
/// folder surfaces as [`Error::RootAccess`] instead of an empty result.
/// Each call starts an independent walk.
pub fn scan(root: impl AsRef<Path>, min_size: u128) -> Result<BigFiles> {
    let root = root.as_ref().to_path_buf();

    if let Err(source) = fs::read_dir(&root) {
        return Err(Error::RootAccess { path: root, source });
    }

    info!("Starting scan of {}", root.display());

    // Serial: results stream in discovery order on this thread.
    let walker = jwalk::WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    Ok(BigFiles::new(root, min_size, walker.into_iter()))
}
