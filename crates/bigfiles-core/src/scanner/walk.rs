/// The lazy result iterator behind [`crate::scanner::scan`].
///
/// Directories are descended by `jwalk`; everything else is stat'ed with
/// symlinks followed, the same way a plain `metadata` call would see it.
/// Symlinks to directories are therefore neither descended nor reported.
use crate::error::{Error, Result};
use crate::scanner::ScanEntry;
use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

type WalkItem = std::result::Result<jwalk::DirEntry<((), ())>, jwalk::Error>;

/// Single-pass iterator over files at or above the threshold.
///
/// Yields `Err` for recoverable entry errors and keeps going. Once the walk
/// is exhausted, or the root itself fails, it only returns `None`.
pub struct BigFiles {
    root: PathBuf,
    min_size: u128,
    walker: Box<dyn Iterator<Item = WalkItem>>,
    started: Instant,
    matched: u64,
    errors: u64,
    done: bool,
}

impl BigFiles {
    pub(crate) fn new(
        root: PathBuf,
        min_size: u128,
        walker: impl Iterator<Item = WalkItem> + 'static,
    ) -> Self {
        Self {
            root,
            min_size,
            walker: Box::new(walker),
            started: Instant::now(),
            matched: 0,
            errors: 0,
            done: false,
        }
    }

    /// Root folder of this scan.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Threshold in bytes.
    pub fn min_size(&self) -> u128 {
        self.min_size
    }

    fn finish(&mut self) {
        self.done = true;
        info!(
            "Scan of {} complete: {} files matched, {} errors in {:?}",
            self.root.display(),
            self.matched,
            self.errors,
            self.started.elapsed()
        );
    }

    /// Map a walk error to the root or entry variant.
    ///
    /// `jwalk` reports an unreadable directory on the directory's own entry
    /// (`read_children_error`), so `at_root` comes from that entry's depth.
    fn walk_error(&mut self, err: jwalk::Error, fallback: &Path, at_root: bool) -> Error {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));

        self.errors += 1;
        if at_root {
            self.finish();
            Error::RootAccess { path, source }
        } else {
            debug!("Walk error: {source}: {}", path.display());
            Error::EntryAccess { path, source }
        }
    }
}

impl Iterator for BigFiles {
    type Item = Result<ScanEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let mut entry = match self.walker.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    let root = self.root.clone();
                    let at_root = err.path() == Some(root.as_path());
                    return Some(Err(self.walk_error(err, &root, at_root)));
                }
                None => {
                    self.finish();
                    return None;
                }
            };

            if entry.file_type().is_dir() {
                if let Some(err) = entry.read_children_error.take() {
                    let dir = entry.path();
                    return Some(Err(self.walk_error(err, &dir, entry.depth == 0)));
                }
                continue;
            }

            let path = entry.path();
            match file_size(&path) {
                Ok(Some(size)) if u128::from(size) >= self.min_size => {
                    self.matched += 1;
                    return Some(Ok(ScanEntry { path, size }));
                }
                Ok(_) => continue,
                Err(Error::DanglingSymlink { path }) => {
                    debug!("Skipping dangling symlink {}", path.display());
                    continue;
                }
                Err(err) => {
                    self.errors += 1;
                    debug!("Entry error: {err}");
                    return Some(Err(err));
                }
            }
        }
    }
}

impl FusedIterator for BigFiles {}

/// Size of the regular file at `path`, following symlinks.
///
/// `Ok(None)` when the target exists but is not a regular file.
pub(crate) fn file_size(path: &Path) -> Result<Option<u64>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(source) => Err(classify_stat_error(path, source)),
    }
}

/// Only a not-found error on a path that is itself a symlink is a dangling
/// link. A file that vanished between listing and stat is an entry error.
pub(crate) fn classify_stat_error(path: &Path, source: io::Error) -> Error {
    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);

    if source.kind() == io::ErrorKind::NotFound && is_symlink {
        Error::DanglingSymlink {
            path: path.to_path_buf(),
        }
    } else {
        Error::EntryAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
