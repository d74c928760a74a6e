/// Error taxonomy for size parsing and tree scanning.
///
/// Only [`Error::InvalidSizeSpec`], [`Error::RootAccess`] and
/// [`Error::Output`] ever reach the caller of a search. The scanner recovers
/// from the per-entry variants itself.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or unsupported size specification.
    #[error("Cannot recognize this size: {spec} ({reason})")]
    InvalidSizeSpec { spec: String, reason: &'static str },

    /// A symlink whose target does not exist. Never printed.
    #[error("Dangling symlink: {}", .path.display())]
    DanglingSymlink { path: PathBuf },

    /// Any other failure to stat or list a single entry below the root.
    #[error("{source}: '{}'", .path.display())]
    EntryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scan root itself cannot be enumerated.
    #[error("Cannot search folder '{}': {source}", .path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed.
    #[error("Failed to write search output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid_spec(spec: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidSizeSpec {
            spec: spec.into(),
            reason,
        }
    }

    /// `true` for errors the scanner recovers from and keeps walking.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DanglingSymlink { .. } | Self::EntryAccess { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
