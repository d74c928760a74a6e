/// Size model for bigfiles.
///
/// Parsing turns a user-supplied threshold into an exact byte count;
/// formatting turns byte counts back into lossy, display-only strings.
pub mod parse;
pub mod size;

pub use parse::{parse_size, SizeInput, SizeUnit};
pub use size::{format_count, format_readable};
