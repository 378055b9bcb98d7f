use std::io;

use thiserror::Error;

/// Failures surfaced by the core library.
///
/// Generation itself only fails on invalid parameters; the remaining
/// variants come from the snowflake table and its on-disk file.
#[derive(Debug, Error)]
pub enum Error {
	/// Grid side length must be at least 1.
	#[error("invalid size {0}: must be at least 1")]
	InvalidSize(usize),

	/// Style name did not match any known palette.
	#[error("unknown style '{0}': expected one of classic, dense, minimal, mixed")]
	UnknownStyle(String),

	#[error("snowflake table I/O failed: {0}")]
	Io(#[from] io::Error),

	#[error("snowflake table is corrupt: {0}")]
	Codec(#[from] postcard::Error),
}
