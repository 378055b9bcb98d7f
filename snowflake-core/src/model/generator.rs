use crate::error::Error;
use crate::model::raster::rasterize;
use crate::model::segment::synthesize;
use crate::model::sequence::SeededSequence;
use crate::model::style::Style;

/// Generates a snowflake pattern.
///
/// # Parameters
/// - `seed`: Any string, including empty. Drives every random choice.
/// - `size`: Grid side length, at least 1. Odd sizes give a true centre cell;
///   even sizes are accepted and use `size / 2` as the centre.
/// - `style`: Selects the glyph palette.
///
/// # Returns
/// `size` lines of exactly `size` characters joined by `\n`, without a
/// trailing newline. Empty cells are spaces; every other character belongs
/// to `style.palette()`.
///
/// # Errors
/// Returns [`Error::InvalidSize`] if `size` is zero.
///
/// # Notes
/// - Pure function: the same `(seed, size, style)` always yields the same
///   bytes, on any thread and any platform.
/// - Each call owns its own [`SeededSequence`]; no state is shared between
///   calls, so concurrent use needs no locking.
pub fn generate(seed: &str, size: usize, style: Style) -> Result<String, Error> {
	if size == 0 {
		return Err(Error::InvalidSize(size));
	}

	let palette = style.palette();
	let max_radius = i32::try_from(size / 2).map_err(|_| Error::InvalidSize(size))?;

	let mut sequence = SeededSequence::new(seed);
	let wedge = synthesize(&mut sequence, max_radius, palette);
	Ok(rasterize(&mut sequence, &wedge, palette, size))
}

/// Parameters of a single generation.
///
/// Plain value type; callers build it from whatever input they have and
/// either call [`GenerationRequest::generate`] directly or normalize it first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	pub seed: String,
	pub size: usize,
	pub style: Style,
}

impl GenerationRequest {
	pub fn new(seed: impl Into<String>, size: usize, style: Style) -> Self {
		Self { seed: seed.into(), size, style }
	}

	/// Returns a copy with an even `size` bumped to the next odd value.
	///
	/// Odd sizes have a single centre cell, which keeps the six rotated
	/// wedges centred on the grid.
	pub fn normalized(&self) -> Self {
		let size = if self.size % 2 == 0 { self.size + 1 } else { self.size };
		Self { size, ..self.clone() }
	}

	/// Runs [`generate`] with these parameters.
	///
	/// # Errors
	/// Same as [`generate`].
	pub fn generate(&self) -> Result<String, Error> {
		generate(&self.seed, self.size, self.style)
	}
}
