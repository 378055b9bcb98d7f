use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Glyph palette selector.
///
/// Each style owns a fixed, ordered palette. The order matters: glyphs are
/// picked by index from the seeded sequence, so reordering a palette changes
/// every pattern generated with that style.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
	Classic,
	Dense,
	Minimal,
	Mixed,
}

const CLASSIC: &[char] = &['*', '+', 'x', '.'];
const DENSE: &[char] = &['#', '@', '%', '&'];
const MINIMAL: &[char] = &['.', ':', '\''];
const MIXED: &[char] = &['*', '+', 'x', '.', '#', '@', 'o', '~'];

impl Style {
	/// Every style, in declaration order.
	pub const ALL: [Style; 4] = [Style::Classic, Style::Dense, Style::Minimal, Style::Mixed];

	/// Returns the ordered glyph palette for this style. Never empty.
	pub fn palette(self) -> &'static [char] {
		match self {
			Style::Classic => CLASSIC,
			Style::Dense => DENSE,
			Style::Minimal => MINIMAL,
			Style::Mixed => MIXED,
		}
	}

	/// Lowercase name, as accepted by `FromStr` and emitted by serde.
	pub fn name(self) -> &'static str {
		match self {
			Style::Classic => "classic",
			Style::Dense => "dense",
			Style::Minimal => "minimal",
			Style::Mixed => "mixed",
		}
	}

	/// Picks a style uniformly at random.
	///
	/// Only used to default missing request parameters; generation itself
	/// never touches the thread RNG.
	pub fn random() -> Self {
		Self::ALL[rand::rng().random_range(0..Self::ALL.len())]
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Style {
	type Err = Error;

	/// Case-insensitive, surrounding whitespace ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim();
		Self::ALL
			.into_iter()
			.find(|style| style.name().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| Error::UnknownStyle(s.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("classic", Style::Classic)]
	#[case("DENSE", Style::Dense)]
	#[case(" Minimal ", Style::Minimal)]
	#[case("mixed", Style::Mixed)]
	fn parses_names(#[case] input: &str, #[case] expected: Style) {
		assert_eq!(input.parse::<Style>().unwrap(), expected);
	}

	#[test]
	fn rejects_unknown_names() {
		let err = "sparkly".parse::<Style>().unwrap_err();
		assert!(matches!(err, Error::UnknownStyle(ref name) if name == "sparkly"));
	}

	#[test]
	fn display_round_trips_through_from_str() {
		for style in Style::ALL {
			assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
		}
	}

	#[test]
	fn dense_and_minimal_share_no_glyph() {
		let dense = Style::Dense.palette();
		assert!(Style::Minimal.palette().iter().all(|c| !dense.contains(c)));
	}

	#[test]
	fn palettes_never_contain_space() {
		for style in Style::ALL {
			assert!(!style.palette().is_empty());
			assert!(!style.palette().contains(&' '));
		}
	}

	#[test]
	fn survives_postcard_encoding() {
		let bytes = postcard::to_stdvec(&Style::Mixed).unwrap();
		let back: Style = postcard::from_bytes(&bytes).unwrap();
		assert_eq!(back, Style::Mixed);
	}
}
