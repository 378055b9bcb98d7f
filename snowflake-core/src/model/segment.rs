use super::sequence::SeededSequence;

/// A glyph placed at an integer offset from the grid centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Point {
	pub x: i32,
	pub y: i32,
	pub glyph: char,
}

/// Probability threshold above which a main branch grows at a given radius.
const MAIN_BRANCH_THRESHOLD: f64 = 0.3;

/// Probability threshold above which a side branch sprouts from a main one.
const SIDE_BRANCH_THRESHOLD: f64 = 0.6;

/// Synthesizes one 60° wedge of the snowflake.
///
/// Walks outwards along the y axis from radius 1 to `max_radius`. At each
/// step a main branch glyph may be placed on the axis, and past radius 2 a
/// side branch may sprout one column off the axis, slightly closer to the
/// centre.
///
/// The order of draws from `sequence` is part of the output contract:
/// existence, glyph, side existence, side y, side x, side glyph. The side
/// glyph is drawn even when the branch is then discarded by the
/// Manhattan-distance bound.
pub(crate) fn synthesize(sequence: &mut SeededSequence, max_radius: i32, palette: &[char]) -> Vec<Point> {
	let mut points = Vec::new();

	for y in 1..=max_radius {
		if sequence.next_value() <= MAIN_BRANCH_THRESHOLD {
			continue;
		}
		points.push(Point { x: 0, y, glyph: palette[sequence.pick(palette.len())] });

		if y > 2 && sequence.next_value() > SIDE_BRANCH_THRESHOLD {
			let side_y = y - sequence.pick(2) as i32 - 1;
			let side_x: i32 = if sequence.next_value() > 0.5 { 1 } else { -1 };
			let glyph = palette[sequence.pick(palette.len())];

			if side_x.abs() + side_y.abs() <= max_radius {
				points.push(Point { x: side_x, y: side_y, glyph });
			}
		}
	}

	points
}
