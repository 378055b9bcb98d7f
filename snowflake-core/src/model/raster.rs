use std::f64::consts::PI;

use super::segment::Point;
use super::sequence::SeededSequence;

/// Number of rotated copies of the wedge.
const ROTATIONS: u32 = 6;

/// Projects a wedge onto a `size × size` grid with six-fold rotation.
///
/// Each point is rotated by `r * 60°` for `r` in `0..6`, rounded half to
/// even, then shifted to the grid centre. Points falling outside the grid are
/// dropped, and later rotations overwrite earlier ones at the same cell. The
/// centre cell is finally set from one more draw of `sequence`, so it is never
/// blank.
///
/// Returns the rows joined with `\n`, without a trailing newline.
pub(crate) fn rasterize(sequence: &mut SeededSequence, wedge: &[Point], palette: &[char], size: usize) -> String {
	let mut grid = vec![vec![' '; size]; size];
	let center = size / 2;

	for r in 0..ROTATIONS {
		let angle = f64::from(r) * PI / 3.0;
		let (sin, cos) = angle.sin_cos();

		for point in wedge {
			let x = f64::from(point.x);
			let y = f64::from(point.y);
			let gx = (x * cos - y * sin).round_ties_even() as i64 + center as i64;
			let gy = (x * sin + y * cos).round_ties_even() as i64 + center as i64;

			if let (Some(col), Some(row)) = (cell(gx, size), cell(gy, size)) {
				grid[row][col] = point.glyph;
			}
		}
	}

	grid[center][center] = palette[sequence.pick(palette.len())];

	grid.into_iter()
		.map(|row| row.into_iter().collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Converts a grid coordinate to an index if it lies in `0..size`.
fn cell(coordinate: i64, size: usize) -> Option<usize> {
	usize::try_from(coordinate).ok().filter(|&index| index < size)
}
