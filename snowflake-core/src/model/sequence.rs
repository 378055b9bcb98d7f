/// Park-Miller modulus, the Mersenne prime 2^31 - 1.
const MODULUS: u64 = 2_147_483_647;

/// Park-Miller "minimal standard" multiplier.
const MULTIPLIER: u64 = 16_807;

/// State used when the seed hash lands on zero, which the recurrence would
/// otherwise never leave.
const FALLBACK_STATE: u64 = 1;

/// Deterministic pseudo-random stream derived from a string seed.
///
/// The seed is folded into a 32-bit hash (`hash * 31 + unit` over its UTF-16
/// code units, wrapping) whose absolute value becomes the state of a
/// Lehmer generator. Each call to [`SeededSequence::next_value`] advances the
/// state and maps it into `[0, 1)`.
///
/// # Invariants
/// - `state` is always in `1..MODULUS`
/// - Two sequences built from the same seed yield the same values forever
#[derive(Clone, Debug)]
pub struct SeededSequence {
	state: u64,
}

impl SeededSequence {
	/// Builds a sequence from a seed.
	///
	/// Empty seeds, and any seed whose hash is a multiple of the modulus,
	/// start from a fixed fallback state instead of the degenerate zero.
	pub fn new(seed: &str) -> Self {
		Self::from_hash(hash_seed(seed))
	}

	/// Builds a sequence straight from a seed hash.
	///
	/// `i32::MIN` has no positive counterpart; its magnitude 2^31 reduces to 1.
	pub(crate) fn from_hash(hash: i32) -> Self {
		let state = u64::from(hash.unsigned_abs()) % MODULUS;
		Self {
			state: if state == 0 { FALLBACK_STATE } else { state },
		}
	}

	/// Advances the generator and returns a value in `[0, 1)`.
	pub fn next_value(&mut self) -> f64 {
		self.state = self.state * MULTIPLIER % MODULUS;
		(self.state - 1) as f64 / (MODULUS - 1) as f64
	}

	/// Draws an index in `0..len` as `floor(next * len)`.
	///
	/// `len` must be non-zero.
	pub fn pick(&mut self, len: usize) -> usize {
		let index = (self.next_value() * len as f64).floor() as usize;
		index.min(len - 1)
	}
}

impl Iterator for SeededSequence {
	type Item = f64;

	fn next(&mut self) -> Option<f64> {
		Some(self.next_value())
	}
}

/// 32-bit string hash: `hash = (hash << 5) - hash + unit`, wrapping.
pub(crate) fn hash_seed(seed: &str) -> i32 {
	seed.encode_utf16().fold(0i32, |hash, unit| {
		(hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
	})
}
