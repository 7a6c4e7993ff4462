use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::Height;

/// Every extra level requires this many more low bits of a draw to be all ones,
/// so each level is reached with probability 1/8 from the one below.
const BITS_PER_LEVEL: u32 = 3;

/// A deterministic generator of node heights.
///
/// The generator is seeded explicitly, so the sequence of heights is a pure function
/// of the seed and the number of calls to [`roll`](HeightGenerator::roll).
#[derive(Debug, Clone)]
pub struct HeightGenerator {
  rng: StdRng,
  seed: u64,
  max_height: u8,
}

impl HeightGenerator {
  /// Creates a generator producing heights in `[0, max_height - 1]`.
  ///
  /// `max_height` is clamped to `1..=MAX_HEIGHT`.
  #[inline]
  pub fn new(seed: u64, max_height: u8) -> Self {
    Self {
      rng: StdRng::seed_from_u64(seed),
      seed,
      max_height: max_height.clamp(1, crate::MAX_HEIGHT as u8),
    }
  }

  /// Returns the seed this generator was created with.
  #[inline]
  pub const fn seed(&self) -> u64 {
    self.seed
  }

  /// Returns the number of levels, heights are always lower than this.
  #[inline]
  pub const fn max_height(&self) -> u8 {
    self.max_height
  }

  /// Draws the height of the next node.
  ///
  /// One 63-bit integer is drawn. The masks of the low 3, 6, 9, ... bits are tested in
  /// order, and the height grows by one for every mask whose bits are all set in the draw,
  /// stopping at the first mask that is not.
  pub fn roll(&mut self) -> Height {
    let roll = self.rng.next_u64() >> 1;
    height_of(roll, self.max_height)
  }
}

#[inline]
fn height_of(roll: u64, max_height: u8) -> Height {
  let mut h = Height::new();
  for level in 1..max_height as u32 {
    let pattern = (1u64 << (level * BITS_PER_LEVEL)) - 1;
    if roll & pattern != pattern {
      break;
    }
    h = h.incr();
  }
  h
}
