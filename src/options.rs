use crate::{Error, DEFAULT_MAX_HEIGHT, DEFAULT_SEED, MAX_COUNT, MAX_HEIGHT};

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  seed: u64,
  max_height: u8,
  capacity: u32,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      seed: DEFAULT_SEED,
      max_height: DEFAULT_MAX_HEIGHT,
      capacity: MAX_COUNT,
    }
  }

  /// Set the seed of the height generator.
  ///
  /// Two skiplists built with the same seed and fed the same sequence of `put`s end up
  /// with identical node heights and identical chains.
  ///
  /// The default seed is `0`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use arena_skl::Options;
  ///
  /// let opts = Options::new().with_seed(42);
  /// assert_eq!(opts.seed(), 42);
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  /// Set the maximum number of levels of the skiplist.
  ///
  /// Must be in `1..=MAX_HEIGHT`, otherwise constructing the skiplist fails
  /// with [`Error::InvalidMaxHeight`].
  ///
  /// The default max height is `5`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use arena_skl::Options;
  ///
  /// let opts = Options::new().with_max_height(8);
  /// assert_eq!(opts.max_height(), 8);
  /// ```
  #[inline]
  pub const fn with_max_height(mut self, max_height: u8) -> Self {
    self.max_height = max_height;
    self
  }

  /// Set the maximum number of entries the skiplist can hold.
  ///
  /// Values larger than [`MAX_COUNT`](crate::MAX_COUNT) are clamped.
  ///
  /// The default capacity is [`MAX_COUNT`](crate::MAX_COUNT).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use arena_skl::{Options, MAX_COUNT};
  ///
  /// let opts = Options::new().with_capacity(1000);
  /// assert_eq!(opts.capacity(), 1000);
  ///
  /// let opts = Options::new().with_capacity(u32::MAX);
  /// assert_eq!(opts.capacity(), MAX_COUNT);
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: u32) -> Self {
    self.capacity = if capacity > MAX_COUNT {
      MAX_COUNT
    } else {
      capacity
    };
    self
  }

  /// Returns the seed of the height generator.
  #[inline]
  pub const fn seed(&self) -> u64 {
    self.seed
  }

  /// Returns the maximum number of levels.
  #[inline]
  pub const fn max_height(&self) -> u8 {
    self.max_height
  }

  /// Returns the maximum number of entries.
  #[inline]
  pub const fn capacity(&self) -> u32 {
    self.capacity
  }

  pub(crate) const fn validate(&self) -> Result<(), Error> {
    if self.max_height == 0 || self.max_height as usize > MAX_HEIGHT {
      return Err(Error::InvalidMaxHeight(self.max_height));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validate() {
    assert!(Options::new().validate().is_ok());
    assert!(Options::new().with_max_height(1).validate().is_ok());
    assert!(Options::new()
      .with_max_height(MAX_HEIGHT as u8)
      .validate()
      .is_ok());

    assert_eq!(
      Options::new().with_max_height(0).validate(),
      Err(Error::InvalidMaxHeight(0))
    );
    assert_eq!(
      Options::new().with_max_height(22).validate(),
      Err(Error::InvalidMaxHeight(22))
    );
  }
}
