/// Error type for the [`SkipList`](crate::SkipList).
///
/// Both `put` errors are contract violations of the caller: the list is left
/// untouched, and retrying the same call will fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that an empty key was passed to `put`. The empty key is reserved
  /// for the sentinel node.
  EmptyKey,

  /// Indicates that the skiplist already holds as many entries as its capacity allows.
  /// Callers are expected to check [`SkipList::is_full`](crate::SkipList::is_full) first.
  Full {
    /// The configured capacity of the skiplist.
    capacity: u32,
  },

  /// Indicates that the configured maximum height is zero or larger than [`MAX_HEIGHT`](crate::MAX_HEIGHT).
  InvalidMaxHeight(u8),
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::EmptyKey => write!(f, "key must be non-empty"),
      Self::Full { capacity } => write!(f, "skiplist has no capacity (capacity {capacity})"),
      Self::InvalidMaxHeight(h) => write!(
        f,
        "max height {h} is out of range, must be in 1..={}",
        crate::MAX_HEIGHT
      ),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
