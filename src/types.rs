use arbitrary_int::u5;

/// The identifier of a node in the arena of a [`SkipList`](crate::SkipList).
///
/// Identifiers are dense, assigned in creation order and never reused. Identifier `0`
/// is the sentinel which terminates every chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
  /// The sentinel node identifier.
  pub const SENTINEL: Self = Self(0);

  #[inline]
  pub(crate) const fn new(id: u32) -> Self {
    Self(id)
  }

  /// Returns `true` if this identifier refers to the sentinel node.
  #[inline]
  pub const fn is_sentinel(&self) -> bool {
    self.0 == 0
  }

  /// Returns the identifier as a `u32`.
  #[inline]
  pub const fn get(&self) -> u32 {
    self.0
  }

  #[inline]
  pub(crate) const fn index(&self) -> usize {
    self.0 as usize
  }
}

impl core::fmt::Display for NodeId {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Height of a node, the number of levels a node participates in *beyond* level 0.
/// It is a 5-bit unsigned integer.
///
/// A node of height `h` is linked into the chains of levels `0..=h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Height(u5);

impl Height {
  /// The largest height a node can have, `MAX_HEIGHT - 1`.
  pub const MAX: Self = Self(u5::new((crate::MAX_HEIGHT - 1) as u8));

  /// Returns a height of zero, a node only linked into level 0.
  #[inline]
  pub const fn new() -> Self {
    Self(u5::new(0))
  }

  /// Returns a height of `h`, or `None` if `h` is larger than [`Height::MAX`].
  #[inline]
  pub const fn try_new(h: u8) -> Option<Self> {
    if h as usize >= crate::MAX_HEIGHT {
      return None;
    }
    Some(Self(u5::new(h)))
  }

  /// Returns the height as a `u8`.
  #[inline]
  pub const fn to_u8(self) -> u8 {
    self.0.value()
  }

  /// Returns the height as a `usize`.
  #[inline]
  pub const fn to_usize(self) -> usize {
    self.0.value() as usize
  }

  /// Returns the next height, saturating at [`Height::MAX`].
  #[inline]
  pub(crate) const fn incr(self) -> Self {
    if self.0.value() >= Self::MAX.0.value() {
      self
    } else {
      Self(u5::new(self.0.value() + 1))
    }
  }
}

impl From<Height> for usize {
  #[inline]
  fn from(h: Height) -> Self {
    h.to_usize()
  }
}

impl From<Height> for u8 {
  #[inline]
  fn from(h: Height) -> Self {
    h.to_u8()
  }
}

impl Default for Height {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl core::hash::Hash for Height {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.value().hash(state)
  }
}

impl PartialEq<u8> for Height {
  #[inline]
  fn eq(&self, other: &u8) -> bool {
    self.0.value().eq(other)
  }
}

impl PartialOrd<u8> for Height {
  #[inline]
  fn partial_cmp(&self, other: &u8) -> Option<core::cmp::Ordering> {
    self.0.value().partial_cmp(other)
  }
}

impl core::fmt::Display for Height {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.0.value())
  }
}
