#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![allow(clippy::type_complexity, rustdoc::bare_urls)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::cmp;

mod arena;

mod error;
pub use error::Error;

mod height;
pub use height::HeightGenerator;

/// A map implementation based on skiplist
pub mod list;
pub use list::{EntryRef, Iter, SkipList};

mod options;
pub use options::Options;

mod types;
pub use types::{Height, NodeId};

#[cfg(test)]
mod proptests;

/// The hard upper bound of the number of levels a skiplist can be configured with.
///
/// Each extra level consumes three more bits of a 63-bit draw, so a draw can
/// describe at most 21 levels.
pub const MAX_HEIGHT: usize = 21;

/// The default number of levels of a skiplist.
pub const DEFAULT_MAX_HEIGHT: u8 = 5;

/// The maximum number of entries a skiplist can hold, `2^32 - 2`.
///
/// Node id `0` is reserved for the sentinel, and the last id is never handed out.
pub const MAX_COUNT: u32 = u32::MAX - 1;

/// The seed used by the height generator when no seed is configured.
pub const DEFAULT_SEED: u64 = 0;

/// A total order over keys.
///
/// The comparator is never called with the sentinel, which sorts after every key.
/// Any `Fn(&[u8], &[u8]) -> Ordering` closure is a comparator.
pub trait Comparator {
  /// Compares two byte slices.
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering;
}

impl<F> Comparator for F
where
  F: Fn(&[u8], &[u8]) -> cmp::Ordering,
{
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    self(a, b)
  }
}

/// Ascend is a comparator that compares byte slices in ascending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascend;

impl Comparator for Ascend {
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    a.cmp(b)
  }
}

/// Descend is a comparator that compares byte slices in descending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descend;

impl Comparator for Descend {
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    b.cmp(a)
  }
}
