use core::iter::FusedIterator;

use super::SkipList;
use crate::{arena::Node, Height, NodeId};

/// An entry of the [`SkipList`], yielded by [`Iter`].
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
  node: &'a Node,
}

impl<'a> EntryRef<'a> {
  #[inline]
  pub(crate) const fn new(node: &'a Node) -> Self {
    Self { node }
  }

  /// Returns the key of the entry.
  #[inline]
  pub fn key(&self) -> &'a [u8] {
    &self.node.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub fn value(&self) -> &'a [u8] {
    &self.node.value
  }

  /// Returns the identifier of the node holding this entry.
  #[inline]
  pub const fn id(&self) -> NodeId {
    self.node.id
  }

  /// Returns the height of the node holding this entry.
  #[inline]
  pub const fn height(&self) -> Height {
    self.node.height
  }
}

/// A forward iterator over the entries of a [`SkipList`], in ascending key order.
///
/// The iterator walks the level 0 chain once, a new iterator is needed to start over.
pub struct Iter<'a, C> {
  list: &'a SkipList<C>,
  curr: NodeId,
  remaining: usize,
}

impl<C> core::fmt::Debug for Iter<'_, C> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Iter")
      .field("curr", &self.curr)
      .field("remaining", &self.remaining)
      .finish()
  }
}

impl<C> Clone for Iter<'_, C> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      list: self.list,
      curr: self.curr,
      remaining: self.remaining,
    }
  }
}

impl<'a, C> Iter<'a, C> {
  #[inline]
  pub(crate) fn new(list: &'a SkipList<C>) -> Self {
    Self {
      list,
      curr: list.first_id(),
      remaining: list.len(),
    }
  }

  /// Returns the number of entries of the skiplist being iterated.
  #[inline]
  pub fn count_all(&self) -> usize {
    self.list.len()
  }
}

impl<'a, C> Iterator for Iter<'a, C> {
  type Item = EntryRef<'a>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.curr.is_sentinel() {
      return None;
    }

    let node = self.list.node(self.curr);
    self.curr = node.next(0);
    self.remaining -= 1;
    Some(EntryRef::new(node))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<C> ExactSizeIterator for Iter<'_, C> {}

impl<C> FusedIterator for Iter<'_, C> {}
