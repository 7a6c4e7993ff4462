use std::{boxed::Box, vec::Vec};

use crate::{Height, NodeId};

/// A node of the skiplist, owned by the [`Arena`].
#[derive(Debug, Clone)]
pub(crate) struct Node {
  pub(crate) id: NodeId,
  pub(crate) key: Box<[u8]>,
  pub(crate) value: Box<[u8]>,
  pub(crate) height: Height,
  /// `tower[lvl]` is the next node at level `lvl`, one link per level in `0..=height`.
  pub(crate) tower: Box<[NodeId]>,
}

impl Node {
  fn sentinel() -> Self {
    Self {
      id: NodeId::SENTINEL,
      key: Box::default(),
      value: Box::default(),
      height: Height::new(),
      tower: Box::default(),
    }
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> NodeId {
    self.tower[level]
  }
}

/// Append-only store of nodes addressed by dense [`NodeId`]s.
///
/// Slot `0` always holds the sentinel. Nodes are never moved out or freed, so an id
/// returned by [`Arena::allocate`] stays valid for the lifetime of the arena.
#[derive(Debug)]
pub(crate) struct Arena {
  nodes: Vec<Node>,
}

impl Arena {
  /// Creates an arena holding only the sentinel, with room for `reserve` more nodes.
  pub(crate) fn new(reserve: usize) -> Self {
    let mut nodes = Vec::with_capacity(reserve + 1);
    nodes.push(Node::sentinel());
    Self { nodes }
  }

  /// Returns the number of nodes, the sentinel excluded.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.nodes.len() - 1
  }

  /// Appends a new node whose links all point at the sentinel.
  ///
  /// ## Panics
  ///
  /// - If the arena already holds `u32::MAX` nodes. Callers must check the capacity first.
  pub(crate) fn allocate(&mut self, key: &[u8], value: &[u8], height: Height) -> NodeId {
    let id = u32::try_from(self.nodes.len())
      .ok()
      .filter(|id| *id != u32::MAX)
      .map(NodeId::new)
      .expect("arena is full, capacity must be checked before allocating");

    self.nodes.push(Node {
      id,
      key: key.into(),
      value: value.into(),
      height,
      tower: std::vec![NodeId::SENTINEL; height.to_usize() + 1].into_boxed_slice(),
    });
    id
  }

  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> &Node {
    &self.nodes[id.index()]
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
    &mut self.nodes[id.index()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sentinel() {
    let arena = Arena::new(0);
    assert_eq!(arena.len(), 0);

    let sentinel = arena.get(NodeId::SENTINEL);
    assert!(sentinel.id.is_sentinel());
    assert!(sentinel.key.is_empty());
    assert!(sentinel.tower.is_empty());
  }

  #[test]
  fn test_allocate() {
    let mut arena = Arena::new(4);
    let h = Height::try_new(2).unwrap();
    let a = arena.allocate(b"a", b"1", Height::new());
    let b = arena.allocate(b"b", b"2", h);
    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 2);
    assert_eq!(arena.len(), 2);

    let nd = arena.get(b);
    assert_eq!(nd.id, b);
    assert_eq!(&*nd.key, b"b");
    assert_eq!(&*nd.value, b"2");
    assert_eq!(nd.height, h);
    assert_eq!(nd.tower.len(), 3);
    assert!(nd.tower.iter().all(NodeId::is_sentinel));

    arena.get_mut(a).tower[0] = b;
    arena.get_mut(b).value = Box::from(&b"3"[..]);
    assert_eq!(arena.get(a).next(0), b);
    assert_eq!(&*arena.get(b).value, b"3");
  }
}
