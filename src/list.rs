use core::cmp;

use std::vec::Vec;

use crate::{
  arena::{Arena, Node},
  Ascend, Comparator, Error, Height, HeightGenerator, NodeId, Options, MAX_HEIGHT,
};

mod iterator;
pub use iterator::{EntryRef, Iter};


/// The number of nodes the arena reserves room for up front.
const INITIAL_RESERVE: usize = 128;

/// One node id per level.
type Links = [NodeId; MAX_HEIGHT];

/// The outcome of a descent for a key.
enum Search {
  /// A node with an equal key exists.
  Found(NodeId),
  /// No node with an equal key exists. Holds the predecessor of the key on every level,
  /// [`NodeId::SENTINEL`] standing for the head of the chain.
  NotFound(Links),
}

/// An ordered map of byte keys to byte values, implemented as a skiplist whose nodes
/// live in an append-only arena and link to each other by [`NodeId`].
///
/// The skiplist has a single writer: `put` takes `&mut self`. Entries cannot be removed,
/// writing an existing key replaces its value in place.
///
/// ## Example
///
/// ```rust
/// use arena_skl::SkipList;
///
/// let mut l = SkipList::new();
/// l.put(b"b", b"2").unwrap();
/// l.put(b"a", b"1").unwrap();
///
/// assert_eq!(l.get(b"a"), Some(&b"1"[..]));
/// assert_eq!(l.len(), 2);
///
/// let keys: Vec<&[u8]> = l.iter().map(|ent| ent.key()).collect();
/// assert_eq!(keys, [&b"a"[..], &b"b"[..]]);
/// ```
#[derive(Debug)]
pub struct SkipList<C = Ascend> {
  arena: Arena,
  /// First node of every level, the sentinel when the level is empty.
  head: Links,
  heights: HeightGenerator,
  opts: Options,
  cmp: C,
}

impl Default for SkipList {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl SkipList {
  /// Creates an empty skiplist ordering keys byte-lexicographically, with the default [`Options`].
  #[inline]
  pub fn new() -> Self {
    Self::with_comparator(Ascend)
  }

  /// Creates an empty skiplist ordering keys byte-lexicographically.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::InvalidMaxHeight` if the max height of `opts` is out of range.
  #[inline]
  pub fn with_options(opts: Options) -> Result<Self, Error> {
    Self::with_options_and_comparator(opts, Ascend)
  }
}

impl<C: Comparator> SkipList<C> {
  /// Like [`SkipList::new`], but with a custom [`Comparator`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use arena_skl::SkipList;
  ///
  /// let mut l = SkipList::with_comparator(|a: &[u8], b: &[u8]| b.cmp(a));
  /// l.put(b"a", b"1").unwrap();
  /// l.put(b"b", b"2").unwrap();
  ///
  /// assert_eq!(l.first().unwrap().key(), b"b");
  /// ```
  #[inline]
  pub fn with_comparator(cmp: C) -> Self {
    let opts = Options::new();
    Self::construct(opts, cmp)
  }

  /// Like [`SkipList::with_options`], but with a custom [`Comparator`].
  ///
  /// ## Errors
  ///
  /// - Returns `Error::InvalidMaxHeight` if the max height of `opts` is out of range.
  pub fn with_options_and_comparator(opts: Options, cmp: C) -> Result<Self, Error> {
    opts.validate()?;
    Ok(Self::construct(opts, cmp))
  }

  fn construct(opts: Options, cmp: C) -> Self {
    Self {
      arena: Arena::new(INITIAL_RESERVE.min(opts.capacity as usize)),
      head: [NodeId::SENTINEL; MAX_HEIGHT],
      heights: HeightGenerator::new(opts.seed, opts.max_height),
      opts,
      cmp,
    }
  }
}

// --------------------------------Public Methods--------------------------------
impl<C> SkipList<C> {
  /// Returns the number of entries in the skiplist.
  #[inline]
  pub fn len(&self) -> usize {
    self.arena.len()
  }

  /// Returns true if the skiplist is empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns `true` if the skiplist holds as many entries as its capacity allows,
  /// any `put` of a new key would fail with [`Error::Full`].
  #[inline]
  pub fn is_full(&self) -> bool {
    self.len() >= self.capacity()
  }

  /// Returns the maximum number of entries the skiplist can hold.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.opts.capacity as usize
  }

  /// Returns the number of levels of the skiplist.
  #[inline]
  pub const fn max_height(&self) -> u8 {
    self.opts.max_height
  }

  /// Returns the seed of the height generator.
  #[inline]
  pub const fn seed(&self) -> u64 {
    self.opts.seed
  }

  /// Returns the options the skiplist was created with.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator used to compare keys.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Returns a new iterator over the entries in ascending key order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, C> {
    Iter::new(self)
  }

  /// Calls `f` on every key-value pair, in ascending key order.
  pub fn iter_all(&self, mut f: impl FnMut(&[u8], &[u8])) {
    for ent in self.iter() {
      f(ent.key(), ent.value());
    }
  }

  /// Returns the entry with the smallest key.
  #[inline]
  pub fn first(&self) -> Option<EntryRef<'_>> {
    self.iter().next()
  }

  #[inline]
  fn highest(&self) -> usize {
    self.opts.max_height as usize - 1
  }

  /// Returns the node after `prev` on `level`, `prev` being the sentinel means the head.
  #[inline]
  fn next_of(&self, prev: NodeId, level: usize) -> NodeId {
    if prev.is_sentinel() {
      self.head[level]
    } else {
      self.arena.get(prev).next(level)
    }
  }

  #[inline]
  pub(crate) fn node(&self, id: NodeId) -> &Node {
    self.arena.get(id)
  }

  #[inline]
  pub(crate) fn first_id(&self) -> NodeId {
    self.head[0]
  }
}

impl<C: Comparator> SkipList<C> {
  /// Returns `true` if the key exists in the skiplist.
  #[inline]
  pub fn contains_key(&self, key: &[u8]) -> bool {
    self.get(key).is_some()
  }

  /// Returns the value associated with the given key, if it exists.
  pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
    match self.search(key) {
      Search::Found(id) => Some(&self.arena.get(id).value[..]),
      Search::NotFound(_) => None,
    }
  }

  /// Inserts the key-value pair, or replaces the value if the key already exists.
  ///
  /// As a low-level crate, users are expected to handle the error cases themselves.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::EmptyKey`, if the key is empty.
  /// - Returns `Error::Full`, if the skiplist is full.
  ///
  /// The skiplist is left untouched on error.
  #[inline]
  pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), Error> {
    self.insert(key, value).map(|_| ())
  }

  /// Like [`SkipList::put`], but returns the old value if the key already existed.
  ///
  /// ## Errors
  ///
  /// - Returns `Error::EmptyKey`, if the key is empty.
  /// - Returns `Error::Full`, if the skiplist is full.
  pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<Option<Vec<u8>>, Error> {
    if key.is_empty() {
      #[cfg(feature = "tracing")]
      tracing::warn!("rejected put with an empty key");
      return Err(Error::EmptyKey);
    }

    if self.is_full() {
      #[cfg(feature = "tracing")]
      tracing::warn!(capacity = self.opts.capacity, "rejected put, skiplist is full");
      return Err(Error::Full {
        capacity: self.opts.capacity,
      });
    }

    let breadcrumbs = match self.search(key) {
      Search::Found(id) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(id = id.get(), "update in place");

        let node = self.arena.get_mut(id);
        let old = core::mem::replace(&mut node.value, value.into());
        return Ok(Some(old.into_vec()));
      }
      Search::NotFound(breadcrumbs) => breadcrumbs,
    };

    let height = self.heights.roll();
    let id = self.arena.allocate(key, value, height);
    self.link(id, height, &breadcrumbs);

    #[cfg(feature = "tracing")]
    tracing::trace!(id = id.get(), height = height.to_u8(), "allocated node");

    Ok(None)
  }

  /// Links the freshly allocated node `id` into the chains of levels `0..=height`.
  fn link(&mut self, id: NodeId, height: Height, breadcrumbs: &Links) {
    let mut tower = [NodeId::SENTINEL; MAX_HEIGHT];

    for level in 0..=height.to_usize() {
      let head = self.head[level];
      // the new key is smaller than the current head of this level
      if self.compare_node(id, head).is_lt() {
        tower[level] = head;
        self.head[level] = id;
        continue;
      }

      // otherwise, splice in after the breadcrumb
      let prev = breadcrumbs[level];
      let prev = self.arena.get_mut(prev);
      tower[level] = prev.tower[level];
      prev.tower[level] = id;
    }

    let node = self.arena.get_mut(id);
    let len = node.tower.len();
    node.tower.copy_from_slice(&tower[..len]);
  }

  /// Descends from the highest level to level 0, recording the predecessor of `key`
  /// on every level. Stops early on the first node whose key equals `key`.
  fn search(&self, key: &[u8]) -> Search {
    let mut prev = NodeId::SENTINEL;
    let mut breadcrumbs = [NodeId::SENTINEL; MAX_HEIGHT];

    for level in (0..=self.highest()).rev() {
      let mut curr = self.next_of(prev, level);
      // prev.key < key <= curr.key
      while self.compare_key(key, curr).is_gt() {
        prev = curr;
        curr = self.next_of(prev, level);
      }

      if self.compare_key(key, curr).is_eq() {
        return Search::Found(curr);
      }

      breadcrumbs[level] = prev;
    }

    Search::NotFound(breadcrumbs)
  }

  /// Compares `key` with the key of node `id`. Every key is less than the sentinel.
  #[inline]
  fn compare_key(&self, key: &[u8], id: NodeId) -> cmp::Ordering {
    if id.is_sentinel() {
      return cmp::Ordering::Less;
    }
    self.cmp.compare(key, &self.arena.get(id).key)
  }

  #[inline]
  fn compare_node(&self, left: NodeId, right: NodeId) -> cmp::Ordering {
    self.compare_key(&self.arena.get(left).key, right)
  }
}

impl<'a, C> IntoIterator for &'a SkipList<C> {
  type Item = EntryRef<'a>;
  type IntoIter = Iter<'a, C>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
