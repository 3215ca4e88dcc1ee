//! Disjoint-set forest over arbitrary hashable elements.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;

use super::error::render;
use super::DisjointSetError;

/// Union-find over elements of type `E`, with path compression and union
/// by rank.
///
/// Every element added with [`make_set`](#method.make_set) starts in its own
/// singleton set. The representative of a set is the element at the root of
/// its tree; it changes only when that set takes part in a
/// [`union`](#method.union).
///
/// Tree nodes live in one arena and refer to their parents by slot, so a
/// root is simply a node whose parent slot is its own. Parents sit in
/// `Cell`s, which lets [`find_set`](#method.find_set) compress paths
/// through a shared reference.
///
/// # Examples
///
/// ```
/// use graph_forest::ForestDisjointSets;
///
/// let mut sets = ForestDisjointSets::new();
/// for name in &["ann", "bob", "cy"] {
///     sets.make_set(*name).unwrap();
/// }
///
/// // Equal ranks: the second argument's representative survives.
/// assert_eq!(sets.union(&"ann", &"bob"), Ok(true));
/// assert_eq!(sets.find_set(&"ann"), Ok(&"bob"));
/// assert_eq!(sets.equiv(&"ann", &"cy"), Ok(false));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    bound(
        serialize = "E: serde::Serialize + Eq + Hash",
        deserialize = "E: serde::Deserialize<'de> + Eq + Hash + Debug"
    ),
    try_from = "RawForest<E>"
))]
pub struct ForestDisjointSets<E> {
    slots: HashMap<E, usize>,
    nodes: Vec<TreeNode<E>>,
    set_count: usize,
}
// Invariants:
//  - self.nodes[self.slots[e]].item == e for every element e
//  - following parents from any slot reaches a slot that is its own parent
//  - self.set_count is the number of such roots

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct TreeNode<E> {
    item: E,
    parent: Cell<usize>,
    rank: u8,
}

// The serialized form, checked against the invariants above before it
// becomes a forest.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "E: serde::Deserialize<'de> + Eq + Hash"))]
struct RawForest<E> {
    slots: HashMap<E, usize>,
    nodes: Vec<TreeNode<E>>,
    set_count: usize,
}

#[cfg(feature = "serde")]
impl<E: Eq + Hash + Debug> TryFrom<RawForest<E>> for ForestDisjointSets<E> {
    type Error = DisjointSetError;

    fn try_from(raw: RawForest<E>) -> Result<Self, Self::Error> {
        let invalid = |reason: String| DisjointSetError::Invalid { reason };
        let len = raw.nodes.len();

        if raw.slots.len() != len {
            return Err(invalid(format!("{} slots for {} nodes", raw.slots.len(), len)));
        }
        for (element, &slot) in &raw.slots {
            if raw.nodes.get(slot).map_or(true, |node| node.item != *element) {
                return Err(invalid(format!("element {} does not own slot {}",
                                           render(element), slot)));
            }
        }
        for (slot, node) in raw.nodes.iter().enumerate() {
            if node.parent.get() >= len {
                return Err(invalid(format!("slot {} has parent {} of {} nodes",
                                           slot, node.parent.get(), len)));
            }
        }

        // 0: unvisited, 1: on the current path, 2: reaches a root.
        let mut state = vec![0u8; len];
        for start in 0 .. len {
            let mut path = Vec::new();
            let mut current = start;
            while state[current] == 0 {
                state[current] = 1;
                path.push(current);
                let parent = raw.nodes[current].parent.get();
                if parent == current {
                    break;
                }
                current = parent;
            }
            if state[current] == 1 && raw.nodes[current].parent.get() != current {
                return Err(invalid(format!("slot {} lies on a parent cycle", current)));
            }
            for slot in path {
                state[slot] = 2;
            }
        }

        let roots = raw.nodes.iter().enumerate()
            .filter(|&(slot, node)| node.parent.get() == slot)
            .count();
        if roots != raw.set_count {
            return Err(invalid(format!("set count {} but {} roots",
                                       raw.set_count, roots)));
        }

        Ok(ForestDisjointSets {
            slots: raw.slots,
            nodes: raw.nodes,
            set_count: raw.set_count,
        })
    }
}

impl<E> Default for ForestDisjointSets<E> {
    fn default() -> Self {
        ForestDisjointSets {
            slots: HashMap::new(),
            nodes: Vec::new(),
            set_count: 0,
        }
    }
}

impl<E: Debug> Debug for ForestDisjointSets<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let links = self.nodes.iter()
            .map(|node| (&node.item, &self.nodes[node.parent.get()].item));
        write!(formatter, "ForestDisjointSets(")?;
        formatter.debug_map().entries(links).finish()?;
        write!(formatter, ")")
    }
}

impl<E> ForestDisjointSets<E> {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        ForestDisjointSets {
            slots: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// The number of elements in all the sets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the forest devoid of elements?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.nodes.clear();
        self.set_count = 0;
    }

    /// Forces all laziness, so that each element points directly to its
    /// set’s representative.
    pub fn force(&self) {
        for slot in 0 .. self.nodes.len() {
            self.find_root(slot);
        }
    }

    // HELPERS

    fn parent(&self, slot: usize) -> usize {
        self.nodes[slot].parent.get()
    }

    fn set_parent(&self, slot: usize, parent: usize) {
        self.nodes[slot].parent.set(parent);
    }

    fn rank(&self, slot: usize) -> u8 {
        self.nodes[slot].rank
    }

    fn increment_rank(&mut self, slot: usize) {
        let rank = &mut self.nodes[slot].rank;
        *rank = rank.saturating_add(1);
    }

    // Two passes rather than recursion, so deep chains cannot exhaust the
    // stack: find the root, then point every node on the path straight at it.
    fn find_root(&self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut current = slot;
        while current != root {
            let next = self.parent(current);
            self.set_parent(current, root);
            current = next;
        }

        root
    }
}

impl<E: Clone + Eq + Hash + Debug> ForestDisjointSets<E> {
    /// Is `element` in one of the sets?
    pub fn is_present(&self, element: &E) -> bool {
        self.slots.contains_key(element)
    }

    /// Adds `element` as a new singleton set.
    ///
    /// Fails with [`DisjointSetError::AlreadyPresent`] if the element was
    /// added before.
    pub fn make_set(&mut self, element: E) -> Result<(), DisjointSetError> {
        if self.is_present(&element) {
            return Err(DisjointSetError::AlreadyPresent {
                element: render(&element),
            });
        }

        let slot = self.nodes.len();
        self.slots.insert(element.clone(), slot);
        self.nodes.push(TreeNode {
            item: element,
            parent: Cell::new(slot),
            rank: 0,
        });
        self.set_count += 1;

        Ok(())
    }

    /// Finds the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root, so an immediately repeated call takes a single hop.
    pub fn find_set(&self, element: &E) -> Result<&E, DisjointSetError> {
        let root = self.find_root(self.slot_of(element)?);
        Ok(&self.nodes[root].item)
    }

    /// Joins the sets containing `first` and `second`.
    ///
    /// The root of lower rank goes under the root of higher rank. When the
    /// ranks tie, `first`'s representative goes under `second`'s, and the
    /// surviving root's rank grows by one.
    ///
    /// Returns whether anything changed: `false` if the two elements were
    /// already in the same set. Both elements are checked before anything
    /// is modified.
    pub fn union(&mut self, first: &E, second: &E)
            -> Result<bool, DisjointSetError> {
        let first = self.slot_of(first)?;
        let second = self.slot_of(second)?;

        let a = self.find_root(first);
        let b = self.find_root(second);

        if a == b { return Ok(false); }

        let rank_a = self.rank(a);
        let rank_b = self.rank(b);

        if rank_a > rank_b {
            self.set_parent(b, a);
        } else if rank_b > rank_a {
            self.set_parent(a, b);
        } else {
            self.set_parent(a, b);
            self.increment_rank(b);
        }

        self.set_count -= 1;
        Ok(true)
    }

    /// Determines whether two elements are in the same set.
    pub fn equiv(&self, a: &E, b: &E) -> Result<bool, DisjointSetError> {
        let a = self.slot_of(a)?;
        let b = self.slot_of(b)?;
        Ok(self.find_root(a) == self.find_root(b))
    }

    /// Returns the representatives of all current sets.
    ///
    /// As a side effect every path in the forest is fully compressed.
    pub fn current_representatives(&self) -> HashSet<E> {
        (0 .. self.nodes.len())
            .map(|slot| self.nodes[self.find_root(slot)].item.clone())
            .collect()
    }

    /// Returns every element of the set containing `element`, including
    /// `element` itself.
    pub fn current_elements_of_set_containing(&self, element: &E)
            -> Result<HashSet<E>, DisjointSetError> {
        let root = self.find_root(self.slot_of(element)?);

        Ok(self.nodes.iter()
            .enumerate()
            .filter(|&(slot, _)| self.find_root(slot) == root)
            .map(|(_, node)| node.item.clone())
            .collect())
    }

    fn slot_of(&self, element: &E) -> Result<usize, DisjointSetError> {
        self.slots.get(element).copied().ok_or_else(|| {
            DisjointSetError::NotPresent { element: render(element) }
        })
    }
}
