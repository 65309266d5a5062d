use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};

use dwg_core::NodeId;

/// Weight set attached to one destination of a source node.
///
/// `node` is the non-owning reference to the destination's canonical
/// identity in the arena; `weights` is the ordered set of parallel edge
/// weights (the edge index). The set is never empty: the entry is dropped
/// when its last weight is erased.
#[derive(Debug, Clone)]
pub(crate) struct TargetEntry<E> {
    pub(crate) node: NodeId,
    pub(crate) weights: BTreeSet<E>,
}

impl<E> TargetEntry<E> {
    fn new(node: NodeId) -> Self {
        Self {
            node,
            weights: BTreeSet::new(),
        }
    }
}

/// All outgoing edges of one source node, ordered by destination value.
///
/// This is a pure capability surface consumed by the owning graph: it never
/// holds a back-reference and never touches node lifecycle. Value equality
/// compares (destination, weight set) pairs and deliberately ignores the
/// stored handles.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency<N, E> {
    pub(crate) targets: BTreeMap<N, TargetEntry<E>>,
}

impl<N, E> Default for Adjacency<N, E> {
    fn default() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Adjacency<N, E> {
    /// Inserts a weight for the destination, creating the entry on first use.
    ///
    /// Returns `false` without mutation when the (destination, weight) pair
    /// already exists.
    pub(crate) fn add_edge(&mut self, dst_value: N, dst: NodeId, weight: E) -> bool {
        self.targets
            .entry(dst_value)
            .or_insert_with(|| TargetEntry::new(dst))
            .weights
            .insert(weight)
    }

    /// Unions a whole weight set into the destination's entry.
    pub(crate) fn add_weight_set(&mut self, dst_value: N, dst: NodeId, weights: BTreeSet<E>) {
        self.targets
            .entry(dst_value)
            .or_insert_with(|| TargetEntry::new(dst))
            .weights
            .extend(weights);
    }

    /// Returns whether at least one edge to the destination exists.
    pub(crate) fn has_edge(&self, dst: &N) -> bool {
        self.targets.contains_key(dst)
    }

    /// Returns all distinct destinations in ascending order.
    pub(crate) fn neighbours(&self) -> Vec<N> {
        self.targets.keys().cloned().collect()
    }

    /// Returns all weights to the destination in ascending order.
    pub(crate) fn weights(&self, dst: &N) -> Vec<E> {
        self.targets
            .get(dst)
            .map(|entry| entry.weights.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn contains(&self, dst: &N, weight: &E) -> bool {
        self.targets
            .get(dst)
            .is_some_and(|entry| entry.weights.contains(weight))
    }

    pub(crate) fn target_id(&self, dst: &N) -> Option<NodeId> {
        self.targets.get(dst).map(|entry| entry.node)
    }

    pub(crate) fn weight_ref(&self, dst: &N, weight: &E) -> Option<&E> {
        self.targets.get(dst).and_then(|entry| entry.weights.get(weight))
    }

    /// Erases one (destination, weight) pair.
    ///
    /// The destination entry is dropped together with its last weight so
    /// `has_edge` never reports an empty set.
    pub(crate) fn remove_weight(&mut self, dst: &N, weight: &E) -> bool {
        let Some(entry) = self.targets.get_mut(dst) else {
            return false;
        };
        let removed = entry.weights.remove(weight);
        if entry.weights.is_empty() {
            self.targets.remove(dst);
        }
        removed
    }

    /// Removes the destination and every weight attached to it.
    pub(crate) fn delete_destination(&mut self, dst: &N) -> bool {
        self.targets.remove(dst).is_some()
    }

    /// Re-keys the destination entry from `old` to `new`, keeping its handle.
    ///
    /// Used by the pure rename: `new` is guaranteed absent, so this is a
    /// plain move with no merging.
    pub(crate) fn rename_destination(&mut self, old: &N, new: &N) {
        if let Some(entry) = self.targets.remove(old) {
            self.targets.insert(new.clone(), entry);
        }
    }

    /// Unions the weight set aimed at `old` into the one aimed at `new`.
    ///
    /// Duplicate weights collapse (set semantics); this is the incoming-edge
    /// half of a merge rename.
    pub(crate) fn merge_destination(&mut self, old: &N, new: &N, new_id: NodeId) {
        if let Some(entry) = self.targets.remove(old) {
            self.targets
                .entry(new.clone())
                .or_insert_with(|| TargetEntry::new(new_id))
                .weights
                .extend(entry.weights);
        }
    }

    /// First (destination, weight) pair in ascending order.
    pub(crate) fn first(&self) -> Option<(&N, NodeId, &E)> {
        self.targets.iter().next().and_then(|(dst, entry)| {
            entry.weights.iter().next().map(|w| (dst, entry.node, w))
        })
    }

    /// Last (destination, weight) pair in ascending order.
    pub(crate) fn last(&self) -> Option<(&N, NodeId, &E)> {
        self.targets.iter().next_back().and_then(|(dst, entry)| {
            entry.weights.iter().next_back().map(|w| (dst, entry.node, w))
        })
    }

    /// Successor of a (destination, weight) pair, crossing destination
    /// boundaries: next weight of the same destination, else first weight of
    /// the next destination, else none.
    pub(crate) fn next_after(&self, dst: &N, weight: &E) -> Option<(&N, NodeId, &E)> {
        if let Some((key, entry)) = self.targets.get_key_value(dst) {
            if let Some(w) = entry.weights.range((Excluded(weight), Unbounded)).next() {
                return Some((key, entry.node, w));
            }
        }
        for (key, entry) in self.targets.range((Excluded(dst), Unbounded)) {
            if let Some(w) = entry.weights.iter().next() {
                return Some((key, entry.node, w));
            }
        }
        None
    }

    /// Predecessor of a (destination, weight) pair, crossing destination
    /// boundaries backwards: previous weight of the same destination, else
    /// last weight of the previous destination, else none.
    pub(crate) fn prev_before(&self, dst: &N, weight: &E) -> Option<(&N, NodeId, &E)> {
        if let Some((key, entry)) = self.targets.get_key_value(dst) {
            if let Some(w) = entry.weights.range((Unbounded, Excluded(weight))).next_back() {
                return Some((key, entry.node, w));
            }
        }
        for (key, entry) in self.targets.range((Unbounded, Excluded(dst))).rev() {
            if let Some(w) = entry.weights.iter().next_back() {
                return Some((key, entry.node, w));
            }
        }
        None
    }

    /// Total number of (destination, weight) pairs.
    pub(crate) fn edge_count(&self) -> usize {
        self.targets.values().map(|entry| entry.weights.len()).sum()
    }

    /// Consumes the index, yielding its destination entries in order.
    pub(crate) fn into_targets(self) -> BTreeMap<N, TargetEntry<E>> {
        self.targets
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Adjacency<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.targets.len() == other.targets.len()
            && self
                .targets
                .iter()
                .zip(other.targets.iter())
                .all(|((dst_a, a), (dst_b, b))| dst_a == dst_b && a.weights == b.weights)
    }
}

impl<N: Eq, E: Eq> Eq for Adjacency<N, E> {}
