use std::collections::BTreeMap;

use dwg_core::{DwgError, ErrorInfo, NodeId};

use crate::adjacency::Adjacency;
use crate::arena::NodeArena;
use crate::iter::{Cursor, Position, Triples};

/// Generic directed weighted multigraph.
///
/// Nodes carry values of type `N`, edges carry weights of type `E`; multiple
/// edges between the same ordered pair of nodes are allowed as long as their
/// weights differ, so `(src, dst, weight)` is the uniqueness key. Nodes and
/// destinations are kept in ascending order, which makes iteration, the text
/// rendering and equality fully deterministic.
///
/// Node identity is a stable arena handle shared between the node table and
/// every adjacency destination; the ordered indexes key by value to define
/// the traversal order. See [`Position`] for how mutation interacts with
/// saved cursor positions.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    pub(crate) arena: NodeArena<N>,
    pub(crate) nodes: BTreeMap<N, NodeId>,
    pub(crate) out: BTreeMap<NodeId, Adjacency<N, E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            arena: NodeArena::new(),
            nodes: BTreeMap::new(),
            out: BTreeMap::new(),
        }
    }
}

fn missing_endpoint() -> DwgError {
    DwgError::InvalidArgument(ErrorInfo::new(
        "missing-endpoint",
        "cannot call Graph::insert_edge when either src or dst node does not exist",
    ))
}

fn unknown_node(message: &str) -> DwgError {
    DwgError::NotFound(ErrorInfo::new("unknown-node", message))
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            nodes: BTreeMap::new(),
            out: BTreeMap::new(),
        }
    }

    /// Builds a graph from a sequence of node values, ignoring duplicates.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert_node(node);
        }
        graph
    }

    /// Builds a graph from (from, to, weight) triples.
    ///
    /// Both endpoints are inserted idempotently before each edge; duplicate
    /// triples are ignored.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, E)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.insert_node(from.clone());
            graph.insert_node(to.clone());
            // endpoints were just inserted, so this cannot fail
            let _ = graph.insert_edge(&from, &to, weight);
        }
        graph
    }

    /// Inserts a node, returning `false` without mutation if it is already
    /// present.
    pub fn insert_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        let id = self.arena.insert(node.clone());
        self.nodes.insert(node, id);
        self.out.insert(id, Adjacency::default());
        true
    }

    /// Inserts an edge between two existing nodes.
    ///
    /// Fails with [`DwgError::InvalidArgument`] when either endpoint is not a
    /// current node; returns `Ok(false)` without mutation when the identical
    /// (from, to, weight) edge already exists. The stored destination
    /// reference is the canonical handle already present in the node table.
    pub fn insert_edge(&mut self, from: &N, to: &N, weight: E) -> Result<bool, DwgError> {
        let src = match self.nodes.get(from) {
            Some(&id) => id,
            None => return Err(missing_endpoint()),
        };
        let dst = match self.nodes.get(to) {
            Some(&id) => id,
            None => return Err(missing_endpoint()),
        };
        let adjacency = self.out.entry(src).or_default();
        Ok(adjacency.add_edge(to.clone(), dst, weight))
    }

    /// Deletes a node together with its outgoing and incoming edges.
    ///
    /// Returns `false` if the node is absent. Every other node's adjacency
    /// is swept so no dangling destination reference survives.
    pub fn delete_node(&mut self, node: &N) -> bool {
        let Some(id) = self.nodes.remove(node) else {
            return false;
        };
        self.arena.remove(id);
        self.out.remove(&id);
        for adjacency in self.out.values_mut() {
            adjacency.delete_destination(node);
        }
        true
    }

    /// Returns whether the value names a current node.
    pub fn is_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Returns whether at least one edge from `from` to `to` exists.
    ///
    /// Fails with [`DwgError::NotFound`] when either endpoint is absent.
    pub fn is_connected(&self, from: &N, to: &N) -> Result<bool, DwgError> {
        let (src, _) = match (self.nodes.get(from), self.nodes.get(to)) {
            (Some(&src), Some(&dst)) => (src, dst),
            _ => {
                return Err(unknown_node(
                    "cannot call Graph::is_connected if src or dst node don't exist in the graph",
                ))
            }
        };
        Ok(self
            .out
            .get(&src)
            .is_some_and(|adjacency| adjacency.has_edge(to)))
    }

    /// Returns all node values in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.keys().cloned().collect()
    }

    /// Returns the distinct destinations of `node` in ascending order.
    ///
    /// Fails with [`DwgError::NotFound`] when the node is absent.
    pub fn connected(&self, node: &N) -> Result<Vec<N>, DwgError> {
        let id = match self.nodes.get(node) {
            Some(&id) => id,
            None => {
                return Err(unknown_node(
                    "cannot call Graph::connected if src doesn't exist in the graph",
                ))
            }
        };
        Ok(self
            .out
            .get(&id)
            .map(Adjacency::neighbours)
            .unwrap_or_default())
    }

    /// Returns the weights of all edges from `from` to `to` in ascending
    /// order.
    ///
    /// An absent source fails with [`DwgError::NotFound`]; an absent or
    /// simply unconnected destination yields an empty vector. The asymmetry
    /// is deliberate: source existence is a precondition, destination
    /// existence is not.
    pub fn weights(&self, from: &N, to: &N) -> Result<Vec<E>, DwgError> {
        let src = match self.nodes.get(from) {
            Some(&id) => id,
            None => {
                return Err(unknown_node(
                    "cannot call Graph::weights if src doesn't exist in the graph",
                ))
            }
        };
        Ok(self
            .out
            .get(&src)
            .map(|adjacency| adjacency.weights(to))
            .unwrap_or_default())
    }

    /// Removes all nodes and edges. Idempotent on an empty graph.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.nodes.clear();
        self.out.clear();
    }

    /// Renames a node's value in place.
    ///
    /// Fails with [`DwgError::NotFound`] when `old` is absent. Returns
    /// `Ok(false)` without mutation when `new` already names a distinct
    /// existing node; renaming a node to its own value is a successful
    /// no-op. On success the arena slot is mutated in place and every
    /// ordered index entry is re-keyed, so incoming and outgoing edges all
    /// point at the new value. No merging happens here; that is
    /// [`merge_replace`](Self::merge_replace)'s job.
    pub fn replace(&mut self, old: &N, new: N) -> Result<bool, DwgError> {
        let id = match self.nodes.get(old) {
            Some(&id) => id,
            None => {
                return Err(unknown_node(
                    "cannot call Graph::replace on a node that doesn't exist",
                ))
            }
        };
        if new == *old {
            return Ok(true);
        }
        if self.nodes.contains_key(&new) {
            return Ok(false);
        }
        self.arena.rename(id, new.clone());
        self.nodes.remove(old);
        self.nodes.insert(new.clone(), id);
        for adjacency in self.out.values_mut() {
            adjacency.rename_destination(old, &new);
        }
        Ok(true)
    }

    /// Merges `old`'s identity into `new`, unioning edge sets.
    ///
    /// Fails with [`DwgError::NotFound`] unless both nodes exist. All of
    /// `old`'s outgoing weight sets are unioned into `new`'s (a self-loop on
    /// `old` becomes a self-loop on `new`), every other node's weight set to
    /// `old` is unioned into its weight set to `new`, and `old` is deleted.
    /// Duplicate weights collapse under set semantics. Merging a node into
    /// itself is a no-op.
    pub fn merge_replace(&mut self, old: &N, new: &N) -> Result<(), DwgError> {
        let (old_id, new_id) = match (self.nodes.get(old), self.nodes.get(new)) {
            (Some(&old_id), Some(&new_id)) => (old_id, new_id),
            _ => {
                return Err(unknown_node(
                    "cannot call Graph::merge_replace on old or new data if they don't exist in the graph",
                ))
            }
        };
        if old_id == new_id {
            return Ok(());
        }
        // Detach old's adjacency first: the snapshot keeps the unions below
        // from walking a structure they are mutating.
        let outgoing = self.out.remove(&old_id).unwrap_or_default();
        for (dst_value, entry) in outgoing.into_targets() {
            let (target_value, target_id) = if entry.node == old_id {
                (new.clone(), new_id)
            } else {
                (dst_value, entry.node)
            };
            self.out
                .entry(new_id)
                .or_default()
                .add_weight_set(target_value, target_id, entry.weights);
        }
        for adjacency in self.out.values_mut() {
            adjacency.merge_destination(old, new, new_id);
        }
        self.nodes.remove(old);
        self.arena.remove(old_id);
        Ok(())
    }

    /// Returns a cursor at the (from, to, weight) edge, or at the end
    /// position when no such edge exists.
    pub fn find(&self, from: &N, to: &N, weight: &E) -> Cursor<'_, N, E> {
        let position = match self.nodes.get(from) {
            Some(&src) => self
                .out
                .get(&src)
                .filter(|adjacency| adjacency.contains(to, weight))
                .and_then(|adjacency| adjacency.target_id(to))
                .map_or(Position::End, |dst| Position::At {
                    src,
                    dst,
                    weight: weight.clone(),
                }),
            None => Position::End,
        };
        Cursor::new(self, position)
    }

    /// Erases one (from, to, weight) edge, returning `false` if it does not
    /// exist.
    pub fn erase(&mut self, from: &N, to: &N, weight: &E) -> bool {
        let Some(&src) = self.nodes.get(from) else {
            return false;
        };
        self.out
            .get_mut(&src)
            .is_some_and(|adjacency| adjacency.remove_weight(to, weight))
    }

    /// Erases the edge at the given position, returning the position of the
    /// next edge in iteration order (or the end position).
    ///
    /// A position that does not name a real edge (the end position, or a
    /// position gone stale through mutation) is a no-op returning
    /// [`Position::End`].
    pub fn erase_at(&mut self, at: &Position<E>) -> Position<E> {
        let Position::At { src, dst, weight } = at else {
            return Position::End;
        };
        let Some(dst_value) = self.arena.get(*dst).cloned() else {
            return Position::End;
        };
        // The successor survives removal of the current element, so compute
        // it against the pre-removal structure.
        let next = self.step_forward(*src, *dst, weight);
        let removed = self
            .out
            .get_mut(src)
            .is_some_and(|adjacency| adjacency.remove_weight(&dst_value, weight));
        if !removed {
            return Position::End;
        }
        next
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges (parallel weights counted individually).
    pub fn edge_count(&self) -> usize {
        self.out.values().map(Adjacency::edge_count).sum()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a cursor positioned at the first edge (or at the end for an
    /// edge-free graph).
    pub fn cursor(&self) -> Cursor<'_, N, E> {
        Cursor::new(self, self.first_position())
    }

    /// Returns the canonical end cursor.
    pub fn cursor_at_end(&self) -> Cursor<'_, N, E> {
        Cursor::new(self, Position::End)
    }

    /// Re-attaches a detached position to this graph.
    pub fn cursor_at(&self, position: Position<E>) -> Cursor<'_, N, E> {
        Cursor::new(self, position)
    }

    /// Iterates all (from, to, weight) triples in ascending lexicographic
    /// order.
    pub fn iter(&self) -> Triples<'_, N, E> {
        Triples::new(self)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<(N, N, E)> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = (N, N, E)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

impl<'a, N: Ord + Clone, E: Ord + Clone> IntoIterator for &'a Graph<N, E> {
    type Item = (&'a N, &'a N, &'a E);
    type IntoIter = Triples<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> PartialEq for Graph<N, E> {
    /// Walks both ordered node tables in lockstep comparing (value,
    /// adjacency) pairs, so graphs with equal node counts but different node
    /// sets compare unequal. Adjacency comparison is value equality of the
    /// dereferenced identities, never structural sharing.
    fn eq(&self, other: &Self) -> bool {
        if self.nodes.len() != other.nodes.len() {
            return false;
        }
        self.nodes
            .iter()
            .zip(other.nodes.iter())
            .all(|((node_a, id_a), (node_b, id_b))| {
                node_a == node_b && self.out.get(id_a) == other.out.get(id_b)
            })
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Eq for Graph<N, E> {}
