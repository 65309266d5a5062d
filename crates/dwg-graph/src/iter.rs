use std::iter::FusedIterator;
use std::ops::Bound::{Excluded, Unbounded};
use std::ptr;

use dwg_core::NodeId;

use crate::graph::Graph;

/// Logical position of the flattened edge traversal.
///
/// A position is either a concrete (source, destination, weight) coordinate
/// or the single canonical end position; there is no before-begin state.
/// Comparison is purely structural, so the end reached by any traversal path
/// compares equal to [`Position::End`].
///
/// Positions are invalidated by any structural mutation of the graph that
/// touches the referenced nodes or edges. Resolving a stale position is
/// memory safe — the handle lookups are checked — but which element (if
/// any) it then names is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position<E> {
    /// Positioned at a real (from, to, weight) triple.
    At {
        /// Handle of the source node.
        src: NodeId,
        /// Handle of the destination node.
        dst: NodeId,
        /// Weight of the edge at this position.
        weight: E,
    },
    /// The canonical one-past-last position.
    End,
}

impl<E> Position<E> {
    /// Returns whether this is the end position.
    pub fn is_end(&self) -> bool {
        matches!(self, Position::End)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    fn first_in_node(&self, id: NodeId) -> Option<Position<E>> {
        self.out
            .get(&id)
            .and_then(|adjacency| adjacency.first())
            .map(|(_, dst, weight)| Position::At {
                src: id,
                dst,
                weight: weight.clone(),
            })
    }

    fn last_in_node(&self, id: NodeId) -> Option<Position<E>> {
        self.out
            .get(&id)
            .and_then(|adjacency| adjacency.last())
            .map(|(_, dst, weight)| Position::At {
                src: id,
                dst,
                weight: weight.clone(),
            })
    }

    /// Position of the first triple in (from, to, weight) order, skipping
    /// edge-free nodes.
    pub(crate) fn first_position(&self) -> Position<E> {
        self.nodes
            .values()
            .find_map(|&id| self.first_in_node(id))
            .unwrap_or(Position::End)
    }

    fn last_position(&self) -> Option<Position<E>> {
        self.nodes
            .values()
            .rev()
            .find_map(|&id| self.last_in_node(id))
    }

    /// Successor of a triple coordinate: next weight, then next destination,
    /// then the first triple of the next edge-bearing node, else end.
    ///
    /// A stale coordinate (freed handle) steps to the end.
    pub(crate) fn step_forward(&self, src: NodeId, dst: NodeId, weight: &E) -> Position<E> {
        let Some(src_value) = self.arena.get(src) else {
            return Position::End;
        };
        let Some(dst_value) = self.arena.get(dst) else {
            return Position::End;
        };
        if let Some(adjacency) = self.out.get(&src) {
            if let Some((_, next_dst, w)) = adjacency.next_after(dst_value, weight) {
                return Position::At {
                    src,
                    dst: next_dst,
                    weight: w.clone(),
                };
            }
        }
        self.nodes
            .range((Excluded(src_value), Unbounded))
            .find_map(|(_, &id)| self.first_in_node(id))
            .unwrap_or(Position::End)
    }

    /// Predecessor of a position: from the end this is the last triple; from
    /// a triple it is the previous weight, destination or node. `None` means
    /// the position is the logical begin (or the graph has no edges).
    pub(crate) fn step_back(&self, position: &Position<E>) -> Option<Position<E>> {
        match position {
            Position::End => self.last_position(),
            Position::At { src, dst, weight } => {
                let src_value = self.arena.get(*src)?;
                let dst_value = self.arena.get(*dst)?;
                if let Some(adjacency) = self.out.get(src) {
                    if let Some((_, prev_dst, w)) = adjacency.prev_before(dst_value, weight) {
                        return Some(Position::At {
                            src: *src,
                            dst: prev_dst,
                            weight: w.clone(),
                        });
                    }
                }
                self.nodes
                    .range((Unbounded, Excluded(src_value)))
                    .rev()
                    .find_map(|(_, &id)| self.last_in_node(id))
            }
        }
    }

    /// Dereferences a position into (source, destination, weight) references,
    /// or `None` when it does not name a current edge.
    pub(crate) fn resolve<'g>(&'g self, position: &Position<E>) -> Option<(&'g N, &'g N, &'g E)> {
        let Position::At { src, dst, weight } = position else {
            return None;
        };
        let src_value = self.arena.get(*src)?;
        let dst_value = self.arena.get(*dst)?;
        let adjacency = self.out.get(src)?;
        let weight = adjacency.weight_ref(dst_value, weight)?;
        Some((src_value, dst_value, weight))
    }
}

/// Bidirectional cursor over a graph's flattened edge traversal.
///
/// The cursor combines a borrowed graph with a [`Position`]; it crosses
/// destination and node boundaries transparently in both directions.
/// Cursors from different graphs never compare equal, and every cursor that
/// has run off the last element compares equal to
/// [`Graph::cursor_at_end`].
#[derive(Debug, Clone)]
pub struct Cursor<'g, N, E> {
    graph: &'g Graph<N, E>,
    position: Position<E>,
}

impl<'g, N: Ord + Clone, E: Ord + Clone> Cursor<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>, position: Position<E>) -> Self {
        Self { graph, position }
    }

    /// Returns the (source, destination, weight) triple under the cursor, or
    /// `None` at the end position.
    pub fn current(&self) -> Option<(&'g N, &'g N, &'g E)> {
        self.graph.resolve(&self.position)
    }

    /// Returns whether the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns a detached copy of the cursor's position.
    pub fn position(&self) -> Position<E> {
        self.position.clone()
    }

    /// Advances to the next triple in ascending order.
    ///
    /// Returns whether the cursor now rests on a real element; stepping at
    /// the end position stays at the end and returns `false`.
    pub fn move_next(&mut self) -> bool {
        let next = match &self.position {
            Position::End => return false,
            Position::At { src, dst, weight } => self.graph.step_forward(*src, *dst, weight),
        };
        self.position = next;
        !self.position.is_end()
    }

    /// Steps back to the previous triple; from the end position this lands
    /// on the last triple.
    ///
    /// At the logical begin (or on an edge-free graph) the cursor is left
    /// unchanged and `false` is returned.
    pub fn move_prev(&mut self) -> bool {
        match self.graph.step_back(&self.position) {
            Some(previous) => {
                self.position = previous;
                true
            }
            None => false,
        }
    }
}

impl<N, E: PartialEq> PartialEq for Cursor<'_, N, E> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.position == other.position
    }
}

impl<N, E: Eq> Eq for Cursor<'_, N, E> {}

/// Double-ended iterator over all (from, to, weight) triples of a graph in
/// ascending lexicographic order.
#[derive(Debug, Clone)]
pub struct Triples<'g, N, E> {
    graph: &'g Graph<N, E>,
    front: Position<E>,
    back: Position<E>,
}

impl<'g, N: Ord + Clone, E: Ord + Clone> Triples<'g, N, E> {
    pub(crate) fn new(graph: &'g Graph<N, E>) -> Self {
        Self {
            graph,
            front: graph.first_position(),
            back: Position::End,
        }
    }
}

impl<'g, N: Ord + Clone, E: Ord + Clone> Iterator for Triples<'g, N, E> {
    type Item = (&'g N, &'g N, &'g E);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.graph.resolve(&self.front);
        let next = match &self.front {
            Position::At { src, dst, weight } => self.graph.step_forward(*src, *dst, weight),
            Position::End => Position::End,
        };
        self.front = next;
        item
    }
}

impl<N: Ord + Clone, E: Ord + Clone> DoubleEndedIterator for Triples<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.graph.step_back(&self.back)?;
        self.graph.resolve(&self.back)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FusedIterator for Triples<'_, N, E> {}
