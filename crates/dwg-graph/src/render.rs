//! Deterministic text rendering of graphs, used by snapshot tests.

use std::fmt::{self, Display};

use crate::adjacency::Adjacency;
use crate::graph::Graph;

impl<N: Display, E: Display> Display for Adjacency<N, E> {
    /// One tab-indented `<dst> | <weight>` line per edge, destinations
    /// ascending, weights ascending within a destination.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dst, entry) in &self.targets {
            for weight in &entry.weights {
                writeln!(f, "\t{dst} | {weight}")?;
            }
        }
        Ok(())
    }
}

impl<N: Display, E: Display> Display for Graph<N, E> {
    /// Renders every node in ascending order as `<node> (` followed by its
    /// adjacency lines and a closing `)`. Nodes without outgoing edges render
    /// an empty block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, id) in &self.nodes {
            writeln!(f, "{node} (")?;
            if let Some(adjacency) = self.out.get(id) {
                write!(f, "{adjacency}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
