#![deny(missing_docs)]

//! Generic in-memory directed weighted multigraph container.
//!
//! [`Graph<N, E>`] stores nodes of type `N` and edge weights of type `E`,
//! allowing multiple distinct-weight edges between the same ordered pair of
//! nodes. Nodes, destinations and weights are all kept in ascending order,
//! which gives a single strict total order over every (from, to, weight)
//! triple; [`Graph::iter`] and [`Cursor`] traverse that order forwards and
//! backwards across node and destination boundaries.
//!
//! Mutation follows a two-tier error policy: outcomes the caller cannot rule
//! out ahead of time (duplicate insert, absent erase target) are boolean
//! returns, while violated preconditions (inserting an edge at a missing
//! endpoint, querying or renaming a missing node) fail with a structured
//! [`dwg_core::DwgError`].
//!
//! The container is single-threaded and synchronous; callers needing shared
//! access must serialize it externally.

mod adjacency;
mod arena;
mod graph;
mod iter;
mod render;

pub use graph::Graph;
pub use iter::{Cursor, Position, Triples};
