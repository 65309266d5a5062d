#![deny(missing_docs)]

//! Shared vocabulary for the DWG container: the stable node handle type and
//! the structured error surface used by every fallible operation.

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{DwgError, ErrorInfo};

/// Identifier for a node slot inside a graph's node arena.
///
/// Handles are the shared node identity: the node table and every adjacency
/// destination store the same `NodeId`, so renaming a node mutates a single
/// arena slot instead of rewriting edges. A handle is only meaningful to the
/// graph that issued it and becomes stale once that node is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
