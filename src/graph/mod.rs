//! # Graph Model
//!
//! In-memory representation of the output graph: insertion-ordered nodes
//! keyed by a unique identity, deduplicated directed edges, per-node
//! attribute maps, and the optional graph-level label.
//!
//! The model enforces the structural invariants the serializer relies on:
//!
//! - at most one node per key; repeated registration merges attributes only
//! - at most one edge per ordered `(source, target)` pair
//! - edges only ever reference registered nodes
//! - iteration order is first-discovery order, never sorted

mod model;

pub use model::{Attributes, Graph, GraphLabel, GraphNode, Justification, Location};
