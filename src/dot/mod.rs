//! # DOT Output Module
//!
//! The closed Graphviz shape vocabulary used by styling callbacks and the
//! serializer that turns a [`Graph`](crate::graph::Graph) into DOT text.
//!
//! ## Output shape
//!
//! ```text
//! digraph "G" {
//! "labeljust"="l"
//! "labelloc"="t"
//! "label"="optional header"
//! "node-name" ["shape"="rectangle"]
//! "source-name" -> "target-name"
//! }
//! ```
//!
//! Everything is quoted, attribute lists are comma-joined in insertion
//! order, and nodes without attributes are emitted bare. The writer performs
//! no escaping beyond doubling embedded quotes, so output stays byte-stable
//! for ordinary identifiers.

mod shape;
mod writer;

pub use shape::Shape;
pub use writer::DotWriter;
