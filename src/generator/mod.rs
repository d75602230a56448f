//! # Graph Generation Module
//!
//! The traversal engine that turns a pre-resolved project tree into a
//! dependency [`Graph`](crate::graph::Graph), and the configuration bundle
//! that parameterizes it.
//!
//! A [`GeneratorConfig`] carries one callback per decision point: which
//! projects, configurations, and dependencies to include, whether to descend
//! into a dependency's children, how nodes are styled, and how module display
//! names are derived. [`DotGenerator`] owns everything else: visit order,
//! node and edge deduplication, and the single-expansion cutoff for diamond
//! dependencies.

mod config;
mod dot_generator;

pub use config::GeneratorConfig;
pub use dot_generator::DotGenerator;
