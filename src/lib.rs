//! # depdot - Dependency Graphs as Graphviz DOT
//!
//! depdot turns an already-resolved dependency model into a Graphviz DOT
//! digraph. The input is a project tree with named configurations and their
//! resolved dependency trees; depdot never performs resolution itself.
//!
//! ## Main Components
//!
//! - **Model**: The input project/configuration/dependency structures
//! - **Generator**: Walks the model and accumulates the output graph
//! - **Graph**: Insertion-ordered nodes and deduplicated directed edges
//! - **Dot**: Serializes the graph into byte-stable DOT text
//!
//! Modules are deduplicated on their `group:artifact` pair, so multiple
//! versions of the same module collapse into one node. A shared subtree is
//! expanded once per run while every edge into it is still recorded, and
//! output order is always first-discovery order.
//!
//! ## Usage
//!
//! ### Example: Generating a Graph
//!
//! ```
//! use depdot::common::ConfigBuilder;
//! use depdot::dot::DotWriter;
//! use depdot::generator::{DotGenerator, GeneratorConfig};
//! use depdot::model::{Configuration, ProjectRef, ResolvedDependency};
//!
//! # fn main() -> miette::Result<()> {
//! let project = ProjectRef::builder()
//!     .with_name("single")
//!     .with_configurations(vec![Configuration::new(
//!         "compileClasspath",
//!         vec![
//!             ResolvedDependency::builder()
//!                 .with_group("org.jetbrains.kotlin")
//!                 .with_artifact("kotlin-stdlib")
//!                 .with_version("1.2.30")
//!                 .build()?,
//!         ],
//!     )])
//!     .build()?;
//!
//! let config = GeneratorConfig::default();
//! let graph = DotGenerator::new(&project, &config).generate_graph()?;
//! let dot = DotWriter::new().to_dot_string(&graph)?;
//!
//! assert!(dot.contains("\"single\" -> \"kotlin-stdlib\""));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Filtering and Styling
//!
//! ```
//! use depdot::common::ConfigBuilder;
//! use depdot::dot::Shape;
//! use depdot::generator::{DotGenerator, GeneratorConfig};
//! use depdot::graph::{GraphLabel, Justification, Location};
//! use depdot::model::ProjectRef;
//!
//! # fn main() -> miette::Result<()> {
//! # let project = ProjectRef::builder().with_name("app").build()?;
//! // Drop a noisy group, mark projects, and add a header label.
//! let config = GeneratorConfig::default()
//!     .with_include(|dependency| dependency.group() != "io.reactivex.rxjava2")
//!     .with_project_node(|attributes, _| attributes.shape(Shape::Egg))
//!     .with_label(
//!         GraphLabel::new("app dependencies")
//!             .justify(Justification::Left)
//!             .locate(Location::Top),
//!     );
//!
//! let graph = DotGenerator::new(&project, &config).generate_graph()?;
//! assert_eq!(graph.label().unwrap().text(), "app dependencies");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod dot;
pub mod error;
pub mod generator;
pub mod graph;
pub mod identity;
pub mod model;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
