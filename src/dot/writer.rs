//! DOT serialization
//!
//! Renders a finished [`Graph`] into the Graphviz DOT format, byte-stable for
//! a given graph: nodes and edges are emitted in discovery order, attribute
//! lists in insertion order, with no sorting pass anywhere.

use std::io::Write;

use miette::Result;

use crate::error::DepdotError;
use crate::graph::Graph;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepdotError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepdotError::from)
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DotWriter;

impl DotWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the graph into DOT text
    pub fn write(&self, graph: &Graph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph {} {{", quoted("G"))?;

        if let Some(label) = graph.label() {
            if let Some(justification) = label.justification() {
                writeln_out!(
                    output,
                    "{}={}",
                    quoted("labeljust"),
                    quoted(justification.as_str())
                )?;
            }
            if let Some(location) = label.location() {
                writeln_out!(
                    output,
                    "{}={}",
                    quoted("labelloc"),
                    quoted(location.as_str())
                )?;
            }
            writeln_out!(output, "{}={}", quoted("label"), quoted(label.text()))?;
        }

        for node in graph.nodes() {
            if node.attributes().is_empty() {
                writeln_out!(output, "{}", quoted(node.name()))?;
            } else {
                let attributes: Vec<String> = node
                    .attributes()
                    .iter()
                    .map(|(key, value)| format!("{}={}", quoted(key), quoted(value)))
                    .collect();
                writeln_out!(output, "{} [{}]", quoted(node.name()), attributes.join(","))?;
            }
        }

        for (source, target) in graph.edges() {
            writeln_out!(
                output,
                "{} -> {}",
                quoted(source.name()),
                quoted(target.name())
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Serialize the graph into an owned DOT string
    pub fn to_dot_string(&self, graph: &Graph) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(graph, &mut buffer)?;

        String::from_utf8(buffer).map_err(|source| {
            DepdotError::GraphError {
                message: format!("Serialized graph is not valid UTF-8: {source}"),
            }
            .into()
        })
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dot::Shape;
    use crate::graph::{Attributes, GraphLabel, Justification, Location};

    #[test]
    fn test_empty_graph_still_emits_wrapper() {
        let graph = Graph::new();

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert_eq!(dot, "digraph \"G\" {\n}\n");
    }

    #[test]
    fn test_node_without_attributes_is_bare() {
        let mut graph = Graph::new();
        graph.add_node("plain", "plain", Attributes::new());

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert_eq!(dot, "digraph \"G\" {\n\"plain\"\n}\n");
    }

    #[test]
    fn test_attributes_comma_joined_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_node(
            "styled",
            "styled",
            Attributes::new()
                .shape(Shape::Egg)
                .set("color", "#ff0099")
                .set("style", "dotted"),
        );

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert_eq!(
            dot,
            "digraph \"G\" {\n\"styled\" [\"shape\"=\"egg\",\"color\"=\"#ff0099\",\"style\"=\"dotted\"]\n}\n"
        );
    }

    #[test]
    fn test_label_header_order() {
        let mut graph = Graph::new();
        graph.set_label(
            GraphLabel::new("my custom header")
                .locate(Location::Top)
                .justify(Justification::Left),
        );
        graph.add_node("root", "root", Attributes::new().shape(Shape::Rectangle));

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert_eq!(
            dot,
            "digraph \"G\" {\n\
             \"labeljust\"=\"l\"\n\
             \"labelloc\"=\"t\"\n\
             \"label\"=\"my custom header\"\n\
             \"root\" [\"shape\"=\"rectangle\"]\n\
             }\n"
        );
    }

    #[test]
    fn test_label_without_placement_emits_label_only() {
        let mut graph = Graph::new();
        graph.set_label(GraphLabel::new("header"));

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert_eq!(dot, "digraph \"G\" {\n\"label\"=\"header\"\n}\n");
    }

    #[test]
    fn test_edges_reference_display_names() {
        let mut graph = Graph::new();
        graph.add_node("org.jetbrains.kotlin:kotlin-stdlib", "kotlin-stdlib", Attributes::new());
        graph.add_node("org.jetbrains:annotations", "jetbrains-annotations", Attributes::new());
        graph
            .add_edge(
                "org.jetbrains.kotlin:kotlin-stdlib",
                "org.jetbrains:annotations",
            )
            .unwrap();

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert!(dot.contains("\"kotlin-stdlib\" -> \"jetbrains-annotations\"\n"));
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let mut graph = Graph::new();
        graph.add_node("odd", "say \"hi\"", Attributes::new());

        let dot = DotWriter::new().to_dot_string(&graph).unwrap();

        assert!(dot.contains("\"say \\\"hi\\\"\""));
    }
}
