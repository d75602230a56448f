//! Core graph types
//!
//! An insertion-ordered collection of uniquely-keyed nodes and deduplicated
//! directed edges, plus the optional graph-level label. One `Graph` instance
//! is built per generation request and handed to the serializer.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::dot::Shape;
use crate::error::DepdotError;

/// Insertion-ordered attribute map attached to a node
///
/// Setting an existing key replaces its value but keeps its position, so the
/// serialized attribute order reflects first assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, existing_value)) => *existing_value = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        self
    }

    pub fn shape(self, shape: Shape) -> Self {
        self.set("shape", shape.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Add every key from `other` that is not yet set, preserving order
    pub fn merge_missing(&mut self, other: Attributes) {
        for (key, value) in other.entries {
            if self.get(&key).is_none() {
                self.entries.push((key, value));
            }
        }
    }
}

/// Horizontal placement of the graph-level label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    Left,
    Center,
    Right,
}

impl Justification {
    pub fn as_str(self) -> &'static str {
        match self {
            Justification::Left => "l",
            Justification::Center => "c",
            Justification::Right => "r",
        }
    }
}

/// Vertical placement of the graph-level label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Top,
    Bottom,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Top => "t",
            Location::Bottom => "b",
        }
    }
}

/// Optional header label emitted before any nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLabel {
    text: String,
    justification: Option<Justification>,
    location: Option<Location>,
}

impl GraphLabel {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            justification: None,
            location: None,
        }
    }

    pub fn justify(mut self, justification: Justification) -> Self {
        self.justification = Some(justification);
        self
    }

    pub fn locate(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn justification(&self) -> Option<Justification> {
        self.justification
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

/// A node in the output graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    key: String,
    name: String,
    attributes: Attributes,
}

impl GraphNode {
    /// Unique identity of the node (project name or `group:artifact`)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name emitted as the DOT identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// The accumulated dependency graph
pub struct Graph {
    graph: DiGraph<GraphNode, ()>,
    indices: HashMap<String, NodeIndex>,
    seen_edges: HashSet<(NodeIndex, NodeIndex)>,
    label: Option<GraphLabel>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            seen_edges: HashSet::new(),
            label: None,
        }
    }

    pub fn set_label(&mut self, label: GraphLabel) {
        self.label = Some(label);
    }

    pub fn label(&self) -> Option<&GraphLabel> {
        self.label.as_ref()
    }

    /// Register a node, or merge attributes into an existing one
    ///
    /// The first registration wins for identity and display name; later
    /// registrations only contribute attribute keys not yet set.
    pub fn add_node(&mut self, key: &str, name: &str, attributes: Attributes) -> NodeIndex {
        if let Some(&index) = self.indices.get(key) {
            self.graph[index].attributes.merge_missing(attributes);
            return index;
        }

        let index = self.graph.add_node(GraphNode {
            key: key.to_string(),
            name: name.to_string(),
            attributes,
        });
        self.indices.insert(key.to_string(), index);
        index
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    pub fn node(&self, key: &str) -> Option<&GraphNode> {
        self.indices.get(key).map(|&index| &self.graph[index])
    }

    /// Append a directed edge unless the identical ordered pair exists
    ///
    /// Returns whether the edge was newly added. Both endpoints must already
    /// be registered.
    pub fn add_edge(&mut self, source_key: &str, target_key: &str) -> Result<bool, DepdotError> {
        let source = self.index_of(source_key)?;
        let target = self.index_of(target_key)?;

        if !self.seen_edges.insert((source, target)) {
            return Ok(false);
        }

        self.graph.add_edge(source, target, ());
        Ok(true)
    }

    fn index_of(&self, key: &str) -> Result<NodeIndex, DepdotError> {
        self.indices
            .get(key)
            .copied()
            .ok_or_else(|| DepdotError::GraphError {
                message: format!("Edge references unregistered node '{key}'"),
            })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in first-discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Edges in first-discovery order
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }
}
