//! Graph construction
//!
//! Walks a pre-resolved dependency model and accumulates the output
//! [`Graph`]. All filtering and styling decisions are delegated to the
//! [`GeneratorConfig`]; the generator itself only owns traversal order,
//! deduplication, and the diamond-dependency cutoff.

use std::collections::{HashMap, HashSet};

use crate::error::DepdotError;
use crate::generator::GeneratorConfig;
use crate::graph::Graph;
use crate::identity;
use crate::model::{ProjectRef, ResolvedDependency};

/// One generation request over a project tree
pub struct DotGenerator<'a> {
    root: &'a ProjectRef,
    config: &'a GeneratorConfig,
}

impl<'a> DotGenerator<'a> {
    pub fn new(root: &'a ProjectRef, config: &'a GeneratorConfig) -> Self {
        Self { root, config }
    }

    /// Build the dependency graph for the configured project tree
    ///
    /// Projects are visited in declaration order, the root first. Excluded
    /// projects are hard cuts: neither their dependencies nor edges pointing
    /// at them are emitted.
    pub fn generate_graph(&self) -> Result<Graph, DepdotError> {
        let mut graph = Graph::new();
        if let Some(label) = self.config.label() {
            graph.set_label(label.clone());
        }

        let candidates = collect_projects(self.root);
        let known: HashMap<&str, &ProjectRef> = candidates
            .iter()
            .map(|project| (project.name(), *project))
            .collect();
        let included: Vec<&ProjectRef> = candidates
            .iter()
            .copied()
            .filter(|project| self.config.include_project(project))
            .collect();

        // Module nodes are expanded at most once across the whole run, so a
        // diamond contributes its subtree a single time while every edge into
        // the shared node is still recorded.
        let mut expanded: HashSet<String> = HashSet::new();

        for project in &included {
            self.add_project_node(&mut graph, project);

            for dependency_name in project.project_dependencies() {
                let target = known.get(dependency_name.as_str()).copied().ok_or_else(|| {
                    DepdotError::UnknownProjectDependency {
                        project: project.name().to_string(),
                        dependency: dependency_name.clone(),
                    }
                })?;
                if !self.config.include_project(target) {
                    continue;
                }
                self.add_project_node(&mut graph, target);
                graph.add_edge(project.name(), target.name())?;
            }

            for configuration in project.configurations() {
                if !self.config.include_configuration(configuration) {
                    continue;
                }
                for dependency in configuration.dependencies() {
                    self.append(&mut graph, &mut expanded, project.name(), dependency)?;
                }
            }
        }

        Ok(graph)
    }

    fn add_project_node(&self, graph: &mut Graph, project: &ProjectRef) {
        let attributes = self
            .config
            .project_node(GeneratorConfig::default_node_attributes(), project);
        graph.add_node(project.name(), project.name(), attributes);
    }

    fn append(
        &self,
        graph: &mut Graph,
        expanded: &mut HashSet<String>,
        parent_key: &str,
        dependency: &ResolvedDependency,
    ) -> Result<(), DepdotError> {
        if !self.config.include(dependency) {
            return Ok(());
        }
        if dependency.group().is_empty() || dependency.artifact().is_empty() {
            return Err(DepdotError::MissingCoordinate {
                parent: parent_key.to_string(),
            });
        }

        let key = identity::module_key(dependency.group(), dependency.artifact());
        let name = self.config.display_name(dependency);
        let attributes = self
            .config
            .dependency_node(GeneratorConfig::default_node_attributes(), dependency);
        graph.add_node(&key, &name, attributes);
        graph.add_edge(parent_key, &key)?;

        if self.config.children(dependency) && expanded.insert(key.clone()) {
            for child in dependency.children() {
                self.append(graph, expanded, &key, child)?;
            }
        }

        Ok(())
    }
}

/// The root followed by every sub-project, preorder, in declaration order
fn collect_projects(root: &ProjectRef) -> Vec<&ProjectRef> {
    let mut projects = Vec::new();
    push_project(root, &mut projects);
    projects
}

fn push_project<'a>(project: &'a ProjectRef, into: &mut Vec<&'a ProjectRef>) {
    into.push(project);
    for sub_project in project.sub_projects() {
        push_project(sub_project, into);
    }
}
