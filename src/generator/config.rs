//! Generator configuration
//!
//! A plain bundle of predicates and formatting callbacks that parameterizes
//! one generation call. Every decision point is independently overridable;
//! the default configuration includes everything except test-scoped
//! configurations and decorates every node with the default rectangle shape.

use crate::dot::Shape;
use crate::graph::{Attributes, GraphLabel};
use crate::identity;
use crate::model::{Configuration, ProjectRef, ResolvedDependency};

pub type ProjectPredicate = Box<dyn Fn(&ProjectRef) -> bool>;
pub type ConfigurationPredicate = Box<dyn Fn(&Configuration) -> bool>;
pub type DependencyPredicate = Box<dyn Fn(&ResolvedDependency) -> bool>;
pub type ProjectNodeHook = Box<dyn Fn(Attributes, &ProjectRef) -> Attributes>;
pub type DependencyNodeHook = Box<dyn Fn(Attributes, &ResolvedDependency) -> Attributes>;
pub type DisplayNameStrategy = Box<dyn Fn(&ResolvedDependency) -> String>;

pub struct GeneratorConfig {
    include_project: ProjectPredicate,
    include_configuration: ConfigurationPredicate,
    include: DependencyPredicate,
    children: DependencyPredicate,
    project_node: ProjectNodeHook,
    dependency_node: DependencyNodeHook,
    display_name: DisplayNameStrategy,
    label: Option<GraphLabel>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_project: Box::new(|_| true),
            include_configuration: Box::new(|configuration| {
                !configuration.name().to_ascii_lowercase().contains("test")
            }),
            include: Box::new(|_| true),
            children: Box::new(|_| true),
            project_node: Box::new(|attributes, _| attributes),
            dependency_node: Box::new(|attributes, _| attributes),
            display_name: Box::new(|dependency| {
                identity::display_name(dependency.group(), dependency.artifact())
            }),
            label: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes every node starts out with before any hook runs
    pub fn default_node_attributes() -> Attributes {
        Attributes::new().shape(Shape::Rectangle)
    }

    pub fn with_include_project(
        mut self,
        include_project: impl Fn(&ProjectRef) -> bool + 'static,
    ) -> Self {
        self.include_project = Box::new(include_project);
        self
    }

    pub fn with_include_configuration(
        mut self,
        include_configuration: impl Fn(&Configuration) -> bool + 'static,
    ) -> Self {
        self.include_configuration = Box::new(include_configuration);
        self
    }

    pub fn with_include(
        mut self,
        include: impl Fn(&ResolvedDependency) -> bool + 'static,
    ) -> Self {
        self.include = Box::new(include);
        self
    }

    pub fn with_children(
        mut self,
        children: impl Fn(&ResolvedDependency) -> bool + 'static,
    ) -> Self {
        self.children = Box::new(children);
        self
    }

    pub fn with_project_node(
        mut self,
        project_node: impl Fn(Attributes, &ProjectRef) -> Attributes + 'static,
    ) -> Self {
        self.project_node = Box::new(project_node);
        self
    }

    pub fn with_dependency_node(
        mut self,
        dependency_node: impl Fn(Attributes, &ResolvedDependency) -> Attributes + 'static,
    ) -> Self {
        self.dependency_node = Box::new(dependency_node);
        self
    }

    pub fn with_display_name(
        mut self,
        display_name: impl Fn(&ResolvedDependency) -> String + 'static,
    ) -> Self {
        self.display_name = Box::new(display_name);
        self
    }

    pub fn with_label(mut self, label: GraphLabel) -> Self {
        self.label = Some(label);
        self
    }

    pub fn include_project(&self, project: &ProjectRef) -> bool {
        (self.include_project)(project)
    }

    pub fn include_configuration(&self, configuration: &Configuration) -> bool {
        (self.include_configuration)(configuration)
    }

    pub fn include(&self, dependency: &ResolvedDependency) -> bool {
        (self.include)(dependency)
    }

    pub fn children(&self, dependency: &ResolvedDependency) -> bool {
        (self.children)(dependency)
    }

    pub fn project_node(&self, attributes: Attributes, project: &ProjectRef) -> Attributes {
        (self.project_node)(attributes, project)
    }

    pub fn dependency_node(
        &self,
        attributes: Attributes,
        dependency: &ResolvedDependency,
    ) -> Attributes {
        (self.dependency_node)(attributes, dependency)
    }

    pub fn display_name(&self, dependency: &ResolvedDependency) -> String {
        (self.display_name)(dependency)
    }

    pub fn label(&self) -> Option<&GraphLabel> {
        self.label.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn module(group: &str, artifact: &str) -> ResolvedDependency {
        ResolvedDependency::builder()
            .with_group(group)
            .with_artifact(artifact)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_excludes_test_configurations() {
        let config = GeneratorConfig::default();

        assert!(config.include_configuration(&Configuration::new("compileClasspath", vec![])));
        assert!(config.include_configuration(&Configuration::new("runtimeClasspath", vec![])));
        assert!(config.include_configuration(&Configuration::new("stagingCompileClasspath", vec![])));
        assert!(!config.include_configuration(&Configuration::new("testImplementation", vec![])));
        assert!(!config.include_configuration(&Configuration::new("testCompileClasspath", vec![])));
        assert!(
            !config.include_configuration(&Configuration::new("androidTestImplementation", vec![]))
        );
    }

    #[test]
    fn test_default_includes_everything_else() {
        let config = GeneratorConfig::default();
        let project = ProjectRef::builder().with_name("single").build().unwrap();
        let dependency = module("junit", "junit");

        assert!(config.include_project(&project));
        assert!(config.include(&dependency));
        assert!(config.children(&dependency));
    }

    #[test]
    fn test_default_display_name_uses_identity_heuristic() {
        let config = GeneratorConfig::default();

        assert_eq!(
            config.display_name(&module("org.jetbrains", "annotations")),
            "jetbrains-annotations"
        );
    }

    #[test]
    fn test_overrides_replace_single_decision_points() {
        let config = GeneratorConfig::default()
            .with_include(|dependency| dependency.group() != "io.reactivex.rxjava2")
            .with_display_name(|dependency| dependency.artifact().to_uppercase());

        assert!(!config.include(&module("io.reactivex.rxjava2", "rxjava")));
        assert!(config.include(&module("junit", "junit")));
        assert_eq!(config.display_name(&module("junit", "junit")), "JUNIT");
        // Untouched decision points keep their defaults.
        assert!(!config.include_configuration(&Configuration::new("testRuntimeClasspath", vec![])));
    }

    #[test]
    fn test_default_node_attributes_are_rectangle_only() {
        let attributes = GeneratorConfig::default_node_attributes();

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("shape"), Some("rectangle"));
    }
}
