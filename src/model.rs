//! Input data model for the generator
//!
//! The types in this module describe an already-resolved dependency forest:
//! a root project, its sub-projects, the dependency configurations each
//! project exposes, and the resolved dependency tree of every configuration.
//! The crate never performs resolution itself; these structures are supplied
//! whole by the caller, either programmatically or deserialized from a model
//! file.

use serde::{Deserialize, Serialize};

use crate::common::ConfigBuilder;
use crate::error::DepdotError;

/// A project in the forest, with its sub-projects and configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    name: String,
    #[serde(default)]
    sub_projects: Vec<ProjectRef>,
    #[serde(default)]
    project_dependencies: Vec<String>,
    #[serde(default)]
    configurations: Vec<Configuration>,
}

impl ProjectRef {
    pub fn builder() -> ProjectRefBuilder {
        ProjectRefBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sub_projects(&self) -> &[ProjectRef] {
        &self.sub_projects
    }

    /// Names of other projects this project declares a direct dependency on
    pub fn project_dependencies(&self) -> &[String] {
        &self.project_dependencies
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }
}

#[derive(Default)]
pub struct ProjectRefBuilder {
    name: Option<String>,
    sub_projects: Vec<ProjectRef>,
    project_dependencies: Vec<String>,
    configurations: Vec<Configuration>,
}

impl ProjectRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_sub_projects(mut self, sub_projects: Vec<ProjectRef>) -> Self {
        self.sub_projects = sub_projects;
        self
    }

    pub fn with_project_dependencies(mut self, project_dependencies: Vec<String>) -> Self {
        self.project_dependencies = project_dependencies;
        self
    }

    pub fn with_configurations(mut self, configurations: Vec<Configuration>) -> Self {
        self.configurations = configurations;
        self
    }
}

impl ConfigBuilder for ProjectRefBuilder {
    type Config = ProjectRef;

    fn build(self) -> Result<Self::Config, DepdotError> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DepdotError::ConfigurationError {
                message: "Missing required field: name".to_string(),
            })?;

        Ok(ProjectRef {
            name,
            sub_projects: self.sub_projects,
            project_dependencies: self.project_dependencies,
            configurations: self.configurations,
        })
    }
}

/// A named dependency scope of a project with its resolved first-level roots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    name: String,
    #[serde(default)]
    dependencies: Vec<ResolvedDependency>,
}

impl Configuration {
    pub fn new(name: &str, dependencies: Vec<ResolvedDependency>) -> Self {
        Self {
            name: name.to_string(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved first-level dependencies, in resolution-reported order
    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }
}

/// A node in an already-resolved dependency tree
///
/// The same `(group, artifact)` pair may recur at multiple points across
/// trees; the traversal tolerates repeats, so trees do not need any
/// deduplication before being handed to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDependency {
    group: String,
    artifact: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    children: Vec<ResolvedDependency>,
}

impl ResolvedDependency {
    pub fn builder() -> ResolvedDependencyBuilder {
        ResolvedDependencyBuilder::new()
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn children(&self) -> &[ResolvedDependency] {
        &self.children
    }
}

#[derive(Default)]
pub struct ResolvedDependencyBuilder {
    group: Option<String>,
    artifact: Option<String>,
    version: Option<String>,
    children: Vec<ResolvedDependency>,
}

impl ResolvedDependencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_artifact(mut self, artifact: &str) -> Self {
        self.artifact = Some(artifact.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<ResolvedDependency>) -> Self {
        self.children = children;
        self
    }
}

impl ConfigBuilder for ResolvedDependencyBuilder {
    type Config = ResolvedDependency;

    fn build(self) -> Result<Self::Config, DepdotError> {
        Ok(ResolvedDependency {
            group: self.group.ok_or_else(|| DepdotError::ConfigurationError {
                message: "Missing required field: group".to_string(),
            })?,
            artifact: self
                .artifact
                .ok_or_else(|| DepdotError::ConfigurationError {
                    message: "Missing required field: artifact".to_string(),
                })?,
            version: self.version.unwrap_or_default(),
            children: self.children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ref_builder() {
        let project = ProjectRef::builder()
            .with_name("single")
            .with_configurations(vec![Configuration::new("compileClasspath", vec![])])
            .build()
            .unwrap();

        assert_eq!(project.name(), "single");
        assert!(project.sub_projects().is_empty());
        assert_eq!(project.configurations().len(), 1);
        assert_eq!(project.configurations()[0].name(), "compileClasspath");
    }

    #[test]
    fn test_project_ref_builder_requires_name() {
        let result = ProjectRef::builder().build();

        match result {
            Err(DepdotError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: name");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_project_ref_builder_rejects_empty_name() {
        assert!(ProjectRef::builder().with_name("").build().is_err());
    }

    #[test]
    fn test_resolved_dependency_builder() {
        let dependency = ResolvedDependency::builder()
            .with_group("io.reactivex.rxjava2")
            .with_artifact("rxjava")
            .with_version("2.1.10")
            .build()
            .unwrap();

        assert_eq!(dependency.group(), "io.reactivex.rxjava2");
        assert_eq!(dependency.artifact(), "rxjava");
        assert_eq!(dependency.version(), "2.1.10");
        assert!(dependency.children().is_empty());
    }

    #[test]
    fn test_resolved_dependency_builder_requires_coordinates() {
        assert!(ResolvedDependency::builder().with_group("junit").build().is_err());
        assert!(
            ResolvedDependency::builder()
                .with_artifact("junit")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_model_deserializes_from_json() {
        let json = r#"{
            "name": "single",
            "configurations": [{
                "name": "compileClasspath",
                "dependencies": [{
                    "group": "org.jetbrains.kotlin",
                    "artifact": "kotlin-stdlib",
                    "version": "1.2.30",
                    "children": [{
                        "group": "org.jetbrains",
                        "artifact": "annotations",
                        "version": "13.0"
                    }]
                }]
            }]
        }"#;

        let project: ProjectRef = serde_json::from_str(json).unwrap();

        assert_eq!(project.name(), "single");
        let roots = project.configurations()[0].dependencies();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].artifact(), "kotlin-stdlib");
        assert_eq!(roots[0].children()[0].artifact(), "annotations");
    }

    #[test]
    fn test_model_deserializes_from_toml() {
        let toml = r#"
            name = "app"
            project_dependencies = ["lib"]

            [[configurations]]
            name = "runtimeClasspath"

            [[configurations.dependencies]]
            group = "junit"
            artifact = "junit"
            version = "4.12"
        "#;

        let project: ProjectRef = toml::from_str(toml).unwrap();

        assert_eq!(project.name(), "app");
        assert_eq!(project.project_dependencies(), ["lib".to_string()]);
        assert_eq!(project.configurations()[0].dependencies()[0].group(), "junit");
    }
}
