//! Generate command configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub model: PathBuf,
    pub output: Option<PathBuf>,
    pub exclude_projects: Vec<String>,
    pub exclude_configurations: Vec<String>,
    pub exclude_groups: Vec<String>,
    pub no_transitives: bool,
    pub label: Option<String>,
}

impl GenerateOptions {
    pub fn builder() -> GenerateOptionsBuilder {
        GenerateOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GenerateOptionsBuilder {
    model: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    exclude_projects: Option<Vec<String>>,
    exclude_configurations: Option<Vec<String>>,
    exclude_groups: Option<Vec<String>>,
    no_transitives: Option<bool>,
    label: Option<Option<String>>,
}

impl GenerateOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: PathBuf) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_exclude_projects(mut self, exclude_projects: Vec<String>) -> Self {
        self.exclude_projects = Some(exclude_projects);
        self
    }

    pub fn with_exclude_configurations(mut self, exclude_configurations: Vec<String>) -> Self {
        self.exclude_configurations = Some(exclude_configurations);
        self
    }

    pub fn with_exclude_groups(mut self, exclude_groups: Vec<String>) -> Self {
        self.exclude_groups = Some(exclude_groups);
        self
    }

    pub fn with_no_transitives(mut self, no_transitives: bool) -> Self {
        self.no_transitives = Some(no_transitives);
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }
}

impl crate::common::ConfigBuilder for GenerateOptionsBuilder {
    type Config = GenerateOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepdotError> {
        Ok(GenerateOptions {
            model: self
                .model
                .ok_or_else(|| crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: model".to_string(),
                })?,
            output: self
                .output
                .ok_or_else(|| crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                })?,
            exclude_projects: self.exclude_projects.ok_or_else(|| {
                crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: exclude_projects".to_string(),
                }
            })?,
            exclude_configurations: self.exclude_configurations.ok_or_else(|| {
                crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: exclude_configurations".to_string(),
                }
            })?,
            exclude_groups: self.exclude_groups.ok_or_else(|| {
                crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: exclude_groups".to_string(),
                }
            })?,
            no_transitives: self.no_transitives.ok_or_else(|| {
                crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: no_transitives".to_string(),
                }
            })?,
            label: self
                .label
                .ok_or_else(|| crate::error::DepdotError::ConfigurationError {
                    message: "Missing required field: label".to_string(),
                })?,
        })
    }
}
