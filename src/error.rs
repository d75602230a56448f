use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid dependency model in '{file}'")]
#[diagnostic(
    code(depdot::model_parse_error),
    help("Check the model syntax near the highlighted position")
)]
pub struct ModelParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{message}")]
    pub span: Option<SourceSpan>,
    pub message: String,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepdotError {
    #[error("Failed to read model file '{path}'")]
    #[diagnostic(
        code(depdot::model_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    ModelReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ModelParseError(Box<ModelParseError>),

    #[error("Resolved dependency under '{parent}' is missing its group or artifact id")]
    #[diagnostic(
        code(depdot::missing_coordinate),
        help("Every resolved dependency must carry a non-empty group and artifact id")
    )]
    MissingCoordinate { parent: String },

    #[error("Project '{project}' declares a dependency on unknown project '{dependency}'")]
    #[diagnostic(
        code(depdot::unknown_project_dependency),
        help("Project dependencies must name a project present in the forest")
    )]
    UnknownProjectDependency { project: String, dependency: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(depdot::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depdot::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("IO error")]
    #[diagnostic(
        code(depdot::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depdot::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),
}
