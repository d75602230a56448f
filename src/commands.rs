//! Generate command implementation

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GenerateOptions;
use crate::dot::DotWriter;
use crate::error::{DepdotError, ModelParseError};
use crate::generator::{DotGenerator, GeneratorConfig};
use crate::graph::GraphLabel;
use crate::model::ProjectRef;

impl FromCommand for GenerateOptions {
    fn from_command(command: Commands) -> Result<Self, DepdotError> {
        match command {
            Commands::Generate {
                model,
                output,
                exclude_projects,
                exclude_configurations,
                exclude_groups,
                no_transitives,
                label,
            } => GenerateOptions::builder()
                .with_model(model)
                .with_output(output)
                .with_exclude_projects(exclude_projects)
                .with_exclude_configurations(exclude_configurations)
                .with_exclude_groups(exclude_groups)
                .with_no_transitives(no_transitives)
                .with_label(label)
                .build(),
        }
    }
}

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Generate { .. } => execute_generate_command(command),
    }
}

/// Execute the generate command for producing DOT graphs
pub fn execute_generate_command(command: Commands) -> Result<()> {
    let config = GenerateOptions::from_command(command)
        .wrap_err("Failed to parse generate command configuration")?;

    eprintln!(
        "{} Reading dependency model from {}...",
        style("📦").cyan(),
        style(config.model.display()).bold()
    );

    let root = read_model(&config.model)?;
    let generator_config = build_generator_config(&config);

    let graph = DotGenerator::new(&root, &generator_config)
        .generate_graph()
        .wrap_err("Failed to build dependency graph")?;

    eprintln!(
        "{} Built graph with {} nodes and {} edges",
        style("📊").cyan(),
        graph.node_count(),
        graph.edge_count()
    );

    let writer = DotWriter::new();
    if let Some(output_path) = config.output.as_ref() {
        let file = File::create(output_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!("Failed to create output file '{}'", output_path.display())
            })?;
        let mut output = BufWriter::new(file);
        writer.write(&graph, &mut output)?;
        output.flush().into_diagnostic()?;

        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );
    } else {
        writer.write(&graph, &mut io::stdout())?;
    }

    Ok(())
}

/// Read and deserialize a model file, JSON unless the extension is `.toml`
fn read_model(path: &Path) -> Result<ProjectRef, DepdotError> {
    let content = fs::read_to_string(path).map_err(|source| DepdotError::ModelReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let file = path.display().to_string();

    if path.extension().is_some_and(|extension| extension == "toml") {
        toml::from_str(&content).map_err(|error| {
            parse_error(
                &file,
                &content,
                error.span().map(SourceSpan::from),
                error.message().to_string(),
            )
        })
    } else {
        serde_json::from_str(&content).map_err(|error| {
            parse_error(
                &file,
                &content,
                span_at(&content, error.line(), error.column()),
                error.to_string(),
            )
        })
    }
}

fn parse_error(
    file: &str,
    content: &str,
    span: Option<SourceSpan>,
    message: String,
) -> DepdotError {
    DepdotError::ModelParseError(Box::new(ModelParseError {
        file: file.to_string(),
        source_code: NamedSource::new(file, content.to_string()),
        span,
        message,
    }))
}

/// Byte offset of a 1-based line and column position
fn span_at(content: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, text) in content.lines().enumerate() {
        if index + 1 == line {
            return Some((offset + column.saturating_sub(1), 0).into());
        }
        offset += text.len() + 1;
    }
    None
}

/// Translate CLI exclusions into generator callbacks
fn build_generator_config(options: &GenerateOptions) -> GeneratorConfig {
    let mut generator_config = GeneratorConfig::default();

    if !options.exclude_projects.is_empty() {
        let excluded = options.exclude_projects.clone();
        generator_config = generator_config
            .with_include_project(move |project| !excluded.iter().any(|name| name == project.name()));
    }

    if !options.exclude_configurations.is_empty() {
        let excluded = options.exclude_configurations.clone();
        // Replacing the default predicate, so the test-configuration rule is
        // restated here.
        generator_config = generator_config.with_include_configuration(move |configuration| {
            !configuration.name().to_ascii_lowercase().contains("test")
                && !excluded.iter().any(|name| name == configuration.name())
        });
    }

    if !options.exclude_groups.is_empty() {
        let excluded = options.exclude_groups.clone();
        generator_config = generator_config
            .with_include(move |dependency| !excluded.iter().any(|group| group == dependency.group()));
    }

    if options.no_transitives {
        generator_config = generator_config.with_children(|_| false);
    }

    if let Some(label) = options.label.as_ref() {
        generator_config = generator_config.with_label(GraphLabel::new(label));
    }

    generator_config
}
