use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "depdot",
    about = "Generate Graphviz DOT graphs from resolved dependency models",
    long_about = "depdot turns an already-resolved dependency model into a Graphviz DOT \
                  digraph. The model describes a project tree with its configurations and \
                  resolved dependency trees; depdot deduplicates modules across versions, \
                  bounds shared subtrees to a single expansion, and emits byte-stable DOT \
                  output in discovery order.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a DOT graph from a dependency model file
    ///
    /// Reads a model file (JSON by default, TOML for a .toml extension),
    /// builds the dependency graph, and writes DOT text to stdout or to the
    /// given output file.
    #[command(
        long_about = "Generate a Graphviz DOT digraph from a dependency model file. The model \
                      is JSON unless the file has a .toml extension. Projects, configurations, \
                      and module groups can be excluded, transitive descent can be disabled, \
                      and an optional header label is emitted at the top of the graph. \
                      Configurations whose names contain 'test' are always skipped."
    )]
    Generate {
        /// Path to the dependency model file
        #[arg(value_name = "MODEL", env = "DEPDOT_MODEL")]
        model: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DEPDOT_OUTPUT")]
        output: Option<PathBuf>,

        /// Exclude a project and everything only it pulls in (repeatable)
        #[arg(long = "exclude-project", value_name = "NAME")]
        exclude_projects: Vec<String>,

        /// Exclude a configuration by exact name (repeatable)
        #[arg(long = "exclude-configuration", value_name = "NAME")]
        exclude_configurations: Vec<String>,

        /// Exclude every module of a group (repeatable)
        #[arg(long = "exclude-group", value_name = "GROUP")]
        exclude_groups: Vec<String>,

        /// Show only first-level dependencies
        #[arg(long, env = "DEPDOT_NO_TRANSITIVES")]
        no_transitives: bool,

        /// Header label placed at the top of the graph
        #[arg(long, value_name = "TEXT", env = "DEPDOT_LABEL")]
        label: Option<String>,
    },
}
