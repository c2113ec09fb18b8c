use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CookbookArgs, FormatArgs, ThresholdArgs};

#[derive(Parser)]
#[command(
    name = "eggbeater",
    about = "🥚 Untangle Chef cookbook dependency cycles",
    long_about = "eggbeater walks a Chef role's run_list, materializes the cookbook dependency \
                  graph reachable from it, and reports strongly connected components and \
                  distinct dependency cycles in several output formats.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one role's cookbook dependency graph
    ///
    /// Loads the role file, expands its run_list into the full cookbook
    /// dependency graph, and renders the traversal tree together with the
    /// strongly connected components and all distinct cycles.
    #[command(
        long_about = "Analyze a single Chef role. The role file is decoded, every nested role \
                      and recipe reference is resolved against the roles directory and the \
                      cookbook search paths, and the resulting directed graph is checked for \
                      strongly connected components (Tarjan) and distinct elementary cycles. \
                      The roles directory is the role file's parent directory."
    )]
    Analyze {
        /// Path to the role JSON file
        #[arg(value_name = "ROLE_PATH", env = "EGGBEATER_ROLE_PATH")]
        role_path: PathBuf,

        #[command(flatten)]
        cookbooks: CookbookArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Lint every role in a directory against cycle thresholds
    ///
    /// Analyzes each role found in the roles directory and fails when any
    /// role exceeds the configured maximums for cycles, strongly connected
    /// components, or cookbooks per component.
    #[command(
        long_about = "Lint all Chef roles in a directory. Every role is analyzed independently \
                      (in parallel) and checked against the --max-circuits, --max-sccs and \
                      --max-cookbooks-per-scc thresholds. All failures are reported, not just \
                      the first; the exit status is nonzero if anything was reported. On \
                      success a closest-match summary shows how near each metric came to its \
                      threshold."
    )]
    Lint {
        /// Directory containing role JSON files
        #[arg(value_name = "ROLES_DIR", env = "EGGBEATER_ROLES_DIR")]
        roles_dir: PathBuf,

        #[command(flatten)]
        cookbooks: CookbookArgs,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Traversal tree plus SCC and cycle summary
    Tree,
    /// Machine-readable analysis record
    Json,
    /// Graphviz DOT document
    Dot,
}
