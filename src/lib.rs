//! # Eggbeater - Untangle Chef Cookbook Dependency Cycles
//!
//! Eggbeater loads a Chef role, walks its run_list through nested roles and
//! cookbook metadata, and materializes the directed graph of
//! cookbook-to-cookbook dependencies reachable from that role. Two
//! structural analyses run on the graph:
//!
//! - **SCCs**: all maximal strongly connected components (Tarjan), reported
//!   when they contain more than one cookbook
//! - **Cycles**: every distinct elementary circuit (Tarjan's enumeration
//!   algorithm), each reported exactly once
//!
//! Results render as an ASCII tree with a summary, a JSON record, or a
//! Graphviz DOT document, and a lint mode fails CI when a roles directory
//! exceeds configured thresholds.
//!
//! ## Usage
//!
//! The analyses can be used programmatically on any adjacency mapping:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use eggbeater::graph::{CircuitFinder, SccFinder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
//! graph.insert("foo".to_string(), vec!["bar".to_string()]);
//! graph.insert("bar".to_string(), vec!["foo".to_string()]);
//!
//! let sccs = SccFinder::new(&graph).find()?;
//! assert_eq!(sccs, vec![vec!["foo".to_string(), "bar".to_string()]]);
//!
//! let cycles = CircuitFinder::new(&graph).find()?;
//! assert_eq!(
//!     cycles,
//!     vec![vec!["bar".to_string(), "foo".to_string(), "bar".to_string()]]
//! );
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analysis;
pub mod chef;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Re-export commonly used types
pub use crate::analysis::{Analysis, RoleAnalyzer, RoleReport};
pub use crate::error::EggbeaterError;
pub use crate::graph::{Adjacency, CircuitFinder, GraphWalker, SccFinder};

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
