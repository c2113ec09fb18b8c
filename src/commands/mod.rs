//! Command implementations for the eggbeater CLI
//!
//! - analyze: analyze one role's cookbook dependency graph
//! - lint: lint every role in a directory against cycle thresholds

pub mod analyze;
pub mod lint;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Analyze { .. } => analyze::execute_analyze_command(command),
        Commands::Lint { .. } => lint::execute_lint_command(command),
    }
}
