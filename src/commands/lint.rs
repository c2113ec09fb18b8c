//! Lint command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LintConfig;
use crate::error::EggbeaterError;

impl FromCommand for LintConfig {
    fn from_command(command: Commands) -> Result<Self, EggbeaterError> {
        match command {
            Commands::Lint {
                roles_dir,
                cookbooks,
                thresholds,
            } => LintConfig::builder()
                .with_roles_dir(roles_dir)
                .with_cookbook_paths(cookbooks.cookbook_path)
                .with_max_circuits(thresholds.max_circuits)
                .with_max_sccs(thresholds.max_sccs)
                .with_max_cookbooks_per_scc(thresholds.max_cookbooks_per_scc)
                .build(),
            _ => Err(EggbeaterError::ConfigurationError {
                message: "Invalid command type for LintConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LintConfig);

/// Execute the lint command over a roles directory
pub fn execute_lint_command(command: Commands) -> Result<()> {
    let config =
        LintConfig::from_command(command).wrap_err("Failed to parse lint command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lint::LintExecutor;
    LintExecutor::execute(config)
}
