//! Analyze command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::AnalyzeConfig;
use crate::error::EggbeaterError;

impl FromCommand for AnalyzeConfig {
    fn from_command(command: Commands) -> Result<Self, EggbeaterError> {
        match command {
            Commands::Analyze {
                role_path,
                cookbooks,
                format,
            } => AnalyzeConfig::builder()
                .with_role_path(role_path)
                .with_cookbook_paths(cookbooks.cookbook_path)
                .with_output(format.output)
                .build(),
            _ => Err(EggbeaterError::ConfigurationError {
                message: "Invalid command type for AnalyzeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(AnalyzeConfig);

/// Execute the analyze command for a single role
pub fn execute_analyze_command(command: Commands) -> Result<()> {
    let config = AnalyzeConfig::from_command(command)
        .wrap_err("Failed to parse analyze command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::analyze::AnalyzeExecutor;
    AnalyzeExecutor::execute(config)
}
