//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Cookbook search path arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct CookbookArgs {
    /// Comma-separated cookbook search paths, tried in order
    #[arg(
        short = 'c',
        long = "cookbook-path",
        value_name = "PATHS",
        value_delimiter = ',',
        default_value = crate::constants::output::DEFAULT_COOKBOOK_PATH,
        env = "EGGBEATER_COOKBOOK_PATH"
    )]
    pub cookbook_path: Vec<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "EGGBEATER_OUTPUT"
    )]
    pub output: crate::cli::OutputFormat,
}

/// Lint threshold arguments
#[derive(Args, Debug, Clone)]
pub struct ThresholdArgs {
    /// Maximum number of distinct circular dependencies accepted
    #[arg(long, default_value_t = 0, env = "EGGBEATER_MAX_CIRCUITS")]
    pub max_circuits: usize,

    /// Maximum number of strongly connected components accepted
    #[arg(long, default_value_t = 0, env = "EGGBEATER_MAX_SCCS")]
    pub max_sccs: usize,

    /// Maximum number of cookbooks per strongly connected component
    #[arg(long, default_value_t = 0, env = "EGGBEATER_MAX_COOKBOOKS_PER_SCC")]
    pub max_cookbooks_per_scc: usize,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::EggbeaterError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::EggbeaterError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::EggbeaterError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
