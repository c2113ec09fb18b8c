//! Analyze command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Path to the role JSON file to analyze
    pub role_path: PathBuf,
    /// Cookbook search paths, tried in order
    pub cookbook_paths: Vec<PathBuf>,
    /// Output format for the report
    pub output: OutputFormat,
}

impl AnalyzeConfig {
    pub fn builder() -> AnalyzeConfigBuilder {
        AnalyzeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AnalyzeConfigBuilder {
    role_path: Option<PathBuf>,
    cookbook_paths: Option<Vec<PathBuf>>,
    output: Option<OutputFormat>,
}

impl AnalyzeConfigBuilder {
    pub fn new() -> Self {
        Self {
            role_path: None,
            cookbook_paths: None,
            output: None,
        }
    }

    pub fn with_role_path(mut self, role_path: PathBuf) -> Self {
        self.role_path = Some(role_path);
        self
    }

    pub fn with_cookbook_paths(mut self, cookbook_paths: Vec<PathBuf>) -> Self {
        self.cookbook_paths = Some(cookbook_paths);
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for AnalyzeConfigBuilder {
    type Config = AnalyzeConfig;

    fn build(self) -> Result<Self::Config, crate::error::EggbeaterError> {
        Ok(AnalyzeConfig {
            role_path: self.role_path.ok_or_else(|| {
                crate::error::EggbeaterError::ConfigurationError {
                    message: "Missing required field: role_path".to_string(),
                }
            })?,
            cookbook_paths: self.cookbook_paths.ok_or_else(|| {
                crate::error::EggbeaterError::ConfigurationError {
                    message: "Missing required field: cookbook_paths".to_string(),
                }
            })?,
            output: self.output.ok_or_else(|| {
                crate::error::EggbeaterError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
        })
    }
}
