//! Lint command configuration

use std::path::PathBuf;

/// Configuration for the lint command
///
/// Thresholds are maximums: a role fails when the observed count is strictly
/// greater than the configured value.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Directory containing role JSON files
    pub roles_dir: PathBuf,
    /// Cookbook search paths, tried in order
    pub cookbook_paths: Vec<PathBuf>,
    /// Maximum number of distinct circular dependencies accepted
    pub max_circuits: usize,
    /// Maximum number of strongly connected components accepted
    pub max_sccs: usize,
    /// Maximum number of cookbooks per strongly connected component
    pub max_cookbooks_per_scc: usize,
}

impl LintConfig {
    pub fn builder() -> LintConfigBuilder {
        LintConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LintConfigBuilder {
    roles_dir: Option<PathBuf>,
    cookbook_paths: Option<Vec<PathBuf>>,
    max_circuits: Option<usize>,
    max_sccs: Option<usize>,
    max_cookbooks_per_scc: Option<usize>,
}

impl LintConfigBuilder {
    pub fn new() -> Self {
        Self {
            roles_dir: None,
            cookbook_paths: None,
            max_circuits: None,
            max_sccs: None,
            max_cookbooks_per_scc: None,
        }
    }

    pub fn with_roles_dir(mut self, roles_dir: PathBuf) -> Self {
        self.roles_dir = Some(roles_dir);
        self
    }

    pub fn with_cookbook_paths(mut self, cookbook_paths: Vec<PathBuf>) -> Self {
        self.cookbook_paths = Some(cookbook_paths);
        self
    }

    pub fn with_max_circuits(mut self, max_circuits: usize) -> Self {
        self.max_circuits = Some(max_circuits);
        self
    }

    pub fn with_max_sccs(mut self, max_sccs: usize) -> Self {
        self.max_sccs = Some(max_sccs);
        self
    }

    pub fn with_max_cookbooks_per_scc(mut self, max_cookbooks_per_scc: usize) -> Self {
        self.max_cookbooks_per_scc = Some(max_cookbooks_per_scc);
        self
    }
}

impl crate::common::ConfigBuilder for LintConfigBuilder {
    type Config = LintConfig;

    fn build(self) -> Result<Self::Config, crate::error::EggbeaterError> {
        Ok(LintConfig {
            roles_dir: self.roles_dir.ok_or_else(|| {
                crate::error::EggbeaterError::ConfigurationError {
                    message: "Missing required field: roles_dir".to_string(),
                }
            })?,
            cookbook_paths: self.cookbook_paths.ok_or_else(|| {
                crate::error::EggbeaterError::ConfigurationError {
                    message: "Missing required field: cookbook_paths".to_string(),
                }
            })?,
            max_circuits: self.max_circuits.unwrap_or(0),
            max_sccs: self.max_sccs.unwrap_or(0),
            max_cookbooks_per_scc: self.max_cookbooks_per_scc.unwrap_or(0),
        })
    }
}
