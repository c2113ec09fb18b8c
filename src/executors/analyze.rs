//! Analyze command executor

use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};

use crate::analysis::RoleAnalyzer;
use crate::chef::Role;
use crate::cli::OutputFormat;
use crate::config::AnalyzeConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{
    DotReportGenerator, JsonReportGenerator, ReportGenerator, TreeReportGenerator,
};

pub struct AnalyzeExecutor;

impl CommandExecutor for AnalyzeExecutor {
    type Config = AnalyzeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let role = Role::from_file(&config.role_path).wrap_err("Failed loading role")?;

        eprintln!(
            "{} Analyzing role '{}'...\n",
            style("🥚").cyan(),
            style(&role.name).bold()
        );

        // role names are resolved against the role file's own directory
        let roles_dir = match config.role_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let analyzer = RoleAnalyzer::new(config.cookbook_paths.clone(), roles_dir);
        let report = analyzer
            .analyze(&role.name)
            .wrap_err("Failed analyzing role dependency graph")?;

        if console::Term::stderr().is_term() {
            ProgressReporter::new().finish_analysis(report.analysis().cycles().len());
        }

        let rendered = match config.output {
            OutputFormat::Tree => TreeReportGenerator::new().generate_report(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
            OutputFormat::Dot => DotReportGenerator::new().generate_report(&report),
        }
        .wrap_err("Failed to generate report")?;

        print!("{rendered}");

        Ok(())
    }
}
