//! Lint command executor

use std::path::{Path, PathBuf};

use console::style;
use miette::{Result, WrapErr};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::analysis::RoleAnalyzer;
use crate::chef::Role;
use crate::config::LintConfig;
use crate::constants::roles;
use crate::error::EggbeaterError;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

pub struct LintExecutor;

/// Counts extracted from one role's successful analysis.
#[derive(Debug, Clone)]
struct RoleStats {
    role: String,
    circuits: usize,
    scc_sizes: Vec<usize>,
}

/// Highest value observed for one metric across all roles, reported on
/// success so threshold tuning has a feedback loop.
#[derive(Debug, Clone)]
struct ClosestMatch {
    metric: &'static str,
    max: usize,
    role: String,
    value: usize,
}

impl ClosestMatch {
    fn observe(&mut self, role: &str, value: usize) {
        if value > self.value {
            self.role = role.to_string();
            self.value = value;
        }
    }
}

impl CommandExecutor for LintExecutor {
    type Config = LintConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let role_files = discover_role_files(&config.roles_dir)
            .wrap_err_with(|| format!("Failed walking '{}'", config.roles_dir.display()))?;

        eprintln!(
            "\n{} Linting {} Chef {}...\n",
            style("🥚").cyan(),
            style(role_files.len()).bold(),
            pluralize("role", role_files.len())
        );

        let progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };
        let bar = progress.as_ref().map(|p| p.start_lint(role_files.len() as u64));

        // one analyzer per role; nothing is shared between workers
        let results: Vec<(PathBuf, Result<RoleStats, EggbeaterError>)> = role_files
            .par_iter()
            .map(|path| {
                let outcome = lint_role(&config, path);
                if let Some(bar) = bar.as_ref() {
                    bar.inc(1);
                }
                (path.clone(), outcome)
            })
            .collect();

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        // threshold checks and closest-match counters run serially after the
        // parallel analyses have completed
        let mut closest = [
            ClosestMatch {
                metric: "max-circuits",
                max: config.max_circuits,
                role: String::new(),
                value: 0,
            },
            ClosestMatch {
                metric: "max-sccs",
                max: config.max_sccs,
                role: String::new(),
                value: 0,
            },
            ClosestMatch {
                metric: "max-cookbooks-per-scc",
                max: config.max_cookbooks_per_scc,
                role: String::new(),
                value: 0,
            },
        ];
        let mut input_errors = Vec::new();
        let mut violations = Vec::new();

        for (path, outcome) in results {
            match outcome {
                Ok(stats) => {
                    violations.extend(evaluate_thresholds(&stats, &config));
                    closest[0].observe(&stats.role, stats.circuits);
                    closest[1].observe(&stats.role, stats.scc_sizes.len());
                    closest[2].observe(&stats.role, stats.scc_sizes.iter().copied().max().unwrap_or(0));
                }
                Err(error) => input_errors.push((path, error)),
            }
        }

        if input_errors.is_empty() && violations.is_empty() {
            eprintln!(
                "{} No threshold was reached! {}",
                style("✓").green().bold(),
                style("🍻").dim()
            );
            print_closest_matches(&closest);
            return Ok(());
        }

        if !input_errors.is_empty() {
            eprintln!(
                "{} {} {} could not be analyzed:\n",
                style("✗").red().bold(),
                style(input_errors.len()).bold(),
                pluralize("role", input_errors.len())
            );
            for (path, error) in &input_errors {
                eprintln!("  {} {}: {}", style("→").dim(), path.display(), error);
            }
        }

        if !violations.is_empty() {
            eprintln!(
                "\n{} {} threshold {}:\n",
                style("✗").red().bold(),
                style(violations.len()).bold(),
                pluralize("violation", violations.len())
            );
            for violation in &violations {
                eprintln!("  {} {}", style("→").dim(), violation);
            }
        }

        std::process::exit(1);
    }
}

/// Non-recursive scan of the roles directory for `.json` files, sorted so
/// the report order does not depend on filesystem iteration order.
fn discover_role_files(roles_dir: &Path) -> Result<Vec<PathBuf>, EggbeaterError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(roles_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| EggbeaterError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .path()
            .extension()
            .is_none_or(|ext| ext != roles::FILE_EXTENSION)
        {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();

    Ok(files)
}

fn lint_role(config: &LintConfig, path: &Path) -> Result<RoleStats, EggbeaterError> {
    let role = Role::from_file(path)?;

    let analyzer = RoleAnalyzer::new(config.cookbook_paths.clone(), config.roles_dir.clone());
    let report = analyzer.analyze(&role.name)?;
    let analysis = report.analysis();

    Ok(RoleStats {
        role: role.name,
        circuits: analysis.cycles().len(),
        scc_sizes: analysis.sccs().iter().map(Vec::len).collect(),
    })
}

fn evaluate_thresholds(stats: &RoleStats, config: &LintConfig) -> Vec<EggbeaterError> {
    let mut violations = Vec::new();

    if stats.circuits > config.max_circuits {
        violations.push(EggbeaterError::ThresholdExceeded {
            role: stats.role.clone(),
            metric: "max-circuits".to_string(),
            found: stats.circuits,
            max: config.max_circuits,
        });
    }

    if stats.scc_sizes.len() > config.max_sccs {
        violations.push(EggbeaterError::ThresholdExceeded {
            role: stats.role.clone(),
            metric: "max-sccs".to_string(),
            found: stats.scc_sizes.len(),
            max: config.max_sccs,
        });
    }

    for (i, size) in stats.scc_sizes.iter().enumerate() {
        if *size > config.max_cookbooks_per_scc {
            violations.push(EggbeaterError::ThresholdExceeded {
                role: stats.role.clone(),
                metric: format!("max-cookbooks-per-scc (component {})", i + 1),
                found: *size,
                max: config.max_cookbooks_per_scc,
            });
        }
    }

    violations
}

fn print_closest_matches(closest: &[ClosestMatch]) {
    eprintln!("\nClosest matches:");
    for m in closest {
        eprintln!("\n  {}: {}", style(m.metric).bold(), m.max);
        eprintln!("  role: {}", m.role);
        eprintln!("  found: {}", m.value);
    }
}
