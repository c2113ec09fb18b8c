//! Human-readable console report: the traversal tree followed by an SCC and
//! circuit summary.

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analysis::RoleReport;
use crate::error::EggbeaterError;
use crate::utils::string::pluralize;

pub struct TreeReportGenerator;

impl Default for TreeReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TreeReportGenerator {
    fn generate_report(&self, report: &RoleReport) -> Result<String, EggbeaterError> {
        let mut output = String::new();

        writeln!(output, "{}", report.tree().render())?;

        let analysis = report.analysis();

        let total_sccs = analysis.sccs().len();
        writeln!(
            output,
            "{} Strongly connected {} (topologically sorted): {}\n",
            style("⚠️").yellow(),
            pluralize("component", total_sccs),
            style(total_sccs).bold()
        )?;
        if total_sccs == 0 {
            writeln!(output, "None! {}\n", style("🍻 🎉").dim())?;
        }
        for (i, scc) in analysis.sccs().iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, scc.join(", "))?;
        }

        let total_circuits = analysis.cycles().len();
        writeln!(
            output,
            "\n{} {}: {}\n",
            style("🌀").cyan(),
            pluralize("Cycle", total_circuits),
            style(total_circuits).bold()
        )?;
        if total_circuits == 0 {
            writeln!(output, "None! {}\n", style("🍻 🎉").dim())?;
        }
        for (i, circuit) in analysis.cycles().iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, circuit.join(", "))?;
        }

        Ok(output)
    }
}
