//! Graphviz DOT report generation.

use std::fmt::Write;

use super::ReportGenerator;
use crate::analysis::RoleReport;
use crate::error::EggbeaterError;

// Node and cluster colors for the rendered graph
mod colors {
    pub const FOREGROUND: &str = "#323538";
    pub const BACKGROUND: &str = "#ffffff";
    pub const SCC_HIGHLIGHT: &str = "#F2C744";
}

pub struct DotReportGenerator;

impl Default for DotReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DotReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Makes a cookbook name a valid DOT identifier.
fn sanitize(name: &str) -> String {
    name.replace('-', "_")
}

impl ReportGenerator for DotReportGenerator {
    fn generate_report(&self, report: &RoleReport) -> Result<String, EggbeaterError> {
        let analysis = report.analysis();
        let mut output = String::new();

        writeln!(output, "digraph g {{")?;
        writeln!(output, "    bgcolor = \"{}\"", colors::BACKGROUND)?;
        writeln!(output, "    splines = ortho")?;
        writeln!(output, "    overlap = true")?;
        writeln!(output, "    newrank = true")?;
        writeln!(output)?;
        writeln!(output, "    node [")?;
        writeln!(output, "        shape = rectangle,")?;
        writeln!(output, "        width = 0.25,")?;
        writeln!(output, "        color = \"{}\",", colors::FOREGROUND)?;
        writeln!(output, "        fillcolor = white,")?;
        writeln!(output, "        style = \"filled, solid\",")?;
        writeln!(output, "        fontcolor = \"{}\",", colors::FOREGROUND)?;
        writeln!(output, "        fontsize = 8,")?;
        writeln!(output, "    ]")?;
        writeln!(output)?;
        writeln!(output, "    edge [")?;
        writeln!(output, "        penwidth = 0.50,")?;
        writeln!(output, "        color = \"{}\",", colors::FOREGROUND)?;
        writeln!(output, "        arrowhead = \"vee\"")?;
        writeln!(output, "    ]")?;

        for (i, scc) in analysis.sccs().iter().enumerate() {
            writeln!(output)?;
            writeln!(output, "    subgraph cluster_sccs{i} {{")?;
            writeln!(output, "        style = \"filled, solid\";")?;
            writeln!(output, "        color = \"{}\";", colors::SCC_HIGHLIGHT)?;
            writeln!(output, "        label = \"Strongly Connected Subgraph {i}\";")?;
            writeln!(output)?;
            for vertex in scc {
                writeln!(
                    output,
                    "        {} [color = \"{}\"];",
                    sanitize(vertex),
                    colors::SCC_HIGHLIGHT
                )?;
            }
            writeln!(output, "    }}")?;
        }

        writeln!(output)?;
        for (vertex, edges) in analysis.graph() {
            let targets: Vec<String> = edges.iter().map(|e| sanitize(e)).collect();
            writeln!(
                output,
                "    {} -> {{ {} }}",
                sanitize(vertex),
                targets.join(" ")
            )?;
        }
        writeln!(output, "}}")?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::analysis::RoleAnalyzer;

    #[test]
    fn test_dot_report_clusters_and_edges() {
        let temp = TempDir::new().unwrap();
        let roles = temp.path().join("roles");
        let cookbooks = temp.path().join("cookbooks");
        fs::create_dir_all(&roles).unwrap();
        fs::create_dir_all(cookbooks.join("my-app")).unwrap();
        fs::create_dir_all(cookbooks.join("my-db")).unwrap();

        fs::write(
            roles.join("top.json"),
            r#"{"name": "top", "run_list": ["recipe[my-app]"]}"#,
        )
        .unwrap();
        fs::write(cookbooks.join("my-app/metadata.rb"), "depends \"my-db\"\n").unwrap();
        fs::write(cookbooks.join("my-db/metadata.rb"), "depends \"my-app\"\n").unwrap();

        let report = RoleAnalyzer::new(vec![cookbooks], roles).analyze("top").unwrap();
        let rendered = DotReportGenerator::new().generate_report(&report).unwrap();

        assert!(rendered.starts_with("digraph g {"));
        assert!(rendered.contains("subgraph cluster_sccs0"));
        // dashes become underscores to form valid DOT identifiers
        assert!(rendered.contains("my_app -> { my_db }"));
        assert!(rendered.contains("my_db -> { my_app }"));
        assert!(!rendered.contains("my-app"));
    }

    #[test]
    fn test_dot_report_without_components_has_no_clusters() {
        let temp = TempDir::new().unwrap();
        let roles = temp.path().join("roles");
        let cookbooks = temp.path().join("cookbooks");
        fs::create_dir_all(&roles).unwrap();
        fs::create_dir_all(cookbooks.join("leaf")).unwrap();

        fs::write(
            roles.join("top.json"),
            r#"{"name": "top", "run_list": ["recipe[leaf]"]}"#,
        )
        .unwrap();
        fs::write(cookbooks.join("leaf/metadata.rb"), "").unwrap();

        let report = RoleAnalyzer::new(vec![cookbooks], roles).analyze("top").unwrap();
        let rendered = DotReportGenerator::new().generate_report(&report).unwrap();

        assert!(!rendered.contains("subgraph"));
        assert!(rendered.contains("leaf -> {  }"));
    }
}
