//! JSON format report generation.

use super::ReportGenerator;
use crate::analysis::RoleReport;
use crate::error::EggbeaterError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &RoleReport) -> Result<String, EggbeaterError> {
        serde_json::to_string_pretty(report.analysis()).map_err(EggbeaterError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::analysis::RoleAnalyzer;

    fn cyclic_report() -> RoleReport {
        let temp = tempfile::TempDir::new().unwrap();
        let roles = temp.path().join("roles");
        let cookbooks = temp.path().join("cookbooks");
        std::fs::create_dir_all(&roles).unwrap();
        std::fs::create_dir_all(cookbooks.join("foo")).unwrap();
        std::fs::create_dir_all(cookbooks.join("bar")).unwrap();

        std::fs::write(
            roles.join("top.json"),
            r#"{"name": "top", "run_list": ["recipe[foo]"]}"#,
        )
        .unwrap();
        std::fs::write(cookbooks.join("foo/metadata.rb"), "depends \"bar\"\n").unwrap();
        std::fs::write(cookbooks.join("bar/metadata.rb"), "depends \"foo\"\n").unwrap();

        RoleAnalyzer::new(vec![cookbooks], roles).analyze("top").unwrap()
    }

    #[test]
    fn test_json_report_structure() {
        let report = cyclic_report();
        let rendered = JsonReportGenerator::new().generate_report(&report).unwrap();
        let json: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["g"]["foo"], serde_json::json!(["bar"]));
        assert_eq!(json["g"]["bar"], serde_json::json!(["foo"]));
        assert_eq!(json["sccs"], serde_json::json!([["foo", "bar"]]));
        assert_eq!(json["cycles"], serde_json::json!([["bar", "foo", "bar"]]));
    }

    #[test]
    fn test_json_adjacency_keys_are_sorted() {
        let report = cyclic_report();
        let rendered = JsonReportGenerator::new().generate_report(&report).unwrap();

        // BTreeMap serialization keeps the adjacency keys lexicographic
        let bar_at = rendered.find("\"bar\"").unwrap();
        let foo_at = rendered.find("\"foo\"").unwrap();
        assert!(bar_at < foo_at);
    }
}
