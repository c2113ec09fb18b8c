//! Report generation modules for the supported output formats:
//! - tree: the run-list traversal plus an SCC and circuit summary
//! - json: the raw analysis record for programmatic use
//! - dot: a Graphviz document with SCC clusters highlighted

pub mod dot;
pub mod json;
pub mod tree;

use crate::analysis::RoleReport;
use crate::error::EggbeaterError;

/// Common trait for all report generators.
pub trait ReportGenerator {
    /// Renders a role analysis into the generator's output format.
    fn generate_report(&self, report: &RoleReport) -> Result<String, EggbeaterError>;
}

pub use dot::DotReportGenerator;
pub use json::JsonReportGenerator;
pub use tree::TreeReportGenerator;
