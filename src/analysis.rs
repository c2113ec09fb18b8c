//! The analysis pipeline: walk a role into a graph, run both structural
//! analyses, and package the results.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::EggbeaterError;
use crate::graph::{Adjacency, CircuitFinder, GraphWalker, SccFinder, TreeNode};

/// The immutable outcome of analyzing one role: the dependency digraph, the
/// strongly connected components of size ≥ 2, and every distinct elementary
/// circuit.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    #[serde(rename = "g")]
    graph: Adjacency,
    sccs: Vec<Vec<String>>,
    cycles: Vec<Vec<String>>,
}

impl Analysis {
    /// Packages the analysis outputs, keeping only the strongly connected
    /// components with more than one cookbook.
    pub fn new(graph: Adjacency, sccs: Vec<Vec<String>>, cycles: Vec<Vec<String>>) -> Self {
        let sccs = sccs.into_iter().filter(|scc| scc.len() > 1).collect();

        Self {
            graph,
            sccs,
            cycles,
        }
    }

    pub fn graph(&self) -> &Adjacency {
        &self.graph
    }

    pub fn sccs(&self) -> &[Vec<String>] {
        &self.sccs
    }

    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }
}

/// A role analysis together with the display tree recorded during the walk.
#[derive(Debug, Clone)]
pub struct RoleReport {
    role: String,
    tree: TreeNode,
    analysis: Analysis,
}

impl RoleReport {
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }
}

/// Runs the full pipeline for single roles. Each call owns its own walker
/// and algorithm state, so analyzer instances can be driven from parallel
/// workers without sharing anything.
pub struct RoleAnalyzer {
    cookbook_paths: Vec<PathBuf>,
    roles_dir: PathBuf,
}

impl RoleAnalyzer {
    pub fn new(cookbook_paths: Vec<PathBuf>, roles_dir: PathBuf) -> Self {
        Self {
            cookbook_paths,
            roles_dir,
        }
    }

    /// Analyzes the named role: builds the graph and display tree, then runs
    /// the SCC and circuit analyses on the same adjacency mapping.
    pub fn analyze(&self, role_name: &str) -> Result<RoleReport, EggbeaterError> {
        let mut tree = TreeNode::new(format!("{role_name}.json"));
        let mut walker = GraphWalker::new(self.cookbook_paths.clone(), self.roles_dir.clone());
        walker.walk_role(role_name, &mut tree)?;

        let graph = walker.into_graph();
        let sccs = SccFinder::new(&graph).find()?;
        let cycles = CircuitFinder::new(&graph).find()?;

        Ok(RoleReport {
            role: role_name.to_string(),
            tree,
            analysis: Analysis::new(graph, sccs, cycles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> Adjacency {
        edges
            .iter()
            .map(|(v, ws)| (v.to_string(), ws.iter().map(|w| w.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_singleton_components_are_filtered() {
        let g = graph(&[("a", &["b"]), ("b", &["a"]), ("c", &[])]);
        let sccs = vec![
            vec!["b".to_string(), "a".to_string()],
            vec!["c".to_string()],
        ];

        let analysis = Analysis::new(g, sccs, Vec::new());
        assert_eq!(analysis.sccs(), [vec!["b".to_string(), "a".to_string()]]);
    }

    #[test]
    fn test_self_loop_component_is_filtered_but_circuit_remains() {
        let g = graph(&[("x", &["x"])]);
        let sccs = vec![vec!["x".to_string()]];
        let cycles = vec![vec!["x".to_string(), "x".to_string()]];

        let analysis = Analysis::new(g, sccs, cycles);
        assert!(analysis.sccs().is_empty());
        assert_eq!(analysis.cycles(), [vec!["x".to_string(), "x".to_string()]]);
    }

    #[test]
    fn test_serializes_with_stable_field_names() {
        let analysis = Analysis::new(
            graph(&[("a", &[])]),
            vec![vec!["a".to_string()]],
            Vec::new(),
        );

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("g").is_some());
        assert!(json.get("sccs").is_some());
        assert!(json.get("cycles").is_some());
    }
}
