//! The dependency graph representation and the structural analyses that run
//! on it.
//!
//! The graph is a plain name-keyed adjacency mapping. A `BTreeMap` keeps the
//! vertex iteration order lexicographic, which is what makes the SCC
//! sequence, the circuit enumeration order, and the serialized output
//! deterministic for a given set of cookbooks.

pub mod circuits;
pub mod scc;
pub mod tree;
pub mod walker;

use std::collections::BTreeMap;

/// Directed graph as vertex name → ordered out-neighbor names.
///
/// Every vertex appearing in any edge list is also present as a key, so the
/// analyses never have to special-case dangling edges.
pub type Adjacency = BTreeMap<String, Vec<String>>;

pub use circuits::CircuitFinder;
pub use scc::SccFinder;
pub use tree::TreeNode;
pub use walker::GraphWalker;
