//! Strongly connected components via Tarjan's algorithm.
//!
//! <https://en.wikipedia.org/wiki/Tarjan%27s_strongly_connected_components_algorithm>

use std::collections::{HashMap, HashSet};

use crate::error::EggbeaterError;
use crate::graph::Adjacency;

/// Finds all strongly connected components of a graph in O(V + E).
///
/// Roots are visited in lexicographic vertex order and neighbors in stored
/// edge order, so the component sequence is deterministic. Every component
/// is emitted, singletons included; filtering is the caller's concern.
pub struct SccFinder<'g> {
    graph: &'g Adjacency,
    index: HashMap<&'g str, usize>,
    lowlink: HashMap<&'g str, usize>,
    stack: Vec<&'g str>,
    on_stack: HashSet<&'g str>,
    current_index: usize,
    sccs: Vec<Vec<String>>,
}

impl<'g> SccFinder<'g> {
    pub fn new(graph: &'g Adjacency) -> Self {
        Self {
            graph,
            index: HashMap::new(),
            lowlink: HashMap::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    /// Identifies and returns the strongly connected components, each in
    /// stack pop order.
    pub fn find(mut self) -> Result<Vec<Vec<String>>, EggbeaterError> {
        if self.graph.is_empty() {
            return Err(EggbeaterError::GraphEmpty);
        }

        for vertex in self.graph.keys() {
            if !self.index.contains_key(vertex.as_str()) {
                self.search(vertex);
            }
        }

        Ok(self.sccs)
    }

    fn search(&mut self, v: &'g str) {
        self.current_index += 1;
        self.index.insert(v, self.current_index);
        self.lowlink.insert(v, self.current_index);
        self.stack.push(v);
        self.on_stack.insert(v);

        let neighbors = self.graph.get(v).map(Vec::as_slice).unwrap_or_default();
        for w in neighbors {
            let w = w.as_str();
            if !self.index.contains_key(w) {
                self.search(w);
                let low = self.lowlink[v].min(self.lowlink[w]);
                self.lowlink.insert(v, low);
            } else if self.on_stack.contains(w) {
                let low = self.lowlink[v].min(self.index[w]);
                self.lowlink.insert(v, low);
            }
        }

        if self.lowlink[v] == self.index[v] {
            let mut members = Vec::new();
            while let Some(u) = self.stack.pop() {
                self.on_stack.remove(u);
                members.push(u.to_string());
                if u == v {
                    break;
                }
            }
            self.sccs.push(members);
        }
    }
}
