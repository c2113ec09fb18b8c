//! Enumeration of the distinct elementary circuits of a directed graph,
//! after Tarjan's 1972 procedure:
//! <https://ecommons.cornell.edu/bitstream/handle/1813/5941/72-145.pdf>

use std::collections::{HashMap, HashSet};

use crate::error::EggbeaterError;
use crate::graph::Adjacency;

/// Enumerates every elementary circuit of a graph exactly once.
///
/// Vertices are numbered from 1 in lexicographic order and circuits are
/// searched root by root in that order. Edges leading to vertices with a
/// lower id than the current root were fully explored in an earlier root
/// iteration; they are pruned into per-vertex `removed` sets so no circuit
/// is ever reported again as a rotation of itself.
pub struct CircuitFinder<'g> {
    graph: &'g Adjacency,
    index: HashMap<&'g str, usize>,
    marked: HashSet<usize>,
    removed: HashMap<usize, HashSet<usize>>,
    marked_stack: Vec<usize>,
    point_stack: Vec<&'g str>,
    circuits: Vec<Vec<String>>,
}

impl<'g> CircuitFinder<'g> {
    pub fn new(graph: &'g Adjacency) -> Self {
        Self {
            graph,
            index: HashMap::new(),
            marked: HashSet::new(),
            removed: HashMap::new(),
            marked_stack: Vec::new(),
            point_stack: Vec::new(),
            circuits: Vec::new(),
        }
    }

    /// Enumerates and returns the distinct circuits. Each circuit starts and
    /// ends on the same vertex and visits its interior vertices once.
    pub fn find(mut self) -> Result<Vec<Vec<String>>, EggbeaterError> {
        if self.graph.is_empty() {
            return Err(EggbeaterError::GraphEmpty);
        }

        for (i, vertex) in self.graph.keys().enumerate() {
            self.index.insert(vertex.as_str(), i + 1);
        }

        for start in self.graph.keys() {
            self.search(start, start);

            // Reset path-local marks between roots; the removed sets persist.
            for id in self.marked_stack.drain(..) {
                self.marked.remove(&id);
            }
        }

        Ok(self.circuits)
    }

    /// Walks paths out of `v` looking for circuits closing back at `start`,
    /// reporting whether any was found at or below `v`.
    fn search(&mut self, start: &'g str, v: &'g str) -> bool {
        let mut found = false;
        let start_id = self.index[start];
        let v_id = self.index[v];

        self.marked.insert(v_id);
        self.point_stack.push(v);
        self.marked_stack.push(v_id);

        let neighbors = self.graph.get(v).map(Vec::as_slice).unwrap_or_default();
        for w in neighbors {
            let w_id = self.index.get(w.as_str()).copied().unwrap_or_default();

            if self.removed.get(&v_id).is_some_and(|r| r.contains(&w_id)) {
                continue;
            }

            if w_id < start_id {
                // explored from an earlier root; re-walking it would only
                // produce permutations of circuits already reported
                self.removed.entry(v_id).or_default().insert(w_id);
            } else if w_id == start_id {
                let mut circuit: Vec<String> =
                    self.point_stack.iter().map(|p| p.to_string()).collect();
                circuit.push(start.to_string());
                self.circuits.push(circuit);
                found = true;
            } else if !self.marked.contains(&w_id) {
                found |= self.search(start, w);
            }
        }

        // A found circuit unmarks the path back down to v so those vertices
        // can participate in further circuits rooted at the same start.
        if found {
            while let Some(id) = self.marked_stack.pop() {
                self.marked.remove(&id);
                if id == v_id {
                    break;
                }
            }
        }

        self.point_stack.pop();

        found
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

    fn circuits_of(g: &Adjacency) -> Vec<Vec<String>> {
        CircuitFinder::new(g).find().unwrap()
    }

    fn owned(circuits: &[&[&str]]) -> Vec<Vec<String>> {
        circuits
            .iter()
            .map(|c| c.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    fn nine_vertex_reference() -> Adjacency {
        graph(&[
            ("1", &["2", "5", "8"]),
            ("2", &["3", "7", "9"]),
            ("3", &["1", "2", "4", "6"]),
            ("4", &["5"]),
            ("5", &["2"]),
            ("6", &["4"]),
            ("7", &[]),
            ("8", &["9"]),
            ("9", &["8"]),
        ])
    }

    #[test]
    fn test_finds_six_distinct_circuits_in_reference_graph() {
        let expected = owned(&[
            &["1", "2", "3", "1"],
            &["1", "5", "2", "3", "1"],
            &["2", "3", "2"],
            &["2", "3", "4", "5", "2"],
            &["2", "3", "6", "4", "5", "2"],
            &["8", "9", "8"],
        ]);

        assert_eq!(circuits_of(&nine_vertex_reference()), expected);
    }

    #[test]
    fn test_finds_ten_distinct_circuits_in_dense_graph() {
        let g = graph(&[
            ("0", &["1"]),
            ("1", &["4", "6", "7"]),
            ("2", &["4", "6", "7"]),
            ("3", &["4", "6", "7"]),
            ("4", &["2", "3"]),
            ("5", &["2", "3"]),
            ("6", &["5", "8"]),
            ("7", &["5", "8"]),
            ("8", &[]),
            ("9", &[]),
        ]);

        let expected = owned(&[
            &["2", "4", "2"],
            &["2", "4", "3", "6", "5", "2"],
            &["2", "4", "3", "7", "5", "2"],
            &["2", "6", "5", "2"],
            &["2", "6", "5", "3", "4", "2"],
            &["2", "7", "5", "2"],
            &["2", "7", "5", "3", "4", "2"],
            &["3", "4", "3"],
            &["3", "6", "5", "3"],
            &["3", "7", "5", "3"],
        ]);

        assert_eq!(circuits_of(&g), expected);
    }

    #[test]
    fn test_self_loop_is_a_circuit() {
        let g = graph(&[("x", &["x"])]);

        assert_eq!(circuits_of(&g), owned(&[&["x", "x"]]));
    }

    #[test]
    fn test_acyclic_graph_has_no_circuits() {
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);

        assert!(circuits_of(&g).is_empty());
    }

    #[test]
    fn test_circuit_interiors_are_elementary() {
        for circuit in circuits_of(&nine_vertex_reference()) {
            assert_eq!(circuit.first(), circuit.last());

            let interior = &circuit[..circuit.len() - 1];
            let mut unique: Vec<_> = interior.to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), interior.len());
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let g = nine_vertex_reference();

        let first = CircuitFinder::new(&g).find().unwrap();
        let second = CircuitFinder::new(&g).find().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_graph_is_an_error() {
        let g = Adjacency::new();

        let error = CircuitFinder::new(&g).find().unwrap_err();
        assert!(matches!(error, EggbeaterError::GraphEmpty));
    }
}
