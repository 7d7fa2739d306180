use std::collections::VecDeque;

/// Directed acyclic graph of positional constraints between rectangles.
/// An edge `i -> j` means `j` has to be placed after (right of, or above) `i`.
#[derive(Clone, Debug)]
pub struct ConstraintGraph {
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    /// Builds the graph over `n` nodes, with an edge `i -> j` for every pair for which `precedes(i, j)` holds.
    pub fn build(n: usize, precedes: impl Fn(usize, usize) -> bool) -> Self {
        let mut preds = vec![vec![]; n];
        let mut succs = vec![vec![]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j && precedes(i, j) {
                    preds[j].push(i);
                    succs[i].push(j);
                }
            }
        }
        ConstraintGraph { preds, succs }
    }

    pub fn n_nodes(&self) -> usize {
        self.preds.len()
    }

    pub fn n_edges(&self) -> usize {
        self.preds.iter().map(|p| p.len()).sum()
    }

    /// Nodes that must precede `node`
    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.preds[node]
    }

    /// Kahn's algorithm. Returns `None` if the graph contains a cycle.
    pub fn topological_order(&self) -> Option<Vec<usize>> {
        let n = self.n_nodes();
        let mut in_degree = self.preds.iter().map(|p| p.len()).collect::<Vec<_>>();
        let mut queue = (0..n).filter(|&i| in_degree[i] == 0).collect::<VecDeque<_>>();
        let mut order = Vec::with_capacity(n);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &succ in &self.succs[node] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        match order.len() == n {
            true => Some(order),
            false => None,
        }
    }

    /// For every node, the heaviest path ending in (and including) that node,
    /// i.e. `dist[j] = weight[j] + max(dist[i] for i -> j)`.
    pub fn longest_paths(&self, weights: &[f64]) -> Vec<f64> {
        assert_eq!(weights.len(), self.n_nodes());
        let order = self
            .topological_order()
            .expect("constraint graphs of a sequence-pair are acyclic");

        let mut dist = weights.to_vec();
        for node in order {
            let offset = self.preds[node]
                .iter()
                .map(|&p| dist[p])
                .fold(0.0, f64::max);
            dist[node] += offset;
        }
        dist
    }
}
