/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use super::{GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;
use crate::utils::bernoulli;

/// Erdös-Rényi random graphs with a target number of edges.
///
/// Each of the `n(n - 1)/2` unordered pairs of distinct nodes is an edge
/// independently with probability `p = 2m / (n(n - 1))`, where `n` is the
/// number of nodes and `m` the target number of edges. The expected number
/// of edges is thus `m` (or the number of pairs, if smaller), but the actual
/// number is random. Loops and parallel edges are never generated.
///
/// Note that the time required to generate the graph is quadratic in `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErdosRenyi {
    num_nodes: usize,
    num_edges: usize,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi model, given the number of nodes and the
    /// expected number of edges.
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            num_edges,
        }
    }

    /// Returns the probability of an edge between two distinct nodes.
    pub fn edge_probability(&self) -> f64 {
        let n = self.num_nodes as f64;
        2.0 * self.num_edges as f64 / (n * (n - 1.0))
    }
}

impl Generator for ErdosRenyi {
    fn name(&self) -> &'static str {
        "Erdös-Rényi"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        if self.num_nodes < 2 {
            return Err(GenerateError::TooFewNodes {
                model: self.name(),
                min: 2,
                got: self.num_nodes,
            });
        }
        let p = self.edge_probability();

        pl.item_name("node");
        pl.expected_updates(Some(self.num_nodes));
        pl.start(format!("Generating Erdös-Rényi graph with p = {p}..."));

        let mut g = MultiGraph::empty(self.num_nodes);
        for src in 0..self.num_nodes {
            for dst in 0..src {
                if bernoulli(rng, p) {
                    g.add_edge(src, dst);
                }
            }
            pl.light_update();
        }
        pl.done();

        log::info!(
            "Created ER graph on {} nodes with {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsi_progress_logger::no_logging;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_er_simple() -> anyhow::Result<()> {
        let g = ErdosRenyi::new(100, 400).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_nodes(), 100);
        assert_eq!(g.num_self_loops(), 0);
        let mut edges = g
            .edges()
            .iter()
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect::<Vec<_>>();
        edges.sort_unstable();
        edges.dedup();
        assert_eq!(edges.len(), g.num_edges());
        Ok(())
    }

    #[test]
    fn test_er_complete() -> anyhow::Result<()> {
        // More edges than pairs: every pair is an edge
        let g = ErdosRenyi::new(10, 1000).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_edges(), 45);
        Ok(())
    }

    #[test]
    fn test_er_too_few_nodes() {
        let mut rng = SmallRng::seed_from_u64(0);
        for n in [0, 1] {
            assert_eq!(
                ErdosRenyi::new(n, 10).generate(&mut rng, no_logging![]),
                Err(GenerateError::TooFewNodes {
                    model: "Erdös-Rényi",
                    min: 2,
                    got: n
                })
            );
        }
    }
}
