/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use super::{check_probability, edges_per_node, GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;
use crate::utils::bernoulli;

/// Watts-Strogatz-style small-world graphs.
///
/// Every node `x` emits edges towards the ring lattice neighbors `x + d` and
/// `x - d` (modulo the number of nodes) for `d = 1, 2, …`, two edges per
/// value of `d`, until it has emitted at least `m / n` edges (rounded down),
/// where `n` is the number of nodes and `m` the target number of edges.
/// Independently with probability `β`, each endpoint is rewired to a
/// uniformly chosen node that is neither `x` nor the endpoint being
/// replaced.
///
/// Edges are emitted by both their endpoints, so with `β = 0` every lattice
/// edge appears twice; no deduplication is performed. For even `m / n` the
/// graph has exactly `n ⌊m / n⌋` edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallWorld {
    num_nodes: usize,
    num_edges: usize,
    beta: f64,
}

impl SmallWorld {
    /// Creates a new small-world model, given the number of nodes, the
    /// target number of edges, and the rewiring probability `β`.
    pub fn new(num_nodes: usize, num_edges: usize, beta: f64) -> Self {
        Self {
            num_nodes,
            num_edges,
            beta,
        }
    }

    /// Returns `dst`, or, with probability `β`, a random node different from
    /// `src` and `dst`.
    fn rewire(&self, rng: &mut impl Rng, src: usize, dst: usize) -> usize {
        if !bernoulli(rng, self.beta) {
            return dst;
        }
        loop {
            let new_dst = rng.random_range(0..self.num_nodes);
            if new_dst != src && new_dst != dst {
                return new_dst;
            }
        }
    }
}

impl Generator for SmallWorld {
    fn name(&self) -> &'static str {
        "small-world"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        check_probability("β", self.beta)?;
        let n = self.num_nodes;
        if self.beta > 0.0 && n < 3 {
            return Err(GenerateError::TooFewNodes {
                model: self.name(),
                min: 3,
                got: n,
            });
        }
        let per_node = edges_per_node(n, self.num_edges);

        pl.item_name("node");
        pl.expected_updates(Some(n));
        pl.start(format!(
            "Generating small-world graph with {per_node} edges per node and β = {}...",
            self.beta
        ));

        let mut g = MultiGraph::empty(n);
        for src in 0..n {
            let mut left_to_emit = per_node;
            let mut d = 1;
            while left_to_emit > 0 {
                let right = self.rewire(rng, src, (src + d) % n);
                let left = self.rewire(rng, src, (src + n - d % n) % n);
                g.add_edge(src, right);
                g.add_edge(src, left);
                left_to_emit = left_to_emit.saturating_sub(2);
                d += 1;
            }
            pl.light_update();
        }
        pl.done();

        log::info!(
            "Created SW graph on {} nodes with {} edges",
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
    fn test_lattice() -> anyhow::Result<()> {
        let g = SmallWorld::new(6, 24, 0.0).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(
            &g.edges()[..4],
            &[(0, 1), (0, 5), (0, 2), (0, 4)]
        );
        assert!(g.degrees().all(|d| d == 8));
        Ok(())
    }

    #[test]
    fn test_odd_edges_per_node() -> anyhow::Result<()> {
        // Three edges per node are rounded up to four
        let g = SmallWorld::new(10, 30, 0.0).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_edges(), 40);
        Ok(())
    }

    #[test]
    fn test_rewiring_avoids_loops() -> anyhow::Result<()> {
        let g = SmallWorld::new(3, 6, 1.0).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_self_loops(), 0);
        Ok(())
    }

    #[test]
    fn test_too_few_nodes() {
        let res = SmallWorld::new(2, 4, 0.5).generate(&mut SmallRng::seed_from_u64(0), no_logging![]);
        assert!(matches!(res, Err(GenerateError::TooFewNodes { min: 3, .. })));
    }
}
