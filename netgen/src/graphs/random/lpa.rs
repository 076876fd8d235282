/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::{no_logging, ProgressLog};
use rand::Rng;
use rand_distr::weighted::WeightedTreeIndex;

use super::{edges_per_node, BarabasiAlbert, GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;

/// Linear preferential attachment with an additive bias.
///
/// The graph is grown from a [Barabási-Albert](BarabasiAlbert) seed with
/// [`SEED_NODES`](Self::SEED_NODES) nodes and
/// [`SEED_EDGES`](Self::SEED_EDGES) target edges. Every further node gets a
/// loop, which sets its attachment degree to one, and then attaches `m / n`
/// edges (rounded down). Each destination is drawn with probability
/// proportional to `d + α`, where `d` is the attachment degree of the
/// destination; nodes with attachment degree zero have weight zero. After
/// each draw the attachment degrees of both endpoints are incremented.
///
/// Negative values of `α` favor low-degree nodes, whereas large positive
/// values make attachment nearly uniform. Values of `α` below -1 make the
/// weight of a new node negative and are rejected at generation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPrefAttach {
    num_nodes: usize,
    num_edges: usize,
    alpha: f64,
}

impl LinearPrefAttach {
    /// The number of nodes of the seed graph.
    pub const SEED_NODES: usize = 100;
    /// The target number of edges of the seed graph.
    pub const SEED_EDGES: usize = 5000;

    /// Creates a new linear preferential attachment model, given the number
    /// of nodes, the target number of edges, and the bias `α`.
    pub fn new(num_nodes: usize, num_edges: usize, alpha: f64) -> Self {
        Self {
            num_nodes,
            num_edges,
            alpha,
        }
    }

    /// Returns the attachment weight of a node with the given attachment
    /// degree.
    #[inline(always)]
    fn weight(&self, degree: f64) -> f64 {
        if degree > 0.0 {
            degree + self.alpha
        } else {
            degree
        }
    }

    fn set_degree(
        &self,
        index: &mut WeightedTreeIndex<f64>,
        degrees: &mut [f64],
        node: usize,
        degree: f64,
    ) -> Result<(), GenerateError> {
        degrees[node] = degree;
        let weight = self.weight(degree);
        index
            .update(node, weight)
            .map_err(|_| GenerateError::InvalidWeight { node, weight })
    }
}

impl Generator for LinearPrefAttach {
    fn name(&self) -> &'static str {
        "linear preferential attachment"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        if self.num_nodes < Self::SEED_NODES {
            return Err(GenerateError::TooFewNodes {
                model: self.name(),
                min: Self::SEED_NODES,
                got: self.num_nodes,
            });
        }
        let per_node = edges_per_node(self.num_nodes, self.num_edges);

        let mut g = BarabasiAlbert::new(Self::SEED_NODES, Self::SEED_EDGES)
            .generate(rng, no_logging![])?;

        let mut degrees = vec![0.0; self.num_nodes];
        // Nodes not yet added have weight zero and are never drawn
        let mut index = WeightedTreeIndex::new(degrees.iter().copied())
            .map_err(|_| GenerateError::ZeroTotalWeight)?;
        for node in 0..g.num_nodes() {
            self.set_degree(&mut index, &mut degrees, node, g.degree(node) as f64)?;
        }

        pl.item_name("node");
        pl.expected_updates(Some(self.num_nodes - Self::SEED_NODES));
        pl.start(format!(
            "Generating linear preferential attachment graph with α = {}...",
            self.alpha
        ));

        for src in g.add_nodes(self.num_nodes - Self::SEED_NODES) {
            self.set_degree(&mut index, &mut degrees, src, 1.0)?;
            g.add_edge(src, src);

            for _ in 0..per_node {
                let dst = index
                    .try_sample(rng)
                    .map_err(|_| GenerateError::ZeroTotalWeight)?;
                for node in [src, dst] {
                    let degree = degrees[node] + 1.0;
                    self.set_degree(&mut index, &mut degrees, node, degree)?;
                }
                g.add_edge(src, dst);
            }
            pl.light_update();
        }
        pl.done();

        log::info!(
            "Created LPA graph on {} nodes with {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_edge_count() -> anyhow::Result<()> {
        let g = LinearPrefAttach::new(300, 3000, 0.0)
            .generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_nodes(), 300);
        // Seed: 100 loops + 100 · 50 edges; then 200 · (1 loop + 10 edges)
        assert_eq!(g.num_edges(), 5100 + 2200);
        assert!(g.degrees().all(|d| d >= 2));
        Ok(())
    }

    #[test]
    fn test_negative_weight() {
        let res = LinearPrefAttach::new(150, 1500, -2.0)
            .generate(&mut SmallRng::seed_from_u64(0), no_logging![]);
        assert!(matches!(res, Err(GenerateError::InvalidWeight { .. })));
    }

    #[test]
    fn test_draws_follow_weights() -> anyhow::Result<()> {
        let g = LinearPrefAttach::new(2000, 20000, 0.0)
            .generate(&mut SmallRng::seed_from_u64(1), no_logging![])?;
        // Edges after the seed go from a new node to itself or to an older node
        let grown = &g.edges()[5100..];
        assert!(grown.iter().all(|&(src, dst)| dst <= src));
        // Each new node has its initial loop; drawing itself is rare, as its
        // weight is tiny compared to the total
        let loops = grown.iter().filter(|&&(src, dst)| src == dst).count();
        assert!(loops >= 1900);
        assert!(loops < 1900 + 100, "{} self-attachments", loops - 1900);
        Ok(())
    }

    #[test]
    fn test_too_few_nodes() {
        let res = LinearPrefAttach::new(99, 1500, 0.0)
            .generate(&mut SmallRng::seed_from_u64(0), no_logging![]);
        assert!(matches!(
            res,
            Err(GenerateError::TooFewNodes { min: 100, got: 99, .. })
        ));
    }
}
