/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use super::{edges_per_node, GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;

/// Barabási-Albert preferential attachment.
///
/// Nodes are added one at a time. Each new node gets a loop and then
/// attaches `m / n` edges (rounded down), where `n` is the number of nodes
/// and `m` the target number of edges. Destinations are drawn with
/// replacement from a pool of nodes in which every node appears once for
/// its loop and once per attachment edge it is an endpoint of, so the
/// probability of choosing a node grows with its degree as the graph grows.
///
/// The resulting graph has exactly `n + n ⌊m / n⌋` edges, and every node has
/// degree at least two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarabasiAlbert {
    num_nodes: usize,
    num_edges: usize,
}

impl BarabasiAlbert {
    /// Creates a new Barabási-Albert model, given the number of nodes and the
    /// target number of edges.
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            num_edges,
        }
    }
}

impl Generator for BarabasiAlbert {
    fn name(&self) -> &'static str {
        "Barabási-Albert"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        let per_node = edges_per_node(self.num_nodes, self.num_edges);

        pl.item_name("node");
        pl.expected_updates(Some(self.num_nodes));
        pl.start(format!(
            "Generating Barabási-Albert graph with {per_node} edges per node..."
        ));

        let mut g = MultiGraph::new();
        let mut pool = Vec::with_capacity(self.num_nodes * (2 * per_node + 1));
        for _ in 0..self.num_nodes {
            let src = g.add_node();
            g.add_edge(src, src);
            pool.push(src);

            for _ in 0..per_node {
                // The pool contains at least src
                let dst = pool[rng.random_range(0..pool.len())];
                g.add_edge(src, dst);
                pool.push(src);
                pool.push(dst);
            }
            pl.light_update();
        }
        pl.done();

        log::info!(
            "Created BA graph on {} nodes with {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}
