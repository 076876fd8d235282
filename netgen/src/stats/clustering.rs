/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::Rng;

use crate::graphs::multigraph::MultiGraph;
use crate::utils::bernoulli;

/// Returns the local clustering coefficient of a node.
///
/// The coefficient is computed on the simple graph underlying the
/// multigraph, ignoring loops and parallel edges: it is the number of edges
/// among the neighbors of the node divided by the number of pairs of
/// neighbors, or zero if the node has fewer than two neighbors.
pub fn local_clustering(graph: &MultiGraph, node: usize) -> f64 {
    let nbrs = graph.simple_neighbors(node);
    let k = nbrs.len();
    if k < 2 {
        return 0.0;
    }
    let mut links = 0_usize;
    for &u in &nbrs {
        links += graph
            .simple_neighbors(u)
            .into_iter()
            .filter(|&v| v > u && nbrs.binary_search(&v).is_ok())
            .count();
    }
    links as f64 / (k * (k - 1) / 2) as f64
}

/// Local clustering coefficients of a random subset of nodes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringSample {
    /// The pairs (degree in the simple graph, local clustering coefficient)
    /// of the sampled nodes.
    pub nodes: Vec<(usize, f64)>,
    /// The average local clustering coefficient of the sampled nodes, or
    /// zero if no node was sampled.
    pub average: f64,
}

impl ClusteringSample {
    /// Computes the local clustering coefficient of each node independently
    /// with probability `fraction`.
    pub fn compute(graph: &MultiGraph, rng: &mut impl Rng, fraction: f64) -> Self {
        let nodes = (0..graph.num_nodes())
            .filter(|_| bernoulli(rng, fraction))
            .map(|node| {
                (
                    graph.simple_neighbors(node).len(),
                    local_clustering(graph, node),
                )
            })
            .collect::<Vec<_>>();
        let average = if nodes.is_empty() {
            0.0
        } else {
            nodes.iter().map(|&(_, c)| c).sum::<f64>() / nodes.len() as f64
        };
        Self { nodes, average }
    }
}
