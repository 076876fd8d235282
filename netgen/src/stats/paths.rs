/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeMap, VecDeque};

use dsi_progress_logger::ProgressLog;

use crate::graphs::multigraph::MultiGraph;

/// Returns the distances of all nodes from `source`, computed by a
/// breadth-first visit; unreachable nodes have distance `None`.
///
/// # Panics
///
/// If `source` is not a node of the graph.
pub fn bfs_distances(
    graph: &MultiGraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Vec<Option<usize>> {
    let num_nodes = graph.num_nodes();
    assert!(
        source < num_nodes,
        "Node {source} does not exist (the graph has {num_nodes} nodes)"
    );
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!("Visiting the graph from node {source}..."));

    let mut dist = vec![None; num_nodes];
    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(node) = queue.pop_front() {
        let d = dist[node].unwrap_or_default();
        for &succ in graph.neighbors(node) {
            if dist[succ].is_none() {
                dist[succ] = Some(d + 1);
                queue.push_back(succ);
            }
        }
        pl.light_update();
    }
    pl.done();
    dist
}

/// Statistics about the lengths of the shortest paths from a node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathLengthStats {
    /// The node the paths start from.
    pub source: usize,
    /// The number of reachable nodes at each distance, including the source
    /// at distance zero.
    pub distribution: BTreeMap<usize, usize>,
    /// The largest distance of a reachable node.
    pub diameter: usize,
    /// The 90th percentile of the distances of reachable nodes, linearly
    /// interpolated.
    pub effective_diameter: f64,
}

impl PathLengthStats {
    /// Computes the statistics of the paths from `source`, or returns `None`
    /// if the graph has no nodes.
    pub fn compute(graph: &MultiGraph, source: usize, pl: &mut impl ProgressLog) -> Option<Self> {
        if graph.num_nodes() == 0 {
            return None;
        }
        let mut lengths = bfs_distances(graph, source, pl)
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        lengths.sort_unstable();

        let mut distribution = BTreeMap::new();
        for &l in &lengths {
            *distribution.entry(l).or_insert(0) += 1;
        }
        Some(Self {
            source,
            distribution,
            diameter: lengths.last().copied().unwrap_or_default(),
            effective_diameter: percentile(&lengths, 90.0),
        })
    }
}

/// Returns the `q`-th percentile of sorted values, interpolating linearly
/// between the two closest ranks.
pub(crate) fn percentile(sorted: &[usize], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        len => {
            let rank = q / 100.0 * (len - 1) as f64;
            let (lo, hi) = (rank.floor() as usize, rank.ceil() as usize);
            let (a, b) = (sorted[lo] as f64, sorted[hi] as f64);
            a + (b - a) * (rank - lo as f64)
        }
    }
}
