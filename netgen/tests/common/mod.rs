/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use netgen::graphs::multigraph::MultiGraph;

/// Asserts that every edge endpoint is a node of the graph and that the
/// degrees account for every endpoint.
pub fn assert_consistent(g: &MultiGraph) {
    let n = g.num_nodes();
    for &(u, v) in g.edges() {
        assert!(u < n && v < n, "Edge ({u}, {v}) in a graph with {n} nodes");
    }
    assert_eq!(g.degrees().sum::<usize>(), 2 * g.num_edges());
}

/// Returns the distance between two nodes on a ring with `n` nodes.
pub fn ring_distance(n: usize, u: usize, v: usize) -> usize {
    let d = u.abs_diff(v);
    d.min(n - d)
}

/// Canonical test graph (6 nodes, 7 edges).
///
/// - A triangle 0, 1, 2
/// - A path 2 → 3 → 4
/// - A loop on 4 and a parallel edge between 0 and 1
/// - Node 5 is isolated
pub fn test_graph() -> MultiGraph {
    MultiGraph::from_edges(
        6,
        [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 4), (0, 1)],
    )
}
