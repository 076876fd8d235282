/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::Range;

/// A mutable undirected multigraph based on an edge list and a vector of
/// adjacency lists.
///
/// Nodes are the integers `0..n`, and new nodes can only be appended. Edges
/// are unordered pairs stored in insertion order: parallel edges and loops
/// are kept as they are, since several random-graph models produce them on
/// purpose.
///
/// The degree of a node is the number of edge endpoints incident on it, so
/// a loop contributes two to the degree of its node, and appears twice in
/// its list of [neighbors](MultiGraph::neighbors).
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiGraph {
    /// The edges of the graph, in insertion order.
    edges: Vec<(usize, usize)>,
    /// For each node, the endpoints of its incident edges.
    adj: Vec<Vec<usize>>,
}

impl MultiGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            edges: vec![],
            adj: vec![],
        }
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            edges: vec![],
            adj: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Creates a new graph with `n` nodes from an [`IntoIterator`] of pairs.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the endpoints is greater than or
    /// equal to `n`.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::empty(n);
        g.add_edges(edges);
        g
    }

    /// Appends an isolated node to the graph and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Appends `count` isolated nodes to the graph and returns the range of
    /// their indices.
    pub fn add_nodes(&mut self, count: usize) -> Range<usize> {
        let start = self.adj.len();
        self.adj.extend((0..count).map(|_| Vec::new()));
        start..self.adj.len()
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater than or
    /// equal to the number of nodes in the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.adj.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.adj.len(),
            );
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges.push((u, v));
    }

    /// Adds the edges returned by an [`IntoIterator`] of pairs.
    ///
    /// # Panics
    ///
    /// See [`add_edge`](Self::add_edge).
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges, counting parallel edges and loops.
    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of loops.
    pub fn num_self_loops(&self) -> usize {
        self.edges.iter().filter(|(u, v)| u == v).count()
    }

    /// Returns the degree of a node.
    #[inline(always)]
    pub fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    /// Returns an iterator over the degrees of all nodes.
    pub fn degrees(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.adj.iter().map(Vec::len)
    }

    /// Returns the neighbors of a node, one per incident edge endpoint.
    #[inline(always)]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Returns the sorted, deduplicated neighbors of a node, excluding the
    /// node itself.
    ///
    /// This is the neighborhood of the node in the simple graph underlying
    /// the multigraph.
    pub fn simple_neighbors(&self, node: usize) -> Vec<usize> {
        let mut succ = self.adj[node]
            .iter()
            .copied()
            .filter(|&v| v != node)
            .collect::<Vec<_>>();
        succ.sort_unstable();
        succ.dedup();
        succ
    }

    /// Returns the edges of the graph in insertion order.
    #[inline(always)]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Consumes the graph and returns its edges in insertion order.
    pub fn into_edges(self) -> Vec<(usize, usize)> {
        self.edges
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.edges.shrink_to_fit();
        self.adj.shrink_to_fit();
        for s in self.adj.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loops_count_twice() {
        let mut g = MultiGraph::empty(2);
        g.add_edge(0, 0);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.num_self_loops(), 1);
        assert_eq!(g.degree(0), 4);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.neighbors(0), &[0, 0, 1, 1]);
        assert_eq!(g.simple_neighbors(0), vec![1]);
        assert_eq!(g.degrees().sum::<usize>(), 2 * g.num_edges());
    }

    #[test]
    fn test_add_nodes() {
        let mut g = MultiGraph::new();
        assert_eq!(g.add_node(), 0);
        assert_eq!(g.add_nodes(3), 1..4);
        assert_eq!(g.num_nodes(), 4);
        g.add_edge(3, 1);
        assert_eq!(g.edges(), &[(3, 1)]);
        assert_eq!(g.into_edges(), vec![(3, 1)]);
    }

    #[test]
    #[should_panic(expected = "Node 2 does not exist")]
    fn test_missing_node() {
        let mut g = MultiGraph::empty(2);
        g.add_edge(0, 2);
    }
}
