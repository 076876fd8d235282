/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeMap;

use itertools::Itertools;
use rand::Rng;

use super::LinearFit;
use crate::graphs::multigraph::MultiGraph;

/// Returns the number of nodes of each degree.
pub fn degree_distribution(graph: &MultiGraph) -> BTreeMap<usize, usize> {
    let mut distr = BTreeMap::new();
    for d in graph.degrees() {
        *distr.entry(d).or_insert(0) += 1;
    }
    distr
}

/// Fits a line to the degree distribution in log-log scale.
///
/// Degree classes with at most `e^1.5` (about 4.5) nodes are ignored, as
/// they form the noisy tail of the distribution. The logarithm of degree
/// zero is taken to be zero. For a power-law distribution, the slope of the
/// line estimates the exponent.
pub fn log_log_fit(distr: &BTreeMap<usize, usize>) -> Option<LinearFit> {
    LinearFit::fit(distr.iter().filter_map(|(&degree, &count)| {
        let log_count = (count as f64).ln();
        let log_degree = if degree > 0 { (degree as f64).ln() } else { 0.0 };
        (log_count > 1.5).then_some((log_degree, log_count))
    }))
}

/// Returns the sum of the degrees of the neighbors of a node, divided by the
/// degree of the node, or zero for isolated nodes.
pub fn neighbor_degree_correlation(graph: &MultiGraph, node: usize) -> f64 {
    let degree = graph.degree(node);
    if degree == 0 {
        return 0.0;
    }
    graph
        .neighbors(node)
        .iter()
        .map(|&nbr| graph.degree(nbr) as f64 / degree as f64)
        .sum()
}

/// Returns the pairs (degree, [neighbor degree
/// correlation](neighbor_degree_correlation)) of a random subset of distinct
/// nodes, containing the given fraction of all nodes, sorted by degree.
pub fn degree_correlation_sample(
    graph: &MultiGraph,
    rng: &mut impl Rng,
    fraction: f64,
) -> Vec<(usize, f64)> {
    let n = graph.num_nodes();
    let amount = ((n as f64 * fraction) as usize).min(n);
    rand::seq::index::sample(rng, n, amount)
        .into_iter()
        .map(|node| {
            (
                graph.degree(node),
                neighbor_degree_correlation(graph, node),
            )
        })
        .sorted_by_key(|&(degree, _)| degree)
        .collect()
}

/// Returns the degree assortativity of the graph, that is, the Pearson
/// correlation between the degrees at the two ends of an edge.
///
/// Every edge contributes both of its orientations. Returns `None` if the
/// graph has no edges or if all endpoints have the same degree.
pub fn degree_assortativity(graph: &MultiGraph) -> Option<f64> {
    let m = graph.num_edges();
    if m == 0 {
        return None;
    }
    let (mut sum_xy, mut sum_x, mut sum_x2) = (0.0, 0.0, 0.0);
    for &(u, v) in graph.edges() {
        let (du, dv) = (graph.degree(u) as f64, graph.degree(v) as f64);
        sum_xy += du * dv;
        sum_x += (du + dv) / 2.0;
        sum_x2 += (du * du + dv * dv) / 2.0;
    }
    let m = m as f64;
    let mean = sum_x / m;
    let var = sum_x2 / m - mean * mean;
    if var.abs() < f64::EPSILON {
        return None;
    }
    Some((sum_xy / m - mean * mean) / var)
}
