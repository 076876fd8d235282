/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use std::collections::BTreeMap;

use anyhow::Result;
use common::test_graph;
use dsi_progress_logger::no_logging;
use netgen::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_degree_distribution() {
    let g = test_graph();
    assert_eq!(
        degree_distribution(&g),
        BTreeMap::from([(0, 1), (2, 1), (3, 4)])
    );
}

#[test]
fn test_log_log_fit() {
    // 160 / d² nodes of degree d; the class with two nodes is ignored
    let distr = BTreeMap::from([(1, 160), (2, 40), (4, 10), (8, 2)]);
    let fit = log_log_fit(&distr).unwrap();
    assert!((fit.slope + 2.0).abs() < 1E-9, "{fit:?}");
    assert!((fit.intercept - 160_f64.ln()).abs() < 1E-9, "{fit:?}");
    assert_eq!(log_log_fit(&BTreeMap::from([(3, 1000)])), None);
}

#[test]
fn test_local_clustering() {
    let g = test_graph();
    // The parallel edge between 0 and 1 does not count
    assert_eq!(local_clustering(&g, 0), 1.0);
    assert_eq!(local_clustering(&g, 1), 1.0);
    assert!((local_clustering(&g, 2) - 1.0 / 3.0).abs() < 1E-12);
    assert_eq!(local_clustering(&g, 3), 0.0);
    // The loop does not count as a neighbor
    assert_eq!(local_clustering(&g, 4), 0.0);
    assert_eq!(local_clustering(&g, 5), 0.0);
}

#[test]
fn test_clustering_sample() {
    let g = test_graph();
    let mut rng = SmallRng::seed_from_u64(0);
    let all = ClusteringSample::compute(&g, &mut rng, 1.0);
    assert_eq!(all.nodes.len(), 6);
    assert_eq!(all.nodes[2].0, 3);
    assert!((all.average - (1.0 + 1.0 + 1.0 / 3.0) / 6.0).abs() < 1E-12);
    let none = ClusteringSample::compute(&g, &mut rng, 0.0);
    assert!(none.nodes.is_empty());
    assert_eq!(none.average, 0.0);
}

#[test]
fn test_bfs_distances() {
    let g = test_graph();
    assert_eq!(
        bfs_distances(&g, 0, no_logging![]),
        vec![Some(0), Some(1), Some(1), Some(2), Some(3), None]
    );
    assert_eq!(
        bfs_distances(&g, 5, no_logging![]),
        vec![None, None, None, None, None, Some(0)]
    );
}

#[test]
fn test_path_length_stats() {
    let g = test_graph();
    let stats = PathLengthStats::compute(&g, 0, no_logging![]).unwrap();
    assert_eq!(stats.diameter, 3);
    assert_eq!(
        stats.distribution,
        BTreeMap::from([(0, 1), (1, 2), (2, 1), (3, 1)])
    );
    assert!((stats.effective_diameter - 2.6).abs() < 1E-9);
    assert_eq!(PathLengthStats::compute(&MultiGraph::new(), 0, no_logging![]), None);
}

#[test]
fn test_neighbor_degree_correlation() {
    let g = test_graph();
    assert!((neighbor_degree_correlation(&g, 2) - 8.0 / 3.0).abs() < 1E-12);
    assert_eq!(neighbor_degree_correlation(&g, 5), 0.0);

    let mut rng = SmallRng::seed_from_u64(0);
    let sample = degree_correlation_sample(&g, &mut rng, 0.5);
    assert_eq!(sample.len(), 3);
    assert!(sample.is_sorted_by_key(|&(degree, _)| degree));
}

#[test]
fn test_assortativity() {
    let star = MultiGraph::from_edges(6, (1..6).map(|leaf| (0, leaf)));
    assert!((degree_assortativity(&star).unwrap() + 1.0).abs() < 1E-9);
    // A cycle is regular: the correlation is undefined
    let cycle = MultiGraph::from_edges(5, (0..5).map(|x| (x, (x + 1) % 5)));
    assert_eq!(degree_assortativity(&cycle), None);
    assert_eq!(degree_assortativity(&MultiGraph::empty(3)), None);
}

#[test]
fn test_summary() {
    let g = test_graph();
    let s = Summary::compute(&g, &mut SmallRng::seed_from_u64(0), no_logging![]);
    assert_eq!(s.num_nodes, 6);
    assert_eq!(s.num_edges, 7);
    assert_eq!(s.num_self_loops, 1);
    assert_eq!(s.min_degree, 0);
    assert_eq!(s.max_degree, 3);
    assert!((s.mean_degree - 14.0 / 6.0).abs() < 1E-12);
    assert_eq!(s.paths.map(|p| p.diameter), Some(3));
}

#[test]
fn test_summary_of_generated_graph() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    let g = SmallWorld::new(1000, 6000, 0.0).generate(&mut rng, no_logging![])?;
    let s = Summary::compute(&g, &mut rng, no_logging![]);
    // A ring lattice is regular and highly clustered
    assert_eq!((s.min_degree, s.max_degree), (12, 12));
    assert_eq!(s.assortativity, None);
    assert!((s.average_clustering - 0.6).abs() < 0.05);
    assert_eq!(s.paths.map(|p| p.diameter), Some(167));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let g = test_graph();
    let s = Summary::compute(&g, &mut SmallRng::seed_from_u64(0), no_logging![]);
    let json = serde_json::to_string(&s)?;
    let t: Summary = serde_json::from_str(&json)?;
    assert_eq!(s.num_edges, t.num_edges);
    assert_eq!(s.paths, t.paths);
    Ok(())
}
