/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Statistics used to report on generated graphs.
//!
//! These are the measures a reporting tool computes to check that a
//! generated graph follows the structural law of its model: degree
//! distribution, clustering, shortest-path lengths, and degree
//! correlations. [`Summary`] bundles all of them.

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use crate::graphs::multigraph::MultiGraph;

mod clustering;
pub use clustering::*;

mod degrees;
pub use degrees::*;

mod paths;
pub use paths::*;

/// A least-squares line `y = slope · x + intercept`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fits a line to the given points, or returns `None` if there are
    /// fewer than two points or if all abscissas are equal.
    pub fn fit(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let (mut n, mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for (x, y) in points {
            n += 1.0;
            sx += x;
            sy += y;
            sxx += x * x;
            sxy += x * y;
        }
        let den = n * sxx - sx * sx;
        if n < 2.0 || den.abs() < f64::EPSILON {
            return None;
        }
        let slope = (n * sxy - sx * sy) / den;
        Some(Self {
            slope,
            intercept: (sy - slope * sx) / n,
        })
    }
}

/// A summary of the structure of a graph.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub num_self_loops: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// The log-log fit of the degree distribution.
    pub degree_fit: Option<LinearFit>,
    /// The average local clustering coefficient of about half of the nodes.
    pub average_clustering: f64,
    /// Shortest paths from node zero.
    pub paths: Option<PathLengthStats>,
    pub assortativity: Option<f64>,
    /// The linear fit of neighbor degree correlation against degree on about
    /// a third of the nodes, excluding the highest-degree ones.
    pub correlation_fit: Option<LinearFit>,
}

impl Summary {
    /// The fraction of nodes whose local clustering coefficient is computed.
    pub const CLUSTERING_FRACTION: f64 = 0.5;
    /// The fraction of nodes whose neighbor degree correlation is computed.
    pub const CORRELATION_FRACTION: f64 = 0.35;
    /// The number of highest-degree sampled nodes excluded from the
    /// correlation fit.
    pub const CORRELATION_TAIL: usize = 50;

    /// Computes the summary of a graph.
    ///
    /// The random source is used to choose the nodes on which clustering and
    /// degree correlations are sampled; the progress logger is passed to the
    /// breadth-first visit.
    pub fn compute(graph: &MultiGraph, rng: &mut impl Rng, pl: &mut impl ProgressLog) -> Self {
        let n = graph.num_nodes();

        log::info!("Computing degree distribution...");
        let distr = degree_distribution(graph);
        let degree_fit = log_log_fit(&distr);

        log::info!("Computing clustering...");
        let clustering = ClusteringSample::compute(graph, rng, Self::CLUSTERING_FRACTION);

        log::info!("Computing paths...");
        let paths = PathLengthStats::compute(graph, 0, pl);

        log::info!("Computing degree correlations...");
        let assortativity = degree_assortativity(graph);
        let sample = degree_correlation_sample(graph, rng, Self::CORRELATION_FRACTION);
        let kept = sample.len().saturating_sub(Self::CORRELATION_TAIL);
        let correlation_fit = LinearFit::fit(
            sample[..kept]
                .iter()
                .map(|&(degree, corr)| (degree as f64, corr)),
        );

        Self {
            num_nodes: n,
            num_edges: graph.num_edges(),
            num_self_loops: graph.num_self_loops(),
            min_degree: distr.keys().next().copied().unwrap_or_default(),
            max_degree: distr.keys().next_back().copied().unwrap_or_default(),
            mean_degree: if n == 0 {
                0.0
            } else {
                2.0 * graph.num_edges() as f64 / n as f64
            },
            degree_fit,
            average_clustering: clustering.average,
            paths,
            assortativity,
            correlation_fit,
        }
    }
}
