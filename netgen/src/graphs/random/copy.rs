/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use super::{check_probability, GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;
use crate::utils::bernoulli;

/// Duplication-divergence ("copy") model.
///
/// The graph starts from two nodes joined by an edge. At each step, a
/// template node is chosen uniformly at random, and a candidate node is
/// connected to each neighbor of the template independently with
/// probability `α`. If no edge is retained, the candidate is discarded and
/// a new attempt is made; otherwise, it is added to the graph with the
/// retained edges. Thus, the graph never contains isolated nodes.
///
/// Small values of `α` make most attempts fail. By default attempts are not
/// bounded, and `α = 0` is rejected; an explicit bound can be set with
/// [`with_max_attempts`](Self::with_max_attempts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyModel {
    num_nodes: usize,
    alpha: f64,
    max_attempts: Option<usize>,
}

impl CopyModel {
    /// Creates a new copy model, given the number of nodes and the retention
    /// probability `α`.
    pub fn new(num_nodes: usize, alpha: f64) -> Self {
        Self {
            num_nodes,
            alpha,
            max_attempts: None,
        }
    }

    /// Bounds the overall number of duplication attempts.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl Generator for CopyModel {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        check_probability("α", self.alpha)?;
        if self.alpha == 0.0 && self.max_attempts.is_none() && self.num_nodes > 2 {
            return Err(GenerateError::InvalidProbability {
                name: "α",
                value: self.alpha,
            });
        }

        pl.item_name("node");
        pl.expected_updates(Some(self.num_nodes.saturating_sub(2)));
        pl.start(format!("Generating copy-model graph with α = {}...", self.alpha));

        let mut g = MultiGraph::from_edges(2, [(0, 1)]);
        let mut retained = vec![];
        let mut attempts = 0;
        while g.num_nodes() < self.num_nodes {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(GenerateError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            let template = rng.random_range(0..g.num_nodes());
            retained.clear();
            for &nbr in g.neighbors(template) {
                if bernoulli(rng, self.alpha) {
                    retained.push(nbr);
                }
            }

            if !retained.is_empty() {
                let node = g.add_node();
                for &nbr in &retained {
                    g.add_edge(node, nbr);
                }
                pl.light_update();
            }
        }
        pl.done();

        log::info!(
            "Created DD graph on {} nodes with {} edges ({} attempts)",
            g.num_nodes(),
            g.num_edges(),
            attempts
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
    fn test_starter() -> anyhow::Result<()> {
        for n in 0..=2 {
            let g = CopyModel::new(n, 0.5).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
            assert_eq!(g.edges(), &[(0, 1)]);
        }
        Ok(())
    }

    #[test]
    fn test_full_retention() -> anyhow::Result<()> {
        // With α = 1 every candidate copies the whole neighborhood
        let g = CopyModel::new(20, 1.0).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_nodes(), 20);
        assert!(g.degrees().all(|d| d > 0));
        assert_eq!(g.num_self_loops(), 0);
        Ok(())
    }

    #[test]
    fn test_attempts_exhausted() {
        let res = CopyModel::new(10, 0.0)
            .with_max_attempts(100)
            .generate(&mut SmallRng::seed_from_u64(0), no_logging![]);
        assert_eq!(res, Err(GenerateError::AttemptsExhausted { attempts: 100 }));
    }

    #[test]
    fn test_invalid_alpha() {
        let mut rng = SmallRng::seed_from_u64(0);
        for alpha in [-0.1, 0.0, 1.5] {
            assert_eq!(
                CopyModel::new(10, alpha).generate(&mut rng, no_logging![]),
                Err(GenerateError::InvalidProbability {
                    name: "α",
                    value: alpha
                })
            );
        }
    }
}
