/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use super::{GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;
use crate::utils::power_law;

/// Configuration model with a power-law degree sequence.
///
/// Generation happens in two phases:
///
/// 1. `n` degrees are drawn from a power law with minimum
///    [`MIN_DEGREE`](Self::MIN_DEGREE) and the given exponent, using a
///    [portable pseudorandom number generator](Pcg64Mcg) seeded with a
///    fixed seed, so that the degree sequence depends only on `n` and on
///    the exponent, on every platform.
///    Draws larger than [`MAX_DEGREE`](Self::MAX_DEGREE) are discarded; the
///    `i`-th surviving draw `x` gives node `i` a budget of `⌈x⌉` stubs.
///
/// 2. Two distinct nodes with remaining stubs are chosen uniformly at
///    random and connected, consuming a stub of each; nodes without
///    remaining stubs are dropped. This continues until fewer than two
///    nodes with stubs remain; leftover stubs are discarded.
///
/// The graph has no loops, but it may have parallel edges. Nodes whose
/// draw was discarded are isolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigurationModel {
    num_nodes: usize,
    exponent: f64,
    seed: u64,
}

impl ConfigurationModel {
    /// The minimum value of the power law.
    pub const MIN_DEGREE: f64 = 10.0;
    /// The maximum degree accepted from the power law.
    pub const MAX_DEGREE: f64 = 50_000.0;
    /// The default seed of the degree sequence.
    pub const DEFAULT_SEED: u64 = 42;

    /// Creates a new configuration model, given the number of nodes and the
    /// power-law exponent (only its absolute value is used).
    pub fn new(num_nodes: usize, exponent: f64) -> Self {
        Self {
            num_nodes,
            exponent,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Sets the seed used to draw the degree sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the stub budgets of the nodes that carry stubs.
    ///
    /// The result is the same for every call with the same number of nodes,
    /// exponent, and seed.
    pub fn degree_budgets(&self) -> Result<Vec<usize>, GenerateError> {
        if !(self.exponent.abs() > 1.0) {
            return Err(GenerateError::InvalidExponent(self.exponent));
        }
        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        let draws = power_law(&mut rng, self.num_nodes, Self::MIN_DEGREE, self.exponent)
            .map_err(|_| GenerateError::InvalidExponent(self.exponent))?;
        Ok(draws
            .into_iter()
            .filter(|&x| x > 0.0 && x <= Self::MAX_DEGREE)
            .map(|x| x.ceil() as usize)
            .collect())
    }
}

impl Generator for ConfigurationModel {
    fn name(&self) -> &'static str {
        "configuration"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        // Pairs (node, remaining stubs)
        let mut holders = self
            .degree_budgets()?
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>();
        let num_stubs = holders.iter().map(|&(_, stubs)| stubs).sum::<usize>();
        log::debug!(
            "{} nodes out of {} carry {} stubs",
            holders.len(),
            self.num_nodes,
            num_stubs
        );

        pl.item_name("edge");
        pl.expected_updates(Some(num_stubs / 2));
        pl.start(format!(
            "Generating configuration-model graph with exponent {}...",
            self.exponent
        ));

        let mut g = MultiGraph::empty(self.num_nodes);
        while holders.len() >= 2 {
            let a = rng.random_range(0..holders.len());
            let mut b = rng.random_range(0..holders.len());
            while a == b {
                b = rng.random_range(0..holders.len());
            }
            g.add_edge(holders[a].0, holders[b].0);
            holders[a].1 -= 1;
            holders[b].1 -= 1;

            // Remove the larger index first, so swap_remove does not move
            // the other one
            for i in [a.max(b), a.min(b)] {
                if holders[i].1 == 0 {
                    holders.swap_remove(i);
                }
            }
            pl.light_update();
        }
        pl.done();

        log::info!(
            "Created CFGM graph on {} nodes with {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsi_progress_logger::no_logging;
    use rand::rngs::SmallRng;

    #[test]
    fn test_budgets_are_reproducible() -> anyhow::Result<()> {
        let model = ConfigurationModel::new(500, -2.5);
        let budgets = model.degree_budgets()?;
        assert_eq!(budgets, model.degree_budgets()?);
        assert_eq!(budgets, ConfigurationModel::new(500, 2.5).degree_budgets()?);
        assert!(budgets.iter().all(|&d| (10..=50_000).contains(&d)));
        assert_ne!(budgets, model.with_seed(0).degree_budgets()?);
        Ok(())
    }

    #[test]
    fn test_budgets_use_portable_source() -> anyhow::Result<()> {
        let model = ConfigurationModel::new(200, 2.2).with_seed(7);
        let draws = power_law(&mut Pcg64Mcg::seed_from_u64(7), 200, 10.0, 2.2)?;
        let expected = draws
            .into_iter()
            .filter(|&x| x <= ConfigurationModel::MAX_DEGREE)
            .map(|x| x.ceil() as usize)
            .collect::<Vec<_>>();
        assert_eq!(model.degree_budgets()?, expected);
        Ok(())
    }

    #[test]
    fn test_invalid_exponent() {
        let mut rng = SmallRng::seed_from_u64(0);
        for exponent in [-1.0, 0.5, f64::NAN] {
            let res = ConfigurationModel::new(10, exponent).generate(&mut rng, no_logging![]);
            assert!(matches!(res, Err(GenerateError::InvalidExponent(_))));
        }
    }

    #[test]
    fn test_single_holder() -> anyhow::Result<()> {
        let g = ConfigurationModel::new(1, -2.5).generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
        assert_eq!(g.num_nodes(), 1);
        assert_eq!(g.num_edges(), 0);
        Ok(())
    }
}
