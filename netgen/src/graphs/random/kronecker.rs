/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use rand::Rng;

use super::{check_probability, GenerateError, Generator};
use crate::graphs::multigraph::MultiGraph;
use crate::utils::uniform;

/// Kronecker graphs grown from a random seed pattern.
///
/// The seed pattern is a [`SIDE`](Self::SIDE) × [`SIDE`](Self::SIDE) 0-1
/// matrix whose diagonal is 1 and whose other cells are 1 if a uniform real
/// in [0..1) is at most the given density. The adjacency matrix is the
/// Kronecker power of order `k` of the pattern, where `k = ⌊log₁₀ n⌋` for the
/// requested number of nodes `n`, and every nonzero cell `(i, j)` becomes an
/// edge, in row-major order. Diagonal cells become loops.
///
/// Note that the resulting number of nodes is `10ᵏ`, the largest power of
/// ten not exceeding `n`, and that the number of edges is the `k`-th power of
/// the number of ones in the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kronecker {
    num_nodes: usize,
    density: f64,
}

impl Kronecker {
    /// The side of the seed pattern.
    pub const SIDE: usize = 10;

    /// Creates a new Kronecker model, given the approximate number of nodes
    /// and the density of the seed pattern.
    pub fn new(num_nodes: usize, density: f64) -> Self {
        Self { num_nodes, density }
    }

    /// Returns the order of the Kronecker power and the actual number of
    /// nodes of the generated graph.
    pub fn scale(&self) -> (u32, usize) {
        let mut order = 0;
        let mut side = 1;
        while side <= self.num_nodes / Self::SIDE {
            side *= Self::SIDE;
            order += 1;
        }
        (order, side)
    }

    /// Returns the nonzero cells of a random seed pattern in row-major
    /// order.
    pub fn pattern(&self, rng: &mut impl Rng) -> Vec<(usize, usize)> {
        let mut cells = [[0.0; Self::SIDE]; Self::SIDE];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if i == j { 1.0 } else { uniform(rng) };
            }
        }
        // Binarize in two passes so that cells equal to the density are kept
        for cell in cells.iter_mut().flatten() {
            if *cell <= self.density {
                *cell = 1.0;
            }
        }
        for cell in cells.iter_mut().flatten() {
            if *cell < 1.0 {
                *cell = 0.0;
            }
        }

        let mut pattern = vec![];
        for (i, row) in cells.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell != 0.0 {
                    pattern.push((i, j));
                }
            }
        }
        pattern
    }
}

impl Generator for Kronecker {
    fn name(&self) -> &'static str {
        "Kronecker"
    }

    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError> {
        check_probability("density", self.density)?;
        let (order, num_nodes) = self.scale();
        if order == 0 {
            return Err(GenerateError::TooFewNodes {
                model: self.name(),
                min: Self::SIDE,
                got: self.num_nodes,
            });
        }
        let pattern = self.pattern(rng);

        pl.item_name("product");
        pl.expected_updates(Some(order as usize - 1));
        pl.start(format!(
            "Generating Kronecker graph of order {order} from a pattern with {} cells...",
            pattern.len()
        ));

        let mut cells = pattern.clone();
        for _ in 1..order {
            cells = cells
                .iter()
                .flat_map(|&(r, c)| {
                    pattern
                        .iter()
                        .map(move |&(pr, pc)| (r * Self::SIDE + pr, c * Self::SIDE + pc))
                })
                .collect();
            pl.update();
        }
        cells.sort_unstable();
        pl.done();

        let g = MultiGraph::from_edges(num_nodes, cells);
        log::info!(
            "Created KGM graph on {} nodes with {} edges",
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
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_scale() {
        assert_eq!(Kronecker::new(9, 0.5).scale(), (0, 1));
        assert_eq!(Kronecker::new(10, 0.5).scale(), (1, 10));
        assert_eq!(Kronecker::new(999, 0.5).scale(), (2, 100));
        assert_eq!(Kronecker::new(1000, 0.5).scale(), (3, 1000));
        assert_eq!(Kronecker::new(12345, 0.5).scale(), (4, 10000));
    }

    #[test]
    fn test_pattern_diagonal() {
        let pattern = Kronecker::new(100, 0.3).pattern(&mut SmallRng::seed_from_u64(0));
        for i in 0..Kronecker::SIDE {
            assert!(pattern.contains(&(i, i)));
        }
        assert!(pattern.is_sorted());
    }

    #[test]
    fn test_edges_are_power_of_pattern() -> anyhow::Result<()> {
        let model = Kronecker::new(1000, 0.4);
        let ones = model.pattern(&mut SmallRng::seed_from_u64(3)).len();
        let g = model.generate(&mut SmallRng::seed_from_u64(3), no_logging![])?;
        assert_eq!(g.num_nodes(), 1000);
        assert_eq!(g.num_edges(), ones.pow(3));
        assert!(g.edges().is_sorted());
        Ok(())
    }

    #[test]
    fn test_too_few_nodes() {
        let res = Kronecker::new(9, 0.5).generate(&mut SmallRng::seed_from_u64(0), no_logging![]);
        assert!(matches!(res, Err(GenerateError::TooFewNodes { .. })));
    }
}
