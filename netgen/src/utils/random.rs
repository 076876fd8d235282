/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random variates shared by the generators.
//!
//! Uniform integer selection is done directly with [`Rng::random_range`],
//! and dynamic weighted selection with
//! [`WeightedTreeIndex`](rand_distr::weighted::WeightedTreeIndex); this
//! module provides the variates that need a convention of their own.

use rand::Rng;
use rand_distr::{Distribution, Pareto, ParetoError};

/// Returns a uniform real in [0..1).
#[inline(always)]
pub fn uniform(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>()
}

/// Returns true if a uniform real in [0..1) is at most `p`.
///
/// Differently from [`Rng::random_bool`], `p` is not checked, so values
/// greater than one always succeed and negative values never do.
#[inline(always)]
pub fn bernoulli(rng: &mut impl Rng, p: f64) -> bool {
    uniform(rng) <= p
}

/// Draws `n` power-law variates with minimum value `min` and density
/// proportional to `x^-exponent`.
///
/// Only the absolute value of `exponent` is used, so `-2.5` and `2.5` are
/// the same distribution. The variates are generated by inversion, as
/// `min · (1 - u)^(-1 / (|exponent| - 1))`, that is, using a [Pareto
/// distribution](Pareto) with scale `min` and shape `|exponent| - 1`.
///
/// # Errors
///
/// Fails if `min` is not positive or if `|exponent|` is not greater than
/// one.
pub fn power_law(
    rng: &mut impl Rng,
    n: usize,
    min: f64,
    exponent: f64,
) -> Result<Vec<f64>, ParetoError> {
    let distr = Pareto::new(min, exponent.abs() - 1.0)?;
    Ok(distr.sample_iter(rng).take(n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_power_law() -> anyhow::Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);
        let draws = power_law(&mut rng, 10_000, 10.0, -2.5)?;
        assert_eq!(draws.len(), 10_000);
        assert!(draws.iter().all(|&x| x >= 10.0));
        // P(X > 40) = 4^-1.5 = 0.125
        let tail = draws.iter().filter(|&&x| x > 40.0).count();
        assert!((1_000..1_500).contains(&tail), "{tail}");
        assert!(power_law(&mut rng, 1, 10.0, 1.0).is_err());
        Ok(())
    }

    #[test]
    fn test_bernoulli() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!((0..100).all(|_| bernoulli(&mut rng, 1.0)));
        assert!((0..100).all(|_| !bernoulli(&mut rng, -0.5)));
    }
}
