/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random-graph generators.
//!
//! Every model is a plain parameter record implementing [`Generator`]. The
//! source of randomness is provided by the caller, so generating twice with
//! two identically seeded generators yields identical graphs:
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use netgen::prelude::*;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let model = BarabasiAlbert::new(100, 500);
//! let a = model.generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
//! let b = model.generate(&mut SmallRng::seed_from_u64(0), no_logging![])?;
//! assert_eq!(a, b);
//! assert_eq!(a.num_edges(), 100 + 100 * 5);
//! # Ok::<(), GenerateError>(())
//! ```

use dsi_progress_logger::ProgressLog;
use rand::Rng;
use thiserror::Error;

use super::multigraph::MultiGraph;

mod ba;
pub use ba::BarabasiAlbert;

mod config;
pub use config::ConfigurationModel;

mod copy;
pub use copy::CopyModel;

mod er;
pub use er::ErdosRenyi;

mod kronecker;
pub use kronecker::Kronecker;

mod lpa;
pub use lpa::LinearPrefAttach;

mod small_world;
pub use small_world::SmallWorld;

/// A random-graph model.
pub trait Generator {
    /// Returns a short human-readable name of the model.
    fn name(&self) -> &'static str;

    /// Generates a graph using the given source of randomness.
    ///
    /// The progress logger receives one update per node (or per edge, for
    /// models that do not grow node by node); pass
    /// [`no_logging![]`](dsi_progress_logger::no_logging) to disable
    /// progress logging.
    fn generate(
        &self,
        rng: &mut impl Rng,
        pl: &mut impl ProgressLog,
    ) -> Result<MultiGraph, GenerateError>;
}

/// Errors returned by [`Generator::generate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The model needs more nodes than requested.
    #[error("The {model} model needs at least {min} nodes, but {got} were requested")]
    TooFewNodes {
        model: &'static str,
        min: usize,
        got: usize,
    },
    /// A probability or density is outside its domain.
    #[error("Invalid value for {name}: {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    /// The power-law exponent does not define a distribution.
    #[error("Invalid power-law exponent {0}: its absolute value must be greater than one")]
    InvalidExponent(f64),
    /// An attachment weight became negative.
    #[error("Negative attachment weight {weight} for node {node}")]
    InvalidWeight { node: usize, weight: f64 },
    /// All attachment weights are zero.
    #[error("All attachment weights are zero")]
    ZeroTotalWeight,
    /// A rejection loop hit its bound.
    #[error("No node could be added in {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

/// Returns the number of edges each node should emit to reach `num_edges`
/// edges on `num_nodes` nodes.
pub(crate) fn edges_per_node(num_nodes: usize, num_edges: usize) -> usize {
    num_edges.checked_div(num_nodes).unwrap_or(0)
}

pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), GenerateError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerateError::InvalidProbability { name, value })
    }
}
