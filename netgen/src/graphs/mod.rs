/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representation and random-graph generators.

pub mod multigraph;
pub mod random;

pub mod prelude {
    pub use super::multigraph::MultiGraph;
    pub use super::random::{
        BarabasiAlbert, ConfigurationModel, CopyModel, ErdosRenyi, GenerateError, Generator,
        Kronecker, LinearPrefAttach, SmallWorld,
    };
}
