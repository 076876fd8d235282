/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use netgen::prelude::*;

use super::OutputArgs;
use crate::GlobalArgs;

#[derive(Parser, Debug)]
#[command(name = "sw", about = "Generates a Watts-Strogatz small-world graph: a ring lattice whose edges are rewired with probability beta.", long_about = None)]
pub struct CliArgs {
    /// The number of nodes.
    pub num_nodes: usize,
    /// The number of lattice edges.
    pub num_edges: usize,
    #[arg(short, long, default_value_t = 0.05)]
    /// The rewiring probability.
    pub beta: f64,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    super::generate(
        &global_args,
        &args.output,
        &SmallWorld::new(args.num_nodes, args.num_edges, args.beta),
    )?;
    Ok(())
}
