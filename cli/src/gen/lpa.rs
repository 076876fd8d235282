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
#[command(name = "lpa", about = "Generates a graph by linear preferential attachment: nodes are chosen with probability proportional to their degree plus a constant offset.", long_about = None)]
pub struct CliArgs {
    /// The number of nodes (at least 100).
    pub num_nodes: usize,
    /// The target number of edges, used to compute the edges per node.
    pub num_edges: usize,
    #[arg(short, long, allow_negative_numbers = true, default_value_t = 0.0)]
    /// The offset added to the degree of nodes with positive degree.
    pub alpha: f64,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    super::generate(
        &global_args,
        &args.output,
        &LinearPrefAttach::new(args.num_nodes, args.num_edges, args.alpha),
    )?;
    Ok(())
}
