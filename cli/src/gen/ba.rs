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
#[command(name = "ba", about = "Generates a Barabási-Albert graph by preferential attachment: each new node links to existing nodes chosen with probability proportional to their degree.", long_about = None)]
pub struct CliArgs {
    /// The number of nodes.
    pub num_nodes: usize,
    /// The target number of edges; each node adds num_edges / num_nodes edges.
    pub num_edges: usize,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    super::generate(
        &global_args,
        &args.output,
        &BarabasiAlbert::new(args.num_nodes, args.num_edges),
    )?;
    Ok(())
}
