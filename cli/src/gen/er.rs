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
#[command(name = "er", about = "Generates an Erdös-Rényi graph: every pair of distinct nodes is joined independently with the probability giving the requested expected number of edges.", long_about = None)]
pub struct CliArgs {
    /// The number of nodes.
    pub num_nodes: usize,
    /// The expected number of edges.
    pub num_edges: usize,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let er = ErdosRenyi::new(args.num_nodes, args.num_edges);
    log::info!("Edge probability: {}", er.edge_probability());
    super::generate(&global_args, &args.output, &er)?;
    Ok(())
}
