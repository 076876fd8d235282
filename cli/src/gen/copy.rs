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
#[command(name = "copy", about = "Generates a graph by duplication-divergence: each new node copies a random template node, keeping each of its edges with probability alpha.", long_about = None)]
pub struct CliArgs {
    /// The number of nodes.
    pub num_nodes: usize,
    #[arg(short, long)]
    /// The probability of keeping each edge of the template.
    pub alpha: f64,
    #[arg(long)]
    /// Fail after this many attempts to add a node instead of retrying forever.
    pub max_attempts: Option<usize>,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let mut model = CopyModel::new(args.num_nodes, args.alpha);
    if let Some(max_attempts) = args.max_attempts {
        model = model.with_max_attempts(max_attempts);
    }
    super::generate(&global_args, &args.output, &model)?;
    Ok(())
}
