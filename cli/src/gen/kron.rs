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
#[command(name = "kron", about = "Generates a Kronecker graph as a power of a random binary pattern matrix.", long_about = None)]
pub struct CliArgs {
    /// The requested number of nodes; the actual number is the largest power
    /// of the pattern side not exceeding it.
    pub num_nodes: usize,
    #[arg(short, long, default_value_t = 0.4)]
    /// The probability that a cell of the pattern is set.
    pub density: f64,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let model = Kronecker::new(args.num_nodes, args.density);
    let (order, side) = model.scale();
    log::info!("Kronecker power {order} of side {side}");
    super::generate(&global_args, &args.output, &model)?;
    Ok(())
}
