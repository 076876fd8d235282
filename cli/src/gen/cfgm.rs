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
#[command(name = "cfgm", about = "Generates a graph with the configuration model: degree budgets are drawn from a power law and stubs are matched uniformly at random.", long_about = None)]
pub struct CliArgs {
    /// The number of degree draws.
    pub num_nodes: usize,
    #[arg(short, long, allow_negative_numbers = true, default_value_t = -2.5)]
    /// The exponent of the power law; only its absolute value matters.
    pub exponent: f64,
    #[arg(long, default_value_t = ConfigurationModel::DEFAULT_SEED)]
    /// The seed of the degree budgets, independent from the matching seed.
    pub degree_seed: u64,
    #[clap(flatten)]
    pub output: OutputArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let model = ConfigurationModel::new(args.num_nodes, args.exponent).with_seed(args.degree_seed);
    super::generate(&global_args, &args.output, &model)?;
    Ok(())
}
