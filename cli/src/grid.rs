/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::Parser;
use netgen::prelude::*;
use rand::rngs::SmallRng;
use std::path::{Path, PathBuf};

use crate::gen::{store_summary, write_arcs};
use crate::{create_parent_dir, progress_logger, rng_from_seed, GlobalArgs};

#[derive(Parser, Debug)]
#[command(name = "grid", about = "Runs every model over a fixed grid of parameters, storing a JSON summary of each generated graph in a directory tree <DST>/<MODEL>/<PARAMETERS>/summary.json.", long_about = None)]
pub struct CliArgs {
    /// The root directory of the results.
    pub dst: PathBuf,

    #[arg(short = 'n', long, default_value_t = 3000)]
    /// The number of nodes; the configuration model uses half of it.
    pub num_nodes: usize,

    #[arg(short = 'm', long, default_value_t = 90000)]
    /// The number of edges; linear preferential attachment uses twice as
    /// many.
    pub num_edges: usize,

    #[arg(long, default_value_t = 1000)]
    /// The number of nodes requested from the Kronecker model.
    pub kron_nodes: usize,

    #[arg(short, long)]
    /// The seed of the pseudorandom number generator shared by all runs.
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    /// Also store the edges of each graph in a file edges.tsv next to its
    /// summary.
    pub arcs: bool,
}

pub const SW_BETAS: [f64; 3] = [0.01, 0.05, 0.1];
pub const COPY_ALPHAS: [f64; 3] = [0.5, 0.6, 0.7];
pub const CFGM_EXPONENTS: [f64; 3] = [-2.2, -2.5, -2.8];
pub const KRON_DENSITIES: [f64; 3] = [0.3, 0.4, 0.5];
pub const LPA_ALPHAS: [f64; 5] = [-0.85, -0.5, 0.0, 5.0, 100.0];

/// State shared by all the runs of a grid.
struct Runner<'a> {
    global_args: &'a GlobalArgs,
    args: &'a CliArgs,
    rng: SmallRng,
}

impl Runner<'_> {
    fn run(&mut self, dir: impl AsRef<Path>, generator: &impl Generator) -> Result<()> {
        let dir = self.args.dst.join(dir);
        let mut pl = progress_logger(self.global_args);
        log::info!("Running {} into {}", generator.name(), dir.display());
        let graph = generator
            .generate(&mut self.rng, &mut pl)
            .with_context(|| format!("Could not generate the graph in {}", dir.display()))?;

        if self.args.arcs {
            let path = dir.join("edges.tsv");
            create_parent_dir(&path)?;
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            write_arcs(&graph, '\t', file)?;
        }

        let summary = Summary::compute(&graph, &mut self.rng, &mut pl);
        store_summary(&summary, &dir.join("summary.json"))
    }
}

/// Formats a number in scientific notation with `precision` fractional
/// digits and a signed exponent of at least two digits, as in `5e-02` or
/// `2.2e+00`.
fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exp)) = formatted.split_once('e') else {
        return formatted;
    };
    match exp.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        Err(_) => formatted,
    }
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let (v, e) = (args.num_nodes, args.num_edges);
    let mut runner = Runner {
        global_args: &global_args,
        rng: rng_from_seed(args.seed),
        args: &args,
    };

    runner.run("erdos-renyi", &ErdosRenyi::new(v, e))?;

    for beta in SW_BETAS {
        runner.run(
            format!("small-world/beta_{}", scientific(beta, 0)),
            &SmallWorld::new(v, e, beta),
        )?;
    }

    runner.run("barabasi-albert", &BarabasiAlbert::new(v, e))?;

    for alpha in COPY_ALPHAS {
        runner.run(
            format!("copy-model/alpha_{}_cm", scientific(alpha, 0)),
            &CopyModel::new(v, alpha),
        )?;
    }

    for exponent in CFGM_EXPONENTS {
        runner.run(
            format!("configuration-model/alpha_{}_cfgm", scientific(-exponent, 1)),
            &ConfigurationModel::new(v / 2, exponent),
        )?;
    }

    for density in KRON_DENSITIES {
        runner.run(
            format!("kronecker-graph/density_{}_kgm", scientific(density, 6)),
            &Kronecker::new(args.kron_nodes, density),
        )?;
    }

    for alpha in LPA_ALPHAS {
        runner.run(
            format!("linear_pref_attach/alpha_{}_lpa", scientific(alpha, 6)),
            &LinearPrefAttach::new(v, 2 * e, alpha),
        )?;
    }

    Ok(())
}
