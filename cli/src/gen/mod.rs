/*
 * SPDX-FileCopyrightText: 2025 The netgen developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use netgen::prelude::*;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{create_parent_dir, progress_logger, rng_from_seed, GlobalArgs};

pub mod ba;
pub mod cfgm;
pub mod copy;
pub mod er;
pub mod kron;
pub mod lpa;
pub mod sw;

/// Generates a single random graph.
#[derive(Subcommand, Debug)]
#[command(name = "gen")]
pub enum SubCommands {
    Er(er::CliArgs),
    Ba(ba::CliArgs),
    Lpa(lpa::CliArgs),
    Copy(copy::CliArgs),
    Cfgm(cfgm::CliArgs),
    Kron(kron::CliArgs),
    Sw(sw::CliArgs),
}

pub fn main(global_args: GlobalArgs, subcommand: SubCommands) -> Result<()> {
    match subcommand {
        SubCommands::Er(args) => er::main(global_args, args),
        SubCommands::Ba(args) => ba::main(global_args, args),
        SubCommands::Lpa(args) => lpa::main(global_args, args),
        SubCommands::Copy(args) => copy::main(global_args, args),
        SubCommands::Cfgm(args) => cfgm::main(global_args, args),
        SubCommands::Kron(args) => kron::main(global_args, args),
        SubCommands::Sw(args) => sw::main(global_args, args),
    }
}

#[derive(Args, Debug)]
/// Shared CLI arguments controlling randomness and output of a generator.
pub struct OutputArgs {
    #[arg(short, long)]
    /// The seed of the pseudorandom number generator; if not specified, a
    /// random seed is used and logged.
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    /// Print the edges on standard output, one per line.
    pub arcs: bool,

    #[arg(long, default_value_t = '\t')]
    /// The column separator used when printing edges.
    pub separator: char,

    #[arg(long)]
    /// Store a JSON summary of the structure of the graph at this path.
    pub summary: Option<PathBuf>,
}

/// Runs a generator and handles its output as requested.
pub fn generate(
    global_args: &GlobalArgs,
    args: &OutputArgs,
    generator: &impl Generator,
) -> Result<MultiGraph> {
    let mut rng = rng_from_seed(args.seed);
    let mut pl = progress_logger(global_args);
    let graph = generator
        .generate(&mut rng, &mut pl)
        .with_context(|| format!("Could not generate the {} graph", generator.name()))?;

    log::info!(
        "Generated {} graph with {} nodes, {} edges and {} loops",
        generator.name(),
        graph.num_nodes(),
        graph.num_edges(),
        graph.num_self_loops()
    );

    if args.arcs {
        write_arcs(&graph, args.separator, std::io::stdout().lock())?;
    }

    if let Some(path) = &args.summary {
        let summary = Summary::compute(&graph, &mut rng, &mut pl);
        store_summary(&summary, path)?;
    }

    Ok(graph)
}

/// Writes the edges of a graph, one per line, with the endpoints separated
/// by `separator`.
pub fn write_arcs(graph: &MultiGraph, separator: char, writer: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for &(u, v) in graph.edges() {
        writeln!(writer, "{u}{separator}{v}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Stores a summary in JSON format, creating parent directories if needed.
pub fn store_summary(summary: &Summary, path: &Path) -> Result<()> {
    create_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("Could not write summary to {}", path.display()))?;
    writer.flush()?;
    log::info!("Summary stored at {}", path.display());
    Ok(())
}
