// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument model and command dispatch.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ccd_io::{Coordinate, Query, Rational};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::report::{summary_table, FileSummary};

#[derive(Parser, Debug)]
#[command(name = "ccd-queries", author, version)]
#[command(about = "Inspect continuous collision detection query suites")]
pub struct Cli {
    /// Log filter in `tracing` directive syntax (e.g. `debug`, `ccd_io=trace`)
    #[arg(long, global = true, env = "CCD_QUERIES_LOG", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print query and collision counts for one or more files
    Summary {
        /// Query CSV files (vertex CSV when --ground-truth is given)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// JSON array of ground-truth flags; switches to the split layout
        #[arg(long)]
        ground_truth: Option<PathBuf>,
    },
    /// Print the parsed queries as JSON
    Dump {
        /// Query CSV file (vertex CSV when --ground-truth is given)
        file: PathBuf,
        /// JSON array of ground-truth flags; switches to the split layout
        #[arg(long)]
        ground_truth: Option<PathBuf>,
        /// Emit coordinates as floating-point numbers instead of exact "n/d" strings
        #[arg(long)]
        float: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summary {
            files,
            ground_truth,
        } => summary(&files, ground_truth.as_deref()),
        Commands::Dump {
            file,
            ground_truth,
            float,
        } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if float {
                dump(&mut out, &load::<f64>(&file, ground_truth.as_deref())?)
            } else {
                dump(&mut out, &load::<Rational>(&file, ground_truth.as_deref())?)
            }
        }
    }
}

fn load<T: Coordinate>(file: &Path, ground_truth: Option<&Path>) -> Result<Vec<Query<T>>> {
    let queries = match ground_truth {
        Some(flags) => ccd_io::read_split_queries(file, flags),
        None => ccd_io::read_queries(file),
    };
    queries.with_context(|| format!("failed to load {}", file.display()))
}

fn summary(files: &[PathBuf], ground_truth: Option<&Path>) -> Result<()> {
    if ground_truth.is_some() && files.len() != 1 {
        bail!("--ground-truth pairs with exactly one vertex file, got {}", files.len());
    }
    info!(files = files.len(), "summarizing query suites");

    let mut rows = Vec::with_capacity(files.len());
    for file in files {
        let queries = load::<Rational>(file, ground_truth)?;
        rows.push(FileSummary::new(file, &queries));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", summary_table(&rows))?;
    Ok(())
}

fn dump<T: serde::Serialize>(out: &mut impl Write, queries: &[Query<T>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, queries).context("failed to encode queries")?;
    writeln!(out)?;
    Ok(())
}
