//! calldata-bench CLI
//!
//! Runs the benchmark for a single input without starting the HTTP service,
//! or prints the fee estimates for an arbitrary output size.

use anyhow::Context;
use calldata_core::{logging, Algorithm, FeeQuote};
use calldata_crypto::build_record;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(
    name = "calldata-bench",
    version,
    about = "Benchmark crypto transforms and estimate L2 calldata fees"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one transaction record and print it
    Run {
        /// Input text; read from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,
        /// Print the record as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print fee estimates for an output size in bytes
    Fees {
        #[arg(short, long)]
        size: usize,
    },
}

#[derive(Debug, Serialize)]
struct FeesOutput {
    output_size: usize,
    arbitrum: f64,
    op_stack: f64,
    base: f64,
}

fn main() -> anyhow::Result<()> {
    logging::init_cli();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Run { text, json } => cmd_run(text, json),
        Command::Fees { size } => cmd_fees(size),
    }
}

fn cmd_run(text: Option<String>, json: bool) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input text from stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let record = build_record(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("input size: {} bytes", record.input_size());
    println!(
        "{:<10} {:>12} {:>8} {:>14} {:>14}",
        "algorithm", "time (us)", "bytes", "arbitrum", "op-stack"
    );
    for algorithm in Algorithm::ALL {
        let m = record.metrics(algorithm);
        println!(
            "{:<10} {:>12.3} {:>8} {:>14.3e} {:>14.3e}",
            algorithm.as_str(),
            m.elapsed_seconds * 1e6,
            m.output_size,
            m.arbitrum_fee,
            m.op_stack_fee
        );
    }
    Ok(())
}

fn cmd_fees(size: usize) -> anyhow::Result<()> {
    let quote = FeeQuote::for_output_size(size);
    let output = FeesOutput {
        output_size: size,
        arbitrum: quote.arbitrum,
        op_stack: quote.op_stack,
        base: quote.base,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
