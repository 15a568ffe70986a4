// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

#![deny(warnings)]

use clap::Parser;
use memviz::{
    serialize_report,
    sources::{Lookup, ProcFs},
    RenderOptions, Report, DEFAULT_BAR_LENGTH,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Memory Visualiser -- See Memory Usage Report with bar charts", long_about = None)]
struct Args {
    /// Display memory usage in a human-readable format
    #[arg(short = 'H', long)]
    human_readable: bool,

    /// Length of the graph
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BAR_LENGTH,
        value_parser = parse_length,
    )]
    length: usize,

    /// List the memory of each process of the program
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// How to find the processes of the program
    #[arg(long, value_enum, default_value_t = Lookup::Pidof)]
    lookup: Lookup,

    #[arg(long, default_value = "/proc", hide = true)]
    proc_root: PathBuf,

    /// If a program is specified, show memory use of all associated processes. Show only total use if not.
    program: Option<String>,
}

fn parse_length(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("length must be at least 1".to_owned()),
        Ok(length) => Ok(length),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = memviz::init_tracing() {
        eprintln!("Error: invalid log filter: {e}");
    }
    let procfs = ProcFs::new(&args.proc_root);
    let report = match Report::capture(&procfs, args.lookup, args.program.as_deref()).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.json {
        match serialize_report(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: cannot serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }
    let options = RenderOptions {
        bar_length: args.length,
        human_readable: args.human_readable,
        verbose: args.verbose,
    };
    for line in report.render(&options) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
