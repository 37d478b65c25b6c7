//! HKM command-line tool
//!
//! Reads a bipartite graph as `n m e` followed by `e` edge pairs, computes a
//! maximum matching and prints it. Exits with 1 on invalid input.

#[global_allocator]
/// Global allocator using jemalloc.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod error;
mod input;
mod report;
mod session;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use args::Args;
use error::CliError;
use input::{TokenReader, open_input};

/// Executes the matcher.
///
/// This function:
/// 1. Initializes logging (warnings on by default)
/// 2. Parses command-line arguments
/// 3. Reads the graph from `--input` or stdin
/// 4. Prints the maximum matching
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.to_config();
    let mut out = io::stdout().lock();

    if let Some(path) = &args.input {
        let mut tokens = open_input(path)?;
        session::solve(&mut tokens, None, &mut out, config, args.format)?;
    } else {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let mut stderr = io::stderr();
        let prompt: Option<&mut dyn Write> = if interactive {
            Some(&mut stderr)
        } else {
            None
        };
        let mut tokens = TokenReader::new(stdin.lock());
        session::solve(&mut tokens, prompt, &mut out, config, args.format)?;
    }

    out.flush()?;
    Ok(())
}
