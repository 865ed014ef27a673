use anyhow::{Context, Result};
use fracsort_demo::{Command, DemoConfig, parse_args, run_all, walkthrough};
use std::env;
use std::io::{self, Write};
use std::process;
use tracing::Level;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  fracsort [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --size <N>        Elements per generated list (default 10000)");
    eprintln!("      --seed <S>        Seed for the generated lists (default: clock)");
    eprintln!("      --string-len <L>  Length of generated strings (default 10)");
    eprintln!("  -v, --verbose         Log debug output to stderr");
    eprintln!("  -h, --help            Show this help message");
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(config: DemoConfig) -> Result<()> {
    init_tracing(config.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for timing in run_all(&config) {
        writeln!(out, "{timing}").context("failed to write timings")?;
    }
    writeln!(out)?;

    walkthrough(&mut out).context("failed to write walkthrough")?;
    out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    match parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            print_usage();
            Ok(())
        }
        Ok(Command::Run(config)) => run(config),
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    }
}
