use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;

use hsort::DynamicArray;
use hsort::Result;
use hsort::cli::Args;
use hsort::config::Config;
use hsort::{debug, input, output, sort};

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("hsort: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args);

    let mut records = DynamicArray::new();
    if config.input_files.is_empty() {
        let stdin = io::stdin();
        input::read_records(BufReader::new(stdin.lock()), &config, &mut records)?;
    } else {
        for path in &config.input_files {
            let reader: Box<dyn BufRead> = if path == "-" {
                Box::new(BufReader::new(io::stdin().lock()))
            } else {
                Box::new(BufReader::new(File::open(path)?))
            };
            input::read_records(reader, &config, &mut records)?;
        }
    }

    if config.debug {
        let mut stderr = io::stderr().lock();
        debug::debug_stage(&mut stderr, "input", &records)?;
        stderr.flush()?;
    }

    sort::sort_records(&mut records, &config)?;

    if config.debug {
        let mut stderr = io::stderr().lock();
        debug::debug_stage(&mut stderr, "sorted", &records)?;
        stderr.flush()?;
    }

    let out = output::open_output(&config)?;
    output::write_records(out, &records, &config)?;

    Ok(())
}
