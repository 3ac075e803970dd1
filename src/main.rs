//! chisq_posthoc command-line interface

use clap::Parser;
use log::{info, LevelFilter};

use chisq_posthoc::cli::Cli;
use chisq_posthoc::prelude::*;

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    // Validate method and alpha early, before touching the input file
    let method: CorrectionMethod = cli.method.parse()?;
    if !(cli.alpha > 0.0 && cli.alpha < 1.0) {
        return Err(ChisqError::InvalidInput {
            reason: format!("alpha must be in (0, 1), got {}", cli.alpha),
        });
    }

    info!("Loading contingency table from: {}", cli.table);
    let table = read_contingency_table(&cli.table)?;
    info!(
        "  {} groups, {} categories",
        table.n_rows(),
        table.n_cols()
    );

    let results = posthoc_with_correction(&table, method, cli.alpha)?;

    if let Some(output) = &cli.output {
        info!("Writing pairwise results to: {}", output);
        write_results(output, &results)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", results.summary());
    }

    Ok(())
}
