use anyhow::{Context, Result};
use codetidy_cli::{init_logging, program_name};
use codetidy_config::Config;
use codetidy_engine::{BlockPatterns, IoError, sort_components_file};
use std::path::PathBuf;
use std::{env, process};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!(
            "Usage: {} <filename>",
            program_name(&args, "sort-components")
        );
        process::exit(1);
    }
    let input = PathBuf::from(&args[1]);

    let patterns = match load_patterns() {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    match sort_components_file(&input, &patterns) {
        Ok(report) => {
            if report.block_count == 0 {
                log::warn!("No components found in {}", input.display());
            }
            println!(
                "Components sorted successfully. Output file: {}",
                report.output_path.display()
            );
        }
        Err(e @ IoError::NotFound(_)) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        Err(e) => {
            log::error!("Sorting {} failed: {e:?}", input.display());
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Patterns from the config file when there is one, otherwise the defaults.
fn load_patterns() -> Result<BlockPatterns> {
    let config_path = Config::config_path();
    let Some(config) = Config::load().context("Failed to load config file")? else {
        return Ok(BlockPatterns::default());
    };

    config
        .sort
        .patterns()
        .with_context(|| format!("Invalid [sort] pattern in {}", config_path.display()))
}
