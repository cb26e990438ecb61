use std::time::Instant;

use clap::Parser;
use dartstrip::PipelineError;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::discovery::collect_dart_files;
use crate::pipeline::{init_thread_pool, run_tree};
use crate::report;

pub fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    let root = cli.path.ok_or(PipelineError::MissingInput)?;
    if !root.is_dir() {
        return Err(PipelineError::NotADirectory { path: root });
    }

    let start = Instant::now();
    init_thread_pool();

    let files = collect_dart_files(&root, &cli.excludes);
    if !cli.json {
        println!(
            "{} {} Dart files...\n",
            "Scanning".bold().cyan(),
            files.len()
        );
    }

    let summary = run_tree(&files, cli.dry_run);

    if cli.json {
        report::print_json(&summary);
    } else {
        report::print_records(&summary, cli.verbose, cli.dry_run);
        report::print_totals(&summary, start.elapsed().as_secs_f64());
    }

    Ok(())
}
