use owo_colors::OwoColorize;

use crate::pipeline::RunSummary;

pub fn print_records(summary: &RunSummary, verbose: bool, dry_run: bool) {
    for record in &summary.records {
        if !record.success {
            println!(
                "{} {} - {}",
                "error".red().bold(),
                record.path.display(),
                record.error.as_deref().unwrap_or("unknown failure")
            );
        } else if record.changed {
            let tag = if dry_run { "would strip" } else { "stripped" };
            println!("{} {}", tag.green(), record.path.display());
        } else if verbose {
            println!("{} {}", "clean".bright_black(), record.path.display());
        }
    }
}

pub fn print_totals(summary: &RunSummary, elapsed_secs: f64) {
    println!("\n{}", "=".repeat(60));
    println!(
        "Stripped: {} | Clean: {} | Failed: {}",
        summary.changed.to_string().green().bold(),
        summary.unchanged.to_string().bold(),
        summary.failed.to_string().red().bold()
    );
    println!("Completed in {:.2}s", elapsed_secs);
    println!("{}", "=".repeat(60));
}

pub fn print_json(summary: &RunSummary) {
    let text = serde_json::to_string_pretty(&summary.records)
        .expect("file records serialize to JSON");
    println!("{text}");
}
