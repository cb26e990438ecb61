use std::process;

use owo_colors::OwoColorize;

mod app;
mod cli;
mod discovery;
mod pipeline;
mod report;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("{} {:?}", "error:".red().bold(), miette::Report::new(err));
        process::exit(1);
    }
}
