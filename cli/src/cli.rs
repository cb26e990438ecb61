use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "dartstrip", about = "Strip comments from Dart source trees")]
pub struct Cli {
    /// Root directory to walk for .dart files
    pub path: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print a result line for every file, not just changed ones
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Emit the per-file report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Skip any path containing this directory name (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub excludes: Vec<String>,
}
