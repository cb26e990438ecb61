use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use dartstrip::{PipelineError, process};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub changed: bool,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<FileRecord>,
    pub changed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

pub fn init_thread_pool() {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8);

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// Run every file through the strip pipeline in parallel. Files are
/// independent; a per-file I/O failure is recorded and the run continues.
pub fn run_tree(files: &[PathBuf], dry_run: bool) -> RunSummary {
    let records: Vec<FileRecord> = files
        .par_iter()
        .map(|path| run_file(path, dry_run))
        .collect();

    let mut summary = RunSummary {
        records,
        changed: 0,
        unchanged: 0,
        failed: 0,
    };
    for record in &summary.records {
        if !record.success {
            summary.failed += 1;
        } else if record.changed {
            summary.changed += 1;
        } else {
            summary.unchanged += 1;
        }
    }
    summary
}

fn run_file(path: &Path, dry_run: bool) -> FileRecord {
    match strip_file(path, dry_run) {
        Ok(changed) => FileRecord {
            path: path.to_path_buf(),
            changed,
            success: true,
            error: None,
        },
        Err(err) => FileRecord {
            path: path.to_path_buf(),
            changed: false,
            success: false,
            error: Some(render_error(&err)),
        },
    }
}

/// Read, strip, and write back one file. The write only happens when the
/// stripped text differs from what is on disk.
fn strip_file(path: &Path, dry_run: bool) -> Result<bool, PipelineError> {
    let source =
        fs::read_to_string(path).map_err(|err| PipelineError::io("read", path, err))?;
    let outcome = process(&source);
    if outcome.changed && !dry_run {
        fs::write(path, &outcome.output).map_err(|err| PipelineError::io("write", path, err))?;
    }
    Ok(outcome.changed)
}

fn render_error(err: &PipelineError) -> String {
    match err.source() {
        Some(cause) => format!("{err}: {cause}"),
        None => err.to_string(),
    }
}
