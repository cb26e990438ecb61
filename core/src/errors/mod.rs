use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the file pipeline. The text pipeline itself is pure
/// and never fails; everything here originates at the filesystem boundary.
#[derive(Debug, Error, Diagnostic)]
pub enum PipelineError {
    #[error("no input path given")]
    #[diagnostic(help("pass the root of a Dart package or source tree"))]
    MissingInput,

    #[error("not a directory: {}", path.display())]
    #[diagnostic(help("the input must be a directory to walk for .dart files"))]
    NotADirectory { path: PathBuf },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
