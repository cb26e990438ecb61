pub mod errors;
pub mod formatter;
pub mod scanner;
pub mod stripper;

pub use errors::PipelineError;

/// Result of running one file's text through the strip pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub output: String,
    pub changed: bool,
}

/// Remove every comment from `source` and normalize the blank lines the
/// removal leaves behind. Pure and total: malformed source (unterminated
/// comments, strings, or interpolation holes) degrades deterministically
/// instead of failing.
pub fn process(source: &str) -> Processed {
    let spans = scanner::scan(source);
    let stripped = stripper::strip(source, &spans);
    let output = formatter::normalize(&stripped);
    let changed = output != source;
    Processed { output, changed }
}
