use crate::scanner::span::{Kind, Span};

/// Output of comment removal plus the per-line facts the formatter needs.
#[derive(Debug)]
pub struct StrippedFile {
    pub text: String,
    /// One entry per line of `text`, index-aligned with splitting on `\n`.
    pub lines: Vec<LineInfo>,
}

/// Facts about one line of the stripped text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// A comment span was deleted from this line.
    pub comment_removed: bool,
    /// The line overlaps a string literal that spans multiple lines; the
    /// formatter must leave it byte-for-byte intact.
    pub protected: bool,
}

/// Delete comment spans, copy everything else verbatim. The newline after a
/// line comment is not part of the comment span and survives here; deciding
/// whether the resulting blank line stays is the formatter's job.
pub fn strip(source: &str, spans: &[Span]) -> StrippedFile {
    let mut text = String::with_capacity(source.len());
    let mut lines = vec![LineInfo::default()];

    for span in spans {
        if span.is_comment() {
            if let Some(info) = lines.last_mut() {
                info.comment_removed = true;
            }
            continue;
        }

        let piece = &source[span.start..span.end];
        let first_line = lines.len() - 1;
        text.push_str(piece);
        let newlines = piece.bytes().filter(|&b| b == b'\n').count();
        for _ in 0..newlines {
            lines.push(LineInfo::default());
        }
        if newlines > 0 && matches!(span.kind, Kind::StringLiteral(_)) {
            for info in &mut lines[first_line..] {
                info.protected = true;
            }
        }
    }

    StrippedFile { text, lines }
}
