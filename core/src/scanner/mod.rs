pub mod cursor;
pub mod span;
mod string_scanner;

use cursor::Cursor;
use span::{Kind, Quote, Span, StringFlavor};

/// Classify every byte of `source` into code, comment, string-literal, and
/// interpolation spans. Total: malformed input degrades (unterminated
/// constructs run to end of line or end of input) rather than failing.
pub fn scan(source: &str) -> Vec<Span> {
    Scanner::new(source).scan_spans()
}

/// Pushdown automaton over the source text. The mode stack tracks string
/// nesting: an interpolation hole re-enters code context, and code context
/// can open further strings, so depth is unbounded.
struct Scanner<'src> {
    cursor: Cursor<'src>,
    spans: Vec<Span>,
    modes: Vec<Mode>,
}

/// An empty mode stack means top-level code.
#[derive(Debug, Clone, Copy)]
enum Mode {
    /// Inside `${...}`; counts unconsumed `{` so nested braces do not close
    /// the hole early.
    Interpolation { brace_depth: usize },
    /// Inside a string literal body.
    Str(StringFlavor),
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            spans: Vec::new(),
            modes: Vec::new(),
        }
    }

    fn scan_spans(mut self) -> Vec<Span> {
        while !self.cursor.is_at_end() {
            match self.modes.last().copied() {
                Some(Mode::Str(flavor)) => self.scan_string_text(flavor),
                _ => self.scan_code(),
            }
        }
        self.spans
    }

    fn code_kind(&self) -> Kind {
        match self.modes.last() {
            Some(Mode::Interpolation { .. }) => Kind::InterpolationHole,
            _ => Kind::Code,
        }
    }

    /// Scan a run of code context, stopping after one comment, string
    /// opener, or interpolation close has been handled.
    fn scan_code(&mut self) {
        let start = self.cursor.pos();
        loop {
            let Some(ch) = self.cursor.peek() else {
                self.emit(start, self.cursor.pos(), self.code_kind());
                return;
            };
            match ch {
                b'/' if self.cursor.peek_next() == Some(b'/') => {
                    if self.cursor.prev() == Some(b':') {
                        // `://` as in a URL pasted straight into code;
                        // not a comment start.
                        self.cursor.advance_by(2);
                        continue;
                    }
                    self.emit(start, self.cursor.pos(), self.code_kind());
                    self.scan_line_comment();
                    return;
                }
                b'/' if self.cursor.peek_next() == Some(b'*') => {
                    self.emit(start, self.cursor.pos(), self.code_kind());
                    self.scan_block_comment();
                    return;
                }
                b'r' if is_quote(self.cursor.peek_next()) => {
                    self.emit(start, self.cursor.pos(), self.code_kind());
                    self.open_string(true);
                    return;
                }
                b'\'' | b'"' => {
                    self.emit(start, self.cursor.pos(), self.code_kind());
                    self.open_string(false);
                    return;
                }
                b'{' => {
                    if let Some(Mode::Interpolation { brace_depth }) = self.modes.last_mut() {
                        *brace_depth += 1;
                    }
                    self.cursor.advance();
                }
                b'}' => {
                    let closes =
                        matches!(self.modes.last(), Some(Mode::Interpolation { brace_depth: 1 }));
                    if closes {
                        self.emit(start, self.cursor.pos(), Kind::InterpolationHole);
                        let close = self.cursor.pos();
                        self.cursor.advance();
                        self.emit(close, self.cursor.pos(), Kind::InterpolationHole);
                        self.modes.pop();
                        return;
                    }
                    if let Some(Mode::Interpolation { brace_depth }) = self.modes.last_mut() {
                        *brace_depth -= 1;
                    }
                    self.cursor.advance();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consume a `//` or `///` comment up to (not including) the newline.
    fn scan_line_comment(&mut self) {
        let start = self.cursor.pos();
        let kind = if self.cursor.peek_nth(2) == Some(b'/') {
            Kind::DocComment
        } else {
            Kind::LineComment
        };
        while let Some(ch) = self.cursor.peek() {
            if ch == b'\n' {
                break;
            }
            self.cursor.advance();
        }
        self.emit(start, self.cursor.pos(), kind);
    }

    fn scan_block_comment(&mut self) {
        let start = self.cursor.pos();
        match self.block_comment_end(start) {
            Some(end) => {
                self.cursor.advance_by(end - start);
                self.emit(start, end, Kind::BlockComment);
            }
            None => {
                // Never closed: strip the opening line only; everything
                // after the first newline is handed back to code scanning.
                let mut end = start;
                while let Some(b) = self.cursor.byte_at(end) {
                    if b == b'\n' {
                        break;
                    }
                    end += 1;
                }
                self.cursor.advance_by(end - start);
                self.emit(start, end, Kind::BlockComment);
            }
        }
    }

    /// End position of the block comment starting at `start`, honoring
    /// `/* /* */ */` nesting, or None when it never terminates.
    fn block_comment_end(&self, start: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = start;
        while let Some(b) = self.cursor.byte_at(i) {
            if b == b'/' && self.cursor.byte_at(i + 1) == Some(b'*') {
                depth += 1;
                i += 2;
            } else if b == b'*' && self.cursor.byte_at(i + 1) == Some(b'/') {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Some(i);
                }
            } else {
                i += 1;
            }
        }
        None
    }

    /// Consume the opening delimiter (optional `r`, one or three quotes)
    /// and push string mode.
    fn open_string(&mut self, raw: bool) {
        let start = self.cursor.pos();
        if raw {
            self.cursor.advance();
        }
        let Some(qb) = self.cursor.advance() else {
            return;
        };
        let quote = if qb == b'"' {
            Quote::Double
        } else {
            Quote::Single
        };
        let triple = self.cursor.peek() == Some(qb) && self.cursor.peek_next() == Some(qb);
        if triple {
            self.cursor.advance_by(2);
        }
        let flavor = StringFlavor { quote, triple, raw };
        self.emit(start, self.cursor.pos(), Kind::StringLiteral(flavor));
        self.modes.push(Mode::Str(flavor));
    }

    /// Record a span, merging into the previous one when contiguous and of
    /// the same kind.
    fn emit(&mut self, start: usize, end: usize, kind: Kind) {
        if start == end {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.kind == kind && last.end == start {
                last.end = end;
                return;
            }
        }
        self.spans.push(Span::new(start, end, kind));
    }
}

fn is_quote(b: Option<u8>) -> bool {
    matches!(b, Some(b'\'' | b'"'))
}
