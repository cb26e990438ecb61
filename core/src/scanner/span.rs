/// Byte range `[start, end)` over the original source, tagged with what it
/// contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: Kind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: Kind) -> Self {
        Self { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }
}

/// Classification of a span. The scanner emits spans in document order;
/// they are non-overlapping and cover the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Top-level executable code (includes whitespace and newlines).
    Code,
    /// `//` comment through end of line, newline excluded.
    LineComment,
    /// `///` comment through end of line, newline excluded.
    DocComment,
    /// `/* */` comment, nesting-aware, outermost extent.
    BlockComment,
    /// String literal text including its delimiters and any `r` prefix.
    StringLiteral(StringFlavor),
    /// `${...}` content of a string literal, delimiters included. Code
    /// context: nested comments and strings get their own spans.
    InterpolationHole,
}

impl Kind {
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Kind::LineComment | Kind::DocComment | Kind::BlockComment
        )
    }
}

/// Shape of a string literal: quote character, single vs triple, `r` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFlavor {
    pub quote: Quote,
    pub triple: bool,
    pub raw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
        }
    }
}
