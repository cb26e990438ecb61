/// Byte-level reader over the source string.
///
/// The scanner only dispatches on ASCII delimiter bytes; UTF-8 continuation
/// bytes never collide with them, so multi-byte characters flow through
/// code, comment, and string spans untouched and span boundaries always
/// land on character boundaries.
pub struct Cursor<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// Peek at the next byte (one ahead of current).
    pub fn peek_next(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    /// Peek `n` bytes ahead of the current position.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.source.get(self.pos + n).copied()
    }

    /// The byte immediately before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|i| self.source.get(i)).copied()
    }

    /// The byte at an absolute position.
    pub fn byte_at(&self, idx: usize) -> Option<u8> {
        self.source.get(idx).copied()
    }

    /// Advance one byte and return it.
    pub fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.source.len());
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}
