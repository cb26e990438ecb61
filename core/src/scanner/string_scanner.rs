use super::span::{Kind, StringFlavor};
use super::{Mode, Scanner};

impl Scanner<'_> {
    /// Scan literal string text until the closing delimiter, an
    /// interpolation hole, or end of input. Comment markers inside string
    /// text are literal; they only regain meaning inside a hole.
    pub(super) fn scan_string_text(&mut self, flavor: StringFlavor) {
        let start = self.cursor.pos();
        let quote = flavor.quote.byte();
        loop {
            match self.cursor.peek() {
                None => {
                    // Unterminated string: extends to end of input.
                    self.emit(start, self.cursor.pos(), Kind::StringLiteral(flavor));
                    self.modes.pop();
                    return;
                }
                Some(b'\\') if !flavor.raw => {
                    // Escape: both bytes are literal text, even \' and \".
                    self.cursor.advance();
                    self.cursor.advance();
                }
                Some(b'$') if self.cursor.peek_next() == Some(b'{') => {
                    // Holes open even in raw strings; the `r` prefix only
                    // suppresses escape processing.
                    self.emit(start, self.cursor.pos(), Kind::StringLiteral(flavor));
                    let hole = self.cursor.pos();
                    self.cursor.advance_by(2);
                    self.emit(hole, self.cursor.pos(), Kind::InterpolationHole);
                    self.modes.push(Mode::Interpolation { brace_depth: 1 });
                    return;
                }
                Some(b) if b == quote => {
                    if !flavor.triple {
                        self.cursor.advance();
                        self.emit(start, self.cursor.pos(), Kind::StringLiteral(flavor));
                        self.modes.pop();
                        return;
                    }
                    if self.cursor.peek_next() == Some(quote)
                        && self.cursor.peek_nth(2) == Some(quote)
                    {
                        self.cursor.advance_by(3);
                        self.emit(start, self.cursor.pos(), Kind::StringLiteral(flavor));
                        self.modes.pop();
                        return;
                    }
                    // Lone quote inside a triple-quoted body is literal.
                    self.cursor.advance();
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }
}
