use crate::error::ConvError;

/// A char-indexed scanning cursor over a source string.
///
/// The position is always in `[0, len]`; `len` means the input is exhausted.
#[derive(Debug, Clone)]
pub struct Cursor {
    text:    String,
    chars:   Vec<char>,
    /// Byte offset in `text` of each char.
    offsets: Vec<usize>,
    pos:     usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        let (offsets, chars) = text.char_indices().unzip();
        Cursor {
            text: text.to_string(),
            chars,
            offsets,
            pos: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.chars.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Text between two char positions, clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Unconsumed input, borrowed from the source.
    pub fn rest(&self) -> &str {
        let byte = self.offsets.get(self.pos).copied().unwrap_or(self.text.len());
        &self.text[byte..]
    }

    /// Moves forward `n` chars, stopping at the end of input.
    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// Returns the current char and advances past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<char, ConvError> {
        let c = self.peek().ok_or(ConvError::EndOfInput)?;
        self.pos += 1;
        Ok(c)
    }

    /// Steps over the current char, then scans forward until `target` and consumes it.
    ///
    /// When `target` never shows up the cursor is left exhausted.
    pub fn jump_to(&mut self, target: char) -> Result<(), ConvError> {
        if !self.has_next() {
            return Err(ConvError::EndOfInput);
        }

        self.pos += 1;
        while self.has_next() && self.chars[self.pos] != target {
            self.pos += 1;
        }

        if !self.has_next() {
            return Err(ConvError::DelimiterNotFound(target));
        }

        self.pos += 1;
        Ok(())
    }

    /// Like [`Cursor::jump_to`], but leaves the cursor on `target` instead of past it.
    pub fn skip_until(&mut self, target: char) -> Result<(), ConvError> {
        self.jump_to(target)?;
        self.pos -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_chars() {
        let mut cur = Cursor::new("aé");
        assert_eq!(cur.next().unwrap(), 'a');
        assert_eq!(cur.next().unwrap(), 'é');
        assert!(!cur.has_next());
        assert!(matches!(cur.next(), Err(ConvError::EndOfInput)));
    }

    #[test]
    fn test_jump_to_consumes_target() {
        let mut cur = Cursor::new("`json:\"x\"` rest");
        cur.jump_to('`').unwrap();
        assert_eq!(cur.position(), 10);
        assert_eq!(cur.peek(), Some(' '));
    }

    #[test]
    fn test_skip_until_stops_on_target() {
        let mut cur = Cursor::new("// note\nnext");
        cur.skip_until('\n').unwrap();
        assert_eq!(cur.position(), 7);
        assert_eq!(cur.peek(), Some('\n'));
    }

    #[test]
    fn test_jump_skips_current_char() {
        // The char under the cursor is never matched.
        let mut cur = Cursor::new("aab");
        cur.jump_to('a').unwrap();
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn test_missing_target_exhausts_cursor() {
        for input in ["", "x", "abc def", "日本語"] {
            let mut cur = Cursor::new(input);
            let err = cur.jump_to('#');
            if input.is_empty() {
                assert!(matches!(err, Err(ConvError::EndOfInput)));
            } else {
                assert!(matches!(err, Err(ConvError::DelimiterNotFound('#'))));
            }
            assert!(!cur.has_next());

            let mut cur = Cursor::new(input);
            if !input.is_empty() {
                assert!(matches!(cur.skip_until('#'), Err(ConvError::DelimiterNotFound('#'))));
                assert!(!cur.has_next());
            }
        }
    }

    #[test]
    fn test_target_positions_after_advance() {
        let input = "ab}cd}";
        let mut cur = Cursor::new(input);
        cur.next().unwrap();
        cur.skip_until('}').unwrap();
        assert_eq!(cur.position(), 2);
        cur.jump_to('}').unwrap();
        assert_eq!(cur.position(), 6);
        assert!(!cur.has_next());
    }

    #[test]
    fn test_slice_is_clamped() {
        let cur = Cursor::new("hello");
        assert_eq!(cur.slice(1, 3), "el");
        assert_eq!(cur.slice(3, 99), "lo");
    }

    #[test]
    fn test_rest_tracks_byte_offsets() {
        let mut cur = Cursor::new("日本 go");
        assert_eq!(cur.rest(), "日本 go");
        cur.advance_by(2);
        assert_eq!(cur.rest(), " go");
        cur.advance_by(10);
        assert_eq!(cur.rest(), "");
    }
}
