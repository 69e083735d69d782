//! Character cursor used by the notation parser.

/// A cursor over the score text with one character of lookahead.
pub struct Scan<'a> {
    input: &'a str,
    stream: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Scan<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            stream: input.char_indices().peekable(),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Return the byte-offset of the next character that would be read.
    pub fn offset(&mut self) -> usize {
        let len = self.input.len();
        self.stream.peek().map_or(len, |&(pos, _)| pos)
    }

    pub fn peek(&mut self) -> Option<char> {
        self.stream.peek().map(|&(_, ch)| ch)
    }

    pub fn advance(&mut self) -> Option<char> {
        self.stream.next().map(|(_, ch)| ch)
    }

    /// Consume the next character if it is `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an unsigned decimal literal at the current position.
    ///
    /// Returns `None` without consuming anything if there is no digit,
    /// and `None` after consuming the digits if the literal does not fit.
    ///
    /// ```
    /// # use jianpu::notation::scan::Scan;
    /// let mut scan = Scan::new("120 4");
    /// assert_eq!(scan.read_int(), Some(120));
    /// assert_eq!(scan.read_int(), None);
    /// assert_eq!(scan.peek(), Some(' '));
    /// ```
    pub fn read_int(&mut self) -> Option<i64> {
        let start = self.offset();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let end = self.offset();
        if start == end {
            None
        } else {
            self.input[start..end].parse().ok()
        }
    }

    /// Read a run of non-whitespace characters.
    pub fn read_word(&mut self) -> &'a str {
        let start = self.offset();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                break;
            }
            self.advance();
        }
        let end = self.offset();
        &self.input[start..end]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_and_offsets() {
        let mut scan = Scan::new("  Eb 3: 4");
        scan.skip_whitespace();
        assert_eq!(scan.offset(), 2);
        assert_eq!(scan.read_word(), "Eb");
        scan.skip_whitespace();
        assert_eq!(scan.read_int(), Some(3));
        assert!(scan.eat(':'));
        assert!(!scan.eat(':'));
        scan.skip_whitespace();
        assert_eq!(scan.read_int(), Some(4));
        assert!(scan.is_eof());
        assert_eq!(scan.offset(), 9);
    }

    #[test]
    fn oversized_literal() {
        let mut scan = Scan::new("99999999999999999999|");
        assert_eq!(scan.read_int(), None);
        assert_eq!(scan.advance(), Some('|'));
    }
}
