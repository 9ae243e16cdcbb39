//! Line cursor with lookahead over the bank document.

/// Sequential view over the trimmed lines of a document.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().map(str::trim).collect(),
            pos: 0,
        }
    }

    /// Current line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Consume and return the current line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.lines.len());
    }

    /// Look past blank lines without consuming anything.
    ///
    /// Returns the index and content of the first non-blank line at or after
    /// the cursor.
    pub fn skip_to_non_blank(&self) -> Option<(usize, &'a str)> {
        self.lines[self.pos..]
            .iter()
            .enumerate()
            .find(|(_, line)| !line.is_empty())
            .map(|(offset, line)| (self.pos + offset, *line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_trimmed_lines() {
        let mut cursor = LineCursor::new("  first  \r\n\tsecond\n");
        assert_eq!(cursor.next_line(), Some("first"));
        assert_eq!(cursor.next_line(), Some("second"));
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn lookahead_does_not_consume() {
        let cursor = LineCursor::new("\n\n  IMAGE\nnext");
        assert_eq!(cursor.skip_to_non_blank(), Some((2, "IMAGE")));
        assert_eq!(cursor.peek(), Some(""));
    }

    #[test]
    fn lookahead_at_end_is_none() {
        let mut cursor = LineCursor::new("only\n\n");
        cursor.advance();
        assert_eq!(cursor.skip_to_non_blank(), None);
    }

    #[test]
    fn seek_is_clamped() {
        let mut cursor = LineCursor::new("a\nb");
        cursor.seek(10);
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert_eq!(cursor.next_line(), None);
    }
}
