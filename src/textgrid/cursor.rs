// @module: Forward-only line cursor shared by the TextGrid readers

/// Byte-order mark some editors prepend to UTF-8 files
const UTF8_BOM: char = '\u{feff}';

// @struct: Single-consumer cursor over the input lines
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    // @field: Number of lines consumed so far
    consumed: usize,
}

impl<'a> LineCursor<'a> {
    // @creates: Cursor positioned before the first line
    pub fn new(content: &'a str) -> Self {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        LineCursor {
            lines: content.lines(),
            consumed: 0,
        }
    }

    /// Advance by one line. Returns `None` once the input is exhausted.
    ///
    /// `str::lines` already strips `\n` and `\r\n` terminators.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.consumed += 1;
        Some(line)
    }

    // @returns: 1-based number of the last line handed out (0 before any read)
    pub fn line_number(&self) -> usize {
        self.consumed
    }

    // @returns: 1-based number of the line the next read will return
    pub fn next_line_number(&self) -> usize {
        self.consumed + 1
    }
}
