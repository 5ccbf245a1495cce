/// A human-oriented source location.
///
/// Both fields are 1-based: the first character of the document is line 1,
/// column 1. Columns count characters, not bytes, so a multi-byte
/// character still advances the column by one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// Computes the line and column of a byte offset by scanning from the
/// start of `source`.
///
/// Line terminators are `\n`, `\r`, and `\r\n` (counted as a single
/// newline). An offset past the end of the input keeps advancing the
/// column past the last character, which keeps end-of-input diagnostics
/// pointing one past the final token.
///
/// Pure and stateless; this is deliberately an O(offset) scan that runs
/// only when rendering a diagnostic, never during parsing.
pub fn location_of(source: &str, offset: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = 1;
    let mut chars = source.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        if at >= offset {
            break;
        }
        match ch {
            '\r' => {
                // \r\n is one terminator; swallow the \n.
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                }
                line += 1;
                column = 1;
            },
            '\n' => {
                line += 1;
                column = 1;
            },
            _ => column += 1,
        }
    }

    // Past-the-end offsets continue the final line's column count.
    if offset > source.len() {
        column += offset - source.len();
    }

    SourceLocation { line, column }
}
