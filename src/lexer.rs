//! Zero-copy lexer for GraphQL source text.
//!
//! The single entry point is [`lex`]: a pure function from
//! `(source, byte offset)` to the next token at or after that offset.
//! Ignored tokens (whitespace, line terminators, commas, and the Unicode
//! BOM) are skipped; comments are surfaced as [`TokenKind::Comment`]
//! tokens and left to the parser to keep or drop.
//!
//! Token values borrow directly from the source string. The only
//! allocations are for string literals whose decoded value differs from
//! their source text (escape sequences, block-string dedent).

use crate::parse_error::SyntaxError;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Lexes the next token of `source` starting at byte offset `offset`.
///
/// Pure and idempotent: calling with the same arguments always yields the
/// same token, and no state is carried between calls. The parser drives
/// the lexer by re-invoking it at the previous token's `end`.
///
/// At end of input, returns an [`TokenKind::Eof`] token with
/// `start == end == source.len()`.
///
/// # Errors
///
/// Fails with a [`SyntaxError`] on unterminated strings, invalid escape
/// sequences or surrogate pairs, malformed numbers, and unexpected
/// characters.
pub fn lex(source: &str, offset: usize) -> Result<Token<'_>, SyntaxError> {
    let mut scanner = Scanner {
        source,
        pos: offset.min(source.len()),
    };
    scanner.skip_ignored();
    scanner.next_token()
}

/// Cursor over the source text. Internal to the lexer; all public access
/// goes through [`lex`].
struct Scanner<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    fn remaining(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, advancing by its UTF-8 length.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> SyntaxError {
        SyntaxError::new(message, offset)
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, and the Unicode BOM.
    ///
    /// Commas are insignificant separators anywhere whitespace may appear;
    /// the BOM is tolerated anywhere, not just at offset zero.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.bump();
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Main dispatch
    // =========================================================================

    fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;

        let Some(ch) = self.peek_char() else {
            return Ok(Token::new(TokenKind::Eof, start, start));
        };

        match ch {
            '#' => Ok(self.lex_comment()),

            '!' => Ok(self.punctuator(TokenKind::Bang)),
            '$' => Ok(self.punctuator(TokenKind::Dollar)),
            '&' => Ok(self.punctuator(TokenKind::Ampersand)),
            '(' => Ok(self.punctuator(TokenKind::ParenOpen)),
            ')' => Ok(self.punctuator(TokenKind::ParenClose)),
            ':' => Ok(self.punctuator(TokenKind::Colon)),
            '=' => Ok(self.punctuator(TokenKind::Equals)),
            '@' => Ok(self.punctuator(TokenKind::At)),
            '[' => Ok(self.punctuator(TokenKind::SquareBracketOpen)),
            ']' => Ok(self.punctuator(TokenKind::SquareBracketClose)),
            '{' => Ok(self.punctuator(TokenKind::CurlyBraceOpen)),
            '}' => Ok(self.punctuator(TokenKind::CurlyBraceClose)),
            '|' => Ok(self.punctuator(TokenKind::Pipe)),

            '.' => {
                if self.remaining().starts_with("...") {
                    self.pos += 3;
                    Ok(Token::new(TokenKind::Spread, start, self.pos))
                } else {
                    Err(self.error(
                        "unexpected `.` (use `...` for a fragment spread)",
                        start,
                    ))
                }
            },

            '"' => self.lex_string(),

            c if is_name_start(c) => Ok(self.lex_name()),

            c if c == '-' || c.is_ascii_digit() => self.lex_number(),

            c => Err(self.error(
                format!("unexpected character {}", describe_char(c)),
                start,
            )),
        }
    }

    fn punctuator(&mut self, kind: TokenKind<'src>) -> Token<'src> {
        let start = self.pos;
        self.bump();
        Token::new(kind, start, self.pos)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Lexes a comment: `#` until the next line terminator. The token's
    /// value excludes the `#` and the terminator.
    fn lex_comment(&mut self) -> Token<'src> {
        let start = self.pos;
        self.bump(); // '#'
        let content_start = self.pos;

        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.bump();
        }

        let value = &self.source[content_start..self.pos];
        Token::new(TokenKind::Comment(value), start, self.pos)
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&mut self) -> Token<'src> {
        let start = self.pos;
        self.bump();

        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.bump();
            } else {
                break;
            }
        }

        let value = &self.source[start..self.pos];
        Token::new(TokenKind::Name(value), start, self.pos)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal:
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` with at least one
    /// of the fractional/exponent parts required for a float.
    fn lex_number(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.bump();
        }

        // Integer part
        match self.peek_char() {
            Some('0') => {
                self.bump();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit()
                {
                    return Err(self.error(
                        "invalid number: leading zeros are not allowed",
                        self.pos,
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.scan_digits();
            },
            _ => {
                // A bare `-` with nothing numeric after it.
                return Err(self.error(
                    "invalid number: expected a digit",
                    self.pos,
                ));
            },
        }

        // Fractional part
        if self.peek_char() == Some('.') {
            // `1.` and `1.e3` are malformed; `...` after an int is the
            // caller's problem only when a digit never follows the dot.
            if matches!(self.peek_char_nth(1), Some(c) if c.is_ascii_digit()) {
                is_float = true;
                self.bump(); // '.'
                self.scan_digits();
            } else {
                self.bump();
                return Err(self.error(
                    "invalid number: expected a digit after `.`",
                    self.pos,
                ));
            }
        }

        // Exponent part
        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(self.error(
                    "invalid number: exponent must have at least one digit",
                    self.pos,
                ));
            }
            self.scan_digits();
        }

        // A number token must not run straight into a name or another
        // number (`123abc`, `1.2.3`).
        if let Some(ch) = self.peek_char()
            && (is_name_start(ch) || ch == '.')
        {
            return Err(self.error(
                format!(
                    "invalid number: unexpected {} after number",
                    describe_char(ch),
                ),
                self.pos,
            ));
        }

        let raw = &self.source[start..self.pos];
        let kind = if is_float {
            TokenKind::FloatValue(raw)
        } else {
            TokenKind::IntValue(raw)
        };
        Ok(Token::new(kind, start, self.pos))
    }

    fn scan_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.bump();
            } else {
                break;
            }
        }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string();
        }

        let start = self.pos;
        self.bump(); // opening '"'
        let content_start = self.pos;

        // Stays `None` until an escape forces an owned buffer; escape-free
        // strings borrow their interior from the source.
        let mut decoded: Option<String> = None;

        loop {
            match self.peek_char() {
                None => {
                    return Err(self.error("unterminated string", start));
                },
                Some('\n' | '\r') => {
                    return Err(self.error("unterminated string", start));
                },
                Some('"') => {
                    let content_end = self.pos;
                    self.bump();
                    let value = match decoded {
                        Some(buf) => Cow::Owned(buf),
                        None => Cow::Borrowed(
                            &self.source[content_start..content_end],
                        ),
                    };
                    return Ok(Token::new(
                        TokenKind::StringValue(value),
                        start,
                        self.pos,
                    ));
                },
                Some('\\') => {
                    let buf = decoded.get_or_insert_with(|| {
                        self.source[content_start..self.pos].to_string()
                    });
                    let ch = scan_escape(self)?;
                    buf.push(ch);
                },
                Some(ch) if is_forbidden_in_string(ch) => {
                    return Err(self.error(
                        format!(
                            "invalid character {} within string",
                            describe_char(ch),
                        ),
                        self.pos,
                    ));
                },
                Some(ch) => {
                    self.bump();
                    if let Some(buf) = &mut decoded {
                        buf.push(ch);
                    }
                },
            }
        }
    }

    fn lex_block_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;
        self.pos += 3; // opening `"""`
        let content_start = self.pos;

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                self.pos += 4;
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                let content_end = self.pos;
                self.pos += 3;
                let raw = &self.source[content_start..content_end];
                return Ok(Token::new(
                    TokenKind::BlockStringValue(decode_block_string(raw)),
                    start,
                    self.pos,
                ));
            }
            if self.bump().is_none() {
                return Err(self.error("unterminated block string", start));
            }
        }
    }
}

// =============================================================================
// Escape sequences
// =============================================================================

/// Decodes one escape sequence. Called with the scanner positioned at the
/// backslash.
fn scan_escape(scanner: &mut Scanner<'_>) -> Result<char, SyntaxError> {
    let escape_start = scanner.pos;
    scanner.bump(); // backslash

    match scanner.bump() {
        Some('"') => Ok('"'),
        Some('\\') => Ok('\\'),
        Some('/') => Ok('/'),
        Some('b') => Ok('\u{0008}'),
        Some('f') => Ok('\u{000C}'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('u') => scan_unicode_escape(scanner, escape_start),
        Some(other) => Err(SyntaxError::new(
            format!("invalid escape sequence `\\{other}`"),
            escape_start,
        )),
        None => Err(SyntaxError::new(
            "invalid escape sequence at end of input",
            escape_start,
        )),
    }
}

/// Decodes `\uXXXX`, combining surrogate pairs into a single character.
///
/// A leading surrogate must be immediately followed by a `\uXXXX` trailing
/// surrogate; anything else is an invalid pair. A lone trailing surrogate
/// is likewise rejected.
fn scan_unicode_escape(
    scanner: &mut Scanner<'_>,
    escape_start: usize,
) -> Result<char, SyntaxError> {
    let high = scan_hex4(scanner, escape_start)?;

    if (0xDC00..=0xDFFF).contains(&high) {
        return Err(SyntaxError::new(
            format!("invalid surrogate pair: lone trailing surrogate \\u{high:04X}"),
            escape_start,
        ));
    }

    if (0xD800..=0xDBFF).contains(&high) {
        // Leading surrogate: the trailing half must follow directly.
        let pair_start = scanner.pos;
        if scanner.bump() != Some('\\') || scanner.bump() != Some('u') {
            return Err(SyntaxError::new(
                format!(
                    "invalid surrogate pair: \\u{high:04X} must be followed \
                    by a trailing surrogate escape",
                ),
                escape_start,
            ));
        }
        let low = scan_hex4(scanner, pair_start)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(SyntaxError::new(
                format!(
                    "invalid surrogate pair: \\u{high:04X} followed by \
                    \\u{low:04X}",
                ),
                escape_start,
            ));
        }
        let combined =
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(combined).ok_or_else(|| {
            SyntaxError::new("invalid surrogate pair", escape_start)
        });
    }

    char::from_u32(high).ok_or_else(|| {
        SyntaxError::new(
            format!("invalid unicode escape \\u{high:04X}"),
            escape_start,
        )
    })
}

/// Reads exactly four hex digits.
fn scan_hex4(
    scanner: &mut Scanner<'_>,
    escape_start: usize,
) -> Result<u32, SyntaxError> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = scanner
            .bump()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| {
                SyntaxError::new(
                    "invalid unicode escape: expected four hex digits",
                    escape_start,
                )
            })?;
        value = value * 16 + digit;
    }
    Ok(value)
}

// =============================================================================
// Block string dedent
// =============================================================================

/// Applies the `BlockStringValue` algorithm of the October 2021 spec to
/// the raw interior of a block string: unescape `\"""`, strip the common
/// indentation of non-first lines, drop leading and trailing blank lines,
/// and join with `\n`.
///
/// See: <https://spec.graphql.org/October2021/#BlockStringValue()>
///
/// Returns a borrowed value when the algorithm is the identity (the common
/// single-line case).
fn decode_block_string(raw: &str) -> Cow<'_, str> {
    if raw.contains("\\\"\"\"") {
        let unescaped = raw.replace("\\\"\"\"", "\"\"\"");
        Cow::Owned(dedent_lines(&unescaped).into_owned())
    } else {
        dedent_lines(raw)
    }
}

fn dedent_lines(content: &str) -> Cow<'_, str> {
    let lines = split_block_lines(content);

    // Common indentation across non-first lines that hold any
    // non-whitespace; the first line never participates.
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank_line(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut stripped: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            stripped.push(line);
        } else {
            stripped.push(&line[common_indent.min(line.len())..]);
        }
    }

    let mut first = 0;
    while first < stripped.len() && is_blank_line(stripped[first]) {
        first += 1;
    }
    let mut last = stripped.len();
    while last > first && is_blank_line(stripped[last - 1]) {
        last -= 1;
    }
    let kept = &stripped[first..last];

    match kept {
        [] => Cow::Borrowed(""),
        [only] if *only == content => Cow::Borrowed(content),
        _ => Cow::Owned(kept.join("\n")),
    }
}

/// Splits on `\n`, `\r`, and `\r\n` (one terminator each), keeping empty
/// lines. `str::lines` is not used because it ignores lone `\r`.
fn split_block_lines(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&s[line_start..i]);
                i += 1;
                line_start = i;
            },
            b'\r' => {
                lines.push(&s[line_start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                line_start = i;
            },
            _ => i += 1,
        }
    }
    lines.push(&s[line_start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank_line(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}

// =============================================================================
// Character classes
// =============================================================================

/// `NameStart` per the GraphQL spec: `[_A-Za-z]`.
///
/// See: <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// `NameContinue` per the GraphQL spec: `[_0-9A-Za-z]`.
///
/// See: <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters other than tab are not allowed unescaped inside a
/// single-quoted string. Line terminators are handled separately.
fn is_forbidden_in_string(ch: char) -> bool {
    ch != '\t' && (ch as u32) < 0x20
}

/// Renders a character for an error message; invisible characters get
/// their code point spelled out.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
