use std::borrow::Cow;
use std::fmt;

/// The kind of a GraphQL token.
///
/// Literal variants carry their semantic value directly. Names, numbers,
/// and comments are always sub-slices of the source text; string values
/// use [`Cow`] so that a literal with no escapes (or a block string whose
/// dedent is the identity) can borrow from the source while decoded text
/// is owned.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime ties token values to the source string, enabling
/// zero-copy lexing: no heap allocation is performed for names, numbers,
/// punctuators, or escape-free strings.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    // =========================================================================
    // Punctuators (no allocation needed)
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `...`
    Spread,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A GraphQL name/identifier: `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// The boolean keywords `true`/`false` and `null` lex as plain names;
    /// the parser resolves them where a value is expected.
    Name(&'src str),

    /// Raw source text of an integer literal, including any leading minus
    /// sign (e.g. `"-123"`, `"0"`).
    IntValue(&'src str),

    /// Raw source text of a float literal, including any leading minus
    /// sign (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(&'src str),

    /// The decoded value of a single-quoted string literal. Escape
    /// sequences have already been processed; borrowed when the literal
    /// contained none.
    StringValue(Cow<'src, str>),

    /// The dedented value of a block string literal (`"""..."""`), per the
    /// `BlockStringValue` algorithm of the October 2021 spec.
    BlockStringValue(Cow<'src, str>),

    /// A comment: the text after `#`, up to but excluding the line
    /// terminator.
    Comment(&'src str),

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. `start == end == source.len()`.
    Eof,
}

impl<'src> TokenKind<'src> {
    /// Returns `true` if this kind is the same variant as `other`,
    /// ignoring any payload.
    ///
    /// The match on `self` is intentionally exhaustive so that a new
    /// variant produces a compile error here rather than a silent
    /// mismatch.
    pub fn same_kind_as(&self, other: &TokenKind<'_>) -> bool {
        match self {
            TokenKind::Name(_) => matches!(other, TokenKind::Name(_)),
            TokenKind::IntValue(_) => matches!(other, TokenKind::IntValue(_)),
            TokenKind::FloatValue(_) => {
                matches!(other, TokenKind::FloatValue(_))
            },
            TokenKind::StringValue(_) => {
                matches!(other, TokenKind::StringValue(_))
            },
            TokenKind::BlockStringValue(_) => {
                matches!(other, TokenKind::BlockStringValue(_))
            },
            TokenKind::Comment(_) => matches!(other, TokenKind::Comment(_)),
            TokenKind::Ampersand => matches!(other, TokenKind::Ampersand),
            TokenKind::At => matches!(other, TokenKind::At),
            TokenKind::Bang => matches!(other, TokenKind::Bang),
            TokenKind::Colon => matches!(other, TokenKind::Colon),
            TokenKind::CurlyBraceClose => {
                matches!(other, TokenKind::CurlyBraceClose)
            },
            TokenKind::CurlyBraceOpen => {
                matches!(other, TokenKind::CurlyBraceOpen)
            },
            TokenKind::Dollar => matches!(other, TokenKind::Dollar),
            TokenKind::Equals => matches!(other, TokenKind::Equals),
            TokenKind::ParenClose => matches!(other, TokenKind::ParenClose),
            TokenKind::ParenOpen => matches!(other, TokenKind::ParenOpen),
            TokenKind::Pipe => matches!(other, TokenKind::Pipe),
            TokenKind::Spread => matches!(other, TokenKind::Spread),
            TokenKind::SquareBracketClose => {
                matches!(other, TokenKind::SquareBracketClose)
            },
            TokenKind::SquareBracketOpen => {
                matches!(other, TokenKind::SquareBracketOpen)
            },
            TokenKind::Eof => matches!(other, TokenKind::Eof),
        }
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Ampersand => Some("&"),
            TokenKind::At => Some("@"),
            TokenKind::Bang => Some("!"),
            TokenKind::Colon => Some(":"),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Dollar => Some("$"),
            TokenKind::Equals => Some("="),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::Pipe => Some("|"),
            TokenKind::Spread => Some("..."),
            TokenKind::SquareBracketClose => Some("]"),
            TokenKind::SquareBracketOpen => Some("["),

            TokenKind::Name(_)
            | TokenKind::IntValue(_)
            | TokenKind::FloatValue(_)
            | TokenKind::StringValue(_)
            | TokenKind::BlockStringValue(_)
            | TokenKind::Comment(_)
            | TokenKind::Eof => None,
        }
    }

    /// A short description of the token class, used in "expected X"
    /// error messages.
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenKind::Name(_) => "name",
            TokenKind::IntValue(_) => "integer",
            TokenKind::FloatValue(_) => "float",
            TokenKind::StringValue(_) => "string",
            TokenKind::BlockStringValue(_) => "block string",
            TokenKind::Comment(_) => "comment",
            TokenKind::Eof => "end of input",
            _ => self.as_punctuator_str().unwrap_or("punctuator"),
        }
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(value) => write!(f, "`{value}`"),
            TokenKind::IntValue(raw) | TokenKind::FloatValue(raw) => {
                write!(f, "`{raw}`")
            },
            TokenKind::StringValue(_) => write!(f, "string"),
            TokenKind::BlockStringValue(_) => write!(f, "block string"),
            TokenKind::Comment(_) => write!(f, "comment"),
            TokenKind::Eof => write!(f, "end of input"),
            punctuator => {
                // Exhausted every non-punctuator variant above.
                write!(f, "`{}`", punctuator.as_punctuator_str().unwrap())
            },
        }
    }
}
