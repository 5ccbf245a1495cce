use crate::source_location::location_of;
use crate::source_location::SourceLocation;

/// A lexical or syntactic failure, anchored to the byte offset where it
/// was detected.
///
/// The error does not retain the source text; the caller owns the string
/// it passed to [`parse`](crate::parse) or [`lex`](crate::lex) and can
/// recover a line/column with [`SyntaxError::location`] or render a full
/// diagnostic with [`SyntaxError::format_with_source`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// Human-readable description of the failure.
    pub message: String,

    /// Byte offset into the source where the failure was detected.
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// Resolves this error's offset against `source`.
    pub fn location(&self, source: &str) -> SourceLocation {
        location_of(source, self.offset)
    }

    /// Renders a one-line diagnostic of the form
    /// `Syntax error: <message> at line L, column C`.
    pub fn format_with_source(&self, source: &str) -> String {
        let SourceLocation { line, column } = self.location(source);
        format!(
            "Syntax error: {} at line {line}, column {column}",
            self.message,
        )
    }
}

/// Any failure raised by [`parse`](crate::parse).
///
/// Parsing is fail-fast: the first error encountered is returned and no
/// partial AST is surfaced.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A lexical or syntactic error.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Nesting exceeded [`ParseOptions::max_depth`].
    ///
    /// [`ParseOptions::max_depth`]: crate::ParseOptions::max_depth
    #[error("maximum parse depth exceeded")]
    MaxDepthExceeded {
        /// Byte offset of the token being parsed when the limit tripped.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset into the source where the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Syntax(err) => err.offset,
            ParseError::MaxDepthExceeded { offset } => *offset,
        }
    }

    /// Resolves this error's offset against `source`.
    pub fn location(&self, source: &str) -> SourceLocation {
        location_of(source, self.offset())
    }

    /// Renders a one-line diagnostic with line/column information.
    pub fn format_with_source(&self, source: &str) -> String {
        match self {
            ParseError::Syntax(err) => err.format_with_source(source),
            ParseError::MaxDepthExceeded { .. } => {
                let SourceLocation { line, column } = self.location(source);
                format!(
                    "Maximum parse depth exceeded at line {line}, \
                    column {column}",
                )
            },
        }
    }
}
