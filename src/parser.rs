//! Recursive descent parser for GraphQL documents.
//!
//! The parser owns a cursor over the token stream: it holds the current
//! token and re-invokes the lexer at `current.end` to advance, so it
//! never needs more than one token of state. The single exception is the
//! two-token peek used to recognize a description-prefixed type-system
//! definition, which re-runs the lexer without moving the cursor.
//!
//! # Failure semantics
//!
//! Parsing is fail-fast: the first lexical or syntactic error aborts the
//! parse and no partial AST escapes. Errors carry the byte offset where
//! they were detected.
//!
//! # Comments
//!
//! Runs of consecutive `#` comments aggregate into a single
//! [`Comment`](ast::Comment) cluster, stashed until the next constructed
//! node claims it. A cluster displaced by a newer one, or still
//! unclaimed at the end of the parse, lands in
//! [`Document::unattached_comments`](ast::Document::unattached_comments).
//!
//! # Depth
//!
//! A depth counter (starting at 1 for the document) wraps the recursive
//! productions — definitions, selection sets, values, and type
//! references — and fails the parse with
//! [`ParseError::MaxDepthExceeded`] once it would exceed
//! [`ParseOptions::max_depth`], bounding stack growth on adversarial
//! inputs like `[[[[...`.

use crate::ast;
use crate::lexer::lex;
use crate::parse_error::ParseError;
use crate::parse_error::SyntaxError;
use crate::parse_options::ParseOptions;
use crate::token::Token;
use crate::token::TokenKind;
use smallvec::SmallVec;

/// Parses `source` with default [`ParseOptions`].
///
/// # Example
///
/// ```
/// let doc = graphql_syntax::parse("{ hello }").unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<ast::Document<'_>, ParseError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses `source` into a [`Document`](ast::Document).
///
/// The returned document borrows from `source`, which must outlive it.
///
/// # Errors
///
/// Fails with the first lexical or syntactic error encountered, or with
/// [`ParseError::MaxDepthExceeded`] when nesting exceeds
/// [`ParseOptions::max_depth`].
pub fn parse_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<ast::Document<'_>, ParseError> {
    Parser::new(source, options)?.parse_document()
}

/// The keywords that may follow a top-level description string.
const DESCRIBABLE_KEYWORDS: &[&str] = &[
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
];

struct Parser<'src> {
    source: &'src str,
    options: ParseOptions,

    /// The current (not yet consumed) token.
    current: Token<'src>,

    /// End offset of the most recently consumed token; node locations end
    /// here.
    prev_end: usize,

    /// Active parse depth. 1 while directly inside the document.
    depth: usize,

    /// The latest unconsumed comment cluster.
    current_comment: Option<ast::Comment>,

    /// Comment clusters that no node claimed.
    unattached_comments: Vec<ast::Comment>,
}

impl<'src> Parser<'src> {
    fn new(
        source: &'src str,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        let mut parser = Self {
            source,
            options,
            current: Token::new(TokenKind::Eof, 0, 0),
            prev_end: 0,
            depth: 1,
            current_comment: None,
            unattached_comments: Vec::new(),
        };
        parser.current = parser.next_significant_token(0)?;
        Ok(parser)
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    /// Lexes forward from `at` to the next non-comment token, aggregating
    /// any comment run passed over into the stashed cluster.
    fn next_significant_token(
        &mut self,
        mut at: usize,
    ) -> Result<Token<'src>, ParseError> {
        let mut cluster: SmallVec<[(usize, usize, &'src str); 2]> =
            SmallVec::new();

        let token = loop {
            let token = lex(self.source, at)?;
            match token.kind {
                TokenKind::Comment(text) => {
                    at = token.end;
                    if !self.options.ignore_comments {
                        cluster.push((token.start, token.end, text));
                    }
                },
                _ => break token,
            }
        };

        if let (Some(&(first_start, _, _)), Some(&(_, last_end, _))) =
            (cluster.first(), cluster.last())
        {
            let text = cluster
                .iter()
                .map(|&(_, _, line)| line)
                .collect::<Vec<_>>()
                .join("\n");
            let comment = ast::Comment {
                loc: self.make_loc(first_start, last_end),
                text,
            };
            self.stash_comment(comment);
        }

        Ok(token)
    }

    /// Stashes a comment cluster, displacing any unclaimed older one
    /// into the unattached pool.
    fn stash_comment(&mut self, comment: ast::Comment) {
        if let Some(older) = self.current_comment.replace(comment) {
            self.unattached_comments.push(older);
        }
    }

    /// Returns and clears the stashed comment cluster. Called by node
    /// constructors that claim their leading comment.
    fn take_comment(&mut self) -> Option<ast::Comment> {
        self.current_comment.take()
    }

    /// Consumes the current token, returning it, and lexes the next one.
    fn advance(&mut self) -> Result<Token<'src>, ParseError> {
        let next = self.next_significant_token(self.current.end)?;
        let prev = std::mem::replace(&mut self.current, next);
        self.prev_end = prev.end;
        Ok(prev)
    }

    /// The token that follows the current one, found by re-running the
    /// lexer at `current.end` and skipping any comments there. Does not
    /// move the cursor and does not stash the skipped comments — they
    /// are picked up normally when the cursor advances past them.
    fn peek_past_current(&self) -> Result<Token<'src>, ParseError> {
        let mut at = self.current.end;
        loop {
            let token = lex(self.source, at)?;
            if matches!(token.kind, TokenKind::Comment(_)) {
                at = token.end;
                continue;
            }
            return Ok(token);
        }
    }

    // =========================================================================
    // Primitive operations
    // =========================================================================

    fn peek(&self, kind: &TokenKind<'_>) -> bool {
        self.current.kind.same_kind_as(kind)
    }

    fn peek_keyword(&self, word: &str) -> bool {
        matches!(&self.current.kind, TokenKind::Name(name) if *name == word)
    }

    /// Consumes the current token if it matches `kind`.
    fn skip(&mut self, kind: &TokenKind<'_>) -> Result<bool, ParseError> {
        if self.peek(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it matches `kind`, or fails.
    fn expect(
        &mut self,
        kind: &TokenKind<'_>,
    ) -> Result<Token<'src>, ParseError> {
        if self.peek(kind) {
            self.advance()
        } else {
            let expected =
                kind.as_punctuator_str().unwrap_or_else(|| kind.class_name());
            Err(self.unexpected(&format!("`{expected}`")))
        }
    }

    /// Consumes a name token, or fails.
    fn expect_name(&mut self) -> Result<ast::Name<'src>, ParseError> {
        match &self.current.kind {
            TokenKind::Name(value) => {
                let value = *value;
                let loc =
                    self.make_loc(self.current.start, self.current.end);
                self.advance()?;
                Ok(ast::Name { loc, value })
            },
            _ => Err(self.unexpected("a name")),
        }
    }

    /// Consumes a name token with the given text, or fails.
    fn expect_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<Token<'src>, ParseError> {
        if self.peek_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(&format!("`{keyword}`")))
        }
    }

    /// Consumes a name token whose text is one of `words`, returning the
    /// matched word, or fails with an "expected one of" message.
    fn expect_one_of(
        &mut self,
        words: &[&str],
    ) -> Result<&'src str, ParseError> {
        if let TokenKind::Name(value) = &self.current.kind {
            let value = *value;
            if words.contains(&value) {
                self.advance()?;
                return Ok(value);
            }
        }
        let list = words
            .iter()
            .map(|w| format!("`{w}`"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(self.unexpected(&format!("one of {list}")))
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        SyntaxError::new(
            format!("expected {expected}, found {}", self.current.kind),
            self.current.start,
        )
        .into()
    }

    fn syntax_error(
        &self,
        message: impl Into<String>,
        offset: usize,
    ) -> ParseError {
        SyntaxError::new(message, offset).into()
    }

    // =========================================================================
    // Locations and depth
    // =========================================================================

    fn make_loc(&self, start: usize, end: usize) -> Option<ast::Location> {
        if self.options.ignore_locations {
            None
        } else {
            Some(ast::Location::new(start, end))
        }
    }

    /// Location from `start` to the end of the last consumed token.
    fn loc_from(&self, start: usize) -> Option<ast::Location> {
        self.make_loc(start, self.prev_end)
    }

    fn enter_depth(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            self.depth -= 1;
            return Err(ParseError::MaxDepthExceeded {
                offset: self.current.start,
            });
        }
        Ok(())
    }

    fn exit_depth(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Document
    // =========================================================================

    fn parse_document(
        mut self,
    ) -> Result<ast::Document<'src>, ParseError> {
        let mut definitions = Vec::new();
        while !self.current.is_eof() {
            definitions.push(self.parse_definition()?);
        }

        debug_assert_eq!(self.depth, 1);

        // Trailing comments never met a node to claim them.
        if let Some(comment) = self.current_comment.take() {
            self.unattached_comments.push(comment);
        }

        Ok(ast::Document {
            loc: self.make_loc(0, self.source.len()),
            definitions,
            unattached_comments: self.unattached_comments,
        })
    }

    fn parse_definition(
        &mut self,
    ) -> Result<ast::Definition<'src>, ParseError> {
        self.enter_depth()?;
        let result = self.parse_definition_impl();
        self.exit_depth();
        result
    }

    fn parse_definition_impl(
        &mut self,
    ) -> Result<ast::Definition<'src>, ParseError> {
        match &self.current.kind {
            TokenKind::CurlyBraceOpen => Ok(ast::Definition::Operation(
                self.parse_anonymous_operation()?,
            )),

            TokenKind::Name(name) => match *name {
                "query" | "mutation" | "subscription" => {
                    Ok(ast::Definition::Operation(
                        self.parse_operation_definition()?,
                    ))
                },
                "fragment" => Ok(ast::Definition::Fragment(
                    self.parse_fragment_definition()?,
                )),
                "schema" => Ok(ast::Definition::Schema(
                    self.parse_schema_definition()?,
                )),
                "scalar" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::Scalar(
                        self.parse_scalar_type_definition()?,
                    ),
                )),
                "type" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::Object(
                        self.parse_object_type_definition()?,
                    ),
                )),
                "interface" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::Interface(
                        self.parse_interface_type_definition()?,
                    ),
                )),
                "union" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::Union(
                        self.parse_union_type_definition()?,
                    ),
                )),
                "enum" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::Enum(
                        self.parse_enum_type_definition()?,
                    ),
                )),
                "input" => Ok(ast::Definition::Type(
                    ast::TypeDefinition::InputObject(
                        self.parse_input_object_type_definition()?,
                    ),
                )),
                "directive" => Ok(ast::Definition::Directive(
                    self.parse_directive_definition()?,
                )),
                "extend" => self.parse_type_system_extension(),
                _ => Err(self.unexpected("a definition")),
            },

            TokenKind::StringValue(_) | TokenKind::BlockStringValue(_) => {
                self.parse_described_definition()
            },

            _ => Err(self.unexpected("a definition")),
        }
    }

    /// Handles a top-level description string: peeks one token past the
    /// current one (without advancing) to find the type-system keyword
    /// that must follow. Descriptions are not permitted on operations,
    /// fragments, or extensions.
    fn parse_described_definition(
        &mut self,
    ) -> Result<ast::Definition<'src>, ParseError> {
        let next = self.peek_past_current()?;
        let keyword = match next.kind {
            TokenKind::Name(name)
                if DESCRIBABLE_KEYWORDS.contains(&name) =>
            {
                name
            },
            _ => {
                return Err(self.syntax_error(
                    "a description must be followed by a type system \
                    definition",
                    self.current.start,
                ));
            },
        };

        match keyword {
            "schema" => Ok(ast::Definition::Schema(
                self.parse_schema_definition()?,
            )),
            "scalar" => Ok(ast::Definition::Type(
                ast::TypeDefinition::Scalar(
                    self.parse_scalar_type_definition()?,
                ),
            )),
            "type" => Ok(ast::Definition::Type(
                ast::TypeDefinition::Object(
                    self.parse_object_type_definition()?,
                ),
            )),
            "interface" => Ok(ast::Definition::Type(
                ast::TypeDefinition::Interface(
                    self.parse_interface_type_definition()?,
                ),
            )),
            "union" => Ok(ast::Definition::Type(
                ast::TypeDefinition::Union(
                    self.parse_union_type_definition()?,
                ),
            )),
            "enum" => Ok(ast::Definition::Type(
                ast::TypeDefinition::Enum(
                    self.parse_enum_type_definition()?,
                ),
            )),
            "input" => Ok(ast::Definition::Type(
                ast::TypeDefinition::InputObject(
                    self.parse_input_object_type_definition()?,
                ),
            )),
            "directive" => Ok(ast::Definition::Directive(
                self.parse_directive_definition()?,
            )),
            _ => unreachable!("keyword filtered above"),
        }
    }

    /// Claims the leading comment and optional description for a
    /// type-system definition. A comment cluster sitting between the
    /// description and the keyword backfills a missing leading comment
    /// rather than leaking to the definition's first member.
    fn parse_definition_prelude(
        &mut self,
    ) -> Result<
        (Option<ast::Comment>, Option<ast::StringValue<'src>>),
        ParseError,
    > {
        let mut comment = self.take_comment();
        let description = self.parse_description()?;
        if comment.is_none() {
            comment = self.take_comment();
        }
        Ok((comment, description))
    }

    /// Parses an optional description string ahead of a type-system
    /// definition.
    fn parse_description(
        &mut self,
    ) -> Result<Option<ast::StringValue<'src>>, ParseError> {
        match &self.current.kind {
            TokenKind::StringValue(_) | TokenKind::BlockStringValue(_) => {
                let token = self.advance()?;
                let loc = self.make_loc(token.start, token.end);
                let (value, block) = match token.kind {
                    TokenKind::StringValue(value) => (value, false),
                    TokenKind::BlockStringValue(value) => (value, true),
                    _ => unreachable!(),
                };
                Ok(Some(ast::StringValue { loc, value, block }))
            },
            _ => Ok(None),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses the anonymous shorthand: a bare selection set is a query.
    fn parse_anonymous_operation(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            loc: self.loc_from(start),
            comment,
            operation: ast::OperationKind::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
        })
    }

    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        let word = self
            .expect_one_of(&["query", "mutation", "subscription"])?;
        let operation = operation_kind_from(word);

        let name = if matches!(&self.current.kind, TokenKind::Name(_)) {
            Some(self.expect_name()?)
        } else {
            None
        };

        let variable_definitions = if self.peek(&TokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            loc: self.loc_from(start),
            comment,
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Parses `($var: Type = default @dir, ...)` with at least one
    /// definition.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut definitions = vec![self.parse_variable_definition()?];
        while !self.skip(&TokenKind::ParenClose)? {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        let variable = self.parse_variable()?;
        self.expect(&TokenKind::Colon)?;
        let var_type = self.parse_type()?;

        let default_value = if self.skip(&TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };

        let directives = self.parse_directives(true)?;

        Ok(ast::VariableDefinition {
            loc: self.loc_from(start),
            comment,
            variable,
            var_type,
            default_value,
            directives,
        })
    }

    fn parse_variable(
        &mut self,
    ) -> Result<ast::Variable<'src>, ParseError> {
        let start = self.current.start;
        self.expect(&TokenKind::Dollar)?;
        let name = self.expect_name()?;
        Ok(ast::Variable {
            loc: self.loc_from(start),
            name,
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses `{ selection+ }`. The grammar requires at least one
    /// selection, so `{ }` fails at the closing brace.
    fn parse_selection_set(
        &mut self,
    ) -> Result<ast::SelectionSet<'src>, ParseError> {
        self.enter_depth()?;
        let result = self.parse_selection_set_impl();
        self.exit_depth();
        result
    }

    fn parse_selection_set_impl(
        &mut self,
    ) -> Result<ast::SelectionSet<'src>, ParseError> {
        let start = self.current.start;
        self.expect(&TokenKind::CurlyBraceOpen)?;

        let mut selections = vec![self.parse_selection()?];
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }

        Ok(ast::SelectionSet {
            loc: self.loc_from(start),
            selections,
        })
    }

    /// Parses a field, fragment spread, or inline fragment. A `...`
    /// followed by a name other than `on` is a spread; any other `...`
    /// begins an inline fragment.
    fn parse_selection(
        &mut self,
    ) -> Result<ast::Selection<'src>, ParseError> {
        if !self.peek(&TokenKind::Spread) {
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let comment = self.take_comment();
        let start = self.current.start;
        self.expect(&TokenKind::Spread)?;

        match &self.current.kind {
            TokenKind::Name(name) if *name != "on" => {
                let name = self.expect_name()?;
                let directives = self.parse_directives(false)?;
                Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    loc: self.loc_from(start),
                    comment,
                    name,
                    directives,
                }))
            },
            _ => {
                let type_condition = if self.peek_keyword("on") {
                    Some(self.parse_type_condition()?)
                } else {
                    None
                };
                let directives = self.parse_directives(false)?;
                let selection_set = self.parse_selection_set()?;
                Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                    loc: self.loc_from(start),
                    comment,
                    type_condition,
                    directives,
                    selection_set,
                }))
            },
        }
    }

    /// Parses `alias: name(args) @directives { selections }`; everything
    /// after the name is optional.
    fn parse_field(&mut self) -> Result<ast::Field<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        let first = self.expect_name()?;
        let (alias, name) = if self.skip(&TokenKind::Colon)? {
            (Some(first), self.expect_name()?)
        } else {
            (None, first)
        };

        let arguments = if self.peek(&TokenKind::ParenOpen) {
            self.parse_arguments(false)?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives(false)?;

        let selection_set = if self.peek(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            loc: self.loc_from(start),
            comment,
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        self.expect_keyword("fragment")?;

        if self.peek_keyword("on") {
            return Err(self.syntax_error(
                "fragment name cannot be `on`",
                self.current.start,
            ));
        }
        let name = self.expect_name()?;

        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            loc: self.loc_from(start),
            comment,
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses `on TypeName`.
    fn parse_type_condition(
        &mut self,
    ) -> Result<ast::TypeCondition<'src>, ParseError> {
        let start = self.current.start;
        self.expect_keyword("on")?;
        let named_type = self.parse_named_type()?;
        Ok(ast::TypeCondition {
            loc: self.loc_from(start),
            named_type,
        })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// Parses `(argument+)`.
    fn parse_arguments(
        &mut self,
        constant: bool,
    ) -> Result<Vec<ast::Argument<'src>>, ParseError> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut arguments = vec![self.parse_argument(constant)?];
        while !self.skip(&TokenKind::ParenClose)? {
            arguments.push(self.parse_argument(constant)?);
        }
        Ok(arguments)
    }

    fn parse_argument(
        &mut self,
        constant: bool,
    ) -> Result<ast::Argument<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        let name = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let value = self.parse_value(constant)?;

        Ok(ast::Argument {
            loc: self.loc_from(start),
            comment,
            name,
            value,
        })
    }

    /// Parses zero or more `@name(args)` annotations.
    fn parse_directives(
        &mut self,
        constant: bool,
    ) -> Result<Vec<ast::Directive<'src>>, ParseError> {
        let mut directives = Vec::new();
        while self.peek(&TokenKind::At) {
            directives.push(self.parse_directive(constant)?);
        }
        Ok(directives)
    }

    fn parse_directive(
        &mut self,
        constant: bool,
    ) -> Result<ast::Directive<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        self.expect(&TokenKind::At)?;
        let name = self.expect_name()?;

        let arguments = if self.peek(&TokenKind::ParenOpen) {
            self.parse_arguments(constant)?
        } else {
            Vec::new()
        };

        Ok(ast::Directive {
            loc: self.loc_from(start),
            comment,
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses an input value. When `constant` is set, variable
    /// references are rejected.
    fn parse_value(
        &mut self,
        constant: bool,
    ) -> Result<ast::Value<'src>, ParseError> {
        self.enter_depth()?;
        let result = self.parse_value_impl(constant);
        self.exit_depth();
        result
    }

    fn parse_value_impl(
        &mut self,
        constant: bool,
    ) -> Result<ast::Value<'src>, ParseError> {
        match &self.current.kind {
            TokenKind::Dollar => {
                if constant {
                    return Err(self.syntax_error(
                        "variables are not allowed in constant values",
                        self.current.start,
                    ));
                }
                Ok(ast::Value::Variable(self.parse_variable()?))
            },

            TokenKind::IntValue(value) => {
                let value = *value;
                let token = self.advance()?;
                Ok(ast::Value::Int(ast::IntValue {
                    loc: self.make_loc(token.start, token.end),
                    value,
                }))
            },

            TokenKind::FloatValue(value) => {
                let value = *value;
                let token = self.advance()?;
                Ok(ast::Value::Float(ast::FloatValue {
                    loc: self.make_loc(token.start, token.end),
                    value,
                }))
            },

            TokenKind::StringValue(_) | TokenKind::BlockStringValue(_) => {
                // Reuses the description scanner; the node shape is the
                // same.
                let string = self.parse_description()?.unwrap();
                Ok(ast::Value::String(string))
            },

            TokenKind::Name(name) => {
                let name = *name;
                let token = self.advance()?;
                let loc = self.make_loc(token.start, token.end);
                match name {
                    "true" => Ok(ast::Value::Boolean(ast::BooleanValue {
                        loc,
                        value: true,
                    })),
                    "false" => Ok(ast::Value::Boolean(
                        ast::BooleanValue { loc, value: false },
                    )),
                    "null" => {
                        Ok(ast::Value::Null(ast::NullValue { loc }))
                    },
                    _ => Ok(ast::Value::Enum(ast::EnumValue {
                        loc,
                        value: name,
                    })),
                }
            },

            TokenKind::SquareBracketOpen => self.parse_list_value(constant),

            TokenKind::CurlyBraceOpen => self.parse_object_value(constant),

            _ => Err(self.unexpected("a value")),
        }
    }

    /// Parses `[value*]`; empty lists are valid.
    fn parse_list_value(
        &mut self,
        constant: bool,
    ) -> Result<ast::Value<'src>, ParseError> {
        let start = self.current.start;
        self.expect(&TokenKind::SquareBracketOpen)?;

        let mut values = Vec::new();
        while !self.skip(&TokenKind::SquareBracketClose)? {
            values.push(self.parse_value(constant)?);
        }

        Ok(ast::Value::List(ast::ListValue {
            loc: self.loc_from(start),
            values,
        }))
    }

    /// Parses `{ name: value, ... }`; empty objects are valid.
    fn parse_object_value(
        &mut self,
        constant: bool,
    ) -> Result<ast::Value<'src>, ParseError> {
        let start = self.current.start;
        self.expect(&TokenKind::CurlyBraceOpen)?;

        let mut fields = Vec::new();
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            let comment = self.take_comment();
            let field_start = self.current.start;
            let name = self.expect_name()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_value(constant)?;
            fields.push(ast::ObjectField {
                loc: self.loc_from(field_start),
                comment,
                name,
                value,
            });
        }

        Ok(ast::Value::Object(ast::ObjectValue {
            loc: self.loc_from(start),
            fields,
        }))
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Name`, `[Type]`, or either followed by `!`. The `!` wraps
    /// the base exactly once; a doubled `!` fails as an unexpected token
    /// in the surrounding production, so a `NonNull` never directly
    /// contains a `NonNull`.
    fn parse_type(&mut self) -> Result<ast::Type<'src>, ParseError> {
        self.enter_depth()?;
        let result = self.parse_type_impl();
        self.exit_depth();
        result
    }

    fn parse_type_impl(&mut self) -> Result<ast::Type<'src>, ParseError> {
        let start = self.current.start;

        let base = if self.peek(&TokenKind::SquareBracketOpen) {
            self.advance()?;
            let inner = self.parse_type()?;
            self.expect(&TokenKind::SquareBracketClose)?;
            ast::Type::List(ast::ListType {
                loc: self.loc_from(start),
                of: Box::new(inner),
            })
        } else {
            ast::Type::Named(self.parse_named_type()?)
        };

        if self.skip(&TokenKind::Bang)? {
            Ok(ast::Type::NonNull(ast::NonNullType {
                loc: self.loc_from(start),
                of: Box::new(base),
            }))
        } else {
            Ok(base)
        }
    }

    fn parse_named_type(
        &mut self,
    ) -> Result<ast::NamedType<'src>, ParseError> {
        let name = self.expect_name()?;
        Ok(ast::NamedType {
            loc: name.loc,
            name,
        })
    }

    // =========================================================================
    // Schema definition
    // =========================================================================

    fn parse_schema_definition(
        &mut self,
    ) -> Result<ast::SchemaDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;

        self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut operation_types =
            vec![self.parse_root_operation_type_definition()?];
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            operation_types
                .push(self.parse_root_operation_type_definition()?);
        }

        Ok(ast::SchemaDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            directives,
            operation_types,
        })
    }

    /// Parses one `query: TypeName` entry.
    fn parse_root_operation_type_definition(
        &mut self,
    ) -> Result<ast::RootOperationTypeDefinition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        let word = self
            .expect_one_of(&["query", "mutation", "subscription"])?;
        let operation = operation_kind_from(word);
        self.expect(&TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;

        Ok(ast::RootOperationTypeDefinition {
            loc: self.loc_from(start),
            comment,
            operation,
            named_type,
        })
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    fn parse_scalar_type_definition(
        &mut self,
    ) -> Result<ast::ScalarTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;

        Ok(ast::ScalarTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            directives,
        })
    }

    fn parse_object_type_definition(
        &mut self,
    ) -> Result<ast::ObjectTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(ast::ObjectTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<ast::InterfaceTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(ast::InterfaceTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    fn parse_union_type_definition(
        &mut self,
    ) -> Result<ast::UnionTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let members = if self.skip(&TokenKind::Equals)? {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };

        Ok(ast::UnionTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
    ) -> Result<ast::EnumTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let values = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };

        Ok(ast::EnumTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<ast::InputObjectTypeDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };

        Ok(ast::InputObjectTypeDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            directives,
            fields,
        })
    }

    fn parse_directive_definition(
        &mut self,
    ) -> Result<ast::DirectiveDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        self.expect_keyword("directive")?;
        self.expect(&TokenKind::At)?;
        let name = self.expect_name()?;

        let arguments = if self.peek(&TokenKind::ParenOpen) {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };

        let repeatable = if self.peek_keyword("repeatable") {
            self.advance()?;
            true
        } else {
            false
        };

        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;

        Ok(ast::DirectiveDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    // =========================================================================
    // Type definition members
    // =========================================================================

    /// Parses `implements A & B`, accepting an optional leading `&`.
    /// Returns an empty list when the keyword is absent.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<Vec<ast::NamedType<'src>>, ParseError> {
        if !self.peek_keyword("implements") {
            return Ok(Vec::new());
        }
        self.advance()?;
        self.skip(&TokenKind::Ampersand)?;

        let mut interfaces = vec![self.parse_named_type()?];
        while self.skip(&TokenKind::Ampersand)? {
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// Parses `A | B | C`, accepting an optional leading `|`.
    fn parse_union_member_types(
        &mut self,
    ) -> Result<Vec<ast::NamedType<'src>>, ParseError> {
        self.skip(&TokenKind::Pipe)?;

        let mut members = vec![self.parse_named_type()?];
        while self.skip(&TokenKind::Pipe)? {
            members.push(self.parse_named_type()?);
        }
        Ok(members)
    }

    /// Parses `{ field_definition+ }`.
    fn parse_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut fields = vec![self.parse_field_definition()?];
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            fields.push(self.parse_field_definition()?);
        }
        Ok(fields)
    }

    fn parse_field_definition(
        &mut self,
    ) -> Result<ast::FieldDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        let name = self.expect_name()?;
        let arguments = if self.peek(&TokenKind::ParenOpen) {
            self.parse_arguments_definition()?
        } else {
            Vec::new()
        };
        self.expect(&TokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives(true)?;

        Ok(ast::FieldDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            arguments,
            field_type,
            directives,
        })
    }

    /// Parses `(input_value_definition+)`.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut arguments = vec![self.parse_input_value_definition()?];
        while !self.skip(&TokenKind::ParenClose)? {
            arguments.push(self.parse_input_value_definition()?);
        }
        Ok(arguments)
    }

    /// Parses `{ input_value_definition+ }`.
    fn parse_input_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut fields = vec![self.parse_input_value_definition()?];
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            fields.push(self.parse_input_value_definition()?);
        }
        Ok(fields)
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        let name = self.expect_name()?;
        self.expect(&TokenKind::Colon)?;
        let value_type = self.parse_type()?;

        let default_value = if self.skip(&TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };

        let directives = self.parse_directives(true)?;

        Ok(ast::InputValueDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            name,
            value_type,
            default_value,
            directives,
        })
    }

    /// Parses `{ enum_value_definition+ }`.
    fn parse_enum_values_definition(
        &mut self,
    ) -> Result<Vec<ast::EnumValueDefinition<'src>>, ParseError> {
        self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut values = vec![self.parse_enum_value_definition()?];
        while !self.skip(&TokenKind::CurlyBraceClose)? {
            values.push(self.parse_enum_value_definition()?);
        }
        Ok(values)
    }

    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition<'src>, ParseError> {
        let start = self.current.start;
        let (comment, description) = self.parse_definition_prelude()?;

        if let TokenKind::Name(name) = &self.current.kind
            && matches!(*name, "true" | "false" | "null")
        {
            return Err(self.syntax_error(
                format!("enum value cannot be `{name}`"),
                self.current.start,
            ));
        }
        let value = self.expect_name()?;
        let directives = self.parse_directives(true)?;

        Ok(ast::EnumValueDefinition {
            loc: self.loc_from(start),
            comment,
            description,
            value,
            directives,
        })
    }

    /// Parses `LOCATION | LOCATION`, accepting an optional leading `|`.
    fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<ast::DirectiveLocation>, ParseError> {
        self.skip(&TokenKind::Pipe)?;

        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(&TokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(
        &mut self,
    ) -> Result<ast::DirectiveLocation, ParseError> {
        match &self.current.kind {
            TokenKind::Name(name) => {
                match ast::DirectiveLocation::from_name(name) {
                    Some(location) => {
                        self.advance()?;
                        Ok(location)
                    },
                    None => Err(self.syntax_error(
                        format!("unknown directive location `{name}`"),
                        self.current.start,
                    )),
                }
            },
            _ => Err(self.unexpected("a directive location")),
        }
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    /// Parses any `extend ...` definition. Every extension must add at
    /// least one clause to the type it extends.
    fn parse_type_system_extension(
        &mut self,
    ) -> Result<ast::Definition<'src>, ParseError> {
        let comment = self.take_comment();
        let start = self.current.start;

        self.expect_keyword("extend")?;
        let keyword = self.expect_one_of(&[
            "schema",
            "scalar",
            "type",
            "interface",
            "union",
            "enum",
            "input",
        ])?;

        match keyword {
            "schema" => {
                Ok(ast::Definition::SchemaExtension(
                    self.parse_schema_extension(comment, start)?,
                ))
            },
            "scalar" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Scalar(
                    self.parse_scalar_type_extension(comment, start)?,
                ),
            )),
            "type" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Object(
                    self.parse_object_type_extension(comment, start)?,
                ),
            )),
            "interface" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Interface(
                    self.parse_interface_type_extension(comment, start)?,
                ),
            )),
            "union" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Union(
                    self.parse_union_type_extension(comment, start)?,
                ),
            )),
            "enum" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::Enum(
                    self.parse_enum_type_extension(comment, start)?,
                ),
            )),
            "input" => Ok(ast::Definition::TypeExtension(
                ast::TypeExtension::InputObject(
                    self.parse_input_object_type_extension(
                        comment, start,
                    )?,
                ),
            )),
            _ => unreachable!("keyword constrained by expect_one_of"),
        }
    }

    fn empty_extension_error(&self, what: &str) -> ParseError {
        self.syntax_error(
            format!("`extend {what}` must add at least one clause"),
            self.current.start,
        )
    }

    fn parse_schema_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::SchemaExtension<'src>, ParseError> {
        let directives = self.parse_directives(true)?;

        let mut operation_types = Vec::new();
        if self.peek(&TokenKind::CurlyBraceOpen) {
            self.advance()?;
            operation_types
                .push(self.parse_root_operation_type_definition()?);
            while !self.skip(&TokenKind::CurlyBraceClose)? {
                operation_types
                    .push(self.parse_root_operation_type_definition()?);
            }
        }

        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.empty_extension_error("schema"));
        }

        Ok(ast::SchemaExtension {
            loc: self.loc_from(start),
            comment,
            directives,
            operation_types,
        })
    }

    fn parse_scalar_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::ScalarTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;

        if directives.is_empty() {
            return Err(self.empty_extension_error("scalar"));
        }

        Ok(ast::ScalarTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            directives,
        })
    }

    fn parse_object_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::ObjectTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        if interfaces.is_empty()
            && directives.is_empty()
            && fields.is_empty()
        {
            return Err(self.empty_extension_error("type"));
        }

        Ok(ast::ObjectTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    fn parse_interface_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::InterfaceTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()?
        } else {
            Vec::new()
        };

        if interfaces.is_empty()
            && directives.is_empty()
            && fields.is_empty()
        {
            return Err(self.empty_extension_error("interface"));
        }

        Ok(ast::InterfaceTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    fn parse_union_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::UnionTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let members = if self.skip(&TokenKind::Equals)? {
            self.parse_union_member_types()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && members.is_empty() {
            return Err(self.empty_extension_error("union"));
        }

        Ok(ast::UnionTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            directives,
            members,
        })
    }

    fn parse_enum_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::EnumTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let values = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_enum_values_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && values.is_empty() {
            return Err(self.empty_extension_error("enum"));
        }

        Ok(ast::EnumTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            directives,
            values,
        })
    }

    fn parse_input_object_type_extension(
        &mut self,
        comment: Option<ast::Comment>,
        start: usize,
    ) -> Result<ast::InputObjectTypeExtension<'src>, ParseError> {
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = if self.peek(&TokenKind::CurlyBraceOpen) {
            self.parse_input_fields_definition()?
        } else {
            Vec::new()
        };

        if directives.is_empty() && fields.is_empty() {
            return Err(self.empty_extension_error("input"));
        }

        Ok(ast::InputObjectTypeExtension {
            loc: self.loc_from(start),
            comment,
            name,
            directives,
            fields,
        })
    }
}

fn operation_kind_from(word: &str) -> ast::OperationKind {
    match word {
        "query" => ast::OperationKind::Query,
        "mutation" => ast::OperationKind::Mutation,
        "subscription" => ast::OperationKind::Subscription,
        _ => unreachable!("callers pass a vetted operation keyword"),
    }
}
