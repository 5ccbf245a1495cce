//! Shared helpers for unwrapping parse results and AST variants.

use crate::ast;
use crate::ParseError;

/// Parses with default options, panicking on failure.
pub fn parse(source: &str) -> ast::Document<'_> {
    crate::parse(source)
        .unwrap_or_else(|err| panic!("parse failed: {err}"))
}

/// Parses with default options, panicking on success.
pub fn parse_err(source: &str) -> ParseError {
    match crate::parse(source) {
        Ok(_) => panic!("expected a parse error for {source:?}"),
        Err(err) => err,
    }
}

/// Extracts the syntax error message, panicking on a depth error.
pub fn syntax_error_message(source: &str) -> String {
    match parse_err(source) {
        ParseError::Syntax(err) => err.message,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

pub fn first_operation<'doc, 'src>(
    doc: &'doc ast::Document<'src>,
) -> &'doc ast::OperationDefinition<'src> {
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

pub fn first_fragment<'doc, 'src>(
    doc: &'doc ast::Document<'src>,
) -> &'doc ast::FragmentDefinition<'src> {
    match &doc.definitions[0] {
        ast::Definition::Fragment(def) => def,
        other => panic!("expected a fragment definition, got {other:?}"),
    }
}

pub fn first_type_definition<'doc, 'src>(
    doc: &'doc ast::Document<'src>,
) -> &'doc ast::TypeDefinition<'src> {
    match &doc.definitions[0] {
        ast::Definition::Type(def) => def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

pub fn first_type_extension<'doc, 'src>(
    doc: &'doc ast::Document<'src>,
) -> &'doc ast::TypeExtension<'src> {
    match &doc.definitions[0] {
        ast::Definition::TypeExtension(ext) => ext,
        other => panic!("expected a type extension, got {other:?}"),
    }
}

/// Extracts a field from a selection, panicking on spreads/inline
/// fragments.
pub fn as_field<'sel, 'src>(
    selection: &'sel ast::Selection<'src>,
) -> &'sel ast::Field<'src> {
    match selection {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}
