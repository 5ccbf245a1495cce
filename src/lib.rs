//! A zero-copy lexer and recursive-descent parser for GraphQL source
//! text, per the October 2021 specification.
//!
//! Covers executable documents (queries, mutations, subscriptions,
//! fragments) and the full Schema Definition Language, including every
//! type-system extension. Purely syntactic: no validation, no
//! execution, no printing.
//!
//! # Quick start
//!
//! ```
//! use graphql_syntax::ast;
//!
//! let doc = graphql_syntax::parse("query Hello { world }").unwrap();
//! let ast::Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(op.name.as_ref().unwrap().value, "Hello");
//! ```
//!
//! # Zero-copy contract
//!
//! The returned [`ast::Document`] borrows names, numbers, and
//! escape-free strings directly from the source text, so the source must
//! outlive the document. Offsets throughout the crate are byte offsets
//! into the source; [`location_of`] converts one to a 1-based
//! line/column pair for diagnostics.
//!
//! # Errors
//!
//! Parsing is fail-fast: the first lexical or syntactic error aborts the
//! parse. [`ParseError`] carries the failing byte offset, never a
//! partial AST. Structural runaway is bounded by
//! [`ParseOptions::max_depth`].

pub mod ast;
mod lexer;
mod parse_error;
mod parse_options;
mod parser;
mod source_location;
pub mod token;
pub mod visit;

pub use lexer::lex;
pub use parse_error::ParseError;
pub use parse_error::SyntaxError;
pub use parse_options::ParseOptions;
pub use parser::parse;
pub use parser::parse_with_options;
pub use source_location::location_of;
pub use source_location::SourceLocation;
pub use visit::visit_document;

#[cfg(test)]
mod tests;
