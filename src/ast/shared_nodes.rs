//! Nodes shared between executable and type-system grammar: arguments,
//! directive annotations, and type conditions.

use crate::ast::Comment;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Value;

/// A single `name: value` argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

/// A directive annotation: `@name(args...)`. The location starts at the
/// `@`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}

/// A type condition: `on TypeName`. The location starts at the `on`
/// keyword.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeCondition<'src> {
    pub loc: Option<Location>,
    pub named_type: NamedType<'src>,
}
