//! Executable-document nodes: operations, fragments, selection sets, and
//! variable definitions.

use crate::ast::Argument;
use crate::ast::Comment;
use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use std::fmt;

/// The kind of an operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation definition.
///
/// The anonymous shorthand `{ ... }` parses as a `Query` operation with
/// `name: None` and no variable definitions or directives. The selection
/// set is always present and non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A variable definition: `$name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub variable: Variable<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

/// A brace-delimited, non-empty list of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub loc: Option<Location>,
    pub selections: Vec<Selection<'src>>,
}

/// A single entry of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

impl<'src> Selection<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(_) => NodeKind::Field,
            Selection::FragmentSpread(_) => NodeKind::FragmentSpread,
            Selection::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            Selection::Field(s) => s.loc,
            Selection::FragmentSpread(s) => s.loc,
            Selection::InlineFragment(s) => s.loc,
        }
    }
}

/// A field selection: `alias: name(args) @directives { selections }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl<'src> Field<'src> {
    /// The name this field is returned under: its alias when present,
    /// otherwise its name.
    pub fn response_name(&self) -> &'src str {
        self.alias.as_ref().unwrap_or(&self.name).value
    }
}

/// A fragment spread: `...FragmentName @directives`. The location starts
/// at the `...`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An inline fragment: `... on Type @directives { selections }`, with the
/// type condition optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

/// A fragment definition: `fragment Name on Type @directives { ... }`.
///
/// The name is never the keyword `on`; the parser rejects that at the
/// syntax level.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}
