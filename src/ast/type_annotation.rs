use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NodeKind;

/// A type reference: `Name`, `[Type]`, or either followed by `!`.
///
/// The grammar only permits a single trailing `!` per level, so the inner
/// type of a [`NonNullType`] is never itself a `NonNull` variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

impl<'src> Type<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Type::Named(_) => NodeKind::NamedType,
            Type::List(_) => NodeKind::ListType,
            Type::NonNull(_) => NodeKind::NonNullType,
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            Type::Named(t) => t.loc,
            Type::List(t) => t.loc,
            Type::NonNull(t) => t.loc,
        }
    }
}

/// A reference to a type by name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedType<'src> {
    pub loc: Option<Location>,
    pub name: Name<'src>,
}

/// A list wrapper: `[Type]`. The location covers the brackets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListType<'src> {
    pub loc: Option<Location>,
    pub of: Box<Type<'src>>,
}

/// A non-null wrapper: `Type!`. The location covers the wrapped type and
/// the `!`. `of` is always a `Named` or `List` type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonNullType<'src> {
    pub loc: Option<Location>,
    pub of: Box<Type<'src>>,
}
