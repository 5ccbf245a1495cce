use crate::ast::Comment;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NodeKind;
use std::borrow::Cow;

/// An input value literal or variable reference.
///
/// Numeric variants keep the raw source text of the literal; converting
/// to a machine number is the consumer's concern. Variables only occur
/// where the grammar permits them (the parser rejects `$var` in constant
/// contexts such as default values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

impl<'src> Value<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Variable(_) => NodeKind::Variable,
            Value::Int(_) => NodeKind::IntValue,
            Value::Float(_) => NodeKind::FloatValue,
            Value::String(_) => NodeKind::StringValue,
            Value::Boolean(_) => NodeKind::BooleanValue,
            Value::Null(_) => NodeKind::NullValue,
            Value::Enum(_) => NodeKind::EnumValue,
            Value::List(_) => NodeKind::ListValue,
            Value::Object(_) => NodeKind::ObjectValue,
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            Value::Variable(v) => v.loc,
            Value::Int(v) => v.loc,
            Value::Float(v) => v.loc,
            Value::String(v) => v.loc,
            Value::Boolean(v) => v.loc,
            Value::Null(v) => v.loc,
            Value::Enum(v) => v.loc,
            Value::List(v) => v.loc,
            Value::Object(v) => v.loc,
        }
    }
}

/// A variable reference: `$name`. The location covers the `$`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable<'src> {
    pub loc: Option<Location>,
    pub name: Name<'src>,
}

/// An integer literal. `value` is the raw source text, including any
/// leading minus sign.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntValue<'src> {
    pub loc: Option<Location>,
    pub value: &'src str,
}

/// A float literal. `value` is the raw source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FloatValue<'src> {
    pub loc: Option<Location>,
    pub value: &'src str,
}

/// A string literal, already decoded (escapes processed, block strings
/// dedented). Also used for type-system descriptions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringValue<'src> {
    pub loc: Option<Location>,
    pub value: Cow<'src, str>,
    /// `true` when the literal was written as a `"""block string"""`.
    pub block: bool,
}

/// `true` or `false`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BooleanValue {
    pub loc: Option<Location>,
    pub value: bool,
}

/// The `null` literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NullValue {
    pub loc: Option<Location>,
}

/// An enum value literal: any name other than `true`, `false`, or
/// `null`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue<'src> {
    pub loc: Option<Location>,
    pub value: &'src str,
}

/// A list literal: `[v1, v2, ...]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub loc: Option<Location>,
    pub values: Vec<Value<'src>>,
}

/// An input object literal: `{ field: value, ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub loc: Option<Location>,
    pub fields: Vec<ObjectField<'src>>,
}

/// A single `name: value` entry of an input object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub value: Value<'src>,
}
