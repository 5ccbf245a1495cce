//! Type-system (SDL) definition nodes.

use crate::ast::Comment;
use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use std::fmt;

/// A schema definition: `schema @directives { query: Q ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
}

/// One `query: TypeName` entry of a schema definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub operation: OperationKind,
    pub named_type: NamedType<'src>,
}

/// Any of the six named type definitions.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeDefinition::Scalar(_) => NodeKind::ScalarTypeDefinition,
            TypeDefinition::Object(_) => NodeKind::ObjectTypeDefinition,
            TypeDefinition::Interface(_) => {
                NodeKind::InterfaceTypeDefinition
            },
            TypeDefinition::Union(_) => NodeKind::UnionTypeDefinition,
            TypeDefinition::Enum(_) => NodeKind::EnumTypeDefinition,
            TypeDefinition::InputObject(_) => {
                NodeKind::InputObjectTypeDefinition
            },
        }
    }

    /// The name of the defined type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            TypeDefinition::Scalar(def) => def.loc,
            TypeDefinition::Object(def) => def.loc,
            TypeDefinition::Interface(def) => def.loc,
            TypeDefinition::Union(def) => def.loc,
            TypeDefinition::Enum(def) => def.loc,
            TypeDefinition::InputObject(def) => def.loc,
        }
    }
}

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `type Name implements I & J @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `interface Name implements I @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub members: Vec<NamedType<'src>>,
}

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// One value of an enum type definition. The name is never `true`,
/// `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub value: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

/// A field of an object or interface type:
/// `name(args): Type @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// An input value: an argument definition or an input-object field:
/// `name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

/// `directive @name(args) repeatable on LOCATIONS`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

/// A valid directive location name, per the October 2021 spec.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type-system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Every valid location name, in spec order.
    pub const NAMES: &'static [&'static str] = &[
        "QUERY",
        "MUTATION",
        "SUBSCRIPTION",
        "FIELD",
        "FRAGMENT_DEFINITION",
        "FRAGMENT_SPREAD",
        "INLINE_FRAGMENT",
        "VARIABLE_DEFINITION",
        "SCHEMA",
        "SCALAR",
        "OBJECT",
        "FIELD_DEFINITION",
        "ARGUMENT_DEFINITION",
        "INTERFACE",
        "UNION",
        "ENUM",
        "ENUM_VALUE",
        "INPUT_OBJECT",
        "INPUT_FIELD_DEFINITION",
    ];

    /// Resolves a location name as it appears in source.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "QUERY" => Some(DirectiveLocation::Query),
            "MUTATION" => Some(DirectiveLocation::Mutation),
            "SUBSCRIPTION" => Some(DirectiveLocation::Subscription),
            "FIELD" => Some(DirectiveLocation::Field),
            "FRAGMENT_DEFINITION" => {
                Some(DirectiveLocation::FragmentDefinition)
            },
            "FRAGMENT_SPREAD" => Some(DirectiveLocation::FragmentSpread),
            "INLINE_FRAGMENT" => Some(DirectiveLocation::InlineFragment),
            "VARIABLE_DEFINITION" => {
                Some(DirectiveLocation::VariableDefinition)
            },
            "SCHEMA" => Some(DirectiveLocation::Schema),
            "SCALAR" => Some(DirectiveLocation::Scalar),
            "OBJECT" => Some(DirectiveLocation::Object),
            "FIELD_DEFINITION" => Some(DirectiveLocation::FieldDefinition),
            "ARGUMENT_DEFINITION" => {
                Some(DirectiveLocation::ArgumentDefinition)
            },
            "INTERFACE" => Some(DirectiveLocation::Interface),
            "UNION" => Some(DirectiveLocation::Union),
            "ENUM" => Some(DirectiveLocation::Enum),
            "ENUM_VALUE" => Some(DirectiveLocation::EnumValue),
            "INPUT_OBJECT" => Some(DirectiveLocation::InputObject),
            "INPUT_FIELD_DEFINITION" => {
                Some(DirectiveLocation::InputFieldDefinition)
            },
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => {
                "INPUT_FIELD_DEFINITION"
            },
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
