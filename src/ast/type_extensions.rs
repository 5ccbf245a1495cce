//! Type-system extension nodes (`extend ...`).
//!
//! Every extension requires at least one clause (directives, fields,
//! values, members, interfaces, or root operation types); the parser
//! rejects a bare `extend type Foo`.

use crate::ast::Comment;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::RootOperationTypeDefinition;

/// `extend schema @directives { query: Q }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
}

/// Any of the six named type extensions.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeExtension::Scalar(_) => NodeKind::ScalarTypeExtension,
            TypeExtension::Object(_) => NodeKind::ObjectTypeExtension,
            TypeExtension::Interface(_) => {
                NodeKind::InterfaceTypeExtension
            },
            TypeExtension::Union(_) => NodeKind::UnionTypeExtension,
            TypeExtension::Enum(_) => NodeKind::EnumTypeExtension,
            TypeExtension::InputObject(_) => {
                NodeKind::InputObjectTypeExtension
            },
        }
    }

    /// The name of the extended type.
    pub fn name(&self) -> &Name<'src> {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            TypeExtension::Scalar(ext) => ext.loc,
            TypeExtension::Object(ext) => ext.loc,
            TypeExtension::Interface(ext) => ext.loc,
            TypeExtension::Union(ext) => ext.loc,
            TypeExtension::Enum(ext) => ext.loc,
            TypeExtension::InputObject(ext) => ext.loc,
        }
    }
}

/// `extend scalar Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

/// `extend type Name implements I @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend interface Name implements I @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

/// `extend union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub members: Vec<NamedType<'src>>,
}

/// `extend enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// `extend input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub loc: Option<Location>,
    pub comment: Option<Comment>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}
