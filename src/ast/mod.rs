//! AST node model for parsed GraphQL documents.
//!
//! All node types are parameterized over a `'src` lifetime and borrow
//! their string payloads from the source text wherever possible; the
//! source must therefore outlive the [`Document`]. The tree is fully
//! owned by the `Document` (no sharing, no cycles) and is not mutated by
//! the parser after construction.
//!
//! Every node carries an optional [`Location`] (omitted under
//! `ignore_locations`); comment-bearing nodes carry an optional leading
//! [`Comment`] (omitted under `ignore_comments`); type-system nodes that
//! permit one carry an optional description.

mod comment;
mod document;
mod executable_defs;
mod location;
mod name;
mod node_kind;
mod shared_nodes;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use comment::Comment;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationKind;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use location::Location;
pub use name::Name;
pub use node_kind::NodeKind;
pub use shared_nodes::Argument;
pub use shared_nodes::Directive;
pub use shared_nodes::TypeCondition;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::Type;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocation;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
