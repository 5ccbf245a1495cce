/// Discriminator for every AST node variant.
///
/// Rust's enums already discriminate the sum types structurally; this
/// fieldless mirror exists for contexts that need a uniform tag, such as
/// the visitor's ancestor stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Document,
    OperationDefinition,
    FragmentDefinition,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    VariableDefinition,
    Variable,
    Directive,
    TypeCondition,
    NamedType,
    ListType,
    NonNullType,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
    Comment,
}
