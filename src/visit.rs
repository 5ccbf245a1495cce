//! Pre-order traversal over a parsed [`Document`].
//!
//! [`visit_document`] walks the tree in source order, calling the
//! enter/leave hooks of a [`Visitor`]. Every hook has a default no-op
//! implementation, so a visitor only implements the nodes it cares
//! about. The [`VisitContext`] passed to each hook carries the stack of
//! ancestor [`NodeKind`]s, so a hook can ask for its parent or full
//! ancestry without threading state of its own.
//!
//! The parser never uses this module; it exists for downstream printers
//! and analysis tools.
//!
//! # Example
//!
//! ```
//! use graphql_syntax::ast::Field;
//! use graphql_syntax::visit::VisitContext;
//! use graphql_syntax::visit::Visitor;
//! use graphql_syntax::visit_document;
//!
//! struct FieldNames(Vec<String>);
//!
//! impl<'src> Visitor<'src> for FieldNames {
//!     fn enter_field(&mut self, field: &Field<'src>, _cx: &VisitContext) {
//!         self.0.push(field.name.value.to_string());
//!     }
//! }
//!
//! let doc = graphql_syntax::parse("{ a b { c } }").unwrap();
//! let mut names = FieldNames(Vec::new());
//! visit_document(&doc, &mut names);
//! assert_eq!(names.0, ["a", "b", "c"]);
//! ```

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputValueDefinition;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use smallvec::SmallVec;

/// Traversal context handed to every visitor hook: the stack of ancestor
/// node kinds, innermost last.
///
/// The node currently being visited is *not* on the stack; `parent()`
/// answers "what encloses me".
#[derive(Debug, Default)]
pub struct VisitContext {
    ancestors: SmallVec<[NodeKind; 16]>,
}

impl VisitContext {
    fn new() -> Self {
        Self::default()
    }

    /// The kind of the node enclosing the one being visited.
    pub fn parent(&self) -> Option<NodeKind> {
        self.ancestors.last().copied()
    }

    /// All enclosing node kinds, outermost first.
    pub fn ancestors(&self) -> &[NodeKind] {
        &self.ancestors
    }

    /// How deep the current node sits; the document's children are at
    /// depth 1.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    fn push(&mut self, kind: NodeKind) {
        self.ancestors.push(kind);
    }

    fn pop(&mut self) {
        self.ancestors.pop();
    }
}

/// Enter/leave hooks for each class of AST node. All default to no-ops.
#[allow(unused_variables)]
pub trait Visitor<'src> {
    fn enter_document(&mut self, node: &Document<'src>, cx: &VisitContext) {}
    fn leave_document(&mut self, node: &Document<'src>, cx: &VisitContext) {}

    fn enter_definition(&mut self, node: &Definition<'src>, cx: &VisitContext) {}
    fn leave_definition(&mut self, node: &Definition<'src>, cx: &VisitContext) {}

    fn enter_operation_definition(
        &mut self,
        node: &OperationDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_operation_definition(
        &mut self,
        node: &OperationDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_fragment_definition(
        &mut self,
        node: &FragmentDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_fragment_definition(
        &mut self,
        node: &FragmentDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_variable_definition(
        &mut self,
        node: &VariableDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_variable_definition(
        &mut self,
        node: &VariableDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_selection_set(
        &mut self,
        node: &SelectionSet<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_selection_set(
        &mut self,
        node: &SelectionSet<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_field(&mut self, node: &Field<'src>, cx: &VisitContext) {}
    fn leave_field(&mut self, node: &Field<'src>, cx: &VisitContext) {}

    fn enter_fragment_spread(
        &mut self,
        node: &FragmentSpread<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_fragment_spread(
        &mut self,
        node: &FragmentSpread<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_inline_fragment(
        &mut self,
        node: &InlineFragment<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_inline_fragment(
        &mut self,
        node: &InlineFragment<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_argument(&mut self, node: &Argument<'src>, cx: &VisitContext) {}
    fn leave_argument(&mut self, node: &Argument<'src>, cx: &VisitContext) {}

    fn enter_directive(&mut self, node: &Directive<'src>, cx: &VisitContext) {}
    fn leave_directive(&mut self, node: &Directive<'src>, cx: &VisitContext) {}

    fn enter_value(&mut self, node: &Value<'src>, cx: &VisitContext) {}
    fn leave_value(&mut self, node: &Value<'src>, cx: &VisitContext) {}

    fn enter_type(&mut self, node: &Type<'src>, cx: &VisitContext) {}
    fn leave_type(&mut self, node: &Type<'src>, cx: &VisitContext) {}

    fn enter_schema_definition(
        &mut self,
        node: &SchemaDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_schema_definition(
        &mut self,
        node: &SchemaDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_root_operation_type_definition(
        &mut self,
        node: &RootOperationTypeDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_root_operation_type_definition(
        &mut self,
        node: &RootOperationTypeDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_type_definition(
        &mut self,
        node: &TypeDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_type_definition(
        &mut self,
        node: &TypeDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_field_definition(
        &mut self,
        node: &FieldDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_field_definition(
        &mut self,
        node: &FieldDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_input_value_definition(
        &mut self,
        node: &InputValueDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_input_value_definition(
        &mut self,
        node: &InputValueDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_enum_value_definition(
        &mut self,
        node: &EnumValueDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_enum_value_definition(
        &mut self,
        node: &EnumValueDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_directive_definition(
        &mut self,
        node: &DirectiveDefinition<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_directive_definition(
        &mut self,
        node: &DirectiveDefinition<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_schema_extension(
        &mut self,
        node: &SchemaExtension<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_schema_extension(
        &mut self,
        node: &SchemaExtension<'src>,
        cx: &VisitContext,
    ) {
    }

    fn enter_type_extension(
        &mut self,
        node: &TypeExtension<'src>,
        cx: &VisitContext,
    ) {
    }
    fn leave_type_extension(
        &mut self,
        node: &TypeExtension<'src>,
        cx: &VisitContext,
    ) {
    }
}

/// Walks `doc` in pre-order, calling `visitor`'s hooks.
pub fn visit_document<'src, V: Visitor<'src>>(
    doc: &Document<'src>,
    visitor: &mut V,
) {
    let mut cx = VisitContext::new();
    visitor.enter_document(doc, &cx);
    cx.push(NodeKind::Document);
    for definition in &doc.definitions {
        walk_definition(definition, visitor, &mut cx);
    }
    cx.pop();
    visitor.leave_document(doc, &cx);
}

fn walk_definition<'src, V: Visitor<'src>>(
    definition: &Definition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_definition(definition, cx);
    match definition {
        Definition::Operation(def) => {
            visitor.enter_operation_definition(def, cx);
            cx.push(NodeKind::OperationDefinition);
            for var_def in &def.variable_definitions {
                walk_variable_definition(var_def, visitor, cx);
            }
            walk_directives(&def.directives, visitor, cx);
            walk_selection_set(&def.selection_set, visitor, cx);
            cx.pop();
            visitor.leave_operation_definition(def, cx);
        },
        Definition::Fragment(def) => {
            visitor.enter_fragment_definition(def, cx);
            cx.push(NodeKind::FragmentDefinition);
            walk_directives(&def.directives, visitor, cx);
            walk_selection_set(&def.selection_set, visitor, cx);
            cx.pop();
            visitor.leave_fragment_definition(def, cx);
        },
        Definition::Schema(def) => {
            visitor.enter_schema_definition(def, cx);
            cx.push(NodeKind::SchemaDefinition);
            walk_directives(&def.directives, visitor, cx);
            for operation_type in &def.operation_types {
                walk_root_operation_type(operation_type, visitor, cx);
            }
            cx.pop();
            visitor.leave_schema_definition(def, cx);
        },
        Definition::Type(def) => walk_type_definition(def, visitor, cx),
        Definition::Directive(def) => {
            visitor.enter_directive_definition(def, cx);
            cx.push(NodeKind::DirectiveDefinition);
            for argument in &def.arguments {
                walk_input_value_definition(argument, visitor, cx);
            }
            cx.pop();
            visitor.leave_directive_definition(def, cx);
        },
        Definition::SchemaExtension(ext) => {
            visitor.enter_schema_extension(ext, cx);
            cx.push(NodeKind::SchemaExtension);
            walk_directives(&ext.directives, visitor, cx);
            for operation_type in &ext.operation_types {
                walk_root_operation_type(operation_type, visitor, cx);
            }
            cx.pop();
            visitor.leave_schema_extension(ext, cx);
        },
        Definition::TypeExtension(ext) => {
            walk_type_extension(ext, visitor, cx)
        },
    }
    visitor.leave_definition(definition, cx);
}

fn walk_variable_definition<'src, V: Visitor<'src>>(
    def: &VariableDefinition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_variable_definition(def, cx);
    cx.push(NodeKind::VariableDefinition);
    walk_type(&def.var_type, visitor, cx);
    if let Some(default) = &def.default_value {
        walk_value(default, visitor, cx);
    }
    walk_directives(&def.directives, visitor, cx);
    cx.pop();
    visitor.leave_variable_definition(def, cx);
}

fn walk_selection_set<'src, V: Visitor<'src>>(
    selection_set: &SelectionSet<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_selection_set(selection_set, cx);
    cx.push(NodeKind::SelectionSet);
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => walk_field(field, visitor, cx),
            Selection::FragmentSpread(spread) => {
                visitor.enter_fragment_spread(spread, cx);
                cx.push(NodeKind::FragmentSpread);
                walk_directives(&spread.directives, visitor, cx);
                cx.pop();
                visitor.leave_fragment_spread(spread, cx);
            },
            Selection::InlineFragment(inline) => {
                visitor.enter_inline_fragment(inline, cx);
                cx.push(NodeKind::InlineFragment);
                walk_directives(&inline.directives, visitor, cx);
                walk_selection_set(&inline.selection_set, visitor, cx);
                cx.pop();
                visitor.leave_inline_fragment(inline, cx);
            },
        }
    }
    cx.pop();
    visitor.leave_selection_set(selection_set, cx);
}

fn walk_field<'src, V: Visitor<'src>>(
    field: &Field<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_field(field, cx);
    cx.push(NodeKind::Field);
    for argument in &field.arguments {
        walk_argument(argument, visitor, cx);
    }
    walk_directives(&field.directives, visitor, cx);
    if let Some(selection_set) = &field.selection_set {
        walk_selection_set(selection_set, visitor, cx);
    }
    cx.pop();
    visitor.leave_field(field, cx);
}

fn walk_argument<'src, V: Visitor<'src>>(
    argument: &Argument<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_argument(argument, cx);
    cx.push(NodeKind::Argument);
    walk_value(&argument.value, visitor, cx);
    cx.pop();
    visitor.leave_argument(argument, cx);
}

fn walk_directives<'src, V: Visitor<'src>>(
    directives: &[Directive<'src>],
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    for directive in directives {
        visitor.enter_directive(directive, cx);
        cx.push(NodeKind::Directive);
        for argument in &directive.arguments {
            walk_argument(argument, visitor, cx);
        }
        cx.pop();
        visitor.leave_directive(directive, cx);
    }
}

fn walk_value<'src, V: Visitor<'src>>(
    value: &Value<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_value(value, cx);
    match value {
        Value::List(list) => {
            cx.push(NodeKind::ListValue);
            for item in &list.values {
                walk_value(item, visitor, cx);
            }
            cx.pop();
        },
        Value::Object(object) => {
            cx.push(NodeKind::ObjectValue);
            for field in &object.fields {
                cx.push(NodeKind::ObjectField);
                walk_value(&field.value, visitor, cx);
                cx.pop();
            }
            cx.pop();
        },
        _ => {},
    }
    visitor.leave_value(value, cx);
}

fn walk_type<'src, V: Visitor<'src>>(
    ty: &Type<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_type(ty, cx);
    match ty {
        Type::Named(_) => {},
        Type::List(list) => {
            cx.push(NodeKind::ListType);
            walk_type(&list.of, visitor, cx);
            cx.pop();
        },
        Type::NonNull(non_null) => {
            cx.push(NodeKind::NonNullType);
            walk_type(&non_null.of, visitor, cx);
            cx.pop();
        },
    }
    visitor.leave_type(ty, cx);
}

fn walk_root_operation_type<'src, V: Visitor<'src>>(
    operation_type: &RootOperationTypeDefinition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_root_operation_type_definition(operation_type, cx);
    visitor.leave_root_operation_type_definition(operation_type, cx);
}

fn walk_type_definition<'src, V: Visitor<'src>>(
    def: &TypeDefinition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_type_definition(def, cx);
    cx.push(def.kind());
    match def {
        TypeDefinition::Scalar(scalar) => {
            walk_directives(&scalar.directives, visitor, cx);
        },
        TypeDefinition::Object(object) => {
            walk_named_types(&object.interfaces, visitor, cx);
            walk_directives(&object.directives, visitor, cx);
            for field in &object.fields {
                walk_field_definition(field, visitor, cx);
            }
        },
        TypeDefinition::Interface(interface) => {
            walk_named_types(&interface.interfaces, visitor, cx);
            walk_directives(&interface.directives, visitor, cx);
            for field in &interface.fields {
                walk_field_definition(field, visitor, cx);
            }
        },
        TypeDefinition::Union(union_def) => {
            walk_directives(&union_def.directives, visitor, cx);
        },
        TypeDefinition::Enum(enum_def) => {
            walk_directives(&enum_def.directives, visitor, cx);
            for value in &enum_def.values {
                visitor.enter_enum_value_definition(value, cx);
                cx.push(NodeKind::EnumValueDefinition);
                walk_directives(&value.directives, visitor, cx);
                cx.pop();
                visitor.leave_enum_value_definition(value, cx);
            }
        },
        TypeDefinition::InputObject(input) => {
            walk_directives(&input.directives, visitor, cx);
            for field in &input.fields {
                walk_input_value_definition(field, visitor, cx);
            }
        },
    }
    cx.pop();
    visitor.leave_type_definition(def, cx);
}

fn walk_type_extension<'src, V: Visitor<'src>>(
    ext: &TypeExtension<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_type_extension(ext, cx);
    cx.push(ext.kind());
    match ext {
        TypeExtension::Scalar(scalar) => {
            walk_directives(&scalar.directives, visitor, cx);
        },
        TypeExtension::Object(object) => {
            walk_named_types(&object.interfaces, visitor, cx);
            walk_directives(&object.directives, visitor, cx);
            for field in &object.fields {
                walk_field_definition(field, visitor, cx);
            }
        },
        TypeExtension::Interface(interface) => {
            walk_named_types(&interface.interfaces, visitor, cx);
            walk_directives(&interface.directives, visitor, cx);
            for field in &interface.fields {
                walk_field_definition(field, visitor, cx);
            }
        },
        TypeExtension::Union(union_ext) => {
            walk_directives(&union_ext.directives, visitor, cx);
        },
        TypeExtension::Enum(enum_ext) => {
            walk_directives(&enum_ext.directives, visitor, cx);
            for value in &enum_ext.values {
                visitor.enter_enum_value_definition(value, cx);
                cx.push(NodeKind::EnumValueDefinition);
                walk_directives(&value.directives, visitor, cx);
                cx.pop();
                visitor.leave_enum_value_definition(value, cx);
            }
        },
        TypeExtension::InputObject(input) => {
            walk_directives(&input.directives, visitor, cx);
            for field in &input.fields {
                walk_input_value_definition(field, visitor, cx);
            }
        },
    }
    cx.pop();
    visitor.leave_type_extension(ext, cx);
}

fn walk_field_definition<'src, V: Visitor<'src>>(
    def: &FieldDefinition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_field_definition(def, cx);
    cx.push(NodeKind::FieldDefinition);
    for argument in &def.arguments {
        walk_input_value_definition(argument, visitor, cx);
    }
    walk_type(&def.field_type, visitor, cx);
    walk_directives(&def.directives, visitor, cx);
    cx.pop();
    visitor.leave_field_definition(def, cx);
}

fn walk_input_value_definition<'src, V: Visitor<'src>>(
    def: &InputValueDefinition<'src>,
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    visitor.enter_input_value_definition(def, cx);
    cx.push(NodeKind::InputValueDefinition);
    walk_type(&def.value_type, visitor, cx);
    if let Some(default) = &def.default_value {
        walk_value(default, visitor, cx);
    }
    walk_directives(&def.directives, visitor, cx);
    cx.pop();
    visitor.leave_input_value_definition(def, cx);
}

fn walk_named_types<'src, V: Visitor<'src>>(
    types: &[NamedType<'src>],
    visitor: &mut V,
    cx: &mut VisitContext,
) {
    // Interface lists are leaves; surface them through the type hook so
    // tools see every type reference.
    for named in types {
        let ty = Type::Named(named.clone());
        visitor.enter_type(&ty, cx);
        visitor.leave_type(&ty, cx);
    }
}
