use crate::ast::Comment;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::Location;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;

/// A parsed GraphQL document: the root of the AST.
///
/// Owns every node of the tree. String payloads borrow from the source
/// text the document was parsed from, so the source must outlive the
/// document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub loc: Option<Location>,
    pub definitions: Vec<Definition<'src>>,

    /// Comments that no node claimed during parsing, in source order.
    /// Empty when parsing with `ignore_comments`.
    pub unattached_comments: Vec<Comment>,
}

/// A top-level definition: executable, type-system, or extension.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeExtension(TypeExtension<'src>),
}

impl<'src> Definition<'src> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Definition::Operation(_) => NodeKind::OperationDefinition,
            Definition::Fragment(_) => NodeKind::FragmentDefinition,
            Definition::Schema(_) => NodeKind::SchemaDefinition,
            Definition::Type(def) => def.kind(),
            Definition::Directive(_) => NodeKind::DirectiveDefinition,
            Definition::SchemaExtension(_) => NodeKind::SchemaExtension,
            Definition::TypeExtension(ext) => ext.kind(),
        }
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            Definition::Operation(def) => def.loc,
            Definition::Fragment(def) => def.loc,
            Definition::Schema(def) => def.loc,
            Definition::Type(def) => def.loc(),
            Definition::Directive(def) => def.loc,
            Definition::SchemaExtension(ext) => ext.loc,
            Definition::TypeExtension(ext) => ext.loc(),
        }
    }

    /// Returns `true` for operation and fragment definitions.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Definition::Operation(_) | Definition::Fragment(_),
        )
    }
}
