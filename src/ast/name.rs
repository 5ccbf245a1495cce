use crate::ast::Location;

/// A GraphQL name (identifier), always a sub-slice of the source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Name<'src> {
    pub loc: Option<Location>,
    pub value: &'src str,
}

impl<'src> Name<'src> {
    pub fn as_str(&self) -> &'src str {
        self.value
    }
}
