use crate::ast::Location;

/// A leading comment block: one or more consecutive `#` lines aggregated
/// into a single node.
///
/// `text` holds the comment lines (without their `#`) joined with `\n`;
/// the location spans from the first line's `#` to the end of the last
/// line. A comment that no node claimed ends up in
/// [`Document::unattached_comments`](crate::ast::Document::unattached_comments).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub loc: Option<Location>,
    pub text: String,
}
