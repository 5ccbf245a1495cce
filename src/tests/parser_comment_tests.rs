//! Tests for the comment stash discipline: clustering, attachment,
//! displacement, and the unattached pool.

use crate::ast;
use crate::tests::utils::as_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse;
use crate::ParseOptions;

#[test]
fn comment_only_document_collects_unattached_comments() {
    let doc = parse("# first\n# second\n");
    assert!(doc.definitions.is_empty());
    assert_eq!(doc.unattached_comments.len(), 1);
    assert_eq!(doc.unattached_comments[0].text, " first\n second");
}

/// A comment cluster's location spans from the first `#` to the end of
/// the last line.
#[test]
fn comment_cluster_location_spans_all_lines() {
    let doc = parse("# a\n# b\n");
    let comment = &doc.unattached_comments[0];
    assert_eq!(comment.loc.unwrap(), ast::Location::new(0, 7));
}

#[test]
fn leading_comment_attaches_to_the_operation() {
    let doc = parse("# fetch things\nquery Q { f }");
    let op = first_operation(&doc);
    assert_eq!(op.comment.as_ref().unwrap().text, " fetch things");
    assert!(doc.unattached_comments.is_empty());
}

#[test]
fn comment_attaches_to_the_following_field() {
    let doc = parse("{\n  # pick a\n  a\n}");
    let field =
        as_field(&first_operation(&doc).selection_set.selections[0]);
    assert_eq!(field.comment.as_ref().unwrap().text, " pick a");
}

/// A trailing comment on the same line joins the next cluster, which
/// belongs to the following node.
#[test]
fn trailing_and_leading_lines_form_one_cluster() {
    let doc = parse("{\n  a # trailing\n  # leading\n  b\n}");
    let op = first_operation(&doc);
    let b = as_field(&op.selection_set.selections[1]);
    assert_eq!(b.comment.as_ref().unwrap().text, " trailing\n leading");
}

#[test]
fn comment_before_closing_brace_is_unattached() {
    let doc = parse("{ a # dangling\n }");
    assert_eq!(doc.unattached_comments.len(), 1);
    assert_eq!(doc.unattached_comments[0].text, " dangling");
}

#[test]
fn trailing_comment_after_last_definition_is_unattached() {
    let doc = parse("{ a }\n# the end\n");
    assert_eq!(doc.unattached_comments.len(), 1);
    assert_eq!(doc.unattached_comments[0].text, " the end");
}

#[test]
fn comments_attach_to_type_system_nodes() {
    let doc = parse(
        "# the user\ntype User {\n  # their id\n  id: ID\n}",
    );
    let def = match &doc.definitions[0] {
        ast::Definition::Type(ast::TypeDefinition::Object(def)) => def,
        other => panic!("expected an object type, got {other:?}"),
    };
    assert_eq!(def.comment.as_ref().unwrap().text, " the user");
    assert_eq!(
        def.fields[0].comment.as_ref().unwrap().text,
        " their id",
    );
}

#[test]
fn ignore_comments_drops_everything() {
    let doc = crate::parse_with_options(
        "# a\n{ f # b\n }\n# c\n",
        ParseOptions::new().ignore_comments(true),
    )
    .unwrap();
    assert!(doc.unattached_comments.is_empty());
    let op = first_operation(&doc);
    assert!(op.comment.is_none());
    let field = as_field(&op.selection_set.selections[0]);
    assert!(field.comment.is_none());
}

/// A cluster between a description and its keyword backfills the
/// definition's leading comment when none preceded the description.
#[test]
fn comment_between_description_and_keyword() {
    let doc = parse("\"doc\"\n# note\ntype T { f: Int }");
    let def = match &doc.definitions[0] {
        ast::Definition::Type(ast::TypeDefinition::Object(def)) => def,
        other => panic!("expected an object type, got {other:?}"),
    };
    assert_eq!(def.description.as_ref().unwrap().value, "doc");
    assert_eq!(def.comment.as_ref().unwrap().text, " note");
    assert!(doc.unattached_comments.is_empty());
}
