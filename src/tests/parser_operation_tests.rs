//! Tests for executable documents: operations, selections, fragments,
//! variables, and values.

use crate::ast;
use crate::tests::utils::as_field;
use crate::tests::utils::first_fragment;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse;
use crate::ParseOptions;

#[test]
fn parses_named_query_with_nested_selections() {
    let doc = parse(
        "query test { field1 field2(id: 5) { name address } field3 }",
    );
    assert_eq!(doc.definitions.len(), 1);

    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert_eq!(op.name.as_ref().unwrap().value, "test");
    assert_eq!(op.selection_set.selections.len(), 3);

    let field2 = as_field(&op.selection_set.selections[1]);
    assert_eq!(field2.name.value, "field2");
    assert_eq!(field2.arguments.len(), 1);
    assert_eq!(field2.arguments[0].name.value, "id");
    assert!(matches!(
        &field2.arguments[0].value,
        ast::Value::Int(int) if int.value == "5",
    ));

    let nested = field2.selection_set.as_ref().unwrap();
    assert_eq!(nested.selections.len(), 2);
    assert_eq!(as_field(&nested.selections[0]).name.value, "name");
    assert_eq!(as_field(&nested.selections[1]).name.value, "address");

    let field3 = as_field(&op.selection_set.selections[2]);
    assert!(field3.selection_set.is_none());
}

/// The shorthand form is a query with no name.
#[test]
fn parses_anonymous_shorthand_operation() {
    let doc = parse("{ hello }");
    let op = first_operation(&doc);
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());

    let field = as_field(&op.selection_set.selections[0]);
    assert_eq!(field.name.value, "hello");
    assert!(field.arguments.is_empty());
}

#[test]
fn parses_mutation_and_subscription_keywords() {
    let doc = parse("mutation M { a } subscription S { b }");
    assert_eq!(doc.definitions.len(), 2);
    assert_eq!(
        first_operation(&doc).operation,
        ast::OperationKind::Mutation,
    );
    match &doc.definitions[1] {
        ast::Definition::Operation(op) => {
            assert_eq!(op.operation, ast::OperationKind::Subscription);
        },
        other => panic!("expected an operation, got {other:?}"),
    }
}

#[test]
fn parses_field_alias() {
    let doc = parse("{ renamed: original }");
    let field = as_field(
        &first_operation(&doc).selection_set.selections[0],
    );
    assert_eq!(field.alias.as_ref().unwrap().value, "renamed");
    assert_eq!(field.name.value, "original");
    assert_eq!(field.response_name(), "renamed");
}

#[test]
fn parses_fragment_definition() {
    let doc = parse("fragment F on User { id }");
    let fragment = first_fragment(&doc);
    assert_eq!(fragment.name.value, "F");
    assert_eq!(
        fragment.type_condition.named_type.name.value,
        "User",
    );
    assert_eq!(fragment.selection_set.selections.len(), 1);
    assert_eq!(
        as_field(&fragment.selection_set.selections[0]).name.value,
        "id",
    );
}

#[test]
fn parses_fragment_spread_and_inline_fragment() {
    let doc = parse(
        "{ ...Parts ... on Droid { fn } ... @skip(if: true) { x } }",
    );
    let op = first_operation(&doc);
    assert_eq!(op.selection_set.selections.len(), 3);

    match &op.selection_set.selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name.value, "Parts");
        },
        other => panic!("expected a fragment spread, got {other:?}"),
    }

    match &op.selection_set.selections[1] {
        ast::Selection::InlineFragment(inline) => {
            let condition = inline.type_condition.as_ref().unwrap();
            assert_eq!(condition.named_type.name.value, "Droid");
        },
        other => panic!("expected an inline fragment, got {other:?}"),
    }

    match &op.selection_set.selections[2] {
        ast::Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.directives.len(), 1);
            assert_eq!(inline.directives[0].name.value, "skip");
        },
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}

#[test]
fn parses_variable_definitions_with_defaults_and_directives() {
    let doc = parse(
        "query Q($id: ID!, $limit: Int = 10 @tag(reason: \"cap\")) \
        { node(id: $id) }",
    );
    let op = first_operation(&doc);
    assert_eq!(op.variable_definitions.len(), 2);

    let id = &op.variable_definitions[0];
    assert_eq!(id.variable.name.value, "id");
    assert!(matches!(
        &id.var_type,
        ast::Type::NonNull(non_null)
            if matches!(
                &*non_null.of,
                ast::Type::Named(named) if named.name.value == "ID",
            ),
    ));
    assert!(id.default_value.is_none());

    let limit = &op.variable_definitions[1];
    assert!(matches!(
        &limit.default_value,
        Some(ast::Value::Int(int)) if int.value == "10",
    ));
    assert_eq!(limit.directives.len(), 1);
    assert_eq!(limit.directives[0].name.value, "tag");
}

#[test]
fn parses_all_value_literals() {
    let doc = parse(
        r#"{ f(a: 1, b: -2.5, c: "s", d: true, e: false, g: null,
             h: RED, i: [1, 2], j: {k: "v", nested: {deep: [X]}},
             v: $var) }"#,
    );
    let field =
        as_field(&first_operation(&doc).selection_set.selections[0]);
    let arg = |n: usize| &field.arguments[n].value;

    assert!(matches!(arg(0), ast::Value::Int(v) if v.value == "1"));
    assert!(matches!(arg(1), ast::Value::Float(v) if v.value == "-2.5"));
    assert!(matches!(arg(2), ast::Value::String(v) if v.value == "s"));
    assert!(matches!(arg(3), ast::Value::Boolean(v) if v.value));
    assert!(matches!(arg(4), ast::Value::Boolean(v) if !v.value));
    assert!(matches!(arg(5), ast::Value::Null(_)));
    assert!(matches!(arg(6), ast::Value::Enum(v) if v.value == "RED"));

    match arg(7) {
        ast::Value::List(list) => assert_eq!(list.values.len(), 2),
        other => panic!("expected a list, got {other:?}"),
    }
    match arg(8) {
        ast::Value::Object(object) => {
            assert_eq!(object.fields.len(), 2);
            assert_eq!(object.fields[0].name.value, "k");
        },
        other => panic!("expected an object, got {other:?}"),
    }
    assert!(matches!(
        arg(9),
        ast::Value::Variable(v) if v.name.value == "var",
    ));
}

#[test]
fn parses_empty_list_and_object_values() {
    let doc = parse("{ f(a: [], b: {}) }");
    let field =
        as_field(&first_operation(&doc).selection_set.selections[0]);
    assert!(matches!(
        &field.arguments[0].value,
        ast::Value::List(list) if list.values.is_empty(),
    ));
    assert!(matches!(
        &field.arguments[1].value,
        ast::Value::Object(object) if object.fields.is_empty(),
    ));
}

#[test]
fn parses_block_string_value() {
    let doc = parse("{ f(text: \"\"\"\n  line\n\"\"\") }");
    let field =
        as_field(&first_operation(&doc).selection_set.selections[0]);
    match &field.arguments[0].value {
        ast::Value::String(string) => {
            assert!(string.block);
            assert_eq!(string.value, "line");
        },
        other => panic!("expected a string, got {other:?}"),
    }
}

/// Keywords remain usable as ordinary names.
#[test]
fn keywords_are_valid_field_and_operation_names() {
    let doc = parse("query query { type fragment on }");
    let op = first_operation(&doc);
    assert_eq!(op.name.as_ref().unwrap().value, "query");
    assert_eq!(op.selection_set.selections.len(), 3);
    assert_eq!(as_field(&op.selection_set.selections[2]).name.value, "on");
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn document_location_spans_the_source() {
    let source = "{ hello }";
    let doc = parse(source);
    let loc = doc.loc.unwrap();
    assert_eq!((loc.start, loc.end), (0, source.len()));
}

#[test]
fn node_locations_track_token_offsets() {
    let doc = parse("{ hello }");
    let op = first_operation(&doc);
    assert_eq!(op.loc.unwrap(), ast::Location::new(0, 9));

    let field = as_field(&op.selection_set.selections[0]);
    assert_eq!(field.loc.unwrap(), ast::Location::new(2, 7));
}

#[test]
fn ignore_locations_omits_all_location_records() {
    let doc = crate::parse_with_options(
        "query Q($v: Int) { f(a: [1]) }",
        ParseOptions::new().ignore_locations(true),
    )
    .unwrap();
    assert!(doc.loc.is_none());
    let op = first_operation(&doc);
    assert!(op.loc.is_none());
    assert!(op.name.as_ref().unwrap().loc.is_none());
    assert!(op.selection_set.loc.is_none());
}

#[test]
fn empty_document_parses_to_no_definitions() {
    let doc = parse("");
    assert!(doc.definitions.is_empty());
    assert!(doc.unattached_comments.is_empty());
    assert_eq!(doc.loc.unwrap(), ast::Location::new(0, 0));
}

#[test]
fn whitespace_only_document_parses_to_no_definitions() {
    let doc = parse("  \n\t , \r\n");
    assert!(doc.definitions.is_empty());
}
