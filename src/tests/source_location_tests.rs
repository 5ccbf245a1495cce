//! Tests for the offset → line/column decoder.

use crate::location_of;
use crate::SourceLocation;

fn at(source: &str, offset: usize) -> (usize, usize) {
    let SourceLocation { line, column } = location_of(source, offset);
    (line, column)
}

#[test]
fn start_of_input_is_line_one_column_one() {
    assert_eq!(at("", 0), (1, 1));
    assert_eq!(at("abc", 0), (1, 1));
}

#[test]
fn columns_advance_within_a_line() {
    assert_eq!(at("abc", 1), (1, 2));
    assert_eq!(at("abc", 2), (1, 3));
}

#[test]
fn newline_starts_a_new_line() {
    assert_eq!(at("a\nb", 2), (2, 1));
    assert_eq!(at("a\nb\nc", 4), (3, 1));
}

#[test]
fn carriage_return_counts_as_a_newline() {
    assert_eq!(at("a\rb", 2), (2, 1));
}

#[test]
fn crlf_counts_as_one_newline() {
    assert_eq!(at("a\r\nb", 3), (2, 1));
}

#[test]
fn mixed_terminators_count_independently() {
    // line 1: "a", line 2: "b", line 3: "c", line 4: "d"
    let source = "a\nb\rc\r\nd";
    assert_eq!(at(source, 7), (4, 1));
}

#[test]
fn multibyte_characters_advance_one_column() {
    // 'é' is two bytes; the next character sits at column 2.
    let source = "é!";
    assert_eq!(at(source, 2), (1, 2));
}

/// Offsets past the end keep counting columns, which anchors
/// end-of-input diagnostics one past the final character.
#[test]
fn offset_past_the_end_extends_the_final_column() {
    assert_eq!(at("ab", 2), (1, 3));
    assert_eq!(at("ab", 4), (1, 5));
}

#[test]
fn offset_at_end_after_newline_is_next_line() {
    assert_eq!(at("a\n", 2), (2, 1));
}
