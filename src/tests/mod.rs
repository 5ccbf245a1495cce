//! Unit tests, grouped by area.

mod lexer_tests;
mod parser_comment_tests;
mod parser_operation_tests;
mod source_location_tests;
mod utils;
