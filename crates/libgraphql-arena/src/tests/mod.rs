mod graphql_parser_differential_tests;
mod input_tests;
mod parser_error_tests;
mod parser_schema_tests;
mod parser_type_tests;
mod parser_value_tests;
pub(crate) mod utils;
