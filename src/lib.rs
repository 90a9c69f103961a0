//! # minjson
//!
//! `minjson` is a small, 100% safe recursive-descent parser for JSON
//! objects, with a canonical renderer for writing the parsed tree back out.
//!
//! It is deliberately minimal:
//!
//! * **Objects at the top level:** a document must be a single `{...}`.
//! * **No escapes:** the first `"` after an opening quote ends the string,
//!   and backslashes are kept as ordinary characters.
//! * **Spaces only:** `' '` is the only whitespace allowed between tokens.
//! * **`f64` numbers:** every number is held as an `f64` and rendered in
//!   scientific notation (`1.5e+02`).
//!
//! ## Quick Start
//!
//! ```
//! use minjson::{parse_document, JsonValue, ValueKind};
//!
//! let doc = parse_document(r#"{"name" : "Babbage", "born" : 1791}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(JsonValue::as_str), Some("Babbage"));
//! assert_eq!(doc.get("born").map(JsonValue::kind), Some(ValueKind::Number));
//!
//! let single = parse_document(r#"{"Array" : []}"#).unwrap();
//! assert_eq!(single.render(), r#"{"Array" : []}"#);
//! ```
//!
//! Errors are values, never panics:
//!
//! ```
//! use minjson::{parse_document, ErrorCode};
//!
//! let err = parse_document(r#"{"a":1,}"#).unwrap_err();
//! assert_eq!(err.code, ErrorCode::MalformedInput);
//! assert_eq!(err.message, "Object terminates with ', }'");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

/// Contains the primary `ParseError` type and its `ErrorCode`.
pub mod error;
/// Contains the nesting-depth and input-size `Limits`.
pub mod limits;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the code point decoding and whitespace skipping primitives.
pub mod scanner;
/// Contains the `JsonValue` enum and the render (serialization) logic.
pub mod value;

pub use error::{ErrorCode, ParseError};
pub use limits::Limits;
pub use parser::{Parsed, Parser};
pub use value::{JsonObject, JsonValue, ValueKind};

/// Parses a complete JSON document whose top level is an object.
///
/// The document must start with `{` (leading whitespace is rejected) and
/// may only be followed by spaces after the closing `}`.
///
/// # Errors
/// Returns a `ParseError` describing the first grammar violation found.
///
/// # Examples
/// ```
/// use minjson::{parse_document, JsonValue};
///
/// let doc = parse_document(r#"{"items" : [1, true, null]}"#).unwrap();
/// let items = doc.get("items").and_then(JsonValue::as_array).unwrap();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[0], JsonValue::Number(1.0));
/// ```
pub fn parse_document(text: &str) -> Result<JsonObject, ParseError> {
    parse_document_with_limits(text, Limits::default())
}

/// Like `parse_document`, with explicit nesting and size limits.
///
/// # Errors
/// Returns a `MalformedInput` error if the input is larger than
/// `limits.max_input_bytes`, nests deeper than `limits.max_depth`, or
/// violates the grammar.
pub fn parse_document_with_limits(text: &str, limits: Limits) -> Result<JsonObject, ParseError> {
    Parser::new(text, limits).parse_document()
}

#[cfg(test)]
mod tests {
    use super::{
        parse_document, parse_document_with_limits, ErrorCode, JsonObject, JsonValue, Limits,
        ParseError,
    };
    use serde_json::{self, Value as SerdeValue};

    fn assert_malformed(input: &str) -> String {
        let err = parse_document(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedInput, "input {:?}", input);
        err.message
    }

    #[test]
    fn test_empty_object() {
        let doc = parse_document("{}").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "{}");
    }

    #[test]
    fn test_empty_array_member() {
        let doc = parse_document("{\"Array\" : []}").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("Array"), Some(&JsonValue::Array(vec![])));
        assert_eq!(doc.render(), "{\"Array\" : []}");
    }

    #[test]
    fn test_nested_document() {
        let input = r#"{"key" : [1, null, true, "hello"], "inner" : {"c" : {}}, "n" : -0.5}"#;
        let doc = parse_document(input).unwrap();

        assert_eq!(
            doc.get("key"),
            Some(&JsonValue::Array(vec![
                JsonValue::Number(1.0),
                JsonValue::Null,
                JsonValue::Boolean(true),
                JsonValue::String("hello".to_string()),
            ]))
        );
        let inner = doc.get("inner").and_then(JsonValue::as_object).unwrap();
        assert_eq!(inner.get("c"), Some(&JsonValue::Object(JsonObject::new())));
        assert_eq!(doc.get("n"), Some(&JsonValue::Number(-0.5)));
    }

    #[test]
    fn test_strings_are_stored_without_quotes() {
        let doc = parse_document(r#"{"greeting" : "hi there"}"#).unwrap();
        assert_eq!(
            doc.get("greeting"),
            Some(&JsonValue::String("hi there".to_string()))
        );
        assert!(doc.contains_key("greeting"));
        assert!(!doc.contains_key("\"greeting\""));
        assert_eq!(doc.render(), r#"{"greeting" : "hi there"}"#);
    }

    #[test]
    fn test_trailing_comma_rejected() {
        assert_eq!(assert_malformed("{\"a\":1,}"), "Object terminates with ', }'");
    }

    #[test]
    fn test_array_commas() {
        assert_eq!(assert_malformed("{\"a\":[1,,2]}"), "Array has two commas in a row");
        assert_eq!(assert_malformed("{\"a\":[1,]}"), "Array ends with comma, no value");

        let doc = parse_document("{\"a\":[]}").unwrap();
        assert_eq!(doc.get("a"), Some(&JsonValue::Array(vec![])));
    }

    #[test]
    fn test_unterminated_input() {
        assert_eq!(assert_malformed("{\"a\":\"b"), "String value never ends");
        assert_eq!(
            assert_malformed("{\"a\":1"),
            "JSON object does not terminate with '}'"
        );
        assert_eq!(
            assert_malformed("{\"a\":[1, {\"b\":2}   "),
            "Array does not end before end of input"
        );
        assert_eq!(
            assert_malformed("{\"a\":[1, {\"b\":2"),
            "JSON object does not terminate with '}'"
        );
    }

    #[test]
    fn test_number_literals_in_documents() {
        let doc = parse_document("{\"n\":-1.5e+10}").unwrap();
        assert_eq!(doc.get("n"), Some(&JsonValue::Number(-1.5e10)));
        assert_eq!(doc.render(), "{\"n\" : -1.5e+10}");

        let doc = parse_document("{\"list\":[1,2.5,3e2]}").unwrap();
        assert_eq!(
            doc.get("list"),
            Some(&JsonValue::Array(vec![
                JsonValue::Number(1.0),
                JsonValue::Number(2.5),
                JsonValue::Number(300.0),
            ]))
        );

        let two_decimals = assert_malformed("{\"n\":1.2.3}");
        let two_exponents = assert_malformed("{\"n\":[1, 2e1e1]}");
        let bad_float = assert_malformed("{\"n\":[1, -e5]}");
        assert_eq!(two_decimals, "Second decimal found in Number");
        assert_eq!(two_exponents, "Second exponent 'e' or 'E' found in Number");
        assert_eq!(bad_float, "Error parsing float '-e5' after initial pass");
    }

    #[test]
    fn test_literals_are_exact() {
        assert!(assert_malformed("{\"a\":True}").starts_with("Value in JSON does not parse properly"));
        assert_eq!(
            assert_malformed("{\"a\":nul}"),
            "Value for null does not have 4 characters == 'null'"
        );
        assert_eq!(
            assert_malformed("{\"a\":nul"),
            "Value for null does not have 4 characters == 'null'"
        );
        let doc = parse_document("{\"t\":true,\"f\":false,\"n\":null}").unwrap();
        assert_eq!(doc.get("t"), Some(&JsonValue::Boolean(true)));
        assert_eq!(doc.get("f"), Some(&JsonValue::Boolean(false)));
        assert_eq!(doc.get("n"), Some(&JsonValue::Null));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert_eq!(assert_malformed("[1]"), "Object does not begin with '{'");
        assert_eq!(assert_malformed(" {}"), "Object does not begin with '{'");
        assert_eq!(assert_malformed(""), "Object does not begin with '{'");
    }

    #[test]
    fn test_trailing_content() {
        assert!(parse_document("{}   ").is_ok());

        let err = parse_document("{} {}").unwrap_err();
        assert_eq!(err.message, "Unexpected trailing characters after the root object");
        assert_eq!(err.offset, 3);

        assert_malformed("{}\n");
    }

    #[test]
    fn test_only_spaces_are_whitespace() {
        assert!(parse_document("{ \"a\" : 1 , \"b\" : [ 2 , 3 ] }").is_ok());
        assert_eq!(
            assert_malformed("{\t\"a\":1}"),
            "String value does not begin with quotation mark"
        );
        assert_malformed("{\"a\":1,\n\"b\":2}");
    }

    #[test]
    fn test_error_describe_has_code_suffix() {
        let err = parse_document("{\"a\":[1 2]}").unwrap_err();
        assert_eq!(
            err.describe(),
            "Error: Array has two values not separated by comma at offset 8. JSON Error Code: MalformedInput (0)"
        );
    }

    #[test]
    fn test_limits() {
        let deep = format!("{{\"a\":{}{}}}", "[".repeat(20), "]".repeat(20));
        assert!(parse_document(&deep).is_ok());

        let err = parse_document_with_limits(&deep, Limits::with_max_depth(10)).unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth exceeded");

        let small = Limits {
            max_depth: 8,
            max_input_bytes: 4,
        };
        let err = parse_document_with_limits("{\"a\":1}", small).unwrap_err();
        assert_eq!(err.message, "Input exceeds maximum size limit");
        assert!(parse_document_with_limits("{}", small).is_ok());
    }

    #[test]
    fn test_evil_nesting_fails_cleanly() {
        let evil = format!("{{\"a\":{}", "[".repeat(100_000));
        let err = parse_document(&evil).unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth exceeded");
    }

    #[test]
    fn test_render_is_valid_json() {
        let input = r#"{"name" : "Babbage", "id" : 1815, "tags" : ["a", true, null, {"x" : -2.5}], "empty" : {}}"#;
        let doc = parse_document(input).unwrap();

        // Parse the output with serde_json; robust to member order.
        let output = doc.render();
        let parsed: SerdeValue =
            serde_json::from_str(&output).expect("rendered output should be valid JSON");

        let expected = serde_json::json!({
            "name": "Babbage",
            "id": 1815.0,
            "tags": ["a", true, null, {"x": -2.5}],
            "empty": {}
        });
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonValue>();
        assert_send_sync::<JsonObject>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<Limits>();
    }

    #[test]
    fn test_render_then_reparse_is_equal() {
        let input = r#"{"a" : [1, [2, [3]]], "b" : {"c" : "d", "e" : 0.1}, "f" : false}"#;
        let doc = parse_document(input).unwrap();
        let again = parse_document(&doc.render()).unwrap();
        assert_eq!(doc, again);
    }
}
