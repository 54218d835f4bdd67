use alloc::string::{String, ToString};

use rstest::rstest;

use crate::{parse, Value};

/// Parses canonical-form input and expects serialization to reproduce the
/// exact bytes.
fn roundtrip(json: &str) {
    let v = parse(json).unwrap();
    assert_eq!(v.to_json(), json);
}

#[rstest]
#[case("null")]
#[case("false")]
#[case("true")]
#[case("0")]
#[case("-0")]
#[case("1")]
#[case("-1")]
#[case("1.5")]
#[case("-1.5")]
#[case("3.25")]
#[case("3.1416")]
#[case("1.0000000000000002")]
#[case("\"\"")]
#[case("\"Hello\"")]
#[case("\"Hello\\nWorld\"")]
#[case("\"\\\" \\\\ / \\b \\f \\n \\r \\t\"")]
#[case("\"\\u0000\"")]
#[case("\"\\u001F\"")]
#[case("[]")]
#[case("[null]")]
#[case("[null,false,true,123,\"abc\"]")]
#[case("[[],[0],[0,1],[0,1,2]]")]
#[case("{}")]
#[case("{\"a\":[]}")]
#[case("{\"n\":null,\"a\":[1,2,3]}")]
#[case("{\"o\":{\"1\":1,\"2\":2,\"3\":3}}")]
fn canonical_input_roundtrips(#[case] json: &str) {
    roundtrip(json);
}

#[test]
fn whitespace_is_not_reproduced() {
    let doc = parse("{ \"n\" : null , \"a\" : [ 1, 2, 3 ] }").unwrap();
    assert_eq!(doc.to_json(), "{\"n\":null,\"a\":[1,2,3]}");
}

#[test]
fn numbers_print_in_shortest_roundtrip_form() {
    assert_eq!(parse("1e2").unwrap().to_json(), "100");
    assert_eq!(parse("1E+10").unwrap().to_json(), "10000000000");
    assert_eq!(parse("-0.0").unwrap().to_json(), "-0");
    assert_eq!(parse("1.234e4").unwrap().to_json(), "12340");
}

#[test]
fn control_characters_use_uppercase_hex() {
    let v = Value::String(String::from("\u{1}\u{b}\u{1e}"));
    assert_eq!(v.to_json(), "\"\\u0001\\u000B\\u001E\"");
}

#[test]
fn short_escapes_win_over_hex() {
    let v = Value::String(String::from("\u{8}\u{c}\n\r\t"));
    assert_eq!(v.to_json(), "\"\\b\\f\\n\\r\\t\"");
}

#[test]
fn solidus_and_high_bytes_emit_verbatim() {
    let v = Value::String(String::from("a/b €"));
    assert_eq!(v.to_json(), "\"a/b €\"");
}

#[test]
fn embedded_nul_survives_the_full_cycle() {
    let doc = parse("\"a\\u0000b\"").unwrap();
    assert_eq!(doc.as_str().unwrap(), "a\0b");
    assert_eq!(doc, parse("\"a\\u0000b\"").unwrap());
    assert_eq!(doc.to_json(), "\"a\\u0000b\"");
}

#[test]
fn surrogate_pair_restringifies_as_raw_utf8() {
    // The decoder produces the supplementary-plane character; the writer
    // never re-escapes printable text.
    let doc = parse("\"\\uD834\\uDD1E\"").unwrap();
    assert_eq!(doc.to_json(), "\"\u{1D11E}\"");
}

#[test]
fn display_matches_to_json() {
    let doc = parse("{\"a\":[1,true,\"x\"]}").unwrap();
    assert_eq!(doc.to_string(), doc.to_json());
}
