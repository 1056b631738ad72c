//! Write/reparse round-trip properties

use gimlet_json::{JsonArray, JsonConst, JsonNumber, JsonObject, JsonValue, Parser, WriteOptions};

fn reparse(value: &JsonValue, options: WriteOptions) -> JsonValue {
    let bytes = gimlet_json::to_vec(value, options);
    Parser::new()
        .parse_bytes_with(&bytes, |error| panic!("round trip failed: {error}"))
        .unwrap()
}

fn sample() -> JsonValue {
    let mut root = JsonObject::new();
    root.set("title", JsonValue::from("résumé \u{1F600}"));
    root.set(
        "ratio",
        JsonValue::Number(JsonNumber::from_parts(-1, 0, 25, 2, 0)),
    );
    root.set("visible", JsonValue::Const(JsonConst::False));
    let mut tags = JsonArray::new();
    tags.add(JsonValue::from("a"));
    tags.add(JsonValue::from("b"));
    let mut nested = JsonObject::new();
    nested.set("tags", JsonValue::Array(tags));
    nested.set("limit", JsonValue::Number(JsonNumber::from_parts(1, 1, 4, 1, 9)));
    root.set("nested", JsonValue::Object(nested));
    JsonValue::Object(root)
}

#[test]
fn should_round_trip_compact_output() {
    let original = sample();
    assert_eq!(reparse(&original, WriteOptions::COMPACT), original);
}

#[test]
fn should_round_trip_escaped_output() {
    let original = sample();
    assert_eq!(reparse(&original, WriteOptions::ESCAPE_UNICODE), original);
}

#[test]
fn should_round_trip_pretty_output() {
    let original = sample();
    assert_eq!(reparse(&original, WriteOptions::PRETTY), original);
    assert_eq!(
        reparse(&original, WriteOptions::PRETTY | WriteOptions::ESCAPE_UNICODE),
        original
    );
}

#[test]
fn should_write_the_same_bytes_twice() {
    let value = sample();
    for options in [
        WriteOptions::COMPACT,
        WriteOptions::ESCAPE_UNICODE,
        WriteOptions::PRETTY,
    ] {
        assert_eq!(
            gimlet_json::to_vec(&value, options),
            gimlet_json::to_vec(&value, options)
        );
    }
}

#[test]
fn should_round_trip_parsed_documents() {
    let inputs = [
        r#"{"a":1,"b":[true,false,null],"c":{"d":"e"}}"#,
        r#"[0,-1,0.5,1e3,-2.25e-2]"#,
        r#""just a string""#,
        r#"{"unicode":"Aé😀"}"#,
    ];
    for input in inputs {
        let first = Parser::new().parse_str(input).unwrap();
        let second = reparse(&first, WriteOptions::COMPACT);
        assert_eq!(first, second, "structural drift for {input}");
    }
}

#[test]
fn should_write_through_the_io_sink_contract() {
    let value = sample();
    let mut buffer: Vec<u8> = Vec::new();
    gimlet_json::write_to(&value, &mut buffer, WriteOptions::COMPACT).unwrap();
    assert_eq!(buffer, gimlet_json::to_vec(&value, WriteOptions::COMPACT));
}
