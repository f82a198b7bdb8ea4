use peach_rs::decode::context::Context;
use peach_rs::decode::rules;
use peach_rs::{decode, DecodeOptions, Number, Value};

fn int(i: i64) -> Value {
    Value::Number(Number::Int(i))
}

#[test]
fn nested_array_leaves_trailing_content_unconsumed() {
    let options = DecodeOptions::default();
    let mut ctx = Context::new("[1, 2, 3, [4, 5], 6, 7, [8]] }", &options);
    let value = rules::value(&mut ctx).unwrap();
    let expected = Value::Array(vec![
        int(1),
        int(2),
        int(3),
        Value::Array(vec![int(4), int(5)]),
        int(6),
        int(7),
        Value::Array(vec![int(8)]),
    ]);
    assert_eq!(value, expected);
    // end-array absorbs the whitespace after ']'.
    assert_eq!(ctx.current(), Some('}'));
}

#[test]
fn empty_containers() {
    assert_eq!(decode("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(decode("{}").unwrap(), Value::Object(vec![]));
    assert_eq!(decode("[ ]").unwrap(), Value::Array(vec![]));
    assert_eq!(decode("{\t\n}").unwrap(), Value::Object(vec![]));
}

#[test]
fn object_with_mixed_members() {
    let v = decode(r#"{ "a" : true, "b" : [-123, 3.5E+7, 0] }"#).unwrap();
    assert_eq!(v.get("a"), Some(&Value::Bool(true)));
    assert_eq!(
        v.get("b"),
        Some(&Value::Array(vec![
            int(-123),
            Value::Number(Number::Float(35000000.0)),
            int(0),
        ]))
    );
}

#[test]
fn objects_keep_insertion_order() {
    let v = decode(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = v
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = decode(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let entries = v.as_object().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("a".to_string(), int(3)));
    assert_eq!(entries[1], ("b".to_string(), int(2)));
}

#[test]
fn deeply_nested_structures() {
    let v = decode(r#"{"a": {"b": [{"c": null}]}}"#).unwrap();
    assert_eq!(
        v.get("a").and_then(|a| a.get("b")),
        Some(&Value::Array(vec![Value::Object(vec![(
            "c".to_string(),
            Value::Null
        )])]))
    );
}

#[test]
fn array_separator_errors() {
    assert!(decode("[1,]").is_err());
    assert!(decode("[1 2]").is_err());
    assert!(decode("[1,").is_err());
    assert!(decode("[").is_err());
}

#[test]
fn object_member_errors() {
    // Keys must be strings, separated from values by ':'.
    assert!(decode("{a: 1}").is_err());
    assert!(decode(r#"{"a" 1}"#).is_err());
    assert!(decode(r#"{"a": 1,}"#).is_err());
    assert!(decode(r#"{"a": 1"#).is_err());
    assert!(decode("{").is_err());
}
