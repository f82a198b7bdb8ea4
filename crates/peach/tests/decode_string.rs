use peach_rs::{decode, Value};

fn string(input: &str) -> String {
    match decode(input).expect("string should decode") {
        Value::String(s) => s,
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn plain_strings() {
    assert_eq!(string(r#""Test""#), "Test");
    assert_eq!(string(r#""""#), "");
    assert_eq!(string(r#""日本語""#), "日本語");
}

#[test]
fn simple_escapes() {
    assert_eq!(string(r#""a\"b""#), "a\"b");
    assert_eq!(string(r#""a\\b""#), "a\\b");
    assert_eq!(string(r#""a\/b""#), "a/b");
    assert_eq!(string(r#""a\bb""#), "a\u{0008}b");
    assert_eq!(string(r#""a\fb""#), "a\u{000C}b");
    assert_eq!(string(r#""a\nb""#), "a\nb");
    assert_eq!(string(r#""a\rb""#), "a\rb");
    assert_eq!(string(r#""a\tb""#), "a\tb");
}

#[test]
fn unicode_escapes() {
    assert_eq!(string("\"\\u0041\""), "A");
    assert_eq!(string("\"\\u3042\""), "あ");
    // Surrogate pair for U+1F600.
    assert_eq!(string("\"\\uD83D\\uDE00\""), "\u{1F600}");
}

#[test]
fn unterminated_string_fails() {
    assert!(decode(r#""abc"#).is_err());
    assert!(decode(r#""abc\"#).is_err());
}

#[test]
fn unknown_escape_fails() {
    let err = decode(r#""a\xb""#).unwrap_err();
    assert!(err.to_string().contains("invalid escape"));
}

#[test]
fn malformed_unicode_escape_fails() {
    assert!(decode(r#""\u00G1""#).is_err());
    assert!(decode(r#""\u12""#).is_err());
    // High surrogate without its pair, and a bare low surrogate.
    assert!(decode(r#""\uD800""#).is_err());
    assert!(decode(r#""\uD83Dx""#).is_err());
    assert!(decode(r#""\uDE00""#).is_err());
}

#[test]
fn raw_control_characters_fail() {
    assert!(decode("\"a\nb\"").is_err());
    assert!(decode("\"a\tb\"").is_err());
}
