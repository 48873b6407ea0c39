//! Safe accessors over loosely-typed JSON payloads.
//!
//! This is the only place that inspects raw `serde_json::Value`s. Every
//! accessor is total: a non-object root, a missing key, or a value that cannot
//! be read as the requested type all come back as `None`.

use num_bigint::BigInt;
use serde_json::Value;

use crate::record::FieldValue;
use crate::schema::FieldKind;

/// Read `key` as text.
///
/// Strings yield their content without JSON quoting, numbers and booleans
/// their canonical text. `null`, arrays, objects and `""` are absent.
pub fn get_string(value: &Value, key: &str) -> Option<String> {
    let text = match value.as_object()?.get(key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Read `key` as an arbitrary-precision integer.
pub fn get_integer(value: &Value, key: &str) -> Option<BigInt> {
    parse_integer(&get_string(value, key)?)
}

/// Read `key` as a hex-encoded byte sequence.
pub fn get_bytes(value: &Value, key: &str) -> Option<Vec<u8>> {
    parse_hex_bytes(&get_string(value, key)?)
}

/// Read `key` according to `kind`.
pub fn get_field(value: &Value, key: &str, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Str => get_string(value, key).map(FieldValue::Str),
        FieldKind::Int => get_integer(value, key).map(FieldValue::Int),
        FieldKind::Bytes => get_bytes(value, key).map(FieldValue::Bytes),
    }
}

/// Parse a signed decimal numeral, or a `0x`-prefixed hexadecimal felt.
///
/// Digit separators, whitespace and fractional parts are rejected.
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let (digits, radix) = match strip_hex_prefix(text) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    let unsigned = if radix == 10 {
        digits
            .strip_prefix('-')
            .or_else(|| digits.strip_prefix('+'))
            .unwrap_or(digits)
    } else {
        digits
    };
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// Parse hex text, with or without a `0x` prefix, into bytes.
pub fn parse_hex_bytes(text: &str) -> Option<Vec<u8>> {
    let digits = strip_hex_prefix(text).unwrap_or(text);
    hex::decode(digits).ok()
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_strips_quoting() {
        let v = json!({ "implementation": "0xdead" });
        assert_eq!(get_string(&v, "implementation").as_deref(), Some("0xdead"));
    }

    #[test]
    fn string_reads_numbers_and_bools_canonically() {
        let v = json!({ "n": 42, "b": true });
        assert_eq!(get_string(&v, "n").as_deref(), Some("42"));
        assert_eq!(get_string(&v, "b").as_deref(), Some("true"));
    }

    #[test]
    fn string_absent_cases() {
        let v = json!({ "empty": "", "null": null, "arr": [1], "obj": {} });
        assert_eq!(get_string(&v, "missing"), None);
        assert_eq!(get_string(&v, "empty"), None);
        assert_eq!(get_string(&v, "null"), None);
        assert_eq!(get_string(&v, "arr"), None);
        assert_eq!(get_string(&v, "obj"), None);
        assert_eq!(get_string(&json!([1, 2]), "0"), None);
        assert_eq!(get_string(&json!("text"), "text"), None);
    }

    #[test]
    fn integer_from_string_and_number() {
        let v = json!({ "a": "100", "b": 5, "c": "-7" });
        assert_eq!(get_integer(&v, "a"), Some(BigInt::from(100)));
        assert_eq!(get_integer(&v, "b"), Some(BigInt::from(5)));
        assert_eq!(get_integer(&v, "c"), Some(BigInt::from(-7)));
    }

    #[test]
    fn integer_beyond_u128() {
        let big = "3618502788666131213697322783095070105623107215331596699973092056135872020481";
        let v = json!({ "felt": big });
        assert_eq!(get_integer(&v, "felt").unwrap().to_string(), big);
    }

    #[test]
    fn wide_json_numbers_keep_their_digits() {
        let v: Value =
            serde_json::from_str(r#"{ "n": 18446744073709551616, "felt": 3618502788666131213697322783095070105623107215331596699973092056135872020481 }"#)
                .unwrap();
        assert_eq!(get_string(&v, "n").as_deref(), Some("18446744073709551616"));
        assert_eq!(
            get_integer(&v, "n"),
            Some(BigInt::from(u64::MAX) + BigInt::from(1))
        );
        assert_eq!(
            get_integer(&v, "felt").unwrap().to_string(),
            "3618502788666131213697322783095070105623107215331596699973092056135872020481"
        );
    }

    #[test]
    fn fractional_json_number_is_not_an_integer() {
        let v: Value = serde_json::from_str(r#"{ "x": 1.5, "e": 1e3 }"#).unwrap();
        assert_eq!(get_integer(&v, "x"), None);
        assert_eq!(get_integer(&v, "e"), None);
    }

    #[test]
    fn integer_accepts_hex_felt() {
        let v = json!({ "id": "0x1f" });
        assert_eq!(get_integer(&v, "id"), Some(BigInt::from(31)));
    }

    #[test]
    fn malformed_integer_is_absent() {
        let v = json!({ "a": "12abc", "b": "1_000", "c": "1.5", "d": "0x", "e": "-", "f": " 1" });
        for key in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(get_integer(&v, key), None, "key {key}");
        }
    }

    #[test]
    fn bytes_with_and_without_prefix() {
        let v = json!({ "a": "0xab", "b": "DEAD" });
        assert_eq!(get_bytes(&v, "a"), Some(vec![0xab]));
        assert_eq!(get_bytes(&v, "b"), Some(vec![0xde, 0xad]));
    }

    #[test]
    fn odd_or_non_hex_bytes_are_absent() {
        let v = json!({ "odd": "0xabc", "bad": "0xzz" });
        assert_eq!(get_bytes(&v, "odd"), None);
        assert_eq!(get_bytes(&v, "bad"), None);
    }

    #[test]
    fn get_field_follows_kind() {
        let v = json!({ "token_id": "9", "user": "0x1" });
        assert_eq!(
            get_field(&v, "token_id", FieldKind::Int),
            Some(FieldValue::Int(BigInt::from(9)))
        );
        assert_eq!(
            get_field(&v, "user", FieldKind::Str),
            Some(FieldValue::Str("0x1".into()))
        );
        assert_eq!(get_field(&v, "user", FieldKind::Bytes), None);
    }
}
