// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body classification and rendering

use std::fmt;

use serde_json::{Map, Value};

/// Rendering of a missing or empty body
pub const ABSENT_BODY: &str = "{}";

/// A request or response payload in loggable form
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedBody {
    /// No bytes
    Absent,
    /// A JSON array or object
    Json(Value),
    /// UTF-8 text that is not a JSON container
    Text(String),
    /// Anything else; only the length is kept
    Binary(usize),
}

impl CapturedBody {
    /// Classify raw bytes
    ///
    /// Only arrays and objects count as JSON; a bare `42` or `"hi"` stays text.
    pub fn classify(bytes: Option<&[u8]>) -> Self {
        let bytes = match bytes {
            Some(b) if !b.is_empty() => b,
            _ => return CapturedBody::Absent,
        };

        if let Ok(value @ (Value::Array(_) | Value::Object(_))) =
            serde_json::from_slice::<Value>(bytes)
        {
            return CapturedBody::Json(value);
        }

        match std::str::from_utf8(bytes) {
            Ok(text) => CapturedBody::Text(text.to_string()),
            Err(_) => CapturedBody::Binary(bytes.len()),
        }
    }

    /// Short name of the classification
    pub fn kind(&self) -> &'static str {
        match self {
            CapturedBody::Absent => "absent",
            CapturedBody::Json(_) => "json",
            CapturedBody::Text(_) => "text",
            CapturedBody::Binary(_) => "binary",
        }
    }

    /// Human-readable form used in log entries
    pub fn render(&self) -> String {
        match self {
            CapturedBody::Absent => ABSENT_BODY.to_string(),
            CapturedBody::Json(value) => {
                let sorted = sort_keys(value);
                serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
            }
            CapturedBody::Text(text) => text.clone(),
            CapturedBody::Binary(len) => format!("\"<{} bytes binary>\"", len),
        }
    }
}

impl fmt::Display for CapturedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Rebuild objects with keys in lexicographic order at every depth
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        assert_eq!(CapturedBody::classify(None), CapturedBody::Absent);
        assert_eq!(CapturedBody::classify(Some(b"")), CapturedBody::Absent);
        assert_eq!(CapturedBody::Absent.render(), "{}");
    }

    #[test]
    fn test_object_is_pretty_and_sorted() {
        let body = CapturedBody::classify(Some(br#"{"b":2,"a":{"z":1,"y":[true]}}"#));
        assert_eq!(body.kind(), "json");
        assert_eq!(
            body.render(),
            "{\n  \"a\": {\n    \"y\": [\n      true\n    ],\n    \"z\": 1\n  },\n  \"b\": 2\n}"
        );
    }

    #[test]
    fn test_single_key_object() {
        let body = CapturedBody::classify(Some(br#"{"a":1}"#));
        assert_eq!(body.render(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_array_of_objects() {
        let body = CapturedBody::classify(Some(br#"[{"id":1}]"#));
        assert_eq!(body.render(), "[\n  {\n    \"id\": 1\n  }\n]");
    }

    #[test]
    fn test_scalars_stay_text() {
        assert_eq!(
            CapturedBody::classify(Some(b"42")),
            CapturedBody::Text("42".to_string())
        );
        assert_eq!(
            CapturedBody::classify(Some(b"\"hello\"")),
            CapturedBody::Text("\"hello\"".to_string())
        );
        assert_eq!(CapturedBody::classify(Some(b"hello")).render(), "hello");
    }

    #[test]
    fn test_broken_json_is_text() {
        let body = CapturedBody::classify(Some(b"{\"a\":"));
        assert_eq!(body, CapturedBody::Text("{\"a\":".to_string()));
    }

    #[test]
    fn test_binary_placeholder() {
        let bytes: Vec<u8> = (0..42).map(|i| if i % 2 == 0 { 0xff } else { 0xfe }).collect();
        let body = CapturedBody::classify(Some(&bytes));
        assert_eq!(body, CapturedBody::Binary(42));
        assert_eq!(body.render(), "\"<42 bytes binary>\"");
    }
}
