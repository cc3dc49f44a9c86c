//! Typed field access into provider JSON documents.
//!
//! Paths are JSON Pointers (`/main/temp`, `/weather/0/id`). A `null` value is
//! reported the same way as an absent one.

use serde_json::Value;

use crate::error::ForecastError;

pub(crate) fn field<'a>(doc: &'a Value, path: &str) -> Result<&'a Value, ForecastError> {
    match doc.pointer(path) {
        Some(Value::Null) | None => Err(ForecastError::missing(path)),
        Some(value) => Ok(value),
    }
}

pub(crate) fn float(doc: &Value, path: &str) -> Result<f64, ForecastError> {
    field(doc, path)?.as_f64().ok_or_else(|| ForecastError::mismatch(path, "a number"))
}

pub(crate) fn integer(doc: &Value, path: &str) -> Result<i64, ForecastError> {
    field(doc, path)?.as_i64().ok_or_else(|| ForecastError::mismatch(path, "an integer"))
}

pub(crate) fn text<'a>(doc: &'a Value, path: &str) -> Result<&'a str, ForecastError> {
    field(doc, path)?.as_str().ok_or_else(|| ForecastError::mismatch(path, "a string"))
}

pub(crate) fn array<'a>(doc: &'a Value, path: &str) -> Result<&'a [Value], ForecastError> {
    field(doc, path)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ForecastError::mismatch(path, "an array"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_widen_to_floats() {
        let doc = json!({ "main": { "pressure": 1012 } });
        assert_eq!(float(&doc, "/main/pressure").unwrap(), 1012.0);
    }

    #[test]
    fn fractional_numbers_are_not_integers() {
        let doc = json!({ "id": 12.5 });
        let err = integer(&doc, "/id").unwrap_err();
        assert!(matches!(err, ForecastError::TypeMismatch { ref path, .. } if path == "/id"));
    }

    #[test]
    fn null_counts_as_missing() {
        let doc = json!({ "name": null });
        let err = text(&doc, "/name").unwrap_err();
        assert!(matches!(err, ForecastError::FieldMissing { ref path } if path == "/name"));
    }

    #[test]
    fn array_rejects_objects() {
        let doc = json!({ "weather": { "id": 800 } });
        let err = array(&doc, "/weather").unwrap_err();
        assert!(matches!(err, ForecastError::TypeMismatch { expected: "an array", .. }));
    }
}
