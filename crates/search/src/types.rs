//! Search row type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One search hit: column name to scalar value.
///
/// Any column may be missing. Columns beyond the requested projection (for
/// example a similarity score) are kept as returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRow(Map<String, Value>);

impl SearchRow {
    /// Wrap an already-built column map.
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    /// Raw value of a column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Column value as display text; missing or falsy values give "".
    pub fn text(&self, column: &str) -> String {
        match self.0.get(column) {
            Some(value) if is_truthy(value) => display_text(value),
            _ => String::new(),
        }
    }

    /// Document title.
    pub fn title(&self) -> String {
        self.text("title")
    }

    /// Document URL or path.
    pub fn url_or_path(&self) -> String {
        self.text("url_or_path")
    }

    /// Passage text.
    pub fn chunk_text(&self) -> String {
        self.text("chunk_text")
    }

    /// Page value, only when present and truthy. A page of `0` counts as absent.
    pub fn page(&self) -> Option<&Value> {
        self.0.get("page").filter(|v| is_truthy(v))
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for SearchRow {
    fn from(columns: Map<String, Value>) -> Self {
        Self(columns)
    }
}

/// Truthiness of a JSON value: null, false, zero, "" and empty containers are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Text rendering of a JSON value; strings are taken without quotes.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> SearchRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_accessors() {
        let r = row(json!({
            "title": "Syllabus",
            "url_or_path": "syllabus.pdf",
            "chunk_text": "Grading is 40% exams",
            "page": 3
        }));

        assert_eq!(r.title(), "Syllabus");
        assert_eq!(r.url_or_path(), "syllabus.pdf");
        assert_eq!(r.chunk_text(), "Grading is 40% exams");
        assert_eq!(r.page(), Some(&json!(3)));
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_missing_and_null_columns_are_empty() {
        let r = row(json!({"title": null}));
        assert_eq!(r.title(), "");
        assert_eq!(r.url_or_path(), "");
        assert_eq!(r.chunk_text(), "");
        assert!(r.page().is_none());
    }

    #[test]
    fn test_zero_page_is_absent() {
        assert!(row(json!({"page": 0})).page().is_none());
        assert!(row(json!({"page": 0.0})).page().is_none());
        assert!(row(json!({"page": ""})).page().is_none());
        assert_eq!(row(json!({"page": "iv"})).page(), Some(&json!("iv")));
    }

    #[test]
    fn test_non_string_text_is_rendered() {
        let r = row(json!({"title": 2024, "doc_id": true}));
        assert_eq!(r.title(), "2024");
        assert_eq!(r.text("doc_id"), "true");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([0])));
    }
}
