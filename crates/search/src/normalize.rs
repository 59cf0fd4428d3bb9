//! Normalization of similarity-search responses.
//!
//! The service may answer with a list of row objects under `data`, or with a
//! tabular payload (`manifest.columns` + `result.data_array`). Responses are
//! classified into [`SearchResponseShape`] first, then flattened into rows.

use crate::types::{display_text, is_truthy, SearchRow};
use serde_json::{Map, Value};

/// Recognized response shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponseShape {
    /// `{"data": [ {row}, ... ]}`
    Rows(Vec<Value>),

    /// `{"manifest": {"columns": [...]}, "result": {"data_array": [[...], ...]}}`
    Tabular {
        /// Column names in positional order
        columns: Vec<String>,
        /// Value arrays, one per hit
        data: Vec<Vec<Value>>,
        /// `result.row_count` when reported
        row_count: Option<u64>,
    },

    /// Anything else
    Unrecognized,
}

impl SearchResponseShape {
    /// Classify a raw service response.
    pub fn classify(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            return Self::Unrecognized;
        };

        if let Some(Value::Array(items)) = obj.get("data") {
            return Self::Rows(items.clone());
        }

        if obj.contains_key("result") {
            let manifest = obj.get("manifest").and_then(Value::as_object);
            let result = obj.get("result").and_then(Value::as_object);

            return Self::Tabular {
                columns: manifest.map(column_names).unwrap_or_default(),
                data: result.map(value_arrays).unwrap_or_default(),
                row_count: result
                    .and_then(|r| r.get("row_count"))
                    .and_then(Value::as_u64),
            };
        }

        Self::Unrecognized
    }

    /// Flatten into rows, preserving service order.
    pub fn into_rows(self) -> Vec<SearchRow> {
        match self {
            Self::Rows(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(SearchRow::new(map)),
                    other => {
                        tracing::debug!("Skipping non-object row: {}", other);
                        None
                    }
                })
                .collect(),
            Self::Tabular {
                columns,
                data,
                row_count,
            } => {
                if columns.is_empty() || data.is_empty() {
                    tracing::debug!(?row_count, "Tabular response without rows");
                    return Vec::new();
                }
                data.into_iter()
                    .map(|values| {
                        let map: Map<String, Value> =
                            columns.iter().cloned().zip(values).collect();
                        SearchRow::new(map)
                    })
                    .collect()
            }
            Self::Unrecognized => Vec::new(),
        }
    }
}

/// Normalize a raw search response into ordered rows. Never fails.
pub fn normalize(raw: &Value) -> Vec<SearchRow> {
    let shape = SearchResponseShape::classify(raw);
    let rows = shape.into_rows();
    tracing::debug!("Normalized {} rows", rows.len());
    rows
}

/// First non-empty of `columns` / `column_names`.
fn column_names(manifest: &Map<String, Value>) -> Vec<String> {
    let descriptors = ["columns", "column_names"]
        .iter()
        .filter_map(|key| manifest.get(*key))
        .find(|v| is_truthy(v))
        .and_then(Value::as_array);

    descriptors
        .map(|cols| cols.iter().map(column_name).collect())
        .unwrap_or_default()
}

fn column_name(descriptor: &Value) -> String {
    match descriptor.get("name") {
        Some(name) if descriptor.is_object() => display_text(name),
        _ => display_text(descriptor),
    }
}

/// First non-empty of `data_array` / `data`, keeping only array entries.
fn value_arrays(result: &Map<String, Value>) -> Vec<Vec<Value>> {
    ["data_array", "data"]
        .iter()
        .filter_map(|key| result.get(*key))
        .find(|v| is_truthy(v))
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|r| r.as_array().cloned())
                .collect()
        })
        .unwrap_or_default()
}
