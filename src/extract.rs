//! Record extraction
//!
//! The catalog API is inconsistent about where it puts its records. Some
//! responses are bare arrays, most wrap the array in an envelope object under
//! one of several keys. These helpers locate the records without knowing the
//! envelope up front.

use serde_json::Value;

/// Envelope keys probed, in order, before falling back to any array field.
pub const WRAPPER_KEYS: [&str; 7] = [
    "data",
    "plants",
    "news",
    "items",
    "results",
    "news_category",
    "categories",
];

/// Envelope keys probed for a single object-valued record.
pub const DETAIL_KEYS: [&str; 3] = ["data", "plant", "plants"];

/// Fields whose presence marks an unwrapped object as a record itself.
const RECORD_MARKERS: [&str; 7] = [
    "id",
    "plant_id",
    "plantId",
    "_id",
    "name",
    "plant_name",
    "title",
];

/// Extract an ordered sequence of records from a response body.
///
/// A bare array is returned as is. Otherwise the first array found under
/// [`WRAPPER_KEYS`] wins, then the first array-valued field in the object's
/// own order. Anything else yields an empty sequence.
pub fn extract_records(body: &Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records.clone(),
        Value::Object(fields) => WRAPPER_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_array))
            .or_else(|| fields.values().find_map(Value::as_array))
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Extract a single record from a detail response body.
///
/// Prefers the first element of [`extract_records`], then an object nested
/// under [`DETAIL_KEYS`], then the body itself when it carries an identifying
/// field such as `id` or `name`.
pub fn extract_record(body: &Value) -> Option<Value> {
    if let Some(first) = extract_records(body).into_iter().next() {
        return Some(first);
    }

    let Value::Object(fields) = body else {
        return None;
    };

    DETAIL_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| value.is_object())
        .cloned()
        .or_else(|| {
            RECORD_MARKERS
                .iter()
                .any(|key| fields.contains_key(*key))
                .then(|| body.clone())
        })
}
