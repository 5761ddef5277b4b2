//! Normalization of wire-level `result` values.
//!
//! Daemon methods return either a JSON object or a bare value (string,
//! number, array, null). Objects are wrapped in [`ResponseData`] for keyed
//! access; everything else passes through untouched as [`RpcValue::Raw`].

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

// ==============================================================================
// Response Record
// ==============================================================================

/// Keyed record over a JSON object reply.
///
/// Field order follows the daemon's reply. The original mapping stays
/// available through [`ResponseData::response`] for callers that prefer
/// uniform map-style access over per-key lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseData {
    response: Map<String, Value>,
}

impl ResponseData {
    pub fn new(response: Map<String, Value>) -> Self {
        Self { response }
    }

    /// Value of one reply field, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.response.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.response.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.response.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    /// The reply object exactly as the daemon sent it.
    pub fn response(&self) -> &Map<String, Value> {
        &self.response
    }

    pub fn into_response(self) -> Map<String, Value> {
        self.response
    }
}

impl std::ops::Index<&str> for ResponseData {
    type Output = Value;

    /// Missing keys index to JSON null, mirroring `serde_json::Value`
    /// indexing, so chained lookups on optional fields do not panic.
    fn index(&self, key: &str) -> &Value {
        self.response.get(key).unwrap_or(&NULL)
    }
}

// ==============================================================================
// Normalized Value
// ==============================================================================

/// A daemon reply after envelope unwrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcValue {
    /// The wire `result` was a JSON object.
    Record(ResponseData),
    /// Scalar, array, or null `result`, passed through unchanged.
    Raw(Value),
}

impl RpcValue {
    pub fn as_record(&self) -> Option<&ResponseData> {
        match self {
            RpcValue::Record(record) => Some(record),
            RpcValue::Raw(_) => None,
        }
    }

    pub fn into_record(self) -> Option<ResponseData> {
        match self {
            RpcValue::Record(record) => Some(record),
            RpcValue::Raw(_) => None,
        }
    }

    /// Keyed lookup on record replies. `None` for raw replies.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RpcValue::Raw(value) => value.as_str(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RpcValue::Raw(value) => value.as_i64(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RpcValue::Raw(value) => value.as_u64(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RpcValue::Raw(value) => value.as_f64(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RpcValue::Raw(value) => value.as_bool(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            RpcValue::Raw(value) => value.as_array(),
            RpcValue::Record(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RpcValue::Raw(Value::Null))
    }

    /// Collapse back into plain JSON; records yield their original mapping.
    pub fn into_json(self) -> Value {
        match self {
            RpcValue::Record(record) => Value::Object(record.into_response()),
            RpcValue::Raw(value) => value,
        }
    }
}

/// Wrap an object reply in a keyed record; return anything else unchanged.
///
/// Total over all JSON values: this never fails.
pub fn normalize(result: Value) -> RpcValue {
    match result {
        Value::Object(map) => RpcValue::Record(ResponseData::new(map)),
        other => RpcValue::Raw(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_result_becomes_record() {
        let value = normalize(json!({"a": 1, "b": "x"}));
        let record = value.as_record().expect("object must normalize to a record");

        assert_eq!(record.get_i64("a"), Some(1));
        assert_eq!(record.get_str("b"), Some("x"));

        let original = json!({"a": 1, "b": "x"});
        assert_eq!(Value::Object(record.response().clone()), original);
    }

    #[test]
    fn scalar_results_pass_through_unchanged() {
        assert_eq!(normalize(json!(null)), RpcValue::Raw(json!(null)));
        assert_eq!(normalize(json!(42)), RpcValue::Raw(json!(42)));
        assert_eq!(normalize(json!(["x", "y"])), RpcValue::Raw(json!(["x", "y"])));
    }

    #[test]
    fn normalizing_a_passed_through_value_is_a_no_op() {
        let first = normalize(json!(["x", "y"]));
        let second = normalize(first.clone().into_json());
        assert_eq!(first, second);
    }

    #[test]
    fn record_round_trips_to_its_original_mapping() {
        let value = normalize(json!({"height": 100, "tx": ["a"]}));
        assert_eq!(value.into_json(), json!({"height": 100, "tx": ["a"]}));
    }

    #[test]
    fn indexing_a_missing_key_yields_null() {
        let value = normalize(json!({"a": 1}));
        let record = value.as_record().unwrap();
        assert_eq!(record["a"], json!(1));
        assert_eq!(record["missing"], Value::Null);
    }

    #[test]
    fn raw_accessors_reject_records() {
        let record = normalize(json!({"a": 1}));
        assert_eq!(record.as_str(), None);
        assert_eq!(record.as_i64(), None);
        assert_eq!(record.get("a"), Some(&json!(1)));

        let raw = normalize(json!("000abc"));
        assert_eq!(raw.as_str(), Some("000abc"));
        assert_eq!(raw.get("a"), None);
    }
}
