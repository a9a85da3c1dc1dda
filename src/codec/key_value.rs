/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Conversion between flat parameter objects and `KeyValuePair` lists
//!
//! Strings travel verbatim; every other JSON value travels as its JSON text.
//! The wire value is a bare string, so the string/number distinction only
//! survives when the reader says which keys hold JSON text. `from_typed_pairs`
//! takes that as a `ValueKind` per key and reproduces the original object
//! exactly. `from_pairs` guesses from the text and returns `"10"` as `10`.

use serde_json::{Map, Value};

use crate::proto::common::KeyValuePair;

/// One pair per property, in the map's iteration order
pub fn to_pairs(obj: Option<&Map<String, Value>>) -> Vec<KeyValuePair> {
    let Some(obj) = obj else {
        return Vec::new();
    };
    obj.iter()
        .map(|(key, value)| KeyValuePair::new(key.as_str(), value_to_wire(value)))
        .collect()
}

/// How a wire value should be read back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Verbatim string
    Text,
    /// JSON text of a number, boolean or `null`
    Json,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::Text,
            _ => ValueKind::Json,
        }
    }
}

/// Extract `keys` from `pairs`, parsing any text that reads as a non-string
/// JSON value; absent keys map to `null`
pub fn from_pairs(pairs: &[KeyValuePair], keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .map(|key| {
            let value = find_key_value(pairs, key)
                .map(value_from_wire)
                .unwrap_or(Value::Null);
            (key.to_string(), value)
        })
        .collect()
}

/// Extract `keys` from `pairs`, reading each value as its declared kind;
/// absent keys map to `null`
pub fn from_typed_pairs(pairs: &[KeyValuePair], keys: &[(&str, ValueKind)]) -> Map<String, Value> {
    keys.iter()
        .map(|(key, kind)| {
            let value = match (find_key_value(pairs, key), kind) {
                (None, _) => Value::Null,
                (Some(raw), ValueKind::Text) => Value::String(raw.to_string()),
                (Some(raw), ValueKind::Json) => value_from_wire(raw),
            };
            (key.to_string(), value)
        })
        .collect()
}

/// Key kinds matching the values of `obj`
pub fn value_kinds(obj: &Map<String, Value>) -> Vec<(&str, ValueKind)> {
    obj.iter().map(|(key, value)| (key.as_str(), ValueKind::of(value))).collect()
}

/// Linear scan for the first pair named `key`
pub fn find_key_value<'a>(pairs: &'a [KeyValuePair], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|pair| pair.key == key)
        .map(|pair| pair.value.as_str())
}

fn value_to_wire(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_from_wire(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(_)) | Err(_) => Value::String(raw.to_string()),
        Ok(parsed) => parsed,
    }
}
