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

//! Caller-facing row and vector types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::proto::common::PlaceholderType;
use crate::proto::schema::DataType;

/// A single cell of row-oriented data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    FloatVector(Vec<f32>),
    /// Packed bits, `dim / 8` bytes
    BinaryVector(Vec<u8>),
}

impl FieldValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<Vec<f32>> for FieldValue {
    fn from(value: Vec<f32>) -> Self {
        FieldValue::FloatVector(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        FieldValue::BinaryVector(value)
    }
}

/// One entity, keyed by field name
pub type RowData = BTreeMap<String, FieldValue>;

/// Build a [`RowData`] from `(name, value)` pairs
pub fn row<I, K, V>(cells: I) -> RowData
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Primary key as returned by the server, integer or string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    Int(i64),
    Str(String),
}

impl From<PrimaryKey> for FieldValue {
    fn from(value: PrimaryKey) -> Self {
        match value {
            PrimaryKey::Int(v) => FieldValue::Int(v),
            PrimaryKey::Str(v) => FieldValue::String(v),
        }
    }
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultRow {
    pub id: PrimaryKey,
    pub score: f64,
    #[serde(flatten)]
    pub fields: RowData,
}

/// Query vector, float or packed binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorData {
    Float(Vec<f32>),
    Binary(Vec<u8>),
}

impl VectorData {
    /// Elements for float vectors, bytes for binary vectors
    pub fn len(&self) -> usize {
        match self {
            VectorData::Float(v) => v.len(),
            VectorData::Binary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            VectorData::Float(_) => DataType::FloatVector,
            VectorData::Binary(_) => DataType::BinaryVector,
        }
    }

    pub fn placeholder_type(&self) -> PlaceholderType {
        match self {
            VectorData::Float(_) => PlaceholderType::FloatVector,
            VectorData::Binary(_) => PlaceholderType::BinaryVector,
        }
    }

    /// Coerce to the requested vector kind. Float input is accepted for a
    /// binary target when every element is a whole number in `0..=255`,
    /// which is how byte arrays arrive from JSON.
    pub fn coerce_to(self, target: DataType) -> Option<VectorData> {
        match (self, target) {
            (v @ VectorData::Float(_), DataType::FloatVector) => Some(v),
            (v @ VectorData::Binary(_), DataType::BinaryVector) => Some(v),
            (VectorData::Binary(bytes), DataType::FloatVector) => {
                Some(VectorData::Float(bytes.into_iter().map(f32::from).collect()))
            }
            (VectorData::Float(values), DataType::BinaryVector) => values
                .into_iter()
                .map(|v| {
                    (v.fract() == 0.0 && (0.0..=255.0).contains(&v)).then_some(v as u8)
                })
                .collect::<Option<Vec<u8>>>()
                .map(VectorData::Binary),
            _ => None,
        }
    }
}

impl From<Vec<f32>> for VectorData {
    fn from(value: Vec<f32>) -> Self {
        VectorData::Float(value)
    }
}

impl From<Vec<u8>> for VectorData {
    fn from(value: Vec<u8>) -> Self {
        VectorData::Binary(value)
    }
}

/// Field definition used by `create_collection`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub auto_id: bool,
    /// `dim` for vectors, `max_length` for VarChar, anything else verbatim
    #[serde(default)]
    pub type_params: serde_json::Map<String, serde_json::Value>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            description: String::new(),
            is_primary_key: false,
            auto_id: false,
            type_params: serde_json::Map::new(),
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn auto_id(mut self) -> Self {
        self.auto_id = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dim(self, dim: i64) -> Self {
        self.type_param("dim", dim)
    }

    pub fn max_length(self, max_length: i64) -> Self {
        self.type_param("max_length", max_length)
    }

    pub fn type_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.type_params.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_row_serializes_flat() {
        let hit = SearchResultRow {
            id: PrimaryKey::Int(10),
            score: 0.5,
            fields: row([("age", 5i64)]),
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json, serde_json::json!({"id": 10, "score": 0.5, "age": 5}));
    }

    #[test]
    fn test_coerce_float_to_binary_requires_bytes() {
        let ok = VectorData::Float(vec![1.0, 255.0]).coerce_to(DataType::BinaryVector);
        assert_eq!(ok, Some(VectorData::Binary(vec![1, 255])));
        assert_eq!(VectorData::Float(vec![0.5]).coerce_to(DataType::BinaryVector), None);
        assert_eq!(VectorData::Float(vec![256.0]).coerce_to(DataType::BinaryVector), None);
        assert_eq!(VectorData::Float(vec![1.0]).coerce_to(DataType::Int64), None);
    }

    #[test]
    fn test_field_spec_builder_sets_type_params() {
        let field = FieldSpec::new("vec", DataType::FloatVector).dim(128);
        assert_eq!(field.type_params.get("dim"), Some(&serde_json::json!(128)));
        assert!(!field.is_primary_key);
    }
}
