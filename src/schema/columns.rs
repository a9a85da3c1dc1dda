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

//! Row-to-column accumulation for inserts
//!
//! Rows are visited in order and every column receives exactly one value
//! per row, so columns are built by plain appends.

use std::collections::HashSet;

use super::resolver::{classify_field, FieldClass};
use crate::core::errors::{DimensionCheck, SchemaError};
use crate::core::types::{FieldValue, RowData};
use crate::proto::schema::{
    field_data, scalar_field, vector_field, BoolArray, CollectionSchema, DataType, DoubleArray, FieldData,
    FloatArray, IntArray, LongArray, ScalarField, StringArray, VectorField,
};

/// Wire representation of one insert column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    FloatVector(Vec<f32>),
    BinaryVector(Vec<u8>),
    Double(Vec<f64>),
    Float(Vec<f32>),
    Long(Vec<i64>),
    Int(Vec<i32>),
    Bool(Vec<bool>),
    Str(Vec<String>),
}

impl ColumnData {
    fn for_type(data_type: DataType, rows: usize) -> Option<Self> {
        let column = match data_type {
            DataType::FloatVector => ColumnData::FloatVector(Vec::new()),
            DataType::BinaryVector => ColumnData::BinaryVector(Vec::new()),
            DataType::Double => ColumnData::Double(Vec::with_capacity(rows)),
            DataType::Float => ColumnData::Float(Vec::with_capacity(rows)),
            DataType::Int64 => ColumnData::Long(Vec::with_capacity(rows)),
            DataType::Int8 | DataType::Int16 | DataType::Int32 => ColumnData::Int(Vec::with_capacity(rows)),
            DataType::Bool => ColumnData::Bool(Vec::with_capacity(rows)),
            DataType::VarChar | DataType::String => ColumnData::Str(Vec::with_capacity(rows)),
            _ => return None,
        };
        Some(column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertColumn {
    pub field: FieldClass,
    pub data: ColumnData,
}

impl InsertColumn {
    fn push(&mut self, value: &FieldValue, row: usize) -> Result<(), SchemaError> {
        let field = &self.field;
        let mismatch = || SchemaError::ValueTypeMismatch {
            field: field.name.clone(),
            row,
            data_type: field.data_type.as_str_name().to_string(),
        };
        let width_check = |check: DimensionCheck, actual: usize| {
            let expected = field.row_width();
            if actual == expected {
                Ok(())
            } else {
                Err(SchemaError::DimensionMismatch {
                    check,
                    field: field.name.clone(),
                    expected,
                    actual,
                })
            }
        };

        match (&mut self.data, value) {
            (ColumnData::FloatVector(column), FieldValue::FloatVector(v)) => {
                width_check(DimensionCheck::FloatInsert, v.len())?;
                column.extend_from_slice(v);
            }
            (ColumnData::BinaryVector(column), FieldValue::BinaryVector(v)) => {
                width_check(DimensionCheck::BinaryInsert, v.len())?;
                column.extend_from_slice(v);
            }
            // JSON input delivers packed bytes as a number array
            (ColumnData::BinaryVector(column), FieldValue::FloatVector(v)) => {
                width_check(DimensionCheck::BinaryInsert, v.len())?;
                for n in v {
                    if n.fract() != 0.0 || !(0.0..=255.0).contains(n) {
                        return Err(mismatch());
                    }
                    column.push(*n as u8);
                }
            }
            (ColumnData::Double(column), v) => column.push(v.as_f64().ok_or_else(mismatch)?),
            (ColumnData::Float(column), v) => column.push(v.as_f64().ok_or_else(mismatch)? as f32),
            (ColumnData::Long(column), v) => column.push(v.as_i64().ok_or_else(mismatch)?),
            (ColumnData::Int(column), v) => {
                let wide = v.as_i64().ok_or_else(mismatch)?;
                column.push(i32::try_from(wide).map_err(|_| mismatch())?);
            }
            (ColumnData::Bool(column), FieldValue::Bool(b)) => column.push(*b),
            (ColumnData::Str(column), FieldValue::String(s)) => column.push(s.clone()),
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    pub fn into_field_data(self) -> FieldData {
        let dim = self.field.dim.unwrap_or_default() as i64;
        let field = match self.data {
            ColumnData::FloatVector(data) => field_data::Field::Vectors(VectorField {
                dim,
                data: Some(vector_field::Data::FloatVector(FloatArray { data })),
            }),
            ColumnData::BinaryVector(data) => field_data::Field::Vectors(VectorField {
                dim,
                data: Some(vector_field::Data::BinaryVector(data)),
            }),
            ColumnData::Double(data) => scalars(scalar_field::Data::DoubleData(DoubleArray { data })),
            ColumnData::Float(data) => scalars(scalar_field::Data::FloatData(FloatArray { data })),
            ColumnData::Long(data) => scalars(scalar_field::Data::LongData(LongArray { data })),
            ColumnData::Int(data) => scalars(scalar_field::Data::IntData(IntArray { data })),
            ColumnData::Bool(data) => scalars(scalar_field::Data::BoolData(BoolArray { data })),
            ColumnData::Str(data) => scalars(scalar_field::Data::StringData(StringArray { data })),
        };
        FieldData {
            r#type: self.field.data_type as i32,
            field_name: self.field.name,
            field_id: self.field.field_id,
            is_dynamic: false,
            field: Some(field),
        }
    }
}

fn scalars(data: scalar_field::Data) -> field_data::Field {
    field_data::Field::Scalars(ScalarField { data: Some(data) })
}

/// One column per non-auto-ID field, in schema order, filled from `rows`
pub fn resolve_insert_columns(schema: &CollectionSchema, rows: &[RowData]) -> Result<Vec<InsertColumn>, SchemaError> {
    let mut columns = Vec::new();
    for field in schema.fields.iter().filter(|field| !field.auto_id) {
        let class = classify_field(field)?;
        let data = ColumnData::for_type(class.data_type, rows.len())
            .ok_or_else(|| SchemaError::UnsupportedDataType(class.data_type.as_str_name().to_string()))?;
        columns.push(InsertColumn { field: class, data });
    }

    let known: HashSet<String> = columns.iter().map(|column| column.field.name.clone()).collect();

    for (row_idx, row) in rows.iter().enumerate() {
        if let Some(unknown) = row.keys().find(|name| !known.contains(name.as_str())) {
            return Err(SchemaError::UnknownField {
                field: unknown.clone(),
                row: row_idx,
            });
        }
        for column in columns.iter_mut() {
            let value = row.get(&column.field.name).ok_or_else(|| SchemaError::MissingField {
                field: column.field.name.clone(),
                row: row_idx,
            })?;
            column.push(value, row_idx)?;
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::row;
    use crate::proto::common::KeyValuePair;
    use crate::proto::schema::FieldSchema;

    fn schema() -> CollectionSchema {
        CollectionSchema {
            name: "books".to_string(),
            fields: vec![
                FieldSchema {
                    field_id: 100,
                    name: "id".to_string(),
                    is_primary_key: true,
                    auto_id: true,
                    data_type: DataType::Int64 as i32,
                    ..Default::default()
                },
                FieldSchema {
                    field_id: 101,
                    name: "age".to_string(),
                    data_type: DataType::Int32 as i32,
                    ..Default::default()
                },
                FieldSchema {
                    field_id: 102,
                    name: "vec".to_string(),
                    data_type: DataType::FloatVector as i32,
                    type_params: vec![KeyValuePair::new("dim", "2")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn good_row(age: i64, v: Vec<f32>) -> RowData {
        let mut r = row([("age", FieldValue::Int(age))]);
        r.insert("vec".to_string(), FieldValue::FloatVector(v));
        r
    }

    #[test]
    fn test_columns_follow_schema_order_and_skip_auto_id() {
        let rows = vec![good_row(1, vec![0.1, 0.2]), good_row(2, vec![0.3, 0.4])];
        let columns = resolve_insert_columns(&schema(), &rows).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].field.name, "age");
        assert_eq!(columns[0].data, ColumnData::Int(vec![1, 2]));
        assert_eq!(columns[1].data, ColumnData::FloatVector(vec![0.1, 0.2, 0.3, 0.4]));
    }

    #[test]
    fn test_auto_id_field_in_row_is_unknown() {
        let mut r = good_row(1, vec![0.1, 0.2]);
        r.insert("id".to_string(), FieldValue::Int(7));
        let err = resolve_insert_columns(&schema(), &[r]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                field: "id".to_string(),
                row: 0
            }
        );
    }

    #[test]
    fn test_unknown_field_after_valid_rows_reports_row() {
        let mut stray = good_row(3, vec![0.5, 0.6]);
        stray.insert("title".to_string(), FieldValue::String("dune".to_string()));
        let rows = vec![good_row(1, vec![0.1, 0.2]), good_row(2, vec![0.3, 0.4]), stray];
        let err = resolve_insert_columns(&schema(), &rows).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                field: "title".to_string(),
                row: 2
            }
        );
    }

    #[test]
    fn test_missing_field_reports_row() {
        let rows = vec![good_row(1, vec![0.1, 0.2]), row([("age", 3i64)])];
        let err = resolve_insert_columns(&schema(), &rows).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                field: "vec".to_string(),
                row: 1
            }
        );
    }

    #[test]
    fn test_int32_overflow_is_type_mismatch() {
        let rows = vec![good_row(i64::from(i32::MAX) + 1, vec![0.1, 0.2])];
        let err = resolve_insert_columns(&schema(), &rows).unwrap_err();
        assert!(matches!(err, SchemaError::ValueTypeMismatch { row: 0, .. }));
    }

    #[test]
    fn test_field_data_carries_dim() {
        let rows = vec![good_row(1, vec![0.5, 0.25])];
        let columns = resolve_insert_columns(&schema(), &rows).unwrap();
        let data = columns[1].clone().into_field_data();
        assert_eq!(data.field_name, "vec");
        assert_eq!(data.r#type, DataType::FloatVector as i32);
        match data.field {
            Some(field_data::Field::Vectors(v)) => assert_eq!(v.dim, 2),
            other => panic!("unexpected field payload {:?}", other),
        }
    }

    #[test]
    fn test_json_field_is_unsupported() {
        let mut s = schema();
        s.fields.push(FieldSchema {
            name: "meta".to_string(),
            data_type: DataType::Json as i32,
            ..Default::default()
        });
        let err = resolve_insert_columns(&s, &[]).unwrap_err();
        assert_eq!(err, SchemaError::UnsupportedDataType("JSON".to_string()));
    }
}
