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

//! Column-to-row pivot for search and query results
//!
//! The server answers with one flat array per field plus, for searches,
//! shared `ids`/`scores` arrays. Query `q` owns the `topks[q]` entries that
//! follow everything consumed by queries `0..q`.

use std::collections::HashMap;

use crate::core::errors::{MilvusError, Result};
use crate::core::types::{FieldValue, PrimaryKey, RowData, SearchResultRow};
use crate::proto::schema::{field_data, i_ds, scalar_field, vector_field, FieldData, SearchResultData, IDs};

/// Decode one wire column into per-row values. Vector columns are split
/// into `dim` floats or `dim / 8` bytes per row.
pub fn decode_field_column(field: &FieldData) -> Result<Vec<FieldValue>> {
    let Some(payload) = &field.field else {
        return Ok(Vec::new());
    };
    let values = match payload {
        field_data::Field::Scalars(scalars) => match &scalars.data {
            Some(scalar_field::Data::BoolData(a)) => a.data.iter().map(|v| FieldValue::Bool(*v)).collect(),
            Some(scalar_field::Data::IntData(a)) => a.data.iter().map(|v| FieldValue::Int(*v as i64)).collect(),
            Some(scalar_field::Data::LongData(a)) => a.data.iter().map(|v| FieldValue::Int(*v)).collect(),
            Some(scalar_field::Data::FloatData(a)) => a.data.iter().map(|v| FieldValue::Float(*v as f64)).collect(),
            Some(scalar_field::Data::DoubleData(a)) => a.data.iter().map(|v| FieldValue::Float(*v)).collect(),
            Some(scalar_field::Data::StringData(a)) => a.data.iter().cloned().map(FieldValue::String).collect(),
            Some(scalar_field::Data::BytesData(a)) => a.data.iter().cloned().map(FieldValue::BinaryVector).collect(),
            None => Vec::new(),
        },
        field_data::Field::Vectors(vectors) => {
            let dim = usize::try_from(vectors.dim).unwrap_or(0);
            match &vectors.data {
                Some(vector_field::Data::FloatVector(a)) => {
                    let width = checked_width(&field.field_name, dim, a.data.len())?;
                    a.data
                        .chunks(width)
                        .map(|chunk| FieldValue::FloatVector(chunk.to_vec()))
                        .collect()
                }
                Some(vector_field::Data::BinaryVector(bytes)) => {
                    let width = checked_width(&field.field_name, dim / 8, bytes.len())?;
                    bytes
                        .chunks(width)
                        .map(|chunk| FieldValue::BinaryVector(chunk.to_vec()))
                        .collect()
                }
                None => Vec::new(),
            }
        }
    };
    Ok(values)
}

fn checked_width(field: &str, width: usize, len: usize) -> Result<usize> {
    if len == 0 {
        return Ok(width.max(1));
    }
    if width == 0 || len % width != 0 {
        return Err(MilvusError::MalformedResponse(format!(
            "vector column `{}` of {} elements cannot be split by {}",
            field, len, width
        )));
    }
    Ok(width)
}

fn decode_ids(ids: Option<&IDs>) -> Vec<PrimaryKey> {
    match ids.and_then(|ids| ids.id_field.as_ref()) {
        Some(i_ds::IdField::IntId(a)) => a.data.iter().map(|v| PrimaryKey::Int(*v)).collect(),
        Some(i_ds::IdField::StrId(a)) => a.data.iter().cloned().map(PrimaryKey::Str).collect(),
        None => Vec::new(),
    }
}

/// Truncate the shortest decimal form of `number` to `precision`
/// fractional digits: `3.1738998` with precision 3 gives `3.173`
pub fn format_number_precision(number: f32, precision: u32) -> f64 {
    let text = number.to_string();
    let truncated = match text.split_once('.') {
        Some((whole, fraction)) => {
            let keep: String = fraction.chars().take(precision as usize).collect();
            if keep.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, keep)
            }
        }
        None => text,
    };
    truncated.parse().unwrap_or(number as f64)
}

/// Apply `round_decimal`; `None` and `-1` leave the score untouched
pub fn round_score(score: f32, round_decimal: Option<i32>) -> f64 {
    match round_decimal {
        Some(precision) if precision >= 0 => format_number_precision(score, precision as u32),
        _ => score as f64,
    }
}

/// One list of hits per query, in query order
pub fn pivot_search_results(data: &SearchResultData, round_decimal: Option<i32>) -> Result<Vec<Vec<SearchResultRow>>> {
    let ids = decode_ids(data.ids.as_ref());
    let mut columns: HashMap<&str, Vec<FieldValue>> = HashMap::new();
    for field in &data.fields_data {
        columns.insert(field.field_name.as_str(), decode_field_column(field)?);
    }
    let output_fields: Vec<&str> = if data.output_fields.is_empty() {
        data.fields_data.iter().map(|f| f.field_name.as_str()).collect()
    } else {
        data.output_fields.iter().map(String::as_str).collect()
    };

    let mut results = Vec::with_capacity(data.topks.len());
    let mut offset = 0usize;
    for &topk in &data.topks {
        let remaining = data.scores.len().saturating_sub(offset);
        let take = usize::try_from(topk).unwrap_or(0).min(remaining);

        let mut hits = Vec::with_capacity(take);
        for i in offset..offset + take {
            let id = ids.get(i).cloned().ok_or_else(|| {
                MilvusError::MalformedResponse(format!("search result has {} ids but score #{} needs one", ids.len(), i))
            })?;
            let fields: RowData = output_fields
                .iter()
                .filter_map(|name| {
                    let column = columns.get(name)?;
                    Some((name.to_string(), column.get(i).cloned().unwrap_or(FieldValue::Null)))
                })
                .collect();
            hits.push(SearchResultRow {
                id,
                score: round_score(data.scores[i], round_decimal),
                fields,
            });
        }
        results.push(hits);
        offset += take;
    }
    Ok(results)
}

/// Union of all columns by row index; the row count is the longest column
pub fn pivot_query_results(fields_data: &[FieldData]) -> Result<Vec<RowData>> {
    let mut columns = Vec::with_capacity(fields_data.len());
    for field in fields_data {
        columns.push((field.field_name.as_str(), decode_field_column(field)?));
    }
    let row_count = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);

    let rows = (0..row_count)
        .map(|i| {
            columns
                .iter()
                .filter_map(|(name, values)| values.get(i).map(|v| (name.to_string(), v.clone())))
                .collect()
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::schema::{DataType, FloatArray, LongArray, ScalarField, StringArray, VectorField};

    fn long_column(name: &str, data: Vec<i64>) -> FieldData {
        FieldData {
            r#type: DataType::Int64 as i32,
            field_name: name.to_string(),
            field: Some(field_data::Field::Scalars(ScalarField {
                data: Some(scalar_field::Data::LongData(LongArray { data })),
            })),
            ..Default::default()
        }
    }

    fn float_vector_column(name: &str, dim: i64, data: Vec<f32>) -> FieldData {
        FieldData {
            r#type: DataType::FloatVector as i32,
            field_name: name.to_string(),
            field: Some(field_data::Field::Vectors(VectorField {
                dim,
                data: Some(vector_field::Data::FloatVector(FloatArray { data })),
            })),
            ..Default::default()
        }
    }

    fn int_ids(data: Vec<i64>) -> Option<IDs> {
        Some(IDs {
            id_field: Some(i_ds::IdField::IntId(LongArray { data })),
        })
    }

    #[test]
    fn test_pivot_two_queries() {
        let data = SearchResultData {
            num_queries: 2,
            top_k: 2,
            topks: vec![2, 1],
            scores: vec![0.1, 0.2, 0.3],
            ids: int_ids(vec![10, 11, 12]),
            fields_data: vec![long_column("age", vec![5, 6, 7])],
            output_fields: vec!["age".to_string()],
        };
        let results = pivot_search_results(&data, None).unwrap();
        assert_eq!(results.len(), 2);

        let ids: Vec<Vec<PrimaryKey>> = results.iter().map(|q| q.iter().map(|r| r.id.clone()).collect()).collect();
        assert_eq!(
            ids,
            vec![vec![PrimaryKey::Int(10), PrimaryKey::Int(11)], vec![PrimaryKey::Int(12)]]
        );
        assert_eq!(results[0][1].score, 0.2f32 as f64);
        assert_eq!(results[1][0].fields.get("age"), Some(&FieldValue::Int(7)));
    }

    #[test]
    fn test_topk_is_clamped_to_returned_scores() {
        let data = SearchResultData {
            topks: vec![2, 5],
            scores: vec![0.9, 0.8, 0.7],
            ids: Some(IDs {
                id_field: Some(i_ds::IdField::StrId(StringArray {
                    data: vec!["a".into(), "b".into(), "c".into()],
                })),
            }),
            ..Default::default()
        };
        let results = pivot_search_results(&data, None).unwrap();
        assert_eq!(results[0].len(), 2);
        assert_eq!(results[1].len(), 1);
        assert_eq!(results[1][0].id, PrimaryKey::Str("c".to_string()));
    }

    #[test]
    fn test_missing_ids_are_malformed() {
        let data = SearchResultData {
            topks: vec![2],
            scores: vec![0.9, 0.8],
            ids: int_ids(vec![1]),
            ..Default::default()
        };
        assert!(matches!(
            pivot_search_results(&data, None),
            Err(MilvusError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(round_score(3.14159, Some(2)), 3.14);
        assert_eq!(round_score(3.14159, Some(0)), 3.0);
        assert_eq!(round_score(3.14159, Some(-1)), 3.14159f32 as f64);
        assert_eq!(round_score(3.14159, None), 3.14159f32 as f64);
        assert_eq!(format_number_precision(-0.98765, 3), -0.987);
        assert_eq!(format_number_precision(2.0, 4), 2.0);
    }

    #[test]
    fn test_vector_output_is_chunked_by_dim() {
        let column = float_vector_column("vec", 2, vec![1.0, 2.0, 3.0, 4.0]);
        let values = decode_field_column(&column).unwrap();
        assert_eq!(
            values,
            vec![FieldValue::FloatVector(vec![1.0, 2.0]), FieldValue::FloatVector(vec![3.0, 4.0])]
        );
    }

    #[test]
    fn test_vector_with_bad_dim_is_malformed() {
        let column = float_vector_column("vec", 3, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(decode_field_column(&column).is_err());
    }

    #[test]
    fn test_binary_output_is_chunked_by_bytes() {
        let column = FieldData {
            r#type: DataType::BinaryVector as i32,
            field_name: "bits".to_string(),
            field: Some(field_data::Field::Vectors(VectorField {
                dim: 16,
                data: Some(vector_field::Data::BinaryVector(vec![1, 2, 3, 4])),
            })),
            ..Default::default()
        };
        let values = decode_field_column(&column).unwrap();
        assert_eq!(
            values,
            vec![FieldValue::BinaryVector(vec![1, 2]), FieldValue::BinaryVector(vec![3, 4])]
        );
    }

    #[test]
    fn test_query_rows_union_by_index() {
        let fields = vec![
            long_column("id", vec![1, 2, 3]),
            float_vector_column("vec", 2, vec![0.5, 0.5, 1.5, 1.5]),
        ];
        let rows = pivot_query_results(&fields).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].get("vec"), Some(&FieldValue::FloatVector(vec![1.5, 1.5])));
        assert_eq!(rows[2].get("id"), Some(&FieldValue::Int(3)));
        assert!(!rows[2].contains_key("vec"));
    }
}
