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

//! Live schema lookup and field classification
//!
//! The schema is fetched fresh for every insert and search; nothing is
//! cached across calls.

use std::time::Duration;
use tracing::debug;

use crate::codec::key_value::find_key_value;
use crate::core::errors::{MilvusError, Result, SchemaError};
use crate::network::Method;
use crate::proto::common::{ErrorCode, Status};
use crate::proto::milvus::{DescribeCollectionRequest, DescribeCollectionResponse};
use crate::proto::schema::{CollectionSchema, DataType, FieldSchema};
use crate::services::ServiceContext;

/// Newer servers report a missing collection through the numeric `code`
pub const COLLECTION_NOT_FOUND_CODE: i32 = 100;

/// What the normalizers need to know about one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClass {
    pub name: String,
    pub field_id: i64,
    pub data_type: DataType,
    pub is_vector: bool,
    pub is_primary_key: bool,
    pub auto_id: bool,
    /// Declared `dim` of vector fields
    pub dim: Option<usize>,
}

impl FieldClass {
    /// Elements per row on the wire: `dim` for float vectors, `dim / 8`
    /// bytes for binary vectors, one for scalars
    pub fn row_width(&self) -> usize {
        match (self.data_type, self.dim) {
            (DataType::BinaryVector, Some(dim)) => dim / 8,
            (_, Some(dim)) => dim,
            (_, None) => 1,
        }
    }
}

pub fn classify_field(field: &FieldSchema) -> std::result::Result<FieldClass, SchemaError> {
    let data_type = DataType::try_from(field.data_type)
        .map_err(|_| SchemaError::UnsupportedDataType(field.data_type.to_string()))?;
    let is_vector = data_type.is_vector();
    let dim = if is_vector {
        let dim = find_key_value(&field.type_params, "dim")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|dim| *dim > 0)
            .ok_or_else(|| SchemaError::InvalidDim(field.name.clone()))?;
        Some(dim)
    } else {
        None
    };

    Ok(FieldClass {
        name: field.name.clone(),
        field_id: field.field_id,
        data_type,
        is_vector,
        is_primary_key: field.is_primary_key,
        auto_id: field.auto_id,
        dim,
    })
}

/// Locate and classify the field called `name`
pub fn find_field(schema: &CollectionSchema, name: &str) -> Option<std::result::Result<FieldClass, SchemaError>> {
    schema
        .fields
        .iter()
        .find(|field| field.name == name)
        .map(classify_field)
}

/// First FloatVector or BinaryVector field of the schema
pub fn first_vector_field(schema: &CollectionSchema) -> Option<std::result::Result<FieldClass, SchemaError>> {
    schema
        .fields
        .iter()
        .find(|field| {
            field.data_type == DataType::FloatVector as i32 || field.data_type == DataType::BinaryVector as i32
        })
        .map(classify_field)
}

/// Whether a non-success status means the collection does not exist
pub fn is_collection_not_found(status: &Status) -> bool {
    if status.error_code == ErrorCode::CollectionNotExists as i32 || status.code == COLLECTION_NOT_FOUND_CODE {
        return true;
    }
    let reason = status.reason.to_ascii_lowercase();
    reason.contains("collection not found") || reason.contains("can't find collection")
}

/// Fetches collection schemas through `DescribeCollection`
#[derive(Clone)]
pub struct SchemaResolver {
    ctx: ServiceContext,
}

impl SchemaResolver {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Full describe response; a non-success status is returned as is
    pub async fn describe(&self, collection_name: &str, timeout: Option<Duration>) -> Result<DescribeCollectionResponse> {
        let request = DescribeCollectionRequest {
            collection_name: collection_name.to_string(),
            ..Default::default()
        };
        self.ctx.call(Method::DescribeCollection, &request, timeout).await
    }

    /// Live schema of `collection_name`; fails with `CollectionNotFound`
    /// when the server does not know it
    pub async fn describe_schema(&self, collection_name: &str, timeout: Option<Duration>) -> Result<CollectionSchema> {
        let response = self.describe(collection_name, timeout).await?;
        let status = response.status.unwrap_or_default();
        if !status.is_success() {
            if is_collection_not_found(&status) {
                return Err(MilvusError::CollectionNotFound(collection_name.to_string()));
            }
            return Err(MilvusError::server(&status));
        }
        let schema = response.schema.ok_or_else(|| {
            MilvusError::MalformedResponse(format!("DescribeCollection for `{}` returned no schema", collection_name))
        })?;
        debug!("Resolved schema of {} with {} fields", collection_name, schema.fields.len());
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::common::KeyValuePair;

    fn vector_field(name: &str, data_type: DataType, dim: &str) -> FieldSchema {
        FieldSchema {
            name: name.to_string(),
            data_type: data_type as i32,
            type_params: vec![KeyValuePair::new("dim", dim)],
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_binary_vector_width() {
        let class = classify_field(&vector_field("bits", DataType::BinaryVector, "16")).unwrap();
        assert!(class.is_vector);
        assert_eq!(class.dim, Some(16));
        assert_eq!(class.row_width(), 2);
    }

    #[test]
    fn test_classify_scalar_has_no_dim() {
        let field = FieldSchema {
            name: "age".to_string(),
            data_type: DataType::Int64 as i32,
            ..Default::default()
        };
        let class = classify_field(&field).unwrap();
        assert!(!class.is_vector);
        assert_eq!(class.dim, None);
        assert_eq!(class.row_width(), 1);
    }

    #[test]
    fn test_vector_without_dim_is_rejected() {
        let err = classify_field(&vector_field("v", DataType::FloatVector, "abc")).unwrap_err();
        assert_eq!(err, SchemaError::InvalidDim("v".to_string()));
    }

    #[test]
    fn test_collection_not_found_detection() {
        assert!(is_collection_not_found(&Status::failure(ErrorCode::CollectionNotExists, "")));
        let modern = Status {
            code: 100,
            reason: "collection not found[collection=x]".to_string(),
            ..Default::default()
        };
        assert!(is_collection_not_found(&modern));
        assert!(!is_collection_not_found(&Status::failure(ErrorCode::UnexpectedError, "disk full")));
    }
}
