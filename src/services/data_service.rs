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

//! Data Service
//!
//! Insert, delete, search, query and flush. Insert and search validate the
//! caller payload against the live schema, fetched with `DescribeCollection`
//! on every call, before the main request is sent. Search and query
//! responses are pivoted from columns into rows.

use serde_json::{json, Map, Value};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{ensure_success, require, status_of, ServiceContext};
use crate::codec::key_value::to_pairs;
use crate::codec::vector::build_placeholder_group;
use crate::core::errors::{DimensionCheck, MilvusError, Result, SchemaError, ValidationError};
use crate::core::requests::{
    CountReq, DeleteReq, FlushReq, GetFlushStateReq, GetReq, InsertReq, QueryReq, SearchInput, SearchReq,
    SearchSimpleReq,
};
use crate::core::responses::{CountResult, QueryResults, SearchResults};
use crate::core::types::{FieldValue, PrimaryKey, VectorData};
use crate::network::Method;
use crate::proto::common::{ConsistencyLevel, DslType, PlaceholderType};
use crate::proto::milvus::{
    DeleteRequest, FlushRequest, FlushResponse, GetFlushStateRequest, GetFlushStateResponse, InsertRequest,
    MutationResult, QueryRequest, QueryResults as WireQueryResults, SearchRequest,
    SearchResults as WireSearchResults,
};
use crate::proto::schema::{CollectionSchema, DataType};
use crate::query::{pivot_query_results, pivot_search_results};
use crate::schema::{find_field, first_vector_field, resolve_insert_columns, FieldClass, SchemaResolver};

/// Default `limit` of the simple search shape
pub const DEFAULT_SEARCH_LIMIT: i64 = 100;

/// Output field that makes a query return the entity count
pub const COUNT_OUTPUT_FIELD: &str = "count(*)";

/// Search request ready to be sent, plus what the response pivot needs
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSearch {
    pub request: SearchRequest,
    pub round_decimal: Option<i32>,
    pub timeout: Option<Duration>,
}

fn check_round_decimal(round_decimal: Option<i32>) -> std::result::Result<(), ValidationError> {
    match round_decimal {
        Some(value) if !(-1..=6).contains(&value) => Err(ValidationError::InvalidRoundDecimal(value)),
        _ => Ok(()),
    }
}

/// Wire consistency level and whether the server default was requested
fn consistency(level: Option<ConsistencyLevel>) -> (i32, bool) {
    (level.unwrap_or(ConsistencyLevel::Bounded) as i32, level.is_none())
}

fn placeholder_type(data_type: DataType) -> Option<PlaceholderType> {
    match data_type {
        DataType::FloatVector => Some(PlaceholderType::FloatVector),
        DataType::BinaryVector => Some(PlaceholderType::BinaryVector),
        _ => None,
    }
}

/// Coerce every query vector to `vector_type` and check its width against
/// the anns field
fn check_query_vectors(
    field: &FieldClass,
    vectors: &[VectorData],
    vector_type: DataType,
) -> std::result::Result<Vec<VectorData>, SchemaError> {
    let expected = field.row_width();
    vectors
        .iter()
        .enumerate()
        .map(|(row, vector)| {
            if vector.len() != expected {
                return Err(SchemaError::DimensionMismatch {
                    check: DimensionCheck::Search,
                    field: field.name.clone(),
                    expected,
                    actual: vector.len(),
                });
            }
            vector.clone().coerce_to(vector_type).ok_or_else(|| SchemaError::ValueTypeMismatch {
                field: field.name.clone(),
                row,
                data_type: vector_type.as_str_name().to_string(),
            })
        })
        .collect()
}

fn anns_field(schema: &CollectionSchema, name: &str) -> std::result::Result<FieldClass, SchemaError> {
    let field = find_field(schema, name).ok_or_else(|| SchemaError::VectorFieldNotFound(name.to_string()))??;
    if !field.is_vector {
        return Err(SchemaError::VectorFieldNotFound(name.to_string()));
    }
    Ok(field)
}

/// `pk in [..]` filter selecting `ids`
fn primary_key_expr(field: &str, ids: &[PrimaryKey]) -> String {
    let values: Vec<String> = ids
        .iter()
        .map(|id| match id {
            PrimaryKey::Int(v) => v.to_string(),
            PrimaryKey::Str(s) => Value::String(s.clone()).to_string(),
        })
        .collect();
    format!("{} in [{}]", field, values.join(", "))
}

#[derive(Clone)]
pub struct DataService {
    ctx: ServiceContext,
    resolver: SchemaResolver,
}

impl DataService {
    pub fn new(ctx: ServiceContext) -> Self {
        let resolver = SchemaResolver::new(ctx.clone());
        Self { ctx, resolver }
    }

    /// Validate rows against the live schema and send them column-wise
    pub async fn insert(&self, req: &InsertReq) -> Result<MutationResult> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        if req.fields_data.is_empty() {
            return Err(ValidationError::EmptyInsertData.into());
        }

        let schema = self.resolver.describe_schema(&req.collection_name, req.timeout).await?;
        let columns = resolve_insert_columns(&schema, &req.fields_data)?;
        let request = InsertRequest {
            collection_name: req.collection_name.clone(),
            partition_name: req.partition_name.clone().unwrap_or_default(),
            fields_data: columns.into_iter().map(|column| column.into_field_data()).collect(),
            num_rows: req.fields_data.len() as u32,
            ..Default::default()
        };

        let result: MutationResult = self.ctx.call(Method::Insert, &request, req.timeout).await?;
        info!(
            "📝 Inserted {} of {} rows into {}",
            result.insert_cnt,
            request.num_rows,
            req.collection_name
        );
        Ok(result)
    }

    pub async fn delete(&self, req: &DeleteReq) -> Result<MutationResult> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.expr, ValidationError::MissingFilter)?;
        let request = DeleteRequest {
            collection_name: req.collection_name.clone(),
            partition_name: req.partition_name.clone().unwrap_or_default(),
            expr: req.expr.clone(),
            ..Default::default()
        };
        self.ctx.call(Method::Delete, &request, req.timeout).await
    }

    /// Search with either request shape. A non-success status comes back
    /// with empty results.
    pub async fn search(&self, input: impl Into<SearchInput>) -> Result<SearchResults> {
        let prepared = self.prepare_search(input.into()).await?;
        let response: WireSearchResults = self.ctx.call(Method::Search, &prepared.request, prepared.timeout).await?;

        let status = status_of(response.status.as_ref());
        let results = match response.results {
            Some(data) if status.is_success() && !data.scores.is_empty() => {
                pivot_search_results(&data, prepared.round_decimal)?
            }
            _ => Vec::new(),
        };
        debug!(
            "Search on {} returned {} result lists",
            prepared.request.collection_name,
            results.len()
        );
        Ok(SearchResults { status, results })
    }

    /// Validate a search and build its wire request without sending it
    pub async fn prepare_search(&self, input: SearchInput) -> Result<PreparedSearch> {
        match input {
            SearchInput::Detailed(req) => self.prepare_detailed(req).await,
            SearchInput::Simple(req) => self.prepare_simple(req).await,
        }
    }

    async fn prepare_detailed(&self, req: SearchReq) -> Result<PreparedSearch> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        if req.vectors.is_empty() {
            return Err(ValidationError::MissingVectors.into());
        }
        let vector_type = req
            .vector_type
            .filter(|t| placeholder_type(*t).is_some())
            .ok_or(ValidationError::MissingVectorType)?;
        let params = &req.search_params;
        let anns = params
            .anns_field
            .clone()
            .ok_or(ValidationError::MissingSearchParams("anns_field"))?;
        let topk = params.topk.ok_or(ValidationError::MissingSearchParams("topk"))?;
        let metric_type = params
            .metric_type
            .clone()
            .ok_or(ValidationError::MissingSearchParams("metric_type"))?;
        let extra = params.params.clone().ok_or(ValidationError::MissingSearchParams("params"))?;
        check_round_decimal(params.round_decimal)?;

        let schema = self.resolver.describe_schema(&req.collection_name, req.timeout).await?;
        let field = anns_field(&schema, &anns)?;
        if vector_type != field.data_type {
            return Err(SchemaError::ValueTypeMismatch {
                field: field.name.clone(),
                row: 0,
                data_type: field.data_type.as_str_name().to_string(),
            }
            .into());
        }
        let vectors = check_query_vectors(&field, &req.vectors, vector_type)?;

        let mut search_params = Map::new();
        search_params.insert("anns_field".to_string(), json!(anns));
        search_params.insert("topk".to_string(), json!(topk));
        search_params.insert("metric_type".to_string(), json!(metric_type));
        search_params.insert("params".to_string(), json!(extra));
        search_params.insert("round_decimal".to_string(), json!(params.round_decimal.unwrap_or(-1)));

        let (consistency_level, use_default_consistency) = consistency(req.consistency_level);
        Ok(PreparedSearch {
            request: SearchRequest {
                collection_name: req.collection_name.clone(),
                partition_names: req.partition_names.clone(),
                dsl: req.expr.clone().unwrap_or_default(),
                placeholder_group: build_placeholder_group(&vectors, vector_type_placeholder(vector_type)),
                dsl_type: DslType::BoolExprV1 as i32,
                output_fields: req.output_fields.clone(),
                search_params: to_pairs(Some(&search_params)),
                travel_timestamp: req.travel_timestamp.unwrap_or_default(),
                nq: vectors.len() as i64,
                consistency_level,
                use_default_consistency,
                ..Default::default()
            },
            round_decimal: params.round_decimal,
            timeout: req.timeout,
        })
    }

    async fn prepare_simple(&self, req: SearchSimpleReq) -> Result<PreparedSearch> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        if req.data.is_empty() {
            return Err(ValidationError::MissingVectors.into());
        }
        check_round_decimal(req.round_decimal)?;

        let schema = self.resolver.describe_schema(&req.collection_name, req.timeout).await?;
        let field = match &req.anns_field {
            Some(name) => anns_field(&schema, name)?,
            None => first_vector_field(&schema)
                .ok_or_else(|| SchemaError::NoVectorField(req.collection_name.clone()))??,
        };
        let vector_type = field.data_type;
        if placeholder_type(vector_type).is_none() {
            return Err(SchemaError::UnsupportedDataType(vector_type.as_str_name().to_string()).into());
        }
        let vectors = check_query_vectors(&field, &req.data, vector_type)?;

        let output_fields = if req.output_fields.is_empty() {
            schema
                .fields
                .iter()
                .filter(|f| DataType::try_from(f.data_type).map_or(true, |t| !t.is_vector()))
                .map(|f| f.name.clone())
                .collect()
        } else {
            req.output_fields.clone()
        };

        let mut search_params = Map::new();
        search_params.insert("anns_field".to_string(), json!(field.name));
        search_params.insert("topk".to_string(), json!(req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)));
        search_params.insert("offset".to_string(), json!(req.offset.unwrap_or(0)));
        search_params.insert("metric_type".to_string(), json!(req.metric_type.clone().unwrap_or_default()));
        search_params.insert("params".to_string(), json!(Value::Object(req.params.clone()).to_string()));
        search_params.insert("round_decimal".to_string(), json!(req.round_decimal.unwrap_or(-1)));

        let (consistency_level, use_default_consistency) = consistency(req.consistency_level);
        Ok(PreparedSearch {
            request: SearchRequest {
                collection_name: req.collection_name.clone(),
                partition_names: req.partition_names.clone(),
                dsl: req.filter.clone().unwrap_or_default(),
                placeholder_group: build_placeholder_group(&vectors, vector_type_placeholder(vector_type)),
                dsl_type: DslType::BoolExprV1 as i32,
                output_fields,
                search_params: to_pairs(Some(&search_params)),
                nq: vectors.len() as i64,
                consistency_level,
                use_default_consistency,
                ..Default::default()
            },
            round_decimal: req.round_decimal,
            timeout: req.timeout,
        })
    }

    /// Filter query; rows come back pivoted
    pub async fn query(&self, req: &QueryReq) -> Result<QueryResults> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.expr, ValidationError::MissingFilter)?;

        let mut query_params = Map::new();
        if let Some(limit) = req.limit {
            query_params.insert("limit".to_string(), json!(limit));
        }
        if let Some(offset) = req.offset {
            query_params.insert("offset".to_string(), json!(offset));
        }
        let (consistency_level, use_default_consistency) = consistency(req.consistency_level);
        let request = QueryRequest {
            collection_name: req.collection_name.clone(),
            expr: req.expr.clone(),
            output_fields: req.output_fields.clone(),
            partition_names: req.partition_names.clone(),
            travel_timestamp: req.travel_timestamp.unwrap_or_default(),
            query_params: to_pairs(Some(&query_params)),
            consistency_level,
            use_default_consistency,
            ..Default::default()
        };
        self.run_query(&request, req.timeout).await
    }

    async fn run_query(&self, request: &QueryRequest, timeout: Option<Duration>) -> Result<QueryResults> {
        let response: WireQueryResults = self.ctx.call(Method::Query, request, timeout).await?;
        let status = status_of(response.status.as_ref());
        let data = if status.is_success() {
            pivot_query_results(&response.fields_data)?
        } else {
            Vec::new()
        };
        Ok(QueryResults { status, data })
    }

    /// Fetch entities by primary key
    pub async fn get(&self, req: &GetReq) -> Result<QueryResults> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        if req.ids.is_empty() {
            return Err(ValidationError::MissingIds.into());
        }
        let schema = self.resolver.describe_schema(&req.collection_name, req.timeout).await?;
        let primary_key = schema
            .fields
            .iter()
            .find(|f| f.is_primary_key)
            .ok_or_else(|| MilvusError::MalformedResponse(format!("schema of `{}` has no primary key", req.collection_name)))?;

        let (consistency_level, use_default_consistency) = consistency(None);
        let request = QueryRequest {
            collection_name: req.collection_name.clone(),
            expr: primary_key_expr(&primary_key.name, &req.ids),
            output_fields: req.output_fields.clone(),
            partition_names: req.partition_names.clone(),
            consistency_level,
            use_default_consistency,
            ..Default::default()
        };
        self.run_query(&request, req.timeout).await
    }

    /// Number of entities matching `expr`, or all of them
    pub async fn count(&self, req: &CountReq) -> Result<CountResult> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let (consistency_level, use_default_consistency) = consistency(None);
        let request = QueryRequest {
            collection_name: req.collection_name.clone(),
            expr: req.expr.clone().unwrap_or_default(),
            output_fields: vec![COUNT_OUTPUT_FIELD.to_string()],
            consistency_level,
            use_default_consistency,
            ..Default::default()
        };
        let results = self.run_query(&request, req.timeout).await?;
        let data = results
            .data
            .first()
            .and_then(|row| row.get(COUNT_OUTPUT_FIELD))
            .and_then(FieldValue::as_i64)
            .unwrap_or(0);
        Ok(CountResult {
            status: results.status,
            data,
        })
    }

    pub async fn flush(&self, req: &FlushReq) -> Result<FlushResponse> {
        if req.collection_names.is_empty() {
            return Err(ValidationError::MissingCollectionNames.into());
        }
        let request = FlushRequest {
            collection_names: req.collection_names.clone(),
            ..Default::default()
        };
        self.ctx.call(Method::Flush, &request, req.timeout).await
    }

    /// Flush, then poll `GetFlushState` until every sealed segment is flushed
    pub async fn flush_sync(&self, req: &FlushReq, cancel: Option<&CancellationToken>) -> Result<FlushResponse> {
        let response = self.flush(req).await?;
        ensure_success("Flush", &status_of(response.status.as_ref()))?;

        let mut segment_ids: Vec<i64> = response
            .coll_seg_ids
            .values()
            .flat_map(|ids| ids.data.iter().copied())
            .collect();
        segment_ids.sort_unstable();

        let (collection_name, flush_ts) = match req.collection_names.as_slice() {
            [name] => (Some(name.clone()), response.coll_flush_ts.get(name).copied()),
            _ => (None, None),
        };
        let state_req = GetFlushStateReq {
            segment_ids,
            flush_ts,
            collection_name,
            timeout: req.timeout,
        };
        let state_req = &state_req;
        crate::utils::poll_until(
            "flush_sync",
            self.ctx.poll_config(),
            cancel,
            move || async move {
                let state = self.get_flush_state(state_req).await?;
                ensure_success("GetFlushState", &status_of(state.status.as_ref()))?;
                Ok(state)
            },
            |state: &GetFlushStateResponse| state.flushed,
        )
        .await?;

        info!("✅ Flushed {}", req.collection_names.join(", "));
        Ok(response)
    }

    pub async fn get_flush_state(&self, req: &GetFlushStateReq) -> Result<GetFlushStateResponse> {
        let request = GetFlushStateRequest {
            segment_ids: req.segment_ids.clone(),
            flush_ts: req.flush_ts.unwrap_or_default(),
            collection_name: req.collection_name.clone().unwrap_or_default(),
            ..Default::default()
        };
        self.ctx.call(Method::GetFlushState, &request, req.timeout).await
    }
}

fn vector_type_placeholder(data_type: DataType) -> PlaceholderType {
    placeholder_type(data_type).unwrap_or(PlaceholderType::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_field(dim: usize) -> FieldClass {
        FieldClass {
            name: "vec".to_string(),
            field_id: 101,
            data_type: DataType::FloatVector,
            is_vector: true,
            is_primary_key: false,
            auto_id: false,
            dim: Some(dim),
        }
    }

    #[test]
    fn test_round_decimal_range() {
        assert!(check_round_decimal(None).is_ok());
        assert!(check_round_decimal(Some(-1)).is_ok());
        assert!(check_round_decimal(Some(6)).is_ok());
        assert_eq!(check_round_decimal(Some(7)), Err(ValidationError::InvalidRoundDecimal(7)));
    }

    #[test]
    fn test_query_vector_dimension_gate() {
        let err = check_query_vectors(&float_field(4), &[VectorData::Float(vec![0.1, 0.2, 0.3])], DataType::FloatVector)
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DimensionMismatch {
                check: DimensionCheck::Search,
                field: "vec".to_string(),
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_binary_query_is_checked_in_bytes() {
        let field = FieldClass {
            data_type: DataType::BinaryVector,
            dim: Some(16),
            ..float_field(16)
        };
        let ok = check_query_vectors(&field, &[VectorData::Binary(vec![0xFF, 0x00])], DataType::BinaryVector);
        assert!(ok.is_ok());
        let err = check_query_vectors(&field, &[VectorData::Binary(vec![0xFF; 16])], DataType::BinaryVector);
        assert!(err.is_err());
    }

    #[test]
    fn test_primary_key_expr() {
        assert_eq!(
            primary_key_expr("id", &[PrimaryKey::Int(1), PrimaryKey::Int(2)]),
            "id in [1, 2]"
        );
        assert_eq!(
            primary_key_expr("name", &[PrimaryKey::Str("a\"b".to_string())]),
            "name in [\"a\\\"b\"]"
        );
    }

    #[test]
    fn test_default_consistency() {
        assert_eq!(consistency(None), (ConsistencyLevel::Bounded as i32, true));
        assert_eq!(
            consistency(Some(ConsistencyLevel::Strong)),
            (ConsistencyLevel::Strong as i32, false)
        );
    }
}
