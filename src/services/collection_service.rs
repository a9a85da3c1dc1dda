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

//! Collection Service
//!
//! Create, describe, load and drop collections and manage their aliases.
//! `load_collection_sync` waits for the loading progress to reach 100%.

use prost::Message;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{ensure_success, require, status_of, ServiceContext};
use crate::codec::key_value::{from_typed_pairs, to_pairs, ValueKind};
use crate::core::errors::{Result, ValidationError};
use crate::core::requests::{
    AliasReq, CollectionNameReq, CreateCollectionReq, DropAliasReq, GetLoadingProgressReq, LoadCollectionReq,
    RenameCollectionReq, ShowCollectionsReq,
};
use crate::core::responses::StatisticsResponse;
use crate::core::types::FieldSpec;
use crate::network::Method;
use crate::proto::common::{ConsistencyLevel, Status};
use crate::proto::milvus::{
    AlterAliasRequest, BoolResponse, CreateAliasRequest, CreateCollectionRequest, DescribeCollectionRequest,
    DescribeCollectionResponse, DropAliasRequest, DropCollectionRequest, GetCollectionStatisticsRequest,
    GetCollectionStatisticsResponse, GetLoadingProgressRequest, GetLoadingProgressResponse, HasCollectionRequest,
    LoadCollectionRequest, ReleaseCollectionRequest, RenameCollectionRequest, ShowCollectionsRequest,
    ShowCollectionsResponse, ShowType,
};
use crate::proto::schema::{CollectionSchema, DataType, FieldSchema};

/// Validate a create request and build the schema sent to the server
pub fn build_collection_schema(req: &CreateCollectionReq) -> std::result::Result<CollectionSchema, ValidationError> {
    if req.collection_name.trim().is_empty() || req.fields.is_empty() {
        return Err(ValidationError::MissingFieldsOrCollectionName);
    }

    let primary_keys: Vec<&FieldSpec> = req.fields.iter().filter(|f| f.is_primary_key).collect();
    if primary_keys.len() != 1 {
        return Err(ValidationError::PrimaryKeyCount(primary_keys.len()));
    }
    let primary_key = primary_keys[0];
    if primary_key.data_type != DataType::Int64 {
        return Err(ValidationError::PrimaryKeyNotInt64);
    }

    let vector_fields: Vec<&FieldSpec> = req.fields.iter().filter(|f| f.data_type.is_vector()).collect();
    if vector_fields
        .iter()
        .any(|f| !matches!(f.data_type, DataType::FloatVector | DataType::BinaryVector))
    {
        return Err(ValidationError::UnsupportedVectorType);
    }
    if vector_fields.len() != 1 {
        return Err(ValidationError::VectorFieldCount(vector_fields.len()));
    }

    for field in &req.fields {
        if field.data_type.is_vector() {
            let raw = field.type_params.get("dim").ok_or(ValidationError::MissingDim)?;
            let dim = parse_positive(raw).ok_or_else(|| ValidationError::InvalidDim(display_param(raw)))?;
            if field.data_type == DataType::BinaryVector && dim % 8 != 0 {
                return Err(ValidationError::BinaryDimNotMultipleOf8);
            }
        }
        if field.data_type == DataType::VarChar && !field.type_params.contains_key("max_length") {
            return Err(ValidationError::MissingMaxLength);
        }
    }

    let fields = req
        .fields
        .iter()
        .map(|field| FieldSchema {
            name: field.name.clone(),
            description: field.description.clone(),
            is_primary_key: field.is_primary_key,
            auto_id: field.auto_id,
            data_type: field.data_type as i32,
            type_params: to_pairs(Some(&field.type_params)),
            ..Default::default()
        })
        .collect();

    Ok(CollectionSchema {
        name: req.collection_name.clone(),
        description: req.description.clone(),
        auto_id: primary_key.auto_id,
        fields,
        enable_dynamic_field: req.enable_dynamic_field,
    })
}

fn parse_positive(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n| *n > 0)
}

fn display_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Collection and alias management
#[derive(Clone)]
pub struct CollectionService {
    ctx: ServiceContext,
}

impl CollectionService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create_collection(&self, req: &CreateCollectionReq) -> Result<Status> {
        let schema = build_collection_schema(req)?;
        info!("🆕 Creating collection: {} ({} fields)", req.collection_name, schema.fields.len());

        let request = CreateCollectionRequest {
            collection_name: req.collection_name.clone(),
            schema: schema.encode_to_vec(),
            shards_num: req.shards_num.unwrap_or_default(),
            consistency_level: req.consistency_level.unwrap_or(ConsistencyLevel::Bounded) as i32,
            num_partitions: req.num_partitions.unwrap_or_default(),
            ..Default::default()
        };
        self.ctx.call_status(Method::CreateCollection, &request, req.timeout).await
    }

    pub async fn has_collection(&self, req: &CollectionNameReq) -> Result<BoolResponse> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = HasCollectionRequest {
            collection_name: req.collection_name.clone(),
            ..Default::default()
        };
        self.ctx.call(Method::HasCollection, &request, req.timeout).await
    }

    pub async fn show_collections(&self, req: &ShowCollectionsReq) -> Result<ShowCollectionsResponse> {
        let show_type = if req.in_memory { ShowType::InMemory } else { ShowType::All };
        let request = ShowCollectionsRequest {
            r#type: show_type as i32,
            collection_names: req.collection_names.clone(),
            ..Default::default()
        };
        self.ctx.call(Method::ShowCollections, &request, req.timeout).await
    }

    pub async fn describe_collection(&self, req: &CollectionNameReq) -> Result<DescribeCollectionResponse> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = DescribeCollectionRequest {
            collection_name: req.collection_name.clone(),
            ..Default::default()
        };
        self.ctx.call(Method::DescribeCollection, &request, req.timeout).await
    }

    /// Raw statistics plus `data.row_count`
    pub async fn get_collection_statistics(&self, req: &CollectionNameReq) -> Result<StatisticsResponse> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = GetCollectionStatisticsRequest {
            collection_name: req.collection_name.clone(),
            ..Default::default()
        };
        let response: GetCollectionStatisticsResponse = self
            .ctx
            .call(Method::GetCollectionStatistics, &request, req.timeout)
            .await?;
        Ok(statistics(response))
    }

    pub async fn load_collection(&self, req: &LoadCollectionReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = LoadCollectionRequest {
            collection_name: req.collection_name.clone(),
            replica_number: req.replica_number.unwrap_or_default(),
            resource_groups: req.resource_groups.clone(),
            refresh: req.refresh,
            ..Default::default()
        };
        self.ctx.call_status(Method::LoadCollection, &request, req.timeout).await
    }

    /// Load, then poll `GetLoadingProgress` until it reports 100%
    pub async fn load_collection_sync(
        &self,
        req: &LoadCollectionReq,
        cancel: Option<&CancellationToken>,
    ) -> Result<Status> {
        let status = self.load_collection(req).await?;
        ensure_success("LoadCollection", &status)?;

        let progress_req = GetLoadingProgressReq {
            collection_name: req.collection_name.clone(),
            partition_names: Vec::new(),
            timeout: req.timeout,
        };
        let progress_req = &progress_req;
        let final_progress = crate::utils::poll_until(
            "load_collection_sync",
            self.ctx.poll_config(),
            cancel,
            move || async move {
                let response = self.get_loading_progress(progress_req).await?;
                ensure_success("GetLoadingProgress", &status_of(response.status.as_ref()))?;
                Ok(response)
            },
            |response: &GetLoadingProgressResponse| response.progress >= 100,
        )
        .await?;

        info!(
            "✅ Collection loaded: {} ({}%)",
            req.collection_name, final_progress.progress
        );
        Ok(status)
    }

    pub async fn get_loading_progress(&self, req: &GetLoadingProgressReq) -> Result<GetLoadingProgressResponse> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = GetLoadingProgressRequest {
            collection_name: req.collection_name.clone(),
            partition_names: req.partition_names.clone(),
            ..Default::default()
        };
        let response: GetLoadingProgressResponse =
            self.ctx.call(Method::GetLoadingProgress, &request, req.timeout).await?;
        debug!("Loading progress of {}: {}%", req.collection_name, response.progress);
        Ok(response)
    }

    pub async fn release_collection(&self, req: &CollectionNameReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = ReleaseCollectionRequest {
            collection_name: req.collection_name.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::ReleaseCollection, &request, req.timeout).await
    }

    pub async fn rename_collection(&self, req: &RenameCollectionReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.new_collection_name, ValidationError::MissingNewCollectionName)?;
        let request = RenameCollectionRequest {
            old_name: req.collection_name.clone(),
            new_name: req.new_collection_name.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::RenameCollection, &request, req.timeout).await
    }

    pub async fn drop_collection(&self, req: &CollectionNameReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        info!("🗑️ Dropping collection: {}", req.collection_name);
        let request = DropCollectionRequest {
            collection_name: req.collection_name.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::DropCollection, &request, req.timeout).await
    }

    pub async fn create_alias(&self, req: &AliasReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.alias, ValidationError::MissingAlias)?;
        let request = CreateAliasRequest {
            collection_name: req.collection_name.clone(),
            alias: req.alias.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::CreateAlias, &request, req.timeout).await
    }

    pub async fn drop_alias(&self, req: &DropAliasReq) -> Result<Status> {
        require(&req.alias, ValidationError::MissingAlias)?;
        let request = DropAliasRequest {
            alias: req.alias.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::DropAlias, &request, req.timeout).await
    }

    pub async fn alter_alias(&self, req: &AliasReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.alias, ValidationError::MissingAlias)?;
        let request = AlterAliasRequest {
            collection_name: req.collection_name.clone(),
            alias: req.alias.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::AlterAlias, &request, req.timeout).await
    }
}

pub(crate) fn statistics(response: GetCollectionStatisticsResponse) -> StatisticsResponse {
    let data = from_typed_pairs(&response.stats, &[("row_count", ValueKind::Json)]);
    StatisticsResponse {
        status: status_of(response.status.as_ref()),
        stats: response.stats,
        data,
    }
}
