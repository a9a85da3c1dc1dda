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

use tracing::info;

use super::collection_service::statistics;
use super::{require, ServiceContext};
use crate::core::errors::{Result, ValidationError};
use crate::core::requests::{LoadPartitionsReq, PartitionReq, ReleasePartitionsReq, ShowPartitionsReq};
use crate::core::responses::StatisticsResponse;
use crate::network::Method;
use crate::proto::common::Status;
use crate::proto::milvus::{
    BoolResponse, GetPartitionStatisticsResponse, LoadPartitionsRequest, PartitionRequest, ReleasePartitionsRequest,
    ShowPartitionsRequest, ShowPartitionsResponse, ShowType,
};

/// Partition management within one collection
#[derive(Clone)]
pub struct PartitionService {
    ctx: ServiceContext,
}

impl PartitionService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn partition_request(req: &PartitionReq) -> std::result::Result<PartitionRequest, ValidationError> {
        if req.collection_name.trim().is_empty() || req.partition_name.trim().is_empty() {
            return Err(ValidationError::MissingCollectionOrPartition);
        }
        Ok(PartitionRequest {
            collection_name: req.collection_name.clone(),
            partition_name: req.partition_name.clone(),
            ..Default::default()
        })
    }

    fn partition_names(names: &[String]) -> std::result::Result<Vec<String>, ValidationError> {
        if names.is_empty() {
            return Err(ValidationError::MissingPartitionNames);
        }
        Ok(names.to_vec())
    }

    pub async fn create_partition(&self, req: &PartitionReq) -> Result<Status> {
        let request = Self::partition_request(req)?;
        info!("🆕 Creating partition {} in {}", req.partition_name, req.collection_name);
        self.ctx.call_status(Method::CreatePartition, &request, req.timeout).await
    }

    pub async fn has_partition(&self, req: &PartitionReq) -> Result<BoolResponse> {
        let request = Self::partition_request(req)?;
        self.ctx.call(Method::HasPartition, &request, req.timeout).await
    }

    pub async fn drop_partition(&self, req: &PartitionReq) -> Result<Status> {
        let request = Self::partition_request(req)?;
        info!("🗑️ Dropping partition {} of {}", req.partition_name, req.collection_name);
        self.ctx.call_status(Method::DropPartition, &request, req.timeout).await
    }

    pub async fn get_partition_statistics(&self, req: &PartitionReq) -> Result<StatisticsResponse> {
        let request = Self::partition_request(req)?;
        let response: GetPartitionStatisticsResponse = self
            .ctx
            .call(Method::GetPartitionStatistics, &request, req.timeout)
            .await?;
        Ok(statistics(response))
    }

    pub async fn show_partitions(&self, req: &ShowPartitionsReq) -> Result<ShowPartitionsResponse> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = ShowPartitionsRequest {
            collection_name: req.collection_name.clone(),
            partition_names: req.partition_names.clone(),
            r#type: ShowType::All as i32,
            ..Default::default()
        };
        self.ctx.call(Method::ShowPartitions, &request, req.timeout).await
    }

    pub async fn load_partitions(&self, req: &LoadPartitionsReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = LoadPartitionsRequest {
            collection_name: req.collection_name.clone(),
            partition_names: Self::partition_names(&req.partition_names)?,
            replica_number: req.replica_number.unwrap_or_default(),
            resource_groups: req.resource_groups.clone(),
            ..Default::default()
        };
        self.ctx.call_status(Method::LoadPartitions, &request, req.timeout).await
    }

    pub async fn release_partitions(&self, req: &ReleasePartitionsReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = ReleasePartitionsRequest {
            collection_name: req.collection_name.clone(),
            partition_names: Self::partition_names(&req.partition_names)?,
            ..Default::default()
        };
        self.ctx.call_status(Method::ReleasePartitions, &request, req.timeout).await
    }
}
