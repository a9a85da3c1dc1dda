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

use super::{require, ServiceContext};
use crate::core::errors::{Result, ValidationError};
use crate::core::requests::{BareReq, ResourceGroupReq, TransferNodeReq, TransferReplicaReq};
use crate::network::Method;
use crate::proto::common::Status;
use crate::proto::milvus::{
    DescribeResourceGroupResponse, ListResourceGroupsRequest, ListResourceGroupsResponse, ResourceGroupRequest,
    TransferNodeRequest, TransferReplicaRequest,
};

/// Resource groups and node/replica placement
#[derive(Clone)]
pub struct ResourceService {
    ctx: ServiceContext,
}

impl ResourceService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    fn group_request(req: &ResourceGroupReq) -> std::result::Result<ResourceGroupRequest, ValidationError> {
        require(&req.resource_group, ValidationError::MissingResourceGroup)?;
        Ok(ResourceGroupRequest {
            resource_group: req.resource_group.clone(),
        })
    }

    pub async fn create_resource_group(&self, req: &ResourceGroupReq) -> Result<Status> {
        let request = Self::group_request(req)?;
        info!("🆕 Creating resource group: {}", req.resource_group);
        self.ctx.call_status(Method::CreateResourceGroup, &request, req.timeout).await
    }

    pub async fn drop_resource_group(&self, req: &ResourceGroupReq) -> Result<Status> {
        let request = Self::group_request(req)?;
        info!("🗑️ Dropping resource group: {}", req.resource_group);
        self.ctx.call_status(Method::DropResourceGroup, &request, req.timeout).await
    }

    pub async fn list_resource_groups(&self, req: &BareReq) -> Result<ListResourceGroupsResponse> {
        self.ctx
            .call(Method::ListResourceGroups, &ListResourceGroupsRequest {}, req.timeout)
            .await
    }

    pub async fn describe_resource_group(&self, req: &ResourceGroupReq) -> Result<DescribeResourceGroupResponse> {
        let request = Self::group_request(req)?;
        self.ctx.call(Method::DescribeResourceGroup, &request, req.timeout).await
    }

    pub async fn transfer_node(&self, req: &TransferNodeReq) -> Result<Status> {
        if req.source_resource_group.is_empty() || req.target_resource_group.is_empty() {
            return Err(ValidationError::MissingTransferGroups.into());
        }
        let request = TransferNodeRequest {
            source_resource_group: req.source_resource_group.clone(),
            target_resource_group: req.target_resource_group.clone(),
            num_node: req.num_node,
        };
        self.ctx.call_status(Method::TransferNode, &request, req.timeout).await
    }

    pub async fn transfer_replica(&self, req: &TransferReplicaReq) -> Result<Status> {
        if req.source_resource_group.is_empty() || req.target_resource_group.is_empty() {
            return Err(ValidationError::MissingTransferGroups.into());
        }
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        let request = TransferReplicaRequest {
            source_resource_group: req.source_resource_group.clone(),
            target_resource_group: req.target_resource_group.clone(),
            collection_name: req.collection_name.clone(),
            num_replica: req.num_replica,
            ..Default::default()
        };
        self.ctx.call_status(Method::TransferReplica, &request, req.timeout).await
    }
}
