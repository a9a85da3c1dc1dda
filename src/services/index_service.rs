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

//! Index Service
//!
//! Index parameters travel as key/value pairs, e.g. `index_type`,
//! `metric_type` and a JSON-encoded `params` entry.

use tracing::info;

use super::{require, ServiceContext};
use crate::codec::key_value::to_pairs;
use crate::core::errors::{Result, ValidationError};
use crate::core::requests::{CreateIndexReq, IndexReq};
use crate::network::Method;
use crate::proto::common::Status;
use crate::proto::milvus::{CreateIndexRequest, DescribeIndexResponse, GetIndexStateResponse, IndexRequest};

#[derive(Clone)]
pub struct IndexService {
    ctx: ServiceContext,
}

impl IndexService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create_index(&self, req: &CreateIndexReq) -> Result<Status> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        require(&req.field_name, ValidationError::MissingFieldName)?;
        info!("🔧 Creating index on {}.{}", req.collection_name, req.field_name);

        let request = CreateIndexRequest {
            collection_name: req.collection_name.clone(),
            field_name: req.field_name.clone(),
            extra_params: to_pairs(Some(&req.extra_params)),
            index_name: req.index_name.clone().unwrap_or_default(),
            ..Default::default()
        };
        self.ctx.call_status(Method::CreateIndex, &request, req.timeout).await
    }

    fn index_request(req: &IndexReq) -> std::result::Result<IndexRequest, ValidationError> {
        require(&req.collection_name, ValidationError::MissingCollectionName)?;
        Ok(IndexRequest {
            collection_name: req.collection_name.clone(),
            field_name: req.field_name.clone().unwrap_or_default(),
            index_name: req.index_name.clone().unwrap_or_default(),
            ..Default::default()
        })
    }

    pub async fn describe_index(&self, req: &IndexReq) -> Result<DescribeIndexResponse> {
        let request = Self::index_request(req)?;
        self.ctx.call(Method::DescribeIndex, &request, req.timeout).await
    }

    pub async fn get_index_state(&self, req: &IndexReq) -> Result<GetIndexStateResponse> {
        let request = Self::index_request(req)?;
        self.ctx.call(Method::GetIndexState, &request, req.timeout).await
    }

    pub async fn drop_index(&self, req: &IndexReq) -> Result<Status> {
        let request = Self::index_request(req)?;
        if request.field_name.is_empty() && request.index_name.is_empty() {
            return Err(ValidationError::MissingFieldName.into());
        }
        info!("🗑️ Dropping index of {}", req.collection_name);
        self.ctx.call_status(Method::DropIndex, &request, req.timeout).await
    }
}
