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

//! Milvus client
//!
//! One handle per capability service, all sharing a single
//! [`ServiceContext`]. The flat methods below delegate to those services.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::core::config::ClientConfig;
use crate::core::errors::Result;
use crate::core::requests::*;
use crate::core::responses::{CountResult, QueryResults, SearchResults, StatisticsResponse};
use crate::network::{GrpcInvoker, Method, RpcInvoker};
use crate::proto::common::Status;
use crate::proto::milvus::{
    BoolResponse, CheckHealthRequest, CheckHealthResponse, DescribeCollectionResponse,
    DescribeIndexResponse, DescribeResourceGroupResponse, FlushResponse, GetFlushStateResponse,
    GetIndexStateResponse, GetLoadingProgressResponse, GetVersionRequest, GetVersionResponse,
    ListCredUsersResponse, ListResourceGroupsResponse, MutationResult, SelectRoleResponse,
    ShowCollectionsResponse, ShowPartitionsResponse,
};
use crate::services::{
    CollectionService, DataService, IndexService, PartitionService, ResourceService, ServiceContext,
    UserService,
};

#[derive(Clone)]
pub struct MilvusClient {
    ctx: ServiceContext,
    collections: CollectionService,
    partitions: PartitionService,
    indexes: IndexService,
    data: DataService,
    users: UserService,
    resources: ResourceService,
}

impl MilvusClient {
    /// Validate `config` and open a gRPC channel to the server
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let invoker = GrpcInvoker::connect(&config).await?;
        Ok(Self::with_invoker(Arc::new(invoker), &config))
    }

    /// Build a client over any invoker, e.g. a [`StubInvoker`](crate::network::StubInvoker)
    pub fn with_invoker(invoker: Arc<dyn RpcInvoker>, config: &ClientConfig) -> Self {
        let ctx = ServiceContext::new(invoker, config);
        Self {
            collections: CollectionService::new(ctx.clone()),
            partitions: PartitionService::new(ctx.clone()),
            indexes: IndexService::new(ctx.clone()),
            data: DataService::new(ctx.clone()),
            users: UserService::new(ctx.clone()),
            resources: ResourceService::new(ctx.clone()),
            ctx,
        }
    }

    pub fn collections(&self) -> &CollectionService {
        &self.collections
    }

    pub fn partitions(&self) -> &PartitionService {
        &self.partitions
    }

    pub fn indexes(&self) -> &IndexService {
        &self.indexes
    }

    pub fn data(&self) -> &DataService {
        &self.data
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn resources(&self) -> &ResourceService {
        &self.resources
    }

    // Server

    pub async fn get_version(&self, req: &GetVersionReq) -> Result<GetVersionResponse> {
        self.ctx.call(Method::GetVersion, &GetVersionRequest {}, req.timeout).await
    }

    pub async fn check_health(&self, req: &CheckHealthReq) -> Result<CheckHealthResponse> {
        self.ctx.call(Method::CheckHealth, &CheckHealthRequest {}, req.timeout).await
    }

    // Collections

    pub async fn create_collection(&self, req: &CreateCollectionReq) -> Result<Status> {
        self.collections.create_collection(req).await
    }

    pub async fn has_collection(&self, req: &HasCollectionReq) -> Result<BoolResponse> {
        self.collections.has_collection(req).await
    }

    pub async fn show_collections(&self, req: &ShowCollectionsReq) -> Result<ShowCollectionsResponse> {
        self.collections.show_collections(req).await
    }

    pub async fn describe_collection(&self, req: &DescribeCollectionReq) -> Result<DescribeCollectionResponse> {
        self.collections.describe_collection(req).await
    }

    pub async fn get_collection_statistics(&self, req: &GetCollectionStatisticsReq) -> Result<StatisticsResponse> {
        self.collections.get_collection_statistics(req).await
    }

    pub async fn load_collection(&self, req: &LoadCollectionReq) -> Result<Status> {
        self.collections.load_collection(req).await
    }

    pub async fn load_collection_sync(
        &self,
        req: &LoadCollectionReq,
        cancel: Option<&CancellationToken>,
    ) -> Result<Status> {
        self.collections.load_collection_sync(req, cancel).await
    }

    pub async fn get_loading_progress(&self, req: &GetLoadingProgressReq) -> Result<GetLoadingProgressResponse> {
        self.collections.get_loading_progress(req).await
    }

    pub async fn release_collection(&self, req: &ReleaseCollectionReq) -> Result<Status> {
        self.collections.release_collection(req).await
    }

    pub async fn rename_collection(&self, req: &RenameCollectionReq) -> Result<Status> {
        self.collections.rename_collection(req).await
    }

    pub async fn drop_collection(&self, req: &DropCollectionReq) -> Result<Status> {
        self.collections.drop_collection(req).await
    }

    pub async fn create_alias(&self, req: &CreateAliasReq) -> Result<Status> {
        self.collections.create_alias(req).await
    }

    pub async fn drop_alias(&self, req: &DropAliasReq) -> Result<Status> {
        self.collections.drop_alias(req).await
    }

    pub async fn alter_alias(&self, req: &AlterAliasReq) -> Result<Status> {
        self.collections.alter_alias(req).await
    }

    // Partitions

    pub async fn create_partition(&self, req: &CreatePartitionReq) -> Result<Status> {
        self.partitions.create_partition(req).await
    }

    pub async fn has_partition(&self, req: &HasPartitionReq) -> Result<BoolResponse> {
        self.partitions.has_partition(req).await
    }

    pub async fn drop_partition(&self, req: &DropPartitionReq) -> Result<Status> {
        self.partitions.drop_partition(req).await
    }

    pub async fn get_partition_statistics(&self, req: &GetPartitionStatisticsReq) -> Result<StatisticsResponse> {
        self.partitions.get_partition_statistics(req).await
    }

    pub async fn show_partitions(&self, req: &ShowPartitionsReq) -> Result<ShowPartitionsResponse> {
        self.partitions.show_partitions(req).await
    }

    pub async fn load_partitions(&self, req: &LoadPartitionsReq) -> Result<Status> {
        self.partitions.load_partitions(req).await
    }

    pub async fn release_partitions(&self, req: &ReleasePartitionsReq) -> Result<Status> {
        self.partitions.release_partitions(req).await
    }

    // Indexes

    pub async fn create_index(&self, req: &CreateIndexReq) -> Result<Status> {
        self.indexes.create_index(req).await
    }

    pub async fn describe_index(&self, req: &DescribeIndexReq) -> Result<DescribeIndexResponse> {
        self.indexes.describe_index(req).await
    }

    pub async fn get_index_state(&self, req: &GetIndexStateReq) -> Result<GetIndexStateResponse> {
        self.indexes.get_index_state(req).await
    }

    pub async fn drop_index(&self, req: &DropIndexReq) -> Result<Status> {
        self.indexes.drop_index(req).await
    }

    // Data

    pub async fn insert(&self, req: &InsertReq) -> Result<MutationResult> {
        self.data.insert(req).await
    }

    pub async fn delete(&self, req: &DeleteReq) -> Result<MutationResult> {
        self.data.delete(req).await
    }

    pub async fn search(&self, req: impl Into<SearchInput>) -> Result<SearchResults> {
        self.data.search(req).await
    }

    pub async fn query(&self, req: &QueryReq) -> Result<QueryResults> {
        self.data.query(req).await
    }

    pub async fn get(&self, req: &GetReq) -> Result<QueryResults> {
        self.data.get(req).await
    }

    pub async fn count(&self, req: &CountReq) -> Result<CountResult> {
        self.data.count(req).await
    }

    pub async fn flush(&self, req: &FlushReq) -> Result<FlushResponse> {
        self.data.flush(req).await
    }

    pub async fn flush_sync(&self, req: &FlushReq, cancel: Option<&CancellationToken>) -> Result<FlushResponse> {
        self.data.flush_sync(req, cancel).await
    }

    pub async fn get_flush_state(&self, req: &GetFlushStateReq) -> Result<GetFlushStateResponse> {
        self.data.get_flush_state(req).await
    }

    // Users and roles

    pub async fn create_user(&self, req: &CreateUserReq) -> Result<Status> {
        self.users.create_user(req).await
    }

    pub async fn update_user(&self, req: &UpdateUserReq) -> Result<Status> {
        self.users.update_user(req).await
    }

    pub async fn delete_user(&self, req: &DeleteUserReq) -> Result<Status> {
        self.users.delete_user(req).await
    }

    pub async fn list_users(&self, req: &ListUsersReq) -> Result<ListCredUsersResponse> {
        self.users.list_users(req).await
    }

    pub async fn create_role(&self, req: &CreateRoleReq) -> Result<Status> {
        self.users.create_role(req).await
    }

    pub async fn drop_role(&self, req: &DropRoleReq) -> Result<Status> {
        self.users.drop_role(req).await
    }

    pub async fn add_user_to_role(&self, req: &UserRoleReq) -> Result<Status> {
        self.users.add_user_to_role(req).await
    }

    pub async fn remove_user_from_role(&self, req: &UserRoleReq) -> Result<Status> {
        self.users.remove_user_from_role(req).await
    }

    pub async fn select_role(&self, req: &SelectRoleReq) -> Result<SelectRoleResponse> {
        self.users.select_role(req).await
    }

    pub async fn list_roles(&self, req: &ListRolesReq) -> Result<SelectRoleResponse> {
        self.users.list_roles(req).await
    }

    // Resource groups

    pub async fn create_resource_group(&self, req: &ResourceGroupReq) -> Result<Status> {
        self.resources.create_resource_group(req).await
    }

    pub async fn drop_resource_group(&self, req: &ResourceGroupReq) -> Result<Status> {
        self.resources.drop_resource_group(req).await
    }

    pub async fn list_resource_groups(&self, req: &ListResourceGroupsReq) -> Result<ListResourceGroupsResponse> {
        self.resources.list_resource_groups(req).await
    }

    pub async fn describe_resource_group(&self, req: &ResourceGroupReq) -> Result<DescribeResourceGroupResponse> {
        self.resources.describe_resource_group(req).await
    }

    pub async fn transfer_node(&self, req: &TransferNodeReq) -> Result<Status> {
        self.resources.transfer_node(req).await
    }

    pub async fn transfer_replica(&self, req: &TransferReplicaReq) -> Result<Status> {
        self.resources.transfer_replica(req).await
    }
}
