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

//! Request types for every client operation
//!
//! Each request carries an optional `timeout`; when unset the client-wide
//! default from [`ClientConfig`](crate::core::config::ClientConfig) applies.

use std::time::Duration;

use crate::core::types::{FieldSpec, PrimaryKey, RowData, VectorData};
use crate::proto::common::ConsistencyLevel;
use crate::proto::schema::DataType;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CreateCollectionReq {
    pub collection_name: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
    /// Defaults to `Bounded`
    pub consistency_level: Option<ConsistencyLevel>,
    pub shards_num: Option<i32>,
    pub num_partitions: Option<i64>,
    pub enable_dynamic_field: bool,
    pub timeout: Option<Duration>,
}

/// Requests addressing a single collection by name
#[derive(Debug, Clone, Default)]
pub struct CollectionNameReq {
    pub collection_name: String,
    pub timeout: Option<Duration>,
}

impl CollectionNameReq {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            timeout: None,
        }
    }
}

pub type HasCollectionReq = CollectionNameReq;
pub type DescribeCollectionReq = CollectionNameReq;
pub type GetCollectionStatisticsReq = CollectionNameReq;
pub type ReleaseCollectionReq = CollectionNameReq;
pub type DropCollectionReq = CollectionNameReq;

#[derive(Debug, Clone, Default)]
pub struct ShowCollectionsReq {
    pub collection_names: Vec<String>,
    /// Only list loaded collections
    pub in_memory: bool,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadCollectionReq {
    pub collection_name: String,
    pub replica_number: Option<i32>,
    pub resource_groups: Vec<String>,
    pub refresh: bool,
    pub timeout: Option<Duration>,
}

impl LoadCollectionReq {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetLoadingProgressReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct RenameCollectionReq {
    pub collection_name: String,
    pub new_collection_name: String,
    pub timeout: Option<Duration>,
}

/// Create or alter an alias
#[derive(Debug, Clone, Default)]
pub struct AliasReq {
    pub collection_name: String,
    pub alias: String,
    pub timeout: Option<Duration>,
}

pub type CreateAliasReq = AliasReq;
pub type AlterAliasReq = AliasReq;

#[derive(Debug, Clone, Default)]
pub struct DropAliasReq {
    pub alias: String,
    pub timeout: Option<Duration>,
}

// ---------------------------------------------------------------------------
// Partitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PartitionReq {
    pub collection_name: String,
    pub partition_name: String,
    pub timeout: Option<Duration>,
}

impl PartitionReq {
    pub fn new(collection_name: impl Into<String>, partition_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
            timeout: None,
        }
    }
}

pub type CreatePartitionReq = PartitionReq;
pub type HasPartitionReq = PartitionReq;
pub type DropPartitionReq = PartitionReq;
pub type GetPartitionStatisticsReq = PartitionReq;

#[derive(Debug, Clone, Default)]
pub struct ShowPartitionsReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadPartitionsReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub replica_number: Option<i32>,
    pub resource_groups: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct ReleasePartitionsReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub timeout: Option<Duration>,
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CreateIndexReq {
    pub collection_name: String,
    pub field_name: String,
    pub index_name: Option<String>,
    /// e.g. `{"index_type": "IVF_FLAT", "metric_type": "L2", "params": "{\"nlist\":1024}"}`
    pub extra_params: serde_json::Map<String, serde_json::Value>,
    pub timeout: Option<Duration>,
}

/// Describe, get state of, or drop an index
#[derive(Debug, Clone, Default)]
pub struct IndexReq {
    pub collection_name: String,
    pub field_name: Option<String>,
    pub index_name: Option<String>,
    pub timeout: Option<Duration>,
}

pub type DescribeIndexReq = IndexReq;
pub type GetIndexStateReq = IndexReq;
pub type DropIndexReq = IndexReq;

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InsertReq {
    pub collection_name: String,
    pub partition_name: Option<String>,
    pub fields_data: Vec<RowData>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteReq {
    pub collection_name: String,
    pub partition_name: Option<String>,
    /// Boolean filter expression, e.g. `id in [1, 2]`
    pub expr: String,
    pub timeout: Option<Duration>,
}

/// Explicit search parameters of the detailed search shape. Every field
/// except `round_decimal` is required.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub anns_field: Option<String>,
    pub topk: Option<i64>,
    pub metric_type: Option<String>,
    /// Serialized JSON, e.g. `{"nprobe": 10}`
    pub params: Option<String>,
    /// Fractional digits kept in returned scores, `-1` disables rounding
    pub round_decimal: Option<i32>,
}

/// Detailed search: explicit params and vector type
#[derive(Debug, Clone, Default)]
pub struct SearchReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub expr: Option<String>,
    pub search_params: SearchParams,
    pub vectors: Vec<VectorData>,
    /// `FloatVector` or `BinaryVector`
    pub vector_type: Option<DataType>,
    pub output_fields: Vec<String>,
    pub travel_timestamp: Option<u64>,
    pub consistency_level: Option<ConsistencyLevel>,
    pub timeout: Option<Duration>,
}

/// Simple search: anns field and vector type are inferred from the schema
#[derive(Debug, Clone, Default)]
pub struct SearchSimpleReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub data: Vec<VectorData>,
    pub anns_field: Option<String>,
    pub filter: Option<String>,
    pub output_fields: Vec<String>,
    /// Defaults to 100
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub metric_type: Option<String>,
    pub params: serde_json::Map<String, serde_json::Value>,
    pub round_decimal: Option<i32>,
    pub consistency_level: Option<ConsistencyLevel>,
    pub timeout: Option<Duration>,
}

/// Both accepted search shapes
#[derive(Debug, Clone)]
pub enum SearchInput {
    Detailed(SearchReq),
    Simple(SearchSimpleReq),
}

impl From<SearchReq> for SearchInput {
    fn from(req: SearchReq) -> Self {
        SearchInput::Detailed(req)
    }
}

impl From<SearchSimpleReq> for SearchInput {
    fn from(req: SearchSimpleReq) -> Self {
        SearchInput::Simple(req)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub expr: String,
    pub output_fields: Vec<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub travel_timestamp: Option<u64>,
    pub consistency_level: Option<ConsistencyLevel>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct GetReq {
    pub collection_name: String,
    pub partition_names: Vec<String>,
    pub ids: Vec<PrimaryKey>,
    pub output_fields: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct CountReq {
    pub collection_name: String,
    pub expr: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct FlushReq {
    pub collection_names: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFlushStateReq {
    pub segment_ids: Vec<i64>,
    pub flush_ts: Option<u64>,
    pub collection_name: Option<String>,
    pub timeout: Option<Duration>,
}

// ---------------------------------------------------------------------------
// Users, roles and resource groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct CreateUserReq {
    pub username: String,
    pub password: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserReq {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteUserReq {
    pub username: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct RoleReq {
    pub role_name: String,
    pub timeout: Option<Duration>,
}

pub type CreateRoleReq = RoleReq;
pub type DropRoleReq = RoleReq;

#[derive(Debug, Clone, Default)]
pub struct UserRoleReq {
    pub username: String,
    pub role_name: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct SelectRoleReq {
    pub role_name: String,
    pub include_user_info: bool,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceGroupReq {
    pub resource_group: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct TransferNodeReq {
    pub source_resource_group: String,
    pub target_resource_group: String,
    pub num_node: i32,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct TransferReplicaReq {
    pub source_resource_group: String,
    pub target_resource_group: String,
    pub collection_name: String,
    pub num_replica: i64,
    pub timeout: Option<Duration>,
}

/// Requests without parameters
#[derive(Debug, Clone, Default)]
pub struct BareReq {
    pub timeout: Option<Duration>,
}

pub type GetVersionReq = BareReq;
pub type CheckHealthReq = BareReq;
pub type ListUsersReq = BareReq;
pub type ListRolesReq = BareReq;
pub type ListResourceGroupsReq = BareReq;
