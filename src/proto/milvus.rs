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

//! `milvus.proto.milvus` request and response messages

use super::common::{KeyValuePair, Status};
use super::schema::{CollectionSchema, FieldData, LongArray, SearchResultData, IDs};

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    /// Serialized `schema.CollectionSchema`
    #[prost(bytes = "vec", tag = "4")]
    pub schema: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag = "5")]
    pub shards_num: i32,
    #[prost(enumeration = "super::common::ConsistencyLevel", tag = "6")]
    pub consistency_level: i32,
    #[prost(message, repeated, tag = "7")]
    pub properties: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(int64, tag = "8")]
    pub num_partitions: i64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub time_stamp: u64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(bool, tag = "2")]
    pub value: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub collection_id: i64,
    #[prost(uint64, tag = "5")]
    pub time_stamp: u64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeCollectionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub schema: ::core::option::Option<CollectionSchema>,
    #[prost(int64, tag = "3")]
    pub collection_id: i64,
    #[prost(string, repeated, tag = "4")]
    pub virtual_channel_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub physical_channel_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, tag = "6")]
    pub created_timestamp: u64,
    #[prost(uint64, tag = "7")]
    pub created_utc_timestamp: u64,
    #[prost(int32, tag = "8")]
    pub shards_num: i32,
    #[prost(string, repeated, tag = "9")]
    pub aliases: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "super::common::ConsistencyLevel", tag = "11")]
    pub consistency_level: i32,
    #[prost(string, tag = "12")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "13")]
    pub properties: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "14")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "15")]
    pub num_partitions: i64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub replica_number: i32,
    #[prost(string, repeated, tag = "5")]
    pub resource_groups: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, tag = "6")]
    pub refresh: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleaseCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCollectionStatisticsRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCollectionStatisticsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub stats: ::prost::alloc::vec::Vec<KeyValuePair>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowCollectionsRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(uint64, tag = "3")]
    pub time_stamp: u64,
    #[prost(enumeration = "ShowType", tag = "4")]
    pub r#type: i32,
    #[prost(string, repeated, tag = "5")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowCollectionsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, repeated, tag = "3")]
    pub collection_ids: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, repeated, tag = "4")]
    pub created_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(uint64, repeated, tag = "5")]
    pub created_utc_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(int64, repeated, tag = "6")]
    pub in_memory_percentages: ::prost::alloc::vec::Vec<i64>,
    #[prost(bool, repeated, tag = "7")]
    pub query_service_available: ::prost::alloc::vec::Vec<bool>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenameCollectionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub old_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub new_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadingProgressRequest {
    #[prost(string, tag = "2")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub db_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadingProgressResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(int64, tag = "2")]
    pub progress: i64,
    #[prost(int64, tag = "3")]
    pub refresh_progress: i64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAliasRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub alias: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropAliasRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub alias: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlterAliasRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub alias: ::prost::alloc::string::String,
}

// ---------------------------------------------------------------------------
// Partitions
// ---------------------------------------------------------------------------

/// Shared shape of Create/Drop/Has/GetStatistics partition requests
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartitionRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
}

pub type CreatePartitionRequest = PartitionRequest;
pub type DropPartitionRequest = PartitionRequest;
pub type HasPartitionRequest = PartitionRequest;
pub type GetPartitionStatisticsRequest = PartitionRequest;
pub type GetPartitionStatisticsResponse = GetCollectionStatisticsResponse;

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowPartitionsRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub collection_id: i64,
    #[prost(string, repeated, tag = "5")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "ShowType", tag = "6")]
    pub r#type: i32,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShowPartitionsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, repeated, tag = "3")]
    pub partition_ids: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, repeated, tag = "4")]
    pub created_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(uint64, repeated, tag = "5")]
    pub created_utc_timestamps: ::prost::alloc::vec::Vec<u64>,
    #[prost(int64, repeated, tag = "6")]
    pub in_memory_percentages: ::prost::alloc::vec::Vec<i64>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadPartitionsRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag = "5")]
    pub replica_number: i32,
    #[prost(string, repeated, tag = "6")]
    pub resource_groups: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleasePartitionsRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateIndexRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub extra_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "6")]
    pub index_name: ::prost::alloc::string::String,
}

/// Shared shape of Describe/GetState/Drop index requests
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub index_name: ::prost::alloc::string::String,
}

pub type DescribeIndexRequest = IndexRequest;
pub type GetIndexStateRequest = IndexRequest;
pub type DropIndexRequest = IndexRequest;

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexDescription {
    #[prost(string, tag = "1")]
    pub index_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub index_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(string, tag = "4")]
    pub field_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "5")]
    pub indexed_rows: i64,
    #[prost(int64, tag = "6")]
    pub total_rows: i64,
    #[prost(enumeration = "super::common::IndexState", tag = "7")]
    pub state: i32,
    #[prost(string, tag = "8")]
    pub index_state_fail_reason: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeIndexResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub index_descriptions: ::prost::alloc::vec::Vec<IndexDescription>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetIndexStateResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(enumeration = "super::common::IndexState", tag = "2")]
    pub state: i32,
    #[prost(string, tag = "3")]
    pub fail_reason: ::prost::alloc::string::String,
}

// ---------------------------------------------------------------------------
// Data plane
// ---------------------------------------------------------------------------

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub fields_data: ::prost::alloc::vec::Vec<FieldData>,
    #[prost(uint32, repeated, tag = "6")]
    pub hash_keys: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint32, tag = "7")]
    pub num_rows: u32,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutationResult {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub ids: ::core::option::Option<IDs>,
    #[prost(uint32, repeated, tag = "3")]
    pub succ_index: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint32, repeated, tag = "4")]
    pub err_index: ::prost::alloc::vec::Vec<u32>,
    #[prost(bool, tag = "5")]
    pub acknowledged: bool,
    #[prost(int64, tag = "6")]
    pub insert_cnt: i64,
    #[prost(int64, tag = "7")]
    pub delete_cnt: i64,
    #[prost(int64, tag = "8")]
    pub upsert_cnt: i64,
    #[prost(uint64, tag = "9")]
    pub timestamp: u64,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub partition_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub expr: ::prost::alloc::string::String,
    #[prost(uint32, repeated, tag = "6")]
    pub hash_keys: ::prost::alloc::vec::Vec<u32>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "5")]
    pub dsl: ::prost::alloc::string::String,
    /// Serialized `common.PlaceholderGroup`
    #[prost(bytes = "vec", tag = "6")]
    pub placeholder_group: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "super::common::DslType", tag = "7")]
    pub dsl_type: i32,
    #[prost(string, repeated, tag = "8")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "9")]
    pub search_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(uint64, tag = "10")]
    pub travel_timestamp: u64,
    #[prost(uint64, tag = "11")]
    pub guarantee_timestamp: u64,
    #[prost(int64, tag = "12")]
    pub nq: i64,
    #[prost(enumeration = "super::common::ConsistencyLevel", tag = "14")]
    pub consistency_level: i32,
    #[prost(bool, tag = "15")]
    pub use_default_consistency: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResults {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub results: ::core::option::Option<SearchResultData>,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub expr: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "5")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "6")]
    pub partition_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, tag = "7")]
    pub travel_timestamp: u64,
    #[prost(uint64, tag = "8")]
    pub guarantee_timestamp: u64,
    #[prost(message, repeated, tag = "9")]
    pub query_params: ::prost::alloc::vec::Vec<KeyValuePair>,
    #[prost(enumeration = "super::common::ConsistencyLevel", tag = "11")]
    pub consistency_level: i32,
    #[prost(bool, tag = "12")]
    pub use_default_consistency: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResults {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub fields_data: ::prost::alloc::vec::Vec<FieldData>,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub output_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlushRequest {
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub collection_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlushResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(map = "string, message", tag = "3")]
    pub coll_seg_ids: ::std::collections::HashMap<::prost::alloc::string::String, LongArray>,
    #[prost(map = "string, message", tag = "4")]
    pub flush_coll_seg_ids: ::std::collections::HashMap<::prost::alloc::string::String, LongArray>,
    #[prost(map = "string, int64", tag = "5")]
    pub coll_seal_times: ::std::collections::HashMap<::prost::alloc::string::String, i64>,
    #[prost(map = "string, uint64", tag = "6")]
    pub coll_flush_ts: ::std::collections::HashMap<::prost::alloc::string::String, u64>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFlushStateRequest {
    #[prost(int64, repeated, tag = "1")]
    pub segment_ids: ::prost::alloc::vec::Vec<i64>,
    #[prost(uint64, tag = "2")]
    pub flush_ts: u64,
    #[prost(string, tag = "3")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub collection_name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFlushStateResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(bool, tag = "2")]
    pub flushed: bool,
}

// ---------------------------------------------------------------------------
// Users and roles
// ---------------------------------------------------------------------------

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCredentialRequest {
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    /// Base64-encoded password
    #[prost(string, tag = "3")]
    pub password: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateCredentialRequest {
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub old_password: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub new_password: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteCredentialRequest {
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCredUsersRequest {}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCredUsersResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub usernames: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoleEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserEntity {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRoleRequest {
    #[prost(message, optional, tag = "2")]
    pub entity: ::core::option::Option<RoleEntity>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DropRoleRequest {
    #[prost(string, tag = "2")]
    pub role_name: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub force_drop: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperateUserRoleRequest {
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub role_name: ::prost::alloc::string::String,
    #[prost(enumeration = "OperateUserRoleType", tag = "4")]
    pub r#type: i32,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectRoleRequest {
    #[prost(message, optional, tag = "2")]
    pub role: ::core::option::Option<RoleEntity>,
    #[prost(bool, tag = "3")]
    pub include_user_info: bool,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoleResult {
    #[prost(message, optional, tag = "1")]
    pub role: ::core::option::Option<RoleEntity>,
    #[prost(message, repeated, tag = "2")]
    pub users: ::prost::alloc::vec::Vec<UserEntity>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectRoleResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<RoleResult>,
}

// ---------------------------------------------------------------------------
// Resource groups
// ---------------------------------------------------------------------------

/// Shared shape of Create/Drop/Describe resource group requests
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceGroupRequest {
    #[prost(string, tag = "2")]
    pub resource_group: ::prost::alloc::string::String,
}

pub type CreateResourceGroupRequest = ResourceGroupRequest;
pub type DropResourceGroupRequest = ResourceGroupRequest;
pub type DescribeResourceGroupRequest = ResourceGroupRequest;

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListResourceGroupsRequest {}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListResourceGroupsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, repeated, tag = "2")]
    pub resource_groups: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceGroup {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub capacity: i32,
    #[prost(int32, tag = "3")]
    pub num_available_node: i32,
    #[prost(map = "string, int32", tag = "4")]
    pub num_loaded_replica: ::std::collections::HashMap<::prost::alloc::string::String, i32>,
    #[prost(map = "string, int32", tag = "5")]
    pub num_outgoing_node: ::std::collections::HashMap<::prost::alloc::string::String, i32>,
    #[prost(map = "string, int32", tag = "6")]
    pub num_incoming_node: ::std::collections::HashMap<::prost::alloc::string::String, i32>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeResourceGroupResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub resource_group: ::core::option::Option<ResourceGroup>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferNodeRequest {
    #[prost(string, tag = "2")]
    pub source_resource_group: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub target_resource_group: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub num_node: i32,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferReplicaRequest {
    #[prost(string, tag = "2")]
    pub source_resource_group: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub target_resource_group: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(int64, tag = "5")]
    pub num_replica: i64,
    #[prost(string, tag = "6")]
    pub db_name: ::prost::alloc::string::String,
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionRequest {}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(string, tag = "2")]
    pub version: ::prost::alloc::string::String,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckHealthRequest {}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckHealthResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<Status>,
    #[prost(bool, tag = "2")]
    pub is_healthy: bool,
    #[prost(string, repeated, tag = "3")]
    pub reasons: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ShowType {
    All = 0,
    InMemory = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperateUserRoleType {
    AddUserToRole = 0,
    RemoveUserFromRole = 1,
}
