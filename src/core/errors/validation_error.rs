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

//! Caller-input validation errors
//!
//! Raised before any network call. The messages form a stable catalog that
//! callers may match on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The `address` property is missing.")]
    MissingAddress,

    #[error("The `collection_name` property is missing.")]
    MissingCollectionName,

    #[error("The `fields` or `collection_name` property is missing.")]
    MissingFieldsOrCollectionName,

    #[error("The `data_type` for the primary key field must be DataType.Int64.")]
    PrimaryKeyNotInt64,

    #[error("The collection must have exactly one primary key field, found {0}.")]
    PrimaryKeyCount(usize),

    #[error("The `data_type` of a vector field must be either DataType.FloatVector or DataType.BinaryVector.")]
    UnsupportedVectorType,

    #[error("The collection must have exactly one vector field, found {0}.")]
    VectorFieldCount(usize),

    #[error("The `dim` property is missing.")]
    MissingDim,

    #[error("The `dim` property must be a positive integer, got `{0}`.")]
    InvalidDim(String),

    #[error("The `max_length` property is missing")]
    MissingMaxLength,

    #[error("The `dim` property of the Binary vector should be value multiples of 8.")]
    BinaryDimNotMultipleOf8,

    #[error("The `collection_name` or the `partition_name` property is missing.")]
    MissingCollectionOrPartition,

    #[error("The type of the `data or field_data` should be an array and length > 0.")]
    EmptyInsertData,

    #[error("The `partition_names` property is missing.")]
    MissingPartitionNames,

    #[error("The `collection_names` property is missing.")]
    MissingCollectionNames,

    #[error("The `new_collection_name` property is missing.")]
    MissingNewCollectionName,

    #[error("The `alias` property is missing.")]
    MissingAlias,

    #[error("The `field_name` property is missing.")]
    MissingFieldName,

    #[error("The `username` or `password` property is missing.")]
    MissingCredentials,

    #[error("The `username` property is missing.")]
    MissingUsername,

    #[error("The `role_name` property is missing.")]
    MissingRoleName,

    #[error("The `resource_group` property is missing.")]
    MissingResourceGroup,

    #[error("The `source_resource_group` or `target_resource_group` property is missing.")]
    MissingTransferGroups,

    #[error("The `filter` or the `expr` property is missing.")]
    MissingFilter,

    #[error("The type of the `hybridts` property should be string (only contains number) or bigint.")]
    TimestampParam,

    #[error("The `vector` or `vectors` property is missing.")]
    MissingVectors,

    #[error("The `ids` is missing or empty.")]
    MissingIds,

    #[error("Miss vector_type, need to be binary or float vector field type.")]
    MissingVectorType,

    #[error("The `search_params` must contain `anns_field`, `metric_type`, `topk` and `params`, missing `{0}`.")]
    MissingSearchParams(&'static str),

    #[error("The `round_decimal` property should be between -1 and 6, got {0}.")]
    InvalidRoundDecimal(i32),
}
