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

//! `milvus.proto.common` messages

/// Application-level status embedded in every response
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(enumeration = "ErrorCode", tag = "1")]
    pub error_code: i32,
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub code: i32,
    #[prost(bool, tag = "4")]
    pub retriable: bool,
    #[prost(string, tag = "5")]
    pub detail: ::prost::alloc::string::String,
}

impl Status {
    /// Successful status with an empty reason
    pub fn success() -> Self {
        Self::default()
    }

    /// Failed status carrying a legacy error code and a reason
    pub fn failure(error_code: ErrorCode, reason: impl Into<String>) -> Self {
        Self {
            error_code: error_code as i32,
            reason: reason.into(),
            code: 1,
            ..Default::default()
        }
    }

    /// Both the legacy `error_code` and the newer numeric `code` must be zero
    pub fn is_success(&self) -> bool {
        self.error_code == ErrorCode::Success as i32 && self.code == 0
    }

    /// Name of the legacy error code, or the raw number when it is unknown
    pub fn code_name(&self) -> String {
        if self.error_code == ErrorCode::Success as i32 && self.code != 0 {
            return self.code.to_string();
        }
        ErrorCode::try_from(self.error_code)
            .map(|code| code.as_str_name().to_string())
            .unwrap_or_else(|_| self.error_code.to_string())
    }
}

/// Ordered `{key, value}` pair; the wire carrier for every parameter bag
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct KeyValuePair {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlaceholderValue {
    #[prost(string, tag = "1")]
    pub tag: ::prost::alloc::string::String,
    #[prost(enumeration = "PlaceholderType", tag = "2")]
    pub r#type: i32,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlaceholderGroup {
    #[prost(message, repeated, tag = "1")]
    pub placeholders: ::prost::alloc::vec::Vec<PlaceholderValue>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    UnexpectedError = 1,
    ConnectFailed = 2,
    PermissionDenied = 3,
    CollectionNotExists = 4,
    IllegalArgument = 5,
    IllegalDimension = 7,
    IllegalIndexType = 8,
    IllegalCollectionName = 9,
    IllegalTopk = 10,
    IllegalRowRecord = 11,
    IllegalVectorId = 12,
    IllegalSearchResult = 13,
    FileNotFound = 14,
    MetaFailed = 15,
    CacheFailed = 16,
    IndexNotExist = 25,
    EmptyCollection = 26,
    CollectionNameNotFound = 28,
    CreateCredentialFailure = 29,
    UpdateCredentialFailure = 30,
    DeleteCredentialFailure = 31,
    CreateRoleFailure = 35,
    DropRoleFailure = 36,
    OperateUserRoleFailure = 37,
    SelectRoleFailure = 38,
    NotShardLeader = 45,
    NoReplicaAvailable = 46,
    SegmentNotFound = 47,
    ForceDeny = 48,
    RateLimit = 49,
    UpsertAutoIdTrue = 51,
    InsufficientMemoryToLoad = 52,
    NotReadyServe = 56,
    SchemaMismatch = 62,
    DataCoordNa = 100,
    DdRequestRace = 1000,
}

impl ErrorCode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::UnexpectedError => "UnexpectedError",
            ErrorCode::ConnectFailed => "ConnectFailed",
            ErrorCode::PermissionDenied => "PermissionDenied",
            ErrorCode::CollectionNotExists => "CollectionNotExists",
            ErrorCode::IllegalArgument => "IllegalArgument",
            ErrorCode::IllegalDimension => "IllegalDimension",
            ErrorCode::IllegalIndexType => "IllegalIndexType",
            ErrorCode::IllegalCollectionName => "IllegalCollectionName",
            ErrorCode::IllegalTopk => "IllegalTOPK",
            ErrorCode::IllegalRowRecord => "IllegalRowRecord",
            ErrorCode::IllegalVectorId => "IllegalVectorID",
            ErrorCode::IllegalSearchResult => "IllegalSearchResult",
            ErrorCode::FileNotFound => "FileNotFound",
            ErrorCode::MetaFailed => "MetaFailed",
            ErrorCode::CacheFailed => "CacheFailed",
            ErrorCode::IndexNotExist => "IndexNotExist",
            ErrorCode::EmptyCollection => "EmptyCollection",
            ErrorCode::CollectionNameNotFound => "CollectionNameNotFound",
            ErrorCode::CreateCredentialFailure => "CreateCredentialFailure",
            ErrorCode::UpdateCredentialFailure => "UpdateCredentialFailure",
            ErrorCode::DeleteCredentialFailure => "DeleteCredentialFailure",
            ErrorCode::CreateRoleFailure => "CreateRoleFailure",
            ErrorCode::DropRoleFailure => "DropRoleFailure",
            ErrorCode::OperateUserRoleFailure => "OperateUserRoleFailure",
            ErrorCode::SelectRoleFailure => "SelectRoleFailure",
            ErrorCode::NotShardLeader => "NotShardLeader",
            ErrorCode::NoReplicaAvailable => "NoReplicaAvailable",
            ErrorCode::SegmentNotFound => "SegmentNotFound",
            ErrorCode::ForceDeny => "ForceDeny",
            ErrorCode::RateLimit => "RateLimit",
            ErrorCode::UpsertAutoIdTrue => "UpsertAutoIDTrue",
            ErrorCode::InsufficientMemoryToLoad => "InsufficientMemoryToLoad",
            ErrorCode::NotReadyServe => "NotReadyServe",
            ErrorCode::SchemaMismatch => "SchemaMismatch",
            ErrorCode::DataCoordNa => "DataCoordNA",
            ErrorCode::DdRequestRace => "DDRequestRace",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PlaceholderType {
    None = 0,
    BinaryVector = 100,
    FloatVector = 101,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DslType {
    Dsl = 0,
    BoolExprV1 = 1,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    serde::Serialize, serde::Deserialize,
)]
#[repr(i32)]
pub enum ConsistencyLevel {
    Strong = 0,
    Session = 1,
    Bounded = 2,
    Eventually = 3,
    Customized = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IndexState {
    None = 0,
    Unissued = 1,
    InProgress = 2,
    Finished = 3,
    Failed = 4,
    Retry = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SegmentState {
    SegmentStateNone = 0,
    NotExist = 1,
    Growing = 2,
    Sealed = 3,
    Flushed = 4,
    Flushing = 5,
    Dropped = 6,
    Importing = 7,
}
