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

//! Generic RPC invoker: method + payload + deadline in, response bytes out

use async_trait::async_trait;
use bytes::Bytes;
use prost::Message;
use std::fmt;
use std::time::Instant;

use crate::core::errors::TransportError;

pub const SERVICE_PATH: &str = "/milvus.proto.milvus.MilvusService";

macro_rules! methods {
    ($($variant:ident),+ $(,)?) => {
        /// Remote operations of `milvus.proto.milvus.MilvusService` used by the client
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Method {
            $($variant),+
        }

        impl Method {
            pub fn name(&self) -> &'static str {
                match self {
                    $(Method::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

methods! {
    CreateCollection,
    DropCollection,
    HasCollection,
    DescribeCollection,
    GetCollectionStatistics,
    ShowCollections,
    LoadCollection,
    ReleaseCollection,
    GetLoadingProgress,
    RenameCollection,
    CreateAlias,
    DropAlias,
    AlterAlias,
    CreatePartition,
    DropPartition,
    HasPartition,
    ShowPartitions,
    LoadPartitions,
    ReleasePartitions,
    GetPartitionStatistics,
    CreateIndex,
    DescribeIndex,
    GetIndexState,
    DropIndex,
    Insert,
    Delete,
    Search,
    Query,
    Flush,
    GetFlushState,
    CreateCredential,
    UpdateCredential,
    DeleteCredential,
    ListCredUsers,
    CreateRole,
    DropRole,
    OperateUserRole,
    SelectRole,
    CreateResourceGroup,
    DropResourceGroup,
    ListResourceGroups,
    DescribeResourceGroup,
    TransferNode,
    TransferReplica,
    GetVersion,
    CheckHealth,
}

impl Method {
    /// Full gRPC path, e.g. `/milvus.proto.milvus.MilvusService/Search`
    pub fn path(&self) -> String {
        format!("{}/{}", SERVICE_PATH, self.name())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transport boundary. Implementations send one unary call and return the
/// raw response message, failing with [`TransportError::DeadlineExceeded`]
/// once `deadline` has passed.
#[async_trait]
pub trait RpcInvoker: Send + Sync {
    async fn invoke_raw(
        &self,
        method: Method,
        payload: Bytes,
        deadline: Option<Instant>,
    ) -> Result<Bytes, TransportError>;
}

/// Encode `request`, invoke `method` and decode the response as `Resp`
pub async fn invoke<Req, Resp>(
    invoker: &dyn RpcInvoker,
    method: Method,
    request: &Req,
    deadline: Option<Instant>,
) -> Result<Resp, TransportError>
where
    Req: Message,
    Resp: Message + Default,
{
    let payload = Bytes::from(request.encode_to_vec());
    let raw = invoker.invoke_raw(method, payload, deadline).await?;
    Resp::decode(raw).map_err(|e| TransportError::Decode {
        message: method.name().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_paths() {
        assert_eq!(Method::Search.name(), "Search");
        assert_eq!(
            Method::GetLoadingProgress.path(),
            "/milvus.proto.milvus.MilvusService/GetLoadingProgress"
        );
        assert_eq!(Method::ListCredUsers.to_string(), "ListCredUsers");
    }
}
