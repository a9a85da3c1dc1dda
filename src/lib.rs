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

//! # milvus-client - Milvus v2 gRPC Client
//!
//! Typed client for the Milvus vector database over gRPC.
//!
//! ## Key Features
//!
//! - **Schema-checked writes**: rows are validated against the live
//!   collection schema and sent column-wise
//! - **Row-shaped reads**: search and query results are pivoted from the
//!   server's columns into one map per entity
//! - **Sync variants**: `flush_sync` and `load_collection_sync` poll with
//!   bounded attempts and cancellation
//! - **Pluggable transport**: every call goes through [`RpcInvoker`]; use
//!   [`GrpcInvoker`] against a server and [`StubInvoker`] in tests
//!
//! ```no_run
//! use milvus_client::{ClientConfig, MilvusClient, QueryReq};
//!
//! # async fn run() -> milvus_client::Result<()> {
//! let client = MilvusClient::connect(ClientConfig::new("localhost:19530")).await?;
//! let rows = client
//!     .query(&QueryReq {
//!         collection_name: "books".to_string(),
//!         expr: "book_id in [1, 2]".to_string(),
//!         output_fields: vec!["title".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} rows", rows.data.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod core;
pub mod network;
pub mod proto;
pub mod query;
pub mod schema;
pub mod services;
pub mod utils;

pub use crate::client::MilvusClient;
pub use crate::core::*;
pub use crate::network::{GrpcInvoker, Method, RpcInvoker, StubInvoker};
pub use crate::proto::common::{ConsistencyLevel, ErrorCode, Status};
pub use crate::proto::schema::DataType;
pub use crate::utils::PollConfig;
pub use tokio_util::sync::CancellationToken;
