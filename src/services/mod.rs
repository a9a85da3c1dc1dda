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

//! Capability services
//!
//! Each service validates its requests, shapes the wire payload and sends it
//! through the shared [`ServiceContext`]. Services hold no state besides the
//! context, so cloning one is cheap and concurrent calls never interact.

pub mod collection_service;
pub mod data_service;
pub mod index_service;
pub mod partition_service;
pub mod resource_service;
pub mod user_service;

pub use collection_service::{build_collection_schema, CollectionService};
pub use data_service::DataService;
pub use index_service::IndexService;
pub use partition_service::PartitionService;
pub use resource_service::ResourceService;
pub use user_service::UserService;

use prost::Message;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{MilvusError, Result};
use crate::network::{invoke, Method, RpcInvoker};
use crate::proto::common::Status;
use crate::utils::PollConfig;

/// Invoker plus the client-wide defaults every service call needs
#[derive(Clone)]
pub struct ServiceContext {
    invoker: Arc<dyn RpcInvoker>,
    timeout: Duration,
    poll: PollConfig,
}

impl ServiceContext {
    pub fn new(invoker: Arc<dyn RpcInvoker>, config: &ClientConfig) -> Self {
        Self {
            invoker,
            timeout: config.timeout,
            poll: config.poll_config(),
        }
    }

    pub fn with_defaults(invoker: Arc<dyn RpcInvoker>, timeout: Duration, poll: PollConfig) -> Self {
        Self { invoker, timeout, poll }
    }

    /// Absolute deadline of a call started now
    pub fn deadline(&self, timeout: Option<Duration>) -> Instant {
        Instant::now() + timeout.unwrap_or(self.timeout)
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Send one request and decode the response; application status is
    /// left for the caller to inspect
    pub async fn call<Req, Resp>(&self, method: Method, request: &Req, timeout: Option<Duration>) -> Result<Resp>
    where
        Req: Message,
        Resp: Message + Default,
    {
        debug!("📡 {} ({} bytes)", method, request.encoded_len());
        let deadline = self.deadline(timeout);
        let response = invoke(self.invoker.as_ref(), method, request, Some(deadline)).await?;
        Ok(response)
    }

    /// Send a request whose response is a bare `Status`
    pub async fn call_status<Req: Message>(
        &self,
        method: Method,
        request: &Req,
        timeout: Option<Duration>,
    ) -> Result<Status> {
        self.call(method, request, timeout).await
    }
}

/// A missing status message decodes as success, as in proto3
pub(crate) fn status_of(status: Option<&Status>) -> Status {
    status.cloned().unwrap_or_default()
}

/// Turn a non-success status into `MilvusError::Server`
pub(crate) fn ensure_success(operation: &str, status: &Status) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!(
        "⚠️ {} returned {}: {}",
        operation,
        status.code_name(),
        status.reason
    );
    Err(MilvusError::server(status))
}

/// Reject an empty required string property
pub(crate) fn require<E>(value: &str, error: E) -> std::result::Result<(), E> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}
