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

//! In-process scripted invoker
//!
//! Responses are queued per method and replayed in order; the last queued
//! response for a method repeats forever. Every call is recorded so tests can
//! assert on the exact wire payloads.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use prost::Message;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use super::invoker::{Method, RpcInvoker};
use crate::core::errors::TransportError;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub payload: Bytes,
    pub deadline: Option<Instant>,
}

impl RecordedCall {
    pub fn decode<M: Message + Default>(&self) -> Result<M, prost::DecodeError> {
        M::decode(self.payload.clone())
    }
}

#[derive(Default)]
struct StubState {
    scripted: HashMap<Method, VecDeque<Result<Bytes, TransportError>>>,
    calls: Vec<RecordedCall>,
}

#[derive(Default)]
pub struct StubInvoker {
    state: Mutex<StubState>,
}

impl StubInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response message for `method`
    pub fn respond<M: Message>(&self, method: Method, response: &M) -> &Self {
        self.push(method, Ok(Bytes::from(response.encode_to_vec())))
    }

    /// Queue a transport failure for `method`
    pub fn fail(&self, method: Method, error: TransportError) -> &Self {
        self.push(method, Err(error))
    }

    fn push(&self, method: Method, outcome: Result<Bytes, TransportError>) -> &Self {
        self.state
            .lock()
            .scripted
            .entry(method)
            .or_default()
            .push_back(outcome);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    pub fn calls_to(&self, method: Method) -> Vec<RecordedCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn call_count(&self, method: Method) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Decoded payloads of every call to `method`, oldest first
    pub fn requests<M: Message + Default>(&self, method: Method) -> Vec<M> {
        self.calls_to(method)
            .iter()
            .filter_map(|call| call.decode().ok())
            .collect()
    }

    pub fn last_request<M: Message + Default>(&self, method: Method) -> Option<M> {
        self.requests(method).pop()
    }
}

#[async_trait]
impl RpcInvoker for StubInvoker {
    async fn invoke_raw(
        &self,
        method: Method,
        payload: Bytes,
        deadline: Option<Instant>,
    ) -> Result<Bytes, TransportError> {
        let mut state = self.state.lock();
        state.calls.push(RecordedCall {
            method,
            payload,
            deadline,
        });
        let queue = state
            .scripted
            .get_mut(&method)
            .ok_or_else(|| TransportError::NoResponse(method.name().to_string()))?;
        match queue.len() {
            0 => Err(TransportError::NoResponse(method.name().to_string())),
            1 => queue[0].clone(),
            _ => queue
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::NoResponse(method.name().to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::invoker::invoke;
    use crate::proto::milvus::{GetVersionRequest, GetVersionResponse};

    #[tokio::test]
    async fn test_last_response_repeats() {
        let stub = StubInvoker::new();
        stub.respond(
            Method::GetVersion,
            &GetVersionResponse {
                version: "v1".to_string(),
                ..Default::default()
            },
        )
        .respond(
            Method::GetVersion,
            &GetVersionResponse {
                version: "v2".to_string(),
                ..Default::default()
            },
        );

        let mut seen = Vec::new();
        for _ in 0..3 {
            let resp: GetVersionResponse =
                invoke(&stub, Method::GetVersion, &GetVersionRequest {}, None)
                    .await
                    .unwrap();
            seen.push(resp.version);
        }
        assert_eq!(seen, vec!["v1", "v2", "v2"]);
        assert_eq!(stub.call_count(Method::GetVersion), 3);
    }

    #[tokio::test]
    async fn test_unscripted_method_fails() {
        let stub = StubInvoker::new();
        let err = stub
            .invoke_raw(Method::Flush, Bytes::new(), None)
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::NoResponse("Flush".to_string()));
        assert_eq!(stub.calls().len(), 1);
    }
}
