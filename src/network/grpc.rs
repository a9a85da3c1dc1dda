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

//! tonic-backed invoker
//!
//! Messages are encoded by the caller, so the channel carries opaque bytes
//! through a pass-through codec.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::{Buf, BufMut, Bytes};
use std::time::Instant;
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use super::invoker::{Method, RpcInvoker};
use crate::core::config::ClientConfig;
use crate::core::errors::{MilvusError, TransportError};

pub const AUTH_METADATA_KEY: &str = "authorization";
pub const DATABASE_METADATA_KEY: &str = "dbname";
pub const DEFAULT_DATABASE: &str = "default";

const MAX_MESSAGE_SIZE: usize = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default)]
struct RawCodec;

#[derive(Debug, Clone, Copy, Default)]
struct RawEncoder;

#[derive(Debug, Clone, Copy, Default)]
struct RawDecoder;

impl Codec for RawCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = RawEncoder;
    type Decoder = RawDecoder;

    fn encoder(&mut self) -> Self::Encoder {
        RawEncoder
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawDecoder
    }
}

impl Encoder for RawEncoder {
    type Item = Bytes;
    type Error = tonic::Status;

    fn encode(&mut self, item: Bytes, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put(item);
        Ok(())
    }
}

impl Decoder for RawDecoder {
    type Item = Bytes;
    type Error = tonic::Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Bytes>, Self::Error> {
        let len = src.remaining();
        Ok(Some(src.copy_to_bytes(len)))
    }
}

/// `authorization` value: base64 of the token, or of `username:password`
pub fn auth_string(config: &ClientConfig) -> Option<String> {
    if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
        return Some(BASE64.encode(token));
    }
    match (config.username.as_deref(), config.password.as_deref()) {
        (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
            Some(BASE64.encode(format!("{}:{}", user, pass)))
        }
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct GrpcInvoker {
    grpc: tonic::client::Grpc<Channel>,
    auth: Option<AsciiMetadataValue>,
    database: AsciiMetadataValue,
}

impl GrpcInvoker {
    pub async fn connect(config: &ClientConfig) -> Result<Self, MilvusError> {
        config.validate()?;
        let address = config.normalized_address();
        let connect_err = |reason: String| TransportError::Connect {
            address: address.clone(),
            reason,
        };

        let endpoint = Endpoint::from_shared(format!("http://{}", address))
            .map_err(|e| connect_err(e.to_string()))?
            .connect_timeout(config.connect_timeout)
            .tcp_nodelay(true);
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| connect_err(e.to_string()))?;

        info!("🚀 Connected to Milvus at {}", address);
        Self::from_channel(channel, config).map_err(MilvusError::from)
    }

    /// Wrap an existing channel, e.g. one built lazily or with custom TLS
    pub fn from_channel(channel: Channel, config: &ClientConfig) -> Result<Self, TransportError> {
        let auth = auth_string(config)
            .map(|value| {
                AsciiMetadataValue::try_from(value).map_err(|_| TransportError::InvalidMetadata {
                    key: AUTH_METADATA_KEY,
                })
            })
            .transpose()?;
        let database = AsciiMetadataValue::try_from(
            config.database.clone().unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        )
        .map_err(|_| TransportError::InvalidMetadata {
            key: DATABASE_METADATA_KEY,
        })?;

        let grpc = tonic::client::Grpc::new(channel)
            .max_decoding_message_size(MAX_MESSAGE_SIZE)
            .max_encoding_message_size(MAX_MESSAGE_SIZE);

        Ok(Self {
            grpc,
            auth,
            database,
        })
    }
}

#[async_trait]
impl RpcInvoker for GrpcInvoker {
    async fn invoke_raw(
        &self,
        method: Method,
        payload: Bytes,
        deadline: Option<Instant>,
    ) -> Result<Bytes, TransportError> {
        let remaining = match deadline {
            Some(deadline) => match deadline.checked_duration_since(Instant::now()) {
                Some(left) if !left.is_zero() => Some(left),
                _ => {
                    return Err(TransportError::DeadlineExceeded {
                        method: method.name().to_string(),
                    })
                }
            },
            None => None,
        };

        let path = PathAndQuery::try_from(method.path()).map_err(|e| TransportError::Status {
            code: "InvalidPath".to_string(),
            message: e.to_string(),
        })?;

        let mut request = tonic::Request::new(payload);
        if let Some(timeout) = remaining {
            request.set_timeout(timeout);
        }
        if let Some(auth) = &self.auth {
            request.metadata_mut().insert(AUTH_METADATA_KEY, auth.clone());
        }
        request
            .metadata_mut()
            .insert(DATABASE_METADATA_KEY, self.database.clone());

        let mut grpc = self.grpc.clone();
        grpc.ready()
            .await
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;

        debug!("{} -> {}", method, path);
        let response = grpc
            .unary(request, path, RawCodec)
            .await
            .map_err(|status| TransportError::from_status(method.name(), status))?;
        Ok(response.into_inner())
    }
}
