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

//! Top-level client error type

use thiserror::Error;

use super::{ConfigError, SchemaError, TransportError, ValidationError};
use crate::proto::common::Status;

/// Main client error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MilvusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("can't find collection: {0}")]
    CollectionNotFound(String),

    /// Non-success application status, raised by the sync wrappers
    #[error("ErrorCode: {code}. Reason: {reason}")]
    Server { code: String, reason: String },

    #[error("{operation} did not complete after {attempts} attempts")]
    PollTimeout { operation: String, attempts: u32 },

    #[error("{operation} was cancelled")]
    PollCancelled { operation: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl MilvusError {
    pub fn server(status: &Status) -> Self {
        MilvusError::Server {
            code: status.code_name(),
            reason: status.reason.clone(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, MilvusError::Validation(_))
    }

    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, MilvusError::Schema(_))
    }
}

pub type Result<T> = std::result::Result<T, MilvusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::common::ErrorCode;

    #[test]
    fn test_server_error_message() {
        let status = Status::failure(ErrorCode::UnexpectedError, "segment lost");
        let err = MilvusError::server(&status);
        assert_eq!(err.to_string(), "ErrorCode: UnexpectedError. Reason: segment lost");
    }

    #[test]
    fn test_validation_message_is_transparent() {
        let err: MilvusError = ValidationError::MissingCollectionName.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "The `collection_name` property is missing.");
    }
}
