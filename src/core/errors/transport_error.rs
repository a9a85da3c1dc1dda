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

//! RPC transport failures, surfaced to the caller unchanged

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Deadline exceeded while calling {method}")]
    DeadlineExceeded { method: String },

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to connect to {address}: {reason}")]
    Connect { address: String, reason: String },

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("RPC failed with status {code}: {message}")]
    Status { code: String, message: String },

    #[error("Invalid metadata value for `{key}`")]
    InvalidMetadata { key: &'static str },

    #[error("Failed to decode {message} response: {reason}")]
    Decode { message: String, reason: String },

    #[error("No response scripted for {0}")]
    NoResponse(String),
}

impl TransportError {
    /// Map a tonic status returned by `method`
    pub fn from_status(method: &str, status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::DeadlineExceeded => TransportError::DeadlineExceeded {
                method: method.to_string(),
            },
            tonic::Code::Unavailable => TransportError::Unavailable(status.message().to_string()),
            tonic::Code::Unauthenticated => {
                TransportError::Unauthenticated(status.message().to_string())
            }
            code => TransportError::Status {
                code: format!("{:?}", code),
                message: status.message().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_status_maps_to_deadline_exceeded() {
        let err = TransportError::from_status("Search", tonic::Status::deadline_exceeded("late"));
        assert_eq!(
            err,
            TransportError::DeadlineExceeded {
                method: "Search".to_string()
            }
        );
    }

    #[test]
    fn test_other_status_keeps_code_and_message() {
        let err = TransportError::from_status("Insert", tonic::Status::internal("boom"));
        assert_eq!(
            err,
            TransportError::Status {
                code: "Internal".to_string(),
                message: "boom".to_string()
            }
        );
        assert_eq!(err.to_string(), "RPC failed with status Internal: boom");
    }
}
