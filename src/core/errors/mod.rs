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

//! Error Types for the Milvus client
//!
//! Caller input problems surface as [`ValidationError`], disagreements with
//! the live collection schema as [`SchemaError`], RPC failures as
//! [`TransportError`]. [`MilvusError`] aggregates them together with the
//! application-status and polling failures.

pub mod client_error;
pub mod config_error;
pub mod schema_error;
pub mod transport_error;
pub mod validation_error;

// Re-export all error types
pub use client_error::*;
pub use config_error::*;
pub use schema_error::*;
pub use transport_error::*;
pub use validation_error::*;
