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

//! Protocol buffer messages of the Milvus v2 wire protocol
//!
//! Declared by hand with `prost` derives and the protocol's tag numbers, so
//! no protoc step is needed at build time. Only the messages the client
//! exchanges are present.

pub mod common;
pub mod milvus;
pub mod schema;
