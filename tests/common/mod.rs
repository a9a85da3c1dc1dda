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

//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use milvus_client::proto::common::{KeyValuePair, Status};
use milvus_client::proto::milvus::DescribeCollectionResponse;
use milvus_client::proto::schema::{CollectionSchema, DataType, FieldSchema};
use milvus_client::{ClientConfig, MilvusClient, StubInvoker};

/// Client over a fresh stub, polling every millisecond
pub fn stub_client() -> (Arc<StubInvoker>, MilvusClient) {
    let mut config = ClientConfig::new("localhost:19530");
    config.poll.interval_ms = 1;
    config.poll.max_attempts = Some(50);
    stub_client_with(config)
}

pub fn stub_client_with(config: ClientConfig) -> (Arc<StubInvoker>, MilvusClient) {
    let stub = Arc::new(StubInvoker::new());
    let client = MilvusClient::with_invoker(stub.clone(), &config);
    (stub, client)
}

pub fn field(id: i64, name: &str, data_type: DataType) -> FieldSchema {
    FieldSchema {
        field_id: id,
        name: name.to_string(),
        data_type: data_type as i32,
        ..Default::default()
    }
}

pub fn vector_field(id: i64, name: &str, data_type: DataType, dim: usize) -> FieldSchema {
    FieldSchema {
        type_params: vec![KeyValuePair::new("dim", dim.to_string())],
        ..field(id, name, data_type)
    }
}

/// `id` Int64 primary key, `age` Int64, `vec` FloatVector(4)
pub fn books_schema() -> CollectionSchema {
    CollectionSchema {
        name: "books".to_string(),
        fields: vec![
            FieldSchema {
                is_primary_key: true,
                ..field(100, "id", DataType::Int64)
            },
            field(101, "age", DataType::Int64),
            vector_field(102, "vec", DataType::FloatVector, 4),
        ],
        ..Default::default()
    }
}

/// `id` auto-ID primary key, `bits` BinaryVector(16)
pub fn bits_schema() -> CollectionSchema {
    CollectionSchema {
        name: "bits".to_string(),
        fields: vec![
            FieldSchema {
                is_primary_key: true,
                auto_id: true,
                ..field(100, "id", DataType::Int64)
            },
            vector_field(101, "bits", DataType::BinaryVector, 16),
        ],
        ..Default::default()
    }
}

pub fn describe_ok(schema: CollectionSchema) -> DescribeCollectionResponse {
    DescribeCollectionResponse {
        status: Some(Status::success()),
        collection_name: schema.name.clone(),
        schema: Some(schema),
        ..Default::default()
    }
}
